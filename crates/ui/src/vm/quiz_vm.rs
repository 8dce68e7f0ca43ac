use services::{QuizService, QuizSession, SessionError};
use skill_core::model::TopicId;
use skill_core::quiz::{KeyFocus, KeyInput, QuizIntent};

use crate::views::ViewError;
use crate::vm::{CompletionVm, QuestionVm, map_completion, map_question};

/// What the practice view draws: the question card or the completion summary.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PracticeFrame {
    pub question: Option<QuestionVm>,
    pub completion: Option<CompletionVm>,
}

/// Holds the running quiz session for the practice view.
pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    #[must_use]
    pub fn question(&self) -> Option<QuestionVm> {
        map_question(&self.session)
    }

    /// Completion summary, once every question is done.
    #[must_use]
    pub fn completion(&self) -> Option<CompletionVm> {
        self.is_finished()
            .then(|| map_completion(self.session.stats()))
    }

    #[must_use]
    pub fn frame(&self) -> PracticeFrame {
        match self.completion() {
            Some(completion) => PracticeFrame {
                question: None,
                completion: Some(completion),
            },
            None => PracticeFrame {
                question: self.question(),
                completion: None,
            },
        }
    }

    #[must_use]
    pub fn intent_for_key(&self, key: KeyInput, focus: KeyFocus) -> Option<QuizIntent> {
        if self.is_finished() {
            return None;
        }
        self.session.intent_for_key(key, focus)
    }

    pub async fn dispatch(&mut self, intent: QuizIntent) -> bool {
        self.session.dispatch(intent).await
    }

    pub async fn reset(&mut self) {
        self.session.reset().await;
    }
}

/// # Errors
///
/// Returns `ViewError::UnknownTopic` when the id is not in the catalog.
/// Returns `ViewError::EmptyTopic` when the topic has no questions yet.
pub async fn start_quiz(service: &QuizService, topic_id: &str) -> Result<QuizVm, ViewError> {
    let topic_id = TopicId::new(topic_id).map_err(|_| ViewError::UnknownTopic)?;
    let session = match service.start_session(&topic_id).await {
        Ok(session) => session,
        Err(SessionError::UnknownTopic(_)) => return Err(ViewError::UnknownTopic),
        Err(SessionError::Empty(_)) => return Err(ViewError::EmptyTopic),
        Err(_) => return Err(ViewError::Unknown),
    };

    Ok(QuizVm::new(session))
}
