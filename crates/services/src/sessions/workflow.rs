use skill_core::model::{MasteryStats, Question, TopicId};
use skill_core::quiz::{CardEffect, KeyFocus, KeyInput, QuestionCard, QuizIntent, intent_for_key};

use super::progress::SessionProgress;
use super::tracker::ProgressTracker;

/// A practice run over one topic: the progress tracker plus the state of the
/// question on screen.
pub struct QuizSession {
    tracker: ProgressTracker,
    card: QuestionCard,
}

impl QuizSession {
    #[must_use]
    pub fn new(tracker: ProgressTracker) -> Self {
        Self {
            tracker,
            card: QuestionCard::new(),
        }
    }

    #[must_use]
    pub fn topic_id(&self) -> &TopicId {
        self.tracker.topic_id()
    }

    #[must_use]
    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    #[must_use]
    pub fn card(&self) -> &QuestionCard {
        &self.card
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.tracker.current_question()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.tracker.is_finished()
    }

    #[must_use]
    pub fn stats(&self) -> MasteryStats {
        self.tracker.stats()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.tracker.questions().len();
        let answered = self.tracker.progress().completed_ids().len();
        let position = if total == 0 {
            0
        } else {
            self.tracker.progress().current_index() + 1
        };
        SessionProgress {
            position,
            total,
            answered,
            remaining: total.saturating_sub(answered),
            is_last: self.tracker.is_last(),
            is_complete: self.tracker.is_finished(),
        }
    }

    /// The last question is answered but earlier ones are still open.
    ///
    /// `Next` is not accepted here, so the only way on is a reset.
    #[must_use]
    pub fn needs_restart(&self) -> bool {
        self.tracker.is_last() && self.card.is_answered() && !self.tracker.is_finished()
    }

    /// Whether the card on screen would act on `intent`.
    #[must_use]
    pub fn accepts(&self, intent: QuizIntent) -> bool {
        self.current_question()
            .is_some_and(|question| self.card.accepts(intent, question, self.tracker.is_last()))
    }

    /// Resolve a key press to an intent the card will accept right now.
    ///
    /// `None` means the key should be left alone.
    #[must_use]
    pub fn intent_for_key(&self, key: KeyInput, focus: KeyFocus) -> Option<QuizIntent> {
        let option_count = self.current_question()?.options().len();
        intent_for_key(key, focus, option_count).filter(|intent| self.accepts(*intent))
    }

    /// Apply `intent` to the current card and forward its effect to the tracker.
    ///
    /// Returns false if the intent was rejected.
    pub async fn dispatch(&mut self, intent: QuizIntent) -> bool {
        let is_last = self.tracker.is_last();
        let Some(question) = self.tracker.current_question() else {
            return false;
        };
        if !self.card.accepts(intent, question, is_last) {
            return false;
        }
        let effect = self.card.apply(intent, question, is_last);

        match effect {
            Some(CardEffect::MarkCompleted { was_revealed }) => {
                self.tracker.mark_completed(was_revealed).await;
            }
            Some(CardEffect::Advance) => {
                self.tracker.advance().await;
            }
            None => {}
        }
        true
    }

    /// Start the topic over from the first question.
    pub async fn reset(&mut self) {
        self.tracker.reset().await;
        self.card = QuestionCard::new();
    }
}
