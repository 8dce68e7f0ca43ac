use std::sync::Arc;

use skill_core::model::{MasteryStats, Topic, TopicId};
use storage::repository::KeyValueStore;

use crate::catalog::QuestionCatalog;
use crate::error::SessionError;

use super::tracker::ProgressTracker;
use super::workflow::QuizSession;

/// A topic together with the learner's stored standing in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicOverview {
    pub topic: Topic,
    pub stats: MasteryStats,
}

/// Opens quiz sessions against the catalog and the progress store.
#[derive(Clone)]
pub struct QuizService {
    catalog: Arc<dyn QuestionCatalog>,
    slots: Arc<dyn KeyValueStore>,
}

impl QuizService {
    #[must_use]
    pub fn new(catalog: Arc<dyn QuestionCatalog>, slots: Arc<dyn KeyValueStore>) -> Self {
        Self { catalog, slots }
    }

    #[must_use]
    pub fn topics(&self) -> Vec<Topic> {
        self.catalog.topics().to_vec()
    }

    #[must_use]
    pub fn topic(&self, id: &TopicId) -> Option<Topic> {
        self.catalog.topic(id).cloned()
    }

    /// Every topic with the mastery stats of its stored progress.
    pub async fn overview(&self) -> Vec<TopicOverview> {
        let mut items = Vec::with_capacity(self.catalog.topics().len());
        for topic in self.catalog.topics() {
            let tracker = ProgressTracker::load(
                topic.id().clone(),
                self.catalog.questions(topic.id()).to_vec(),
                Arc::clone(&self.slots),
            )
            .await;
            items.push(TopicOverview {
                topic: topic.clone(),
                stats: tracker.stats(),
            });
        }
        items
    }

    /// Open a session on `topic_id`, resuming stored progress.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownTopic` if the catalog has no such topic,
    /// or `SessionError::Empty` if it has no questions yet.
    pub async fn start_session(&self, topic_id: &TopicId) -> Result<QuizSession, SessionError> {
        if self.catalog.topic(topic_id).is_none() {
            return Err(SessionError::UnknownTopic(topic_id.clone()));
        }
        let questions = self.catalog.questions(topic_id).to_vec();
        if questions.is_empty() {
            return Err(SessionError::Empty(topic_id.clone()));
        }
        let tracker =
            ProgressTracker::load(topic_id.clone(), questions, Arc::clone(&self.slots)).await;
        Ok(QuizSession::new(tracker))
    }
}
