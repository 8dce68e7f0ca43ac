use std::sync::Arc;

use skill_core::model::{MasteryStats, Progress, Question, TopicId};
use storage::keys::progress_key;
use storage::repository::KeyValueStore;
use tracing::{debug, info, warn};

/// Owns the progress record of one topic and keeps its slot in sync.
///
/// Reads never fail: a missing, unreadable or malformed slot starts the topic
/// from scratch. Writes are fire-and-forget and only logged when they fail.
pub struct ProgressTracker {
    topic_id: TopicId,
    key: String,
    questions: Vec<Question>,
    progress: Progress,
    slots: Arc<dyn KeyValueStore>,
}

impl ProgressTracker {
    /// Load the stored progress of `topic_id` for the given question list.
    pub async fn load(
        topic_id: TopicId,
        questions: Vec<Question>,
        slots: Arc<dyn KeyValueStore>,
    ) -> Self {
        let key = progress_key(&topic_id);
        let mut progress = read_progress(slots.as_ref(), &key).await;
        if progress.retain_known(&questions) {
            debug!(topic = %topic_id, completed = progress.completed(), "dropped ids of removed questions");
        }
        if progress.clamp_to(questions.len()) {
            debug!(topic = %topic_id, index = progress.current_index(), "clamped stored position");
        }

        Self {
            topic_id,
            key,
            questions,
            progress,
            slots,
        }
    }

    #[must_use]
    pub fn topic_id(&self) -> &TopicId {
        &self.topic_id
    }

    #[must_use]
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.progress.current_index())
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        !self.questions.is_empty() && self.progress.current_index() == self.questions.len() - 1
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress.is_finished(&self.questions)
    }

    #[must_use]
    pub fn stats(&self) -> MasteryStats {
        self.progress.stats(self.questions.len())
    }

    /// Move to the next question and persist. No-op on the last question.
    pub async fn advance(&mut self) -> bool {
        if !self.progress.advance(self.questions.len()) {
            return false;
        }
        self.persist().await;
        true
    }

    /// Count the current question as completed once, then persist.
    pub async fn mark_completed(&mut self, was_revealed: bool) -> bool {
        let Some(question) = self.questions.get(self.progress.current_index()) else {
            return false;
        };
        if !self.progress.mark_completed(question.id(), was_revealed) {
            return false;
        }
        self.persist().await;
        true
    }

    /// Clear all progress for the topic and delete its slot.
    pub async fn reset(&mut self) {
        self.progress = Progress::default();
        if let Err(err) = self.slots.remove(&self.key).await {
            warn!(topic = %self.topic_id, error = %err, "failed to remove progress slot");
            return;
        }
        info!(topic = %self.topic_id, "progress reset");
    }

    async fn persist(&self) {
        let value = match serde_json::to_string(&self.progress) {
            Ok(value) => value,
            Err(err) => {
                warn!(topic = %self.topic_id, error = %err, "failed to encode progress");
                return;
            }
        };
        match self.slots.set(&self.key, &value).await {
            Ok(()) => debug!(key = %self.key, "progress saved"),
            Err(err) => warn!(key = %self.key, error = %err, "failed to save progress"),
        }
    }
}

async fn read_progress(slots: &dyn KeyValueStore, key: &str) -> Progress {
    let raw = match slots.get(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return Progress::default(),
        Err(err) => {
            warn!(key, error = %err, "failed to read progress slot");
            return Progress::default();
        }
    };
    match serde_json::from_str::<Progress>(&raw) {
        Ok(progress) => {
            debug!(key, "progress loaded");
            progress
        }
        Err(err) => {
            warn!(key, error = %err, "discarding malformed progress");
            Progress::default()
        }
    }
}
