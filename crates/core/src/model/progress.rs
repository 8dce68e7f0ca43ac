use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::question::Question;
use crate::model::stats::MasteryStats;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("revealed ({revealed}) exceeds completed ({completed})")]
    RevealedExceedsCompleted { completed: u32, revealed: u32 },

    #[error("completed ({completed}) does not match completed ids ({ids})")]
    CountMismatch { completed: u32, ids: usize },

    #[error("question {0} is listed as completed more than once")]
    DuplicateId(QuestionId),
}

/// Persisted shape of a progress record, before invariants are checked.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    current_index: usize,
    completed: u32,
    revealed: u32,
    #[serde(default)]
    completed_ids: Vec<QuestionId>,
}

impl TryFrom<ProgressSnapshot> for Progress {
    type Error = ProgressError;

    fn try_from(raw: ProgressSnapshot) -> Result<Self, Self::Error> {
        Progress::from_persisted(
            raw.current_index,
            raw.completed,
            raw.revealed,
            raw.completed_ids,
        )
    }
}

/// Per-topic progress: where the learner is and which questions are done.
///
/// Invariants: `completed >= revealed` and `completed == completed_ids.len()`.
/// Serializes as `{ currentIndex, completed, revealed, completedIds }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProgressSnapshot")]
pub struct Progress {
    current_index: usize,
    completed: u32,
    revealed: u32,
    completed_ids: Vec<QuestionId>,
}

impl Progress {
    /// Rehydrate a progress record from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the counters disagree with each other or with
    /// the completed id list.
    pub fn from_persisted(
        current_index: usize,
        completed: u32,
        revealed: u32,
        completed_ids: Vec<QuestionId>,
    ) -> Result<Self, ProgressError> {
        if revealed > completed {
            return Err(ProgressError::RevealedExceedsCompleted {
                completed,
                revealed,
            });
        }
        if usize::try_from(completed).ok() != Some(completed_ids.len()) {
            return Err(ProgressError::CountMismatch {
                completed,
                ids: completed_ids.len(),
            });
        }
        for (idx, id) in completed_ids.iter().enumerate() {
            if completed_ids[..idx].contains(id) {
                return Err(ProgressError::DuplicateId(id.clone()));
            }
        }

        Ok(Self {
            current_index,
            completed,
            revealed,
            completed_ids,
        })
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn completed(&self) -> u32 {
        self.completed
    }

    #[must_use]
    pub fn revealed(&self) -> u32 {
        self.revealed
    }

    #[must_use]
    pub fn completed_ids(&self) -> &[QuestionId] {
        &self.completed_ids
    }

    #[must_use]
    pub fn has_completed(&self, id: &QuestionId) -> bool {
        self.completed_ids.contains(id)
    }

    /// Pull the position back inside a question list of `question_count` items.
    ///
    /// Returns true if the position changed.
    pub fn clamp_to(&mut self, question_count: usize) -> bool {
        let last = question_count.saturating_sub(1);
        if self.current_index > last {
            self.current_index = last;
            return true;
        }
        false
    }

    /// Drop completed ids that are not in `questions` and recount.
    ///
    /// Which of the dropped ids were revealed is not recorded, so `revealed`
    /// is only capped at the new `completed`. Returns true if the record changed.
    pub fn retain_known(&mut self, questions: &[Question]) -> bool {
        let before = self.completed_ids.len();
        self.completed_ids
            .retain(|id| questions.iter().any(|q| q.id() == id));
        if self.completed_ids.len() == before {
            return false;
        }
        self.completed = u32::try_from(self.completed_ids.len()).unwrap_or(u32::MAX);
        self.revealed = self.revealed.min(self.completed);
        true
    }

    /// Move one question forward, never past the last index.
    ///
    /// Returns true if the position changed.
    pub fn advance(&mut self, question_count: usize) -> bool {
        if self.current_index + 1 < question_count {
            self.current_index += 1;
            return true;
        }
        false
    }

    /// Count `id` as completed once. Repeated calls for the same id are no-ops.
    ///
    /// Returns true if the record changed.
    pub fn mark_completed(&mut self, id: &QuestionId, was_revealed: bool) -> bool {
        if self.has_completed(id) {
            return false;
        }
        self.completed_ids.push(id.clone());
        self.completed = self.completed.saturating_add(1);
        if was_revealed {
            self.revealed = self.revealed.saturating_add(1);
        }
        true
    }

    /// True when the learner sits on the last question and every question is completed.
    #[must_use]
    pub fn is_finished(&self, questions: &[Question]) -> bool {
        !questions.is_empty()
            && self.current_index == questions.len() - 1
            && questions.iter().all(|q| self.has_completed(q.id()))
    }

    #[must_use]
    pub fn stats(&self, question_count: usize) -> MasteryStats {
        MasteryStats {
            total: u32::try_from(question_count).unwrap_or(u32::MAX),
            completed: self.completed,
            revealed: self.revealed,
        }
    }
}
