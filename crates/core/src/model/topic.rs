use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::TopicId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopicError {
    #[error("topic {id} has an empty name")]
    EmptyName { id: TopicId },
}

/// Authored shape of a topic entry in the catalog registry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TopicDraft {
    pub id: TopicId,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
}

impl TopicDraft {
    /// Freeze the draft into a `Topic` carrying its question count.
    ///
    /// # Errors
    ///
    /// Returns `TopicError::EmptyName` if the display name is blank.
    pub fn validate(self, question_count: usize) -> Result<Topic, TopicError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(TopicError::EmptyName { id: self.id });
        }
        Ok(Topic {
            id: self.id,
            name,
            icon: self.icon,
            description: self.description,
            question_count,
        })
    }
}

/// A subject area with its own ordered question list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    id: TopicId,
    name: String,
    icon: String,
    description: String,
    question_count: usize,
}

impl Topic {
    #[must_use]
    pub fn id(&self) -> &TopicId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.question_count
    }

    /// Topics without questions are listed as "coming soon" and cannot be opened.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.question_count > 0
    }
}
