//! Shared error types for the services crate.

use thiserror::Error;

use skill_core::model::{QuestionError, QuestionId, TopicError, TopicId};
use storage::sqlite::SqliteInitError;

/// Errors raised while building a question catalog from content files.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to parse {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("topic {0} is registered more than once")]
    DuplicateTopic(TopicId),
    #[error("topic {topic} lists question {id} more than once")]
    DuplicateQuestion { topic: TopicId, id: QuestionId },
    #[error("question set {0} has no registered topic")]
    UnregisteredQuestionSet(String),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Topic(#[from] TopicError),
}

/// Errors emitted by quiz session services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("unknown topic {0}")]
    UnknownTopic(TopicId),
    #[error("no questions available for topic {0}")]
    Empty(TopicId),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("unknown topic {0}")]
    UnknownTopic(TopicId),
}
