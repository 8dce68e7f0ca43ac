#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog;
pub mod error;
pub mod sessions;

pub use app_services::AppServices;
pub use catalog::{QuestionCatalog, StaticCatalog};
pub use error::{AppServicesError, CatalogError, SessionError};

pub use sessions::{ProgressTracker, QuizService, QuizSession, SessionProgress, TopicOverview};
