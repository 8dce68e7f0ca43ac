use std::sync::Arc;

use skill_core::model::TopicId;
use storage::repository::Storage;

use crate::catalog::{QuestionCatalog, StaticCatalog};
use crate::error::AppServicesError;
use crate::sessions::QuizService;

/// Assembles app-facing services and checks the topic to open on launch.
#[derive(Clone)]
pub struct AppServices {
    initial_topic: Option<TopicId>,
    quiz: Arc<QuizService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the embedded catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails, the
    /// embedded content is broken, or `initial_topic` is not in the catalog.
    pub async fn new_sqlite(
        db_url: &str,
        initial_topic: Option<TopicId>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let catalog: Arc<dyn QuestionCatalog> = Arc::new(StaticCatalog::embedded()?);
        Self::from_parts(&storage, catalog, initial_topic)
    }

    /// Build services over in-memory storage. Progress is lost on exit.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the embedded content is broken or
    /// `initial_topic` is not in the catalog.
    pub fn in_memory(initial_topic: Option<TopicId>) -> Result<Self, AppServicesError> {
        let catalog: Arc<dyn QuestionCatalog> = Arc::new(StaticCatalog::embedded()?);
        Self::from_parts(&Storage::in_memory(), catalog, initial_topic)
    }

    /// Wire services from an existing storage handle and catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::UnknownTopic` if `initial_topic` is not in
    /// the catalog.
    pub fn from_parts(
        storage: &Storage,
        catalog: Arc<dyn QuestionCatalog>,
        initial_topic: Option<TopicId>,
    ) -> Result<Self, AppServicesError> {
        let initial_topic = resolve_topic(catalog.as_ref(), initial_topic)?;
        let quiz = Arc::new(QuizService::new(catalog, Arc::clone(&storage.slots)));
        Ok(Self {
            initial_topic,
            quiz,
        })
    }

    #[must_use]
    pub fn initial_topic(&self) -> Option<&TopicId> {
        self.initial_topic.as_ref()
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}

fn resolve_topic(
    catalog: &dyn QuestionCatalog,
    requested: Option<TopicId>,
) -> Result<Option<TopicId>, AppServicesError> {
    match requested {
        Some(id) if catalog.topic(&id).is_none() => Err(AppServicesError::UnknownTopic(id)),
        other => Ok(other),
    }
}
