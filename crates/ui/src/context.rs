use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use services::QuizService;
use skill_core::model::TopicId;

pub trait UiApp: Send + Sync {
    /// Topic to open instead of the picker on first render.
    fn initial_topic(&self) -> Option<TopicId>;

    fn quiz_service(&self) -> Arc<QuizService>;
}

#[derive(Clone)]
pub struct AppContext {
    initial_topic: Option<TopicId>,
    open_initial_topic_once: Arc<AtomicBool>,

    quiz_service: Arc<QuizService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let initial_topic = app.initial_topic();
        let quiz_service = app.quiz_service();

        Self {
            open_initial_topic_once: Arc::new(AtomicBool::new(initial_topic.is_some())),
            initial_topic,
            quiz_service,
        }
    }

    /// The launch topic, handed out once. Later calls return `None`.
    #[must_use]
    pub fn take_initial_topic(&self) -> Option<TopicId> {
        if self.open_initial_topic_once.swap(false, Ordering::AcqRel) {
            self.initial_topic.clone()
        } else {
            None
        }
    }

    #[must_use]
    pub fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
