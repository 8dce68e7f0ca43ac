mod progress;
mod service;
mod tracker;
mod workflow;

// Public API of the quiz session subsystem.
pub use crate::error::SessionError;
pub use progress::SessionProgress;
pub use service::{QuizService, TopicOverview};
pub use tracker::ProgressTracker;
pub use workflow::QuizSession;
