mod ids;
mod progress;
mod question;
mod stats;
mod topic;

pub use ids::{ParseIdError, QuestionId, TopicId};
pub use progress::{Progress, ProgressError};
pub use question::{Question, QuestionDraft, QuestionError};
pub use stats::MasteryStats;
pub use topic::{Topic, TopicDraft, TopicError};

#[cfg(test)]
pub(crate) use question::sample_question;
