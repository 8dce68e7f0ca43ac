mod completion_vm;
mod question_vm;
mod quiz_vm;
mod topic_vm;

pub use completion_vm::{CompletionVm, map_completion};
pub use question_vm::{FeedbackVm, OptionVm, QuestionVm, map_question};
pub use quiz_vm::{PracticeFrame, QuizVm, start_quiz};
pub use topic_vm::{TopicCardVm, filter_topics, map_topic_cards};
