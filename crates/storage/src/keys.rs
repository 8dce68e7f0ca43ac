use skill_core::model::TopicId;

const PROGRESS_KEY_PREFIX: &str = "skill-enhancer";

/// Slot name holding the progress record of `topic`.
#[must_use]
pub fn progress_key(topic: &TopicId) -> String {
    format!("{PROGRESS_KEY_PREFIX}-{topic}-progress")
}
