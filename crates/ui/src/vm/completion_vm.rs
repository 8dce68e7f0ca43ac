use skill_core::model::MasteryStats;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompletionVm {
    pub total: u32,
    pub completed: u32,
    pub mastered: u32,
    pub mastery_rate: u32,
}

impl CompletionVm {
    #[must_use]
    pub fn rate_label(&self) -> String {
        format!("{}%", self.mastery_rate)
    }
}

#[must_use]
pub fn map_completion(stats: MasteryStats) -> CompletionVm {
    CompletionVm {
        total: stats.total,
        completed: stats.completed,
        mastered: stats.mastered(),
        mastery_rate: stats.mastery_rate(),
    }
}
