/// Derived completion metrics for a topic. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MasteryStats {
    pub total: u32,
    pub completed: u32,
    pub revealed: u32,
}

impl MasteryStats {
    /// Questions completed without revealing or missing the answer.
    #[must_use]
    pub fn mastered(&self) -> u32 {
        self.completed.saturating_sub(self.revealed)
    }

    /// `mastered / total` as a whole percentage, rounded half up. Zero for an empty topic.
    #[must_use]
    pub fn mastery_rate(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let mastered = u64::from(self.mastered());
        let total = u64::from(self.total);
        let rate = (mastered * 200 + total) / (total * 2);
        u32::try_from(rate).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mastered_excludes_revealed() {
        let stats = MasteryStats {
            total: 3,
            completed: 3,
            revealed: 1,
        };
        assert_eq!(stats.mastered(), 2);
        assert_eq!(stats.mastery_rate(), 67);
    }

    #[test]
    fn mastery_rate_rounds_half_up() {
        let stats = MasteryStats {
            total: 8,
            completed: 1,
            revealed: 0,
        };
        assert_eq!(stats.mastery_rate(), 13);
    }

    #[test]
    fn mastery_rate_is_zero_for_empty_topic() {
        let stats = MasteryStats {
            total: 0,
            completed: 0,
            revealed: 0,
        };
        assert_eq!(stats.mastery_rate(), 0);
    }
}
