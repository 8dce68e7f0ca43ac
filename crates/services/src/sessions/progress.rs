/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    /// One-based position of the question on screen.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_last: bool,
    pub is_complete: bool,
}

impl SessionProgress {
    /// Fraction of the topic passed so far, `current index / total`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.position.saturating_sub(1) as f64 / self.total as f64;
        ratio
    }
}
