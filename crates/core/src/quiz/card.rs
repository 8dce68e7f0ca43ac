use crate::model::Question;

/// User intents the question card understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    /// Pick the option at this position.
    Select(usize),
    Hint,
    Reveal,
    Next,
}

/// What the progress tracker must do after a card transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardEffect {
    MarkCompleted { was_revealed: bool },
    Advance,
}

/// Headline shown above the explanation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Revealed,
    Incorrect,
}

/// Display state of a single option button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionStatus {
    /// Nothing answered yet; the option can be picked.
    Open,
    Correct,
    Incorrect,
    /// Answered, and this option is neither the correct nor the wrong pick.
    Locked,
}

/// Interaction state of the question currently on screen.
///
/// The explanation is shown after any answer, right or wrong. A wrong answer
/// counts as revealed for mastery accounting, the same as using reveal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionCard {
    selected: Option<usize>,
    is_correct: Option<bool>,
    hint_shown: bool,
    explanation_shown: bool,
    revealed: bool,
}

impl QuestionCard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn is_correct(&self) -> Option<bool> {
        self.is_correct
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    #[must_use]
    pub fn hint_shown(&self) -> bool {
        self.hint_shown
    }

    #[must_use]
    pub fn explanation_shown(&self) -> bool {
        self.explanation_shown
    }

    #[must_use]
    pub fn was_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn verdict(&self) -> Option<Verdict> {
        match self.is_correct? {
            true if self.revealed => Some(Verdict::Revealed),
            true => Some(Verdict::Correct),
            false => Some(Verdict::Incorrect),
        }
    }

    #[must_use]
    pub fn option_status(&self, question: &Question, index: usize) -> OptionStatus {
        let Some(selected) = self.selected else {
            return OptionStatus::Open;
        };
        if question.is_correct(index) {
            OptionStatus::Correct
        } else if index == selected {
            OptionStatus::Incorrect
        } else {
            OptionStatus::Locked
        }
    }

    /// Whether `intent` would change this card. Rejected intents are no-ops.
    #[must_use]
    pub fn accepts(&self, intent: QuizIntent, question: &Question, is_last: bool) -> bool {
        match intent {
            QuizIntent::Select(index) => !self.is_answered() && index < question.options().len(),
            QuizIntent::Hint => !self.is_answered() && !self.hint_shown,
            QuizIntent::Reveal => !self.is_answered(),
            QuizIntent::Next => self.is_answered() && !is_last,
        }
    }

    /// Apply `intent` and report what the tracker has to do, if anything.
    pub fn apply(
        &mut self,
        intent: QuizIntent,
        question: &Question,
        is_last: bool,
    ) -> Option<CardEffect> {
        if !self.accepts(intent, question, is_last) {
            return None;
        }
        match intent {
            QuizIntent::Select(index) => {
                let correct = question.is_correct(index);
                self.selected = Some(index);
                self.is_correct = Some(correct);
                self.explanation_shown = true;
                Some(CardEffect::MarkCompleted {
                    was_revealed: self.revealed || !correct,
                })
            }
            QuizIntent::Reveal => {
                self.revealed = true;
                self.selected = Some(question.correct_index());
                self.is_correct = Some(true);
                self.explanation_shown = true;
                Some(CardEffect::MarkCompleted { was_revealed: true })
            }
            QuizIntent::Hint => {
                self.hint_shown = true;
                None
            }
            QuizIntent::Next => {
                *self = Self::new();
                Some(CardEffect::Advance)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_question;

    #[test]
    fn correct_select_shows_explanation_and_completes() {
        let question = sample_question("useState-1");
        let mut card = QuestionCard::new();
        let effect = card.apply(QuizIntent::Select(0), &question, false);
        assert_eq!(effect, Some(CardEffect::MarkCompleted { was_revealed: false }));
        assert!(card.explanation_shown());
        assert_eq!(card.verdict(), Some(Verdict::Correct));
    }

    #[test]
    fn wrong_select_counts_as_revealed() {
        let question = sample_question("useState-1");
        let mut card = QuestionCard::new();
        let effect = card.apply(QuizIntent::Select(2), &question, false);
        assert_eq!(effect, Some(CardEffect::MarkCompleted { was_revealed: true }));
        assert!(card.explanation_shown());
        assert_eq!(card.verdict(), Some(Verdict::Incorrect));
        assert_eq!(card.option_status(&question, 0), OptionStatus::Correct);
        assert_eq!(card.option_status(&question, 2), OptionStatus::Incorrect);
        assert_eq!(card.option_status(&question, 1), OptionStatus::Locked);
    }

    #[test]
    fn second_select_is_ignored() {
        let question = sample_question("useState-1");
        let mut card = QuestionCard::new();
        card.apply(QuizIntent::Select(1), &question, false);
        assert_eq!(card.apply(QuizIntent::Select(0), &question, false), None);
        assert_eq!(card.selected(), Some(1));
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let question = sample_question("useState-1");
        let mut card = QuestionCard::new();
        assert_eq!(card.apply(QuizIntent::Select(4), &question, false), None);
        assert!(!card.is_answered());
    }

    #[test]
    fn reveal_force_selects_correct_option() {
        let question = sample_question("useState-1");
        let mut card = QuestionCard::new();
        let effect = card.apply(QuizIntent::Reveal, &question, false);
        assert_eq!(effect, Some(CardEffect::MarkCompleted { was_revealed: true }));
        assert_eq!(card.selected(), Some(question.correct_index()));
        assert_eq!(card.is_correct(), Some(true));
        assert_eq!(card.verdict(), Some(Verdict::Revealed));
        assert_eq!(card.apply(QuizIntent::Reveal, &question, false), None);
    }

    #[test]
    fn hint_only_before_answer_and_once() {
        let question = sample_question("useState-1");
        let mut card = QuestionCard::new();
        assert!(card.accepts(QuizIntent::Hint, &question, false));
        assert_eq!(card.apply(QuizIntent::Hint, &question, false), None);
        assert!(card.hint_shown());
        assert!(!card.accepts(QuizIntent::Hint, &question, false));

        let mut answered = QuestionCard::new();
        answered.apply(QuizIntent::Select(0), &question, false);
        assert!(!answered.accepts(QuizIntent::Hint, &question, false));
    }

    #[test]
    fn next_requires_answer_and_not_last() {
        let question = sample_question("useState-1");
        let mut card = QuestionCard::new();
        assert_eq!(card.apply(QuizIntent::Next, &question, false), None);

        card.apply(QuizIntent::Hint, &question, false);
        card.apply(QuizIntent::Select(0), &question, false);
        assert!(!card.accepts(QuizIntent::Next, &question, true));
        assert_eq!(card.apply(QuizIntent::Next, &question, false), Some(CardEffect::Advance));
        assert_eq!(card, QuestionCard::new());
    }

    #[test]
    fn options_are_open_before_answer() {
        let question = sample_question("useState-1");
        let card = QuestionCard::new();
        assert_eq!(card.option_status(&question, 0), OptionStatus::Open);
        assert_eq!(card.verdict(), None);
    }
}
