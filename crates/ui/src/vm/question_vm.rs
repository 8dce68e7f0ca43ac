use services::QuizSession;
use skill_core::quiz::{OptionStatus, QuizIntent, Verdict, hotkey_label};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub hotkey: Option<char>,
    pub text: String,
    pub status: OptionStatus,
}

impl OptionVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.status {
            OptionStatus::Open => "option",
            OptionStatus::Correct => "option option--correct",
            OptionStatus::Incorrect => "option option--incorrect",
            OptionStatus::Locked => "option option--locked",
        }
    }
}

/// Explanation panel shown once the question is answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub verdict: Verdict,
    pub correct_answer: String,
    pub explanation: String,
    pub solution: String,
    pub is_last: bool,
    /// Earlier questions are still open, so the run can only go on from the start.
    pub needs_restart: bool,
}

impl FeedbackVm {
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self.verdict {
            Verdict::Correct => "Correct!",
            Verdict::Revealed => "Answer Revealed",
            Verdict::Incorrect => "Incorrect",
        }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.verdict {
            Verdict::Correct => "feedback feedback--correct",
            Verdict::Revealed => "feedback feedback--revealed",
            Verdict::Incorrect => "feedback feedback--incorrect",
        }
    }
}

/// Render-ready snapshot of the question on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionVm {
    pub progress_label: String,
    pub progress_percent: f64,
    pub category: String,
    pub problem: String,
    pub visual: String,
    pub problem_code: Option<String>,
    pub options: Vec<OptionVm>,
    pub can_hint: bool,
    pub can_reveal: bool,
    pub hint: Option<String>,
    pub feedback: Option<FeedbackVm>,
}

#[must_use]
pub fn map_question(session: &QuizSession) -> Option<QuestionVm> {
    let question = session.current_question()?;
    let card = session.card();
    let progress = session.progress();

    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(index, text)| OptionVm {
            index,
            hotkey: hotkey_label(index),
            text: text.clone(),
            status: card.option_status(question, index),
        })
        .collect();

    let feedback = card
        .explanation_shown()
        .then(|| card.verdict())
        .flatten()
        .map(|verdict| FeedbackVm {
            verdict,
            correct_answer: question.correct_answer().to_string(),
            explanation: question.explanation().to_string(),
            solution: question.solution().to_string(),
            is_last: progress.is_last,
            needs_restart: session.needs_restart(),
        });

    Some(QuestionVm {
        progress_label: format!("Progress: {}/{}", progress.position, progress.total),
        progress_percent: progress.fraction() * 100.0,
        category: question.category().to_string(),
        problem: question.problem().to_string(),
        visual: question.visual().to_string(),
        problem_code: question.problem_code().map(str::to_string),
        options,
        can_hint: session.accepts(QuizIntent::Hint),
        can_reveal: session.accepts(QuizIntent::Reveal),
        hint: card.hint_shown().then(|| question.hint().to_string()),
        feedback,
    })
}
