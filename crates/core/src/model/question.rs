use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {id} has an empty problem statement")]
    EmptyProblem { id: QuestionId },

    #[error("question {id} needs at least two options, found {count}")]
    TooFewOptions { id: QuestionId, count: usize },

    #[error("question {id} lists option {option:?} more than once")]
    DuplicateOption { id: QuestionId, option: String },

    #[error("question {id}: correct answer {answer:?} is not one of its options")]
    AnswerNotInOptions { id: QuestionId, answer: String },
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Authored shape of a question, as it appears in catalog content files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub category: String,
    pub problem: String,
    #[serde(default)]
    pub visual: String,
    #[serde(default)]
    pub problem_code: Option<String>,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub hint: String,
    pub explanation: String,
    pub solution: String,
}

impl QuestionDraft {
    /// Check the draft and freeze it into a `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the problem is blank, there are fewer than two
    /// options, an option repeats, or the correct answer is not an option.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.problem.trim().is_empty() {
            return Err(QuestionError::EmptyProblem { id: self.id });
        }
        if self.options.len() < 2 {
            return Err(QuestionError::TooFewOptions {
                count: self.options.len(),
                id: self.id,
            });
        }
        for (idx, option) in self.options.iter().enumerate() {
            if self.options[..idx].contains(option) {
                return Err(QuestionError::DuplicateOption {
                    option: option.clone(),
                    id: self.id,
                });
            }
        }
        let Some(correct_index) = self
            .options
            .iter()
            .position(|option| *option == self.correct_answer)
        else {
            return Err(QuestionError::AnswerNotInOptions {
                answer: self.correct_answer,
                id: self.id,
            });
        };

        let problem_code = self.problem_code.filter(|code| !code.trim().is_empty());

        Ok(Question {
            id: self.id,
            category: self.category,
            problem: self.problem,
            visual: self.visual,
            problem_code,
            options: self.options,
            correct_index,
            hint: self.hint,
            explanation: self.explanation,
            solution: self.solution,
        })
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A validated multiple-choice scenario. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    category: String,
    problem: String,
    visual: String,
    problem_code: Option<String>,
    options: Vec<String>,
    correct_index: usize,
    hint: String,
    explanation: String,
    solution: String,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn problem(&self) -> &str {
        &self.problem
    }

    /// ASCII diagram or short text illustration of the scenario.
    #[must_use]
    pub fn visual(&self) -> &str {
        &self.visual
    }

    #[must_use]
    pub fn problem_code(&self) -> Option<&str> {
        self.problem_code.as_deref()
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.options[self.correct_index]
    }

    /// Identity match of the option at `index` against the correct answer.
    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }

    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn solution(&self) -> &str {
        &self.solution
    }
}

#[cfg(test)]
pub(crate) fn sample_question(id: &str) -> Question {
    QuestionDraft {
        id: QuestionId::new(id).unwrap(),
        category: "Beginner • State".into(),
        problem: format!("Problem {id}"),
        visual: String::new(),
        problem_code: None,
        options: vec![
            "useState".into(),
            "useEffect".into(),
            "useRef".into(),
            "useMemo".into(),
        ],
        correct_answer: "useState".into(),
        hint: "Does the UI need to update?".into(),
        explanation: "useState triggers re-renders.".into(),
        solution: "const [count, setCount] = useState(0);".into(),
    }
    .validate()
    .unwrap()
}
