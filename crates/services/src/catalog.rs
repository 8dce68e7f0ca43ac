use std::collections::HashMap;

use skill_core::model::{Question, QuestionDraft, Topic, TopicDraft, TopicId};
use tracing::debug;

use crate::error::CatalogError;

const EMBEDDED_TOPICS: &str = include_str!("../content/topics.json");

const EMBEDDED_QUESTION_SETS: &[(&str, &str)] = &[
    ("react-hooks", include_str!("../content/react-hooks.json")),
    ("nextjs", include_str!("../content/nextjs.json")),
    ("react-native", include_str!("../content/react-native.json")),
    ("n8n", include_str!("../content/n8n.json")),
    ("nodejs", include_str!("../content/nodejs.json")),
];

/// Read-only source of topics and their ordered questions.
pub trait QuestionCatalog: Send + Sync {
    /// All registered topics, in display order.
    fn topics(&self) -> &[Topic];

    fn topic(&self, id: &TopicId) -> Option<&Topic>;

    /// Questions of `id` in practice order. Unknown topics yield an empty list.
    fn questions(&self, id: &TopicId) -> &[Question];
}

/// Catalog parsed once from JSON content.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    topics: Vec<Topic>,
    questions: HashMap<TopicId, Vec<Question>>,
}

impl StaticCatalog {
    /// Catalog built from the content shipped with the binary.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the embedded content is malformed.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_TOPICS, EMBEDDED_QUESTION_SETS)
    }

    /// Build a catalog from a topic registry and `(topic id, questions json)` pairs.
    ///
    /// Registered topics without a question set are kept with zero questions.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if any document fails to parse, a question or
    /// topic is invalid, an id repeats, or a question set names no registered
    /// topic.
    pub fn from_json(topics_json: &str, question_sets: &[(&str, &str)]) -> Result<Self, CatalogError> {
        let drafts: Vec<TopicDraft> =
            serde_json::from_str(topics_json).map_err(|source| CatalogError::Parse {
                name: "topic registry".to_string(),
                source,
            })?;

        let mut questions: HashMap<TopicId, Vec<Question>> = HashMap::new();
        for (name, json) in question_sets {
            let Some(draft) = drafts.iter().find(|draft| draft.id.as_str() == *name) else {
                return Err(CatalogError::UnregisteredQuestionSet((*name).to_string()));
            };
            let parsed = parse_question_set(&draft.id, name, json)?;
            questions.insert(draft.id.clone(), parsed);
        }

        let mut topics: Vec<Topic> = Vec::with_capacity(drafts.len());
        for draft in drafts {
            if topics.iter().any(|topic| topic.id() == &draft.id) {
                return Err(CatalogError::DuplicateTopic(draft.id));
            }
            let count = questions.get(&draft.id).map_or(0, Vec::len);
            topics.push(draft.validate(count)?);
        }

        debug!(topics = topics.len(), "question catalog loaded");
        Ok(Self { topics, questions })
    }
}

fn parse_question_set(
    topic: &TopicId,
    name: &str,
    json: &str,
) -> Result<Vec<Question>, CatalogError> {
    let drafts: Vec<QuestionDraft> =
        serde_json::from_str(json).map_err(|source| CatalogError::Parse {
            name: format!("questions for {name}"),
            source,
        })?;

    let mut questions: Vec<Question> = Vec::with_capacity(drafts.len());
    for draft in drafts {
        let question = draft.validate()?;
        if questions.iter().any(|q| q.id() == question.id()) {
            return Err(CatalogError::DuplicateQuestion {
                topic: topic.clone(),
                id: question.id().clone(),
            });
        }
        questions.push(question);
    }
    Ok(questions)
}

impl QuestionCatalog for StaticCatalog {
    fn topics(&self) -> &[Topic] {
        &self.topics
    }

    fn topic(&self, id: &TopicId) -> Option<&Topic> {
        self.topics.iter().find(|topic| topic.id() == id)
    }

    fn questions(&self, id: &TopicId) -> &[Question] {
        self.questions.get(id).map(Vec::as_slice).unwrap_or_default()
    }
}
