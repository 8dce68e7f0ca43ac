use services::TopicOverview;

/// One entry of the topic picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicCardVm {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub question_count: usize,
    pub available: bool,
    pub completed: u32,
    pub mastery_rate: u32,
}

impl TopicCardVm {
    #[must_use]
    pub fn count_label(&self) -> String {
        match self.question_count {
            0 => "Coming Soon".to_string(),
            1 => "1 scenario".to_string(),
            n => format!("{n} scenarios"),
        }
    }

    /// Mastery line for topics the learner has started.
    #[must_use]
    pub fn mastery_label(&self) -> Option<String> {
        (self.available && self.completed > 0).then(|| format!("{}% mastered", self.mastery_rate))
    }

    /// Case-insensitive match on name or description. An empty query matches all.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

#[must_use]
pub fn map_topic_cards(items: &[TopicOverview]) -> Vec<TopicCardVm> {
    items
        .iter()
        .map(|item| TopicCardVm {
            id: item.topic.id().to_string(),
            name: item.topic.name().to_string(),
            icon: item.topic.icon().to_string(),
            description: item.topic.description().to_string(),
            question_count: item.topic.question_count(),
            available: item.topic.is_available(),
            completed: item.stats.completed,
            mastery_rate: item.stats.mastery_rate(),
        })
        .collect()
}

#[must_use]
pub fn filter_topics(cards: &[TopicCardVm], query: &str) -> Vec<TopicCardVm> {
    cards
        .iter()
        .filter(|card| card.matches(query))
        .cloned()
        .collect()
}
