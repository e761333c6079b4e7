//! Fixed topic-area cards

use serde::Serialize;

static TOPIC_AREAS: [(&str, [&str; 4]); 3] = [
    (
        "Engineering Best Practices",
        [
            "Clean Code & Design Patterns",
            "Testing Strategies",
            "Code Review Guidelines",
            "Development Workflows",
        ],
    ),
    (
        "Architecture Patterns",
        [
            "System Design",
            "Microservices Architecture",
            "Scalability Patterns",
            "Cloud-Native Solutions",
        ],
    ),
    (
        "Real-world Experience",
        [
            "Case Studies",
            "Problem Solving",
            "Team Collaboration",
            "Technical Leadership",
        ],
    ),
];

#[derive(Debug, Clone, Serialize)]
pub struct TopicCard {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub fn topic_areas() -> Vec<TopicCard> {
    TOPIC_AREAS
        .iter()
        .map(|(title, items)| TopicCard {
            title: *title,
            items: items.as_slice(),
        })
        .collect()
}
