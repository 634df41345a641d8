use chrono::{DateTime, Local};

/// A customer review shown on the restaurant page. Read-only display data.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    #[allow(dead_code)]
    pub id: String,
    pub restaurant_id: String,
    pub user_name: String,
    /// Star rating in [1, 5].
    pub rating: f32,
    pub comment: String,
    pub date: DateTime<Local>,
    /// How many customers marked the review helpful.
    pub helpful: u32,
}
