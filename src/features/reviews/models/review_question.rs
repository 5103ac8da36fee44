use sqlx::FromRow;

/// Question shown on the review form
#[derive(Debug, Clone, FromRow)]
pub struct ReviewQuestion {
    pub category_id: String,
    pub category_name: String,
    pub question_id: String,
    pub question_text: String,
    /// Object keyed by rating value ("0".."5") with the meaning of each rating
    pub rating_definitions: serde_json::Value,
    pub is_active: bool,
    /// Insertion sequence; questions are served in this order
    pub position: i64,
}
