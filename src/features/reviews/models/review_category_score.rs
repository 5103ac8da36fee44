use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// One answered question of a review
#[derive(Debug, Clone, FromRow)]
pub struct ReviewCategoryScore {
    pub id: Uuid,
    pub review_id: Uuid,
    pub category_id: String,
    pub category_name: String,
    pub question_id: String,
    pub question_text: String,
    /// 0-5
    pub rating: i32,
    pub rating_definition: String,
    pub weight: Decimal,
}
