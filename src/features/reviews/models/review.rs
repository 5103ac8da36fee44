use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use super::ReviewCategoryScore;

/// Database model for a submitted review.
///
/// `aggregate_rating` and `weighted_rating` are computed once at submission
/// time and never recomputed here. `category_scores` is not a column; the
/// store fills it after loading the score rows for the review.
#[derive(Debug, Clone, FromRow)]
pub struct Review {
    pub id: Uuid,
    pub freight_forwarder_id: Uuid,
    /// Absent for reviews submitted before accounts existed
    pub user_id: Option<Uuid>,
    pub city: Option<String>,
    pub country: Option<String>,
    /// general, import, export, domestic or warehousing
    pub review_type: String,
    pub is_anonymous: bool,
    /// 0.5 for anonymous submissions, 1.0 otherwise
    pub review_weight: Decimal,
    pub aggregate_rating: Option<Decimal>,
    pub weighted_rating: Option<Decimal>,
    pub total_questions_rated: i32,
    pub shipment_reference: Option<String>,
    /// Moderation flag; inactive reviews still count toward ratings
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    #[sqlx(skip)]
    pub category_scores: Vec<ReviewCategoryScore>,
}
