use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregated ratings of one company
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RatingSummary {
    /// Mean of the non-null review aggregate ratings, 0.0 when there are none
    pub average_rating: f64,
    /// Number of reviews that passed the location filter
    pub review_count: i64,
    /// Sum of review weights (anonymous reviews count 0.5)
    pub weighted_review_count: f64,
    /// Sum of the non-null review aggregate ratings
    pub total_aggregated_score: f64,
    /// Per-category summary keyed by category id
    pub category_scores: BTreeMap<String, CategoryScoreSummary>,
}

/// Summary of one review category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryScoreSummary {
    /// Straight mean of every question rating in the category
    pub average_rating: f64,
    /// Distinct reviews with at least one answer in the category
    pub total_reviews: i64,
    pub category_name: String,
}
