use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::freight_forwarders::models::FreightForwarder;
use crate::features::ratings::{CategoryScoreSummary, RatingSummary};
use crate::shared::constants::{MAX_FILTER_LENGTH, MAX_SUGGESTION_LIMIT};
use crate::shared::types::Pagination;

/// Query params for listing freight forwarders
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
pub struct ListFreightForwardersQuery {
    /// Search by name (case-insensitive, partial match)
    #[validate(length(max = MAX_FILTER_LENGTH, message = "Search must not exceed 100 characters"))]
    #[param(example = "express")]
    pub search: Option<String>,

    /// Page number (1-indexed, default: 1)
    #[param(minimum = 1)]
    pub page: Option<i64>,

    /// Number of items per page (default: 10, max: 100)
    #[param(minimum = 1, maximum = 100)]
    pub page_size: Option<i64>,
}

impl ListFreightForwardersQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.page_size)
    }
}

/// Location filter for the company detail endpoint
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
pub struct LocationFilterQuery {
    /// Only count reviews whose city contains this text (case-insensitive)
    #[validate(length(max = MAX_FILTER_LENGTH, message = "City must not exceed 100 characters"))]
    #[param(example = "london")]
    pub city: Option<String>,

    /// Only count reviews whose country contains this text (case-insensitive)
    #[validate(length(max = MAX_FILTER_LENGTH, message = "Country must not exceed 100 characters"))]
    #[param(example = "uk")]
    pub country: Option<String>,
}

/// Query params for name suggestions
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct SuggestionsQuery {
    /// Search text
    #[validate(length(min = 1, max = MAX_FILTER_LENGTH, message = "Query must be 1-100 characters"))]
    pub q: String,

    /// Maximum number of suggestions (default: 10, max: 50)
    #[validate(range(min = 1, max = MAX_SUGGESTION_LIMIT, message = "Limit must be between 1 and 50"))]
    pub limit: Option<i64>,
}

/// Company as shown in lists
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FreightForwarderResponseDto {
    pub id: Uuid,
    pub name: String,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub average_rating: f64,
    pub review_count: i64,
    pub created_at: DateTime<Utc>,
}

impl FreightForwarderResponseDto {
    pub fn new(ff: FreightForwarder, summary: &RatingSummary) -> Self {
        Self {
            id: ff.id,
            name: ff.name,
            website: ff.website,
            logo_url: ff.logo_url,
            average_rating: summary.average_rating,
            review_count: summary.review_count,
            created_at: ff.created_at,
        }
    }
}

/// Company detail with the aggregated rating breakdown
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FreightForwarderDetailDto {
    pub id: Uuid,
    pub name: String,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub description: Option<String>,
    pub headquarters_country: Option<String>,
    pub average_rating: f64,
    pub review_count: i64,
    pub weighted_review_count: f64,
    pub total_aggregated_score: f64,
    /// Keyed by category id
    pub category_scores_summary: BTreeMap<String, CategoryScoreSummary>,
    pub created_at: DateTime<Utc>,
}

impl FreightForwarderDetailDto {
    pub fn new(ff: FreightForwarder, summary: RatingSummary) -> Self {
        Self {
            id: ff.id,
            name: ff.name,
            website: ff.website,
            logo_url: ff.logo_url,
            description: ff.description,
            headquarters_country: ff.headquarters_country,
            average_rating: summary.average_rating,
            review_count: summary.review_count,
            weighted_review_count: summary.weighted_review_count,
            total_aggregated_score: summary.total_aggregated_score,
            category_scores_summary: summary.category_scores,
            created_at: ff.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_filter_query_length() {
        let ok = LocationFilterQuery {
            city: Some("London".to_string()),
            country: None,
        };
        assert!(ok.validate().is_ok());

        let too_long = LocationFilterQuery {
            city: None,
            country: Some("x".repeat(101)),
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_suggestions_query_validation() {
        let ok = SuggestionsQuery {
            q: "dh".to_string(),
            limit: Some(5),
        };
        assert!(ok.validate().is_ok());

        let empty = SuggestionsQuery {
            q: String::new(),
            limit: None,
        };
        assert!(empty.validate().is_err());

        let too_many = SuggestionsQuery {
            q: "dh".to_string(),
            limit: Some(51),
        };
        assert!(too_many.validate().is_err());
    }
}
