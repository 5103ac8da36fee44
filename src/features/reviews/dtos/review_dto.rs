use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::reviews::models::{Review, ReviewCategoryScore, ReviewQuestion};
use crate::shared::validation::CATEGORY_ID_REGEX;

/// Query params for listing review questions
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct ReviewQuestionsQuery {
    /// Only return questions of this category id
    #[validate(regex(path = *CATEGORY_ID_REGEX, message = "Invalid category id"))]
    #[param(example = "responsiveness")]
    pub category: Option<String>,
}

/// A question on the review form
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionDto {
    pub id: String,
    pub text: String,
    #[serde(rename = "ratingDefinitions")]
    #[schema(value_type = Object)]
    pub rating_definitions: serde_json::Value,
}

/// Questions of one category, in form order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionCategoryDto {
    pub id: String,
    pub name: String,
    pub questions: Vec<QuestionDto>,
}

impl QuestionCategoryDto {
    /// Group questions by category, keeping the order in which categories first appear
    pub fn group(questions: Vec<ReviewQuestion>) -> Vec<QuestionCategoryDto> {
        let mut groups: Vec<QuestionCategoryDto> = Vec::new();

        for q in questions {
            let question = QuestionDto {
                id: q.question_id,
                text: q.question_text,
                rating_definitions: q.rating_definitions,
            };

            match groups.iter_mut().find(|g| g.id == q.category_id) {
                Some(group) => group.questions.push(question),
                None => groups.push(QuestionCategoryDto {
                    id: q.category_id,
                    name: q.category_name,
                    questions: vec![question],
                }),
            }
        }

        groups
    }
}

/// Response DTO for a review
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewResponseDto {
    pub id: Uuid,
    pub freight_forwarder_id: Uuid,
    pub user_id: Option<Uuid>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub review_type: String,
    pub is_anonymous: bool,
    pub review_weight: f64,
    pub aggregate_rating: Option<f64>,
    pub weighted_rating: Option<f64>,
    pub total_questions_rated: i32,
    pub shipment_reference: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// One answered question of a review
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryScoreDto {
    pub id: Uuid,
    pub category_id: String,
    pub category_name: String,
    pub question_id: String,
    pub question_text: String,
    pub rating: i32,
    pub rating_definition: String,
    pub weight: f64,
}

/// Response DTO for a single review including its answers
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewDetailDto {
    #[serde(flatten)]
    pub review: ReviewResponseDto,
    pub category_scores: Vec<CategoryScoreDto>,
}

fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

impl From<&Review> for ReviewResponseDto {
    fn from(r: &Review) -> Self {
        Self {
            id: r.id,
            freight_forwarder_id: r.freight_forwarder_id,
            user_id: r.user_id,
            city: r.city.clone(),
            country: r.country.clone(),
            review_type: r.review_type.clone(),
            is_anonymous: r.is_anonymous,
            review_weight: decimal_to_f64(r.review_weight),
            aggregate_rating: r.aggregate_rating.map(decimal_to_f64),
            weighted_rating: r.weighted_rating.map(decimal_to_f64),
            total_questions_rated: r.total_questions_rated,
            shipment_reference: r.shipment_reference.clone(),
            is_active: r.is_active,
            created_at: r.created_at,
        }
    }
}

impl From<ReviewCategoryScore> for CategoryScoreDto {
    fn from(s: ReviewCategoryScore) -> Self {
        Self {
            id: s.id,
            category_id: s.category_id,
            category_name: s.category_name,
            question_id: s.question_id,
            question_text: s.question_text,
            rating: s.rating,
            rating_definition: s.rating_definition,
            weight: decimal_to_f64(s.weight),
        }
    }
}

impl From<Review> for ReviewDetailDto {
    fn from(r: Review) -> Self {
        let review = ReviewResponseDto::from(&r);
        Self {
            review,
            category_scores: r.category_scores.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::question;

    #[test]
    fn test_group_keeps_first_appearance_order() {
        let groups = QuestionCategoryDto::group(vec![
            question("responsiveness", "Responsiveness", "resp_1"),
            question("documentation", "Documentation", "doc_1"),
            question("responsiveness", "Responsiveness", "resp_2"),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].id, "responsiveness");
        assert_eq!(groups[0].questions.len(), 2);
        assert_eq!(groups[0].questions[1].id, "resp_2");
        assert_eq!(groups[1].name, "Documentation");
    }

    #[test]
    fn test_questions_query_validation() {
        let ok = ReviewQuestionsQuery {
            category: Some("customs-clearance".to_string()),
        };
        assert!(ok.validate().is_ok());

        let none = ReviewQuestionsQuery { category: None };
        assert!(none.validate().is_ok());

        let bad = ReviewQuestionsQuery {
            category: Some("Customs Clearance".to_string()),
        };
        assert!(bad.validate().is_err());
    }
}
