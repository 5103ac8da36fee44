use std::sync::Arc;

use axum::{extract::State, Json};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppPath, AppQuery};
use crate::features::reviews::dtos::{
    QuestionCategoryDto, ReviewDetailDto, ReviewQuestionsQuery, ReviewResponseDto,
};
use crate::features::reviews::services::ReviewService;
use crate::shared::types::ApiResponse;

/// List review questions
///
/// Returns active questions grouped by category, in form order.
#[utoipa::path(
    get,
    path = "/api/reviews/questions",
    params(ReviewQuestionsQuery),
    responses(
        (status = 200, description = "Questions grouped by category", body = ApiResponse<Vec<QuestionCategoryDto>>),
        (status = 400, description = "Invalid category id")
    ),
    tag = "reviews"
)]
pub async fn list_questions(
    State(service): State<Arc<ReviewService>>,
    AppQuery(query): AppQuery<ReviewQuestionsQuery>,
) -> Result<Json<ApiResponse<Vec<QuestionCategoryDto>>>> {
    query.validate()?;

    let groups = service.list_questions(query.category.as_deref()).await?;
    Ok(Json(ApiResponse::success(Some(groups), None, None)))
}

/// List reviews of a freight forwarder
#[utoipa::path(
    get,
    path = "/api/reviews/freight-forwarder/{id}",
    params(
        ("id" = Uuid, Path, description = "Freight forwarder ID")
    ),
    responses(
        (status = 200, description = "Reviews, newest first", body = ApiResponse<Vec<ReviewResponseDto>>),
        (status = 404, description = "Freight forwarder not found")
    ),
    tag = "reviews"
)]
pub async fn list_reviews_by_freight_forwarder(
    State(service): State<Arc<ReviewService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<Vec<ReviewResponseDto>>>> {
    let reviews = service.list_for_freight_forwarder(id).await?;
    Ok(Json(ApiResponse::success(Some(reviews), None, None)))
}

/// Get a review by ID
#[utoipa::path(
    get,
    path = "/api/reviews/{id}",
    params(
        ("id" = Uuid, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Review found", body = ApiResponse<ReviewDetailDto>),
        (status = 404, description = "Review not found")
    ),
    tag = "reviews"
)]
pub async fn get_review(
    State(service): State<Arc<ReviewService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<ReviewDetailDto>>> {
    let review = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(review), None, None)))
}
