use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reviews::dtos::{QuestionCategoryDto, ReviewDetailDto, ReviewResponseDto};
use crate::modules::store::ReviewStore;

/// Service for review read operations
pub struct ReviewService {
    store: Arc<dyn ReviewStore>,
}

impl ReviewService {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self { store }
    }

    /// Active questions grouped by category, optionally restricted to one category
    pub async fn list_questions(&self, category: Option<&str>) -> Result<Vec<QuestionCategoryDto>> {
        let questions = self
            .store
            .active_questions()
            .await?
            .into_iter()
            .filter(|q| category.is_none_or(|c| q.category_id == c))
            .collect();

        Ok(QuestionCategoryDto::group(questions))
    }

    /// All reviews of a company, newest first
    pub async fn list_for_freight_forwarder(
        &self,
        freight_forwarder_id: Uuid,
    ) -> Result<Vec<ReviewResponseDto>> {
        if self
            .store
            .find_freight_forwarder(freight_forwarder_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Freight forwarder '{}' not found",
                freight_forwarder_id
            )));
        }

        let mut reviews = self.store.reviews_for(&[freight_forwarder_id]).await?;
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        tracing::debug!(
            "Loaded {} reviews for freight forwarder {}",
            reviews.len(),
            freight_forwarder_id
        );

        Ok(reviews.iter().map(ReviewResponseDto::from).collect())
    }

    /// Single review with its category scores
    pub async fn get(&self, id: Uuid) -> Result<ReviewDetailDto> {
        self.store
            .find_review(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Review '{}' not found", id)))
    }
}
