use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{contains_pattern, ReviewStore};
use crate::core::error::{AppError, Result};
use crate::features::freight_forwarders::models::FreightForwarder;
use crate::features::reviews::models::{Review, ReviewCategoryScore, ReviewQuestion};

const FREIGHT_FORWARDER_COLUMNS: &str =
    "id, name, website, logo_url, description, headquarters_country, created_at";

const REVIEW_COLUMNS: &str = "id, freight_forwarder_id, user_id, city, country, review_type, \
     is_anonymous, review_weight, aggregate_rating, weighted_rating, total_questions_rated, \
     shipment_reference, is_active, created_at";

const CATEGORY_SCORE_COLUMNS: &str = "id, review_id, category_id, category_name, question_id, \
     question_text, rating, rating_definition, weight";

/// Postgres-backed store
pub struct PgReviewStore {
    pool: PgPool,
}

impl PgReviewStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load score rows for `reviews` in one query and attach them in place
    async fn attach_category_scores(&self, reviews: &mut [Review]) -> Result<()> {
        if reviews.is_empty() {
            return Ok(());
        }

        let review_ids: Vec<Uuid> = reviews.iter().map(|r| r.id).collect();
        let scores = sqlx::query_as::<_, ReviewCategoryScore>(&format!(
            "SELECT {CATEGORY_SCORE_COLUMNS} FROM review_category_scores \
             WHERE review_id = ANY($1) ORDER BY created_at, id"
        ))
        .bind(&review_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load review category scores: {:?}", e);
            AppError::Database(e)
        })?;

        let index: HashMap<Uuid, usize> = reviews
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id, i))
            .collect();
        for score in scores {
            if let Some(&i) = index.get(&score.review_id) {
                reviews[i].category_scores.push(score);
            }
        }

        Ok(())
    }
}

#[async_trait]
impl ReviewStore for PgReviewStore {
    async fn find_freight_forwarder(&self, id: Uuid) -> Result<Option<FreightForwarder>> {
        sqlx::query_as::<_, FreightForwarder>(&format!(
            "SELECT {FREIGHT_FORWARDER_COLUMNS} FROM freight_forwarders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get freight forwarder {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn list_freight_forwarders(
        &self,
        search: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<FreightForwarder>> {
        sqlx::query_as::<_, FreightForwarder>(&format!(
            "SELECT {FREIGHT_FORWARDER_COLUMNS} FROM freight_forwarders \
             WHERE ($1::text IS NULL OR name ILIKE $1) \
             ORDER BY name, id OFFSET $2 LIMIT $3"
        ))
        .bind(search.map(contains_pattern))
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list freight forwarders: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn count_freight_forwarders(&self, search: Option<&str>) -> Result<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM freight_forwarders WHERE ($1::text IS NULL OR name ILIKE $1)",
        )
        .bind(search.map(contains_pattern))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count freight forwarders: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn suggest_names(&self, query: &str, limit: i64) -> Result<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT name FROM freight_forwarders WHERE name ILIKE $1 ORDER BY name LIMIT $2",
        )
        .bind(contains_pattern(query))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch name suggestions: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn reviews_for(&self, freight_forwarder_ids: &[Uuid]) -> Result<Vec<Review>> {
        if freight_forwarder_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut reviews = sqlx::query_as::<_, Review>(&format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews \
             WHERE freight_forwarder_id = ANY($1) ORDER BY created_at DESC, id"
        ))
        .bind(freight_forwarder_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load reviews: {:?}", e);
            AppError::Database(e)
        })?;

        self.attach_category_scores(&mut reviews).await?;
        Ok(reviews)
    }

    async fn find_review(&self, id: Uuid) -> Result<Option<Review>> {
        let review = sqlx::query_as::<_, Review>(&format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get review {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        let Some(review) = review else {
            return Ok(None);
        };

        let mut reviews = [review];
        self.attach_category_scores(&mut reviews).await?;
        let [review] = reviews;
        Ok(Some(review))
    }

    async fn active_questions(&self) -> Result<Vec<ReviewQuestion>> {
        sqlx::query_as::<_, ReviewQuestion>(
            "SELECT category_id, category_name, question_id, question_text, rating_definitions, \
             is_active, position \
             FROM review_questions WHERE is_active = TRUE \
             ORDER BY position",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list review questions: {:?}", e);
            AppError::Database(e)
        })
    }
}
