//! Fixtures and an in-memory [`ReviewStore`] for handler and aggregator tests.

#![cfg(test)]

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use fake::faker::address::en::{CityName, CountryName};
use fake::faker::company::en::CompanyName;
use fake::Fake;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::freight_forwarders::models::FreightForwarder;
use crate::features::reviews::models::{Review, ReviewCategoryScore, ReviewQuestion};
use crate::modules::store::ReviewStore;

pub fn freight_forwarder(name: &str) -> FreightForwarder {
    FreightForwarder {
        id: Uuid::new_v4(),
        name: name.to_string(),
        website: Some(format!(
            "https://{}.example",
            name.to_lowercase().replace(' ', "-")
        )),
        logo_url: None,
        description: None,
        headquarters_country: Some(CountryName().fake()),
        created_at: Utc::now(),
    }
}

pub fn random_freight_forwarder() -> FreightForwarder {
    let name: String = CompanyName().fake();
    freight_forwarder(&name)
}

/// Review at a random location
pub fn review(freight_forwarder_id: Uuid, aggregate_rating: Option<f64>) -> Review {
    let city: String = CityName().fake();
    let country: String = CountryName().fake();
    review_at(
        freight_forwarder_id,
        aggregate_rating,
        Some(&city),
        Some(&country),
    )
}

pub fn review_at(
    freight_forwarder_id: Uuid,
    aggregate_rating: Option<f64>,
    city: Option<&str>,
    country: Option<&str>,
) -> Review {
    let aggregate_rating = aggregate_rating.map(|r| Decimal::from_f64(r).unwrap());
    Review {
        id: Uuid::new_v4(),
        freight_forwarder_id,
        user_id: Some(Uuid::new_v4()),
        city: city.map(str::to_string),
        country: country.map(str::to_string),
        review_type: "general".to_string(),
        is_anonymous: false,
        review_weight: Decimal::ONE,
        aggregate_rating,
        weighted_rating: aggregate_rating,
        total_questions_rated: 0,
        shipment_reference: None,
        is_active: true,
        created_at: Utc::now(),
        category_scores: Vec::new(),
    }
}

pub fn category_score(
    review_id: Uuid,
    category_id: &str,
    category_name: &str,
    rating: i32,
) -> ReviewCategoryScore {
    ReviewCategoryScore {
        id: Uuid::new_v4(),
        review_id,
        category_id: category_id.to_string(),
        category_name: category_name.to_string(),
        question_id: format!("{}_q{}", category_id, Uuid::new_v4().simple()),
        question_text: format!("How was the {}?", category_name.to_lowercase()),
        rating,
        rating_definition: String::new(),
        weight: Decimal::ONE,
    }
}

static NEXT_QUESTION_POSITION: AtomicI64 = AtomicI64::new(1);

/// Active question positioned after every previously built one
pub fn question(category_id: &str, category_name: &str, question_id: &str) -> ReviewQuestion {
    ReviewQuestion {
        category_id: category_id.to_string(),
        category_name: category_name.to_string(),
        question_id: question_id.to_string(),
        question_text: format!("Question {}", question_id),
        rating_definitions: serde_json::json!({ "0": "Not applicable", "5": "Excellent" }),
        is_active: true,
        position: NEXT_QUESTION_POSITION.fetch_add(1, Ordering::Relaxed),
    }
}

/// Shift a review's timestamp into the past
pub fn aged(mut review: Review, days: i64) -> Review {
    review.created_at -= Duration::days(days);
    review
}

/// Store backed by plain vectors, mirroring the Postgres query semantics
#[derive(Default)]
pub struct InMemoryReviewStore {
    pub freight_forwarders: Vec<FreightForwarder>,
    pub reviews: Vec<Review>,
    pub questions: Vec<ReviewQuestion>,
}

impl InMemoryReviewStore {
    fn matching(&self, search: Option<&str>) -> Vec<&FreightForwarder> {
        let needle = search.map(str::to_lowercase);
        let mut matches: Vec<&FreightForwarder> = self
            .freight_forwarders
            .iter()
            .filter(|ff| {
                needle
                    .as_deref()
                    .is_none_or(|n| ff.name.to_lowercase().contains(n))
            })
            .collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        matches
    }
}

#[async_trait]
impl ReviewStore for InMemoryReviewStore {
    async fn find_freight_forwarder(&self, id: Uuid) -> Result<Option<FreightForwarder>> {
        Ok(self.freight_forwarders.iter().find(|ff| ff.id == id).cloned())
    }

    async fn list_freight_forwarders(
        &self,
        search: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<FreightForwarder>> {
        Ok(self
            .matching(search)
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count_freight_forwarders(&self, search: Option<&str>) -> Result<i64> {
        Ok(self.matching(search).len() as i64)
    }

    async fn suggest_names(&self, query: &str, limit: i64) -> Result<Vec<String>> {
        Ok(self
            .matching(Some(query))
            .into_iter()
            .take(limit as usize)
            .map(|ff| ff.name.clone())
            .collect())
    }

    async fn reviews_for(&self, freight_forwarder_ids: &[Uuid]) -> Result<Vec<Review>> {
        let mut reviews: Vec<Review> = self
            .reviews
            .iter()
            .filter(|r| freight_forwarder_ids.contains(&r.freight_forwarder_id))
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(reviews)
    }

    async fn find_review(&self, id: Uuid) -> Result<Option<Review>> {
        Ok(self.reviews.iter().find(|r| r.id == id).cloned())
    }

    async fn active_questions(&self) -> Result<Vec<ReviewQuestion>> {
        let mut questions: Vec<ReviewQuestion> = self
            .questions
            .iter()
            .filter(|q| q.is_active)
            .cloned()
            .collect();
        questions.sort_by_key(|q| q.position);
        Ok(questions)
    }
}
