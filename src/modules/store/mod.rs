//! Read-only access to companies, reviews and review questions.
//!
//! Every method returns owned snapshots. Reviews come back with their
//! `category_scores` already attached so the aggregator never has to go
//! back to the database.

mod postgres_store;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::freight_forwarders::models::FreightForwarder;
use crate::features::reviews::models::{Review, ReviewQuestion};

pub use postgres_store::PgReviewStore;

#[async_trait]
pub trait ReviewStore: Send + Sync {
    async fn find_freight_forwarder(&self, id: Uuid) -> Result<Option<FreightForwarder>>;

    /// Companies whose name contains `search` (case-insensitive), ordered by name
    async fn list_freight_forwarders(
        &self,
        search: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<FreightForwarder>>;

    async fn count_freight_forwarders(&self, search: Option<&str>) -> Result<i64>;

    /// Company names containing `query`, ordered by name
    async fn suggest_names(&self, query: &str, limit: i64) -> Result<Vec<String>>;

    /// All reviews of the given companies, newest first, with category scores attached
    async fn reviews_for(&self, freight_forwarder_ids: &[Uuid]) -> Result<Vec<Review>>;

    async fn find_review(&self, id: Uuid) -> Result<Option<Review>>;

    /// Active review questions ordered by category then question
    async fn active_questions(&self) -> Result<Vec<ReviewQuestion>>;
}

/// Build an ILIKE pattern that matches `value` literally anywhere in the column
pub(crate) fn contains_pattern(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('%');
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}
