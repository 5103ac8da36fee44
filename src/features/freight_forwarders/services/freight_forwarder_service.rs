use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::freight_forwarders::dtos::{
    FreightForwarderDetailDto, FreightForwarderResponseDto,
};
use crate::features::ratings::{aggregate, LocationFilter};
use crate::features::reviews::models::Review;
use crate::modules::store::ReviewStore;
use crate::shared::constants::DEFAULT_SUGGESTION_LIMIT;
use crate::shared::types::Pagination;

/// Service for company queries and their aggregated ratings
pub struct FreightForwarderService {
    store: Arc<dyn ReviewStore>,
}

impl FreightForwarderService {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self { store }
    }

    /// List companies with their unfiltered average rating
    /// Returns (companies, total_count)
    pub async fn list(
        &self,
        search: Option<&str>,
        pagination: Pagination,
    ) -> Result<(Vec<FreightForwarderResponseDto>, i64)> {
        let search = search.map(str::trim).filter(|s| !s.is_empty());

        let total = self.store.count_freight_forwarders(search).await?;
        let companies = self
            .store
            .list_freight_forwarders(search, pagination.offset(), pagination.limit())
            .await?;

        let ids: Vec<Uuid> = companies.iter().map(|ff| ff.id).collect();
        let mut reviews_by_company: HashMap<Uuid, Vec<Review>> = HashMap::new();
        for review in self.store.reviews_for(&ids).await? {
            reviews_by_company
                .entry(review.freight_forwarder_id)
                .or_default()
                .push(review);
        }

        let no_filter = LocationFilter::default();
        let dtos = companies
            .into_iter()
            .map(|ff| {
                let reviews = reviews_by_company.remove(&ff.id).unwrap_or_default();
                let summary = aggregate(&reviews, &no_filter);
                FreightForwarderResponseDto::new(ff, &summary)
            })
            .collect();

        Ok((dtos, total))
    }

    /// Company detail, aggregating only the reviews that pass `filter`
    pub async fn get_detail(
        &self,
        id: Uuid,
        filter: &LocationFilter,
    ) -> Result<FreightForwarderDetailDto> {
        let ff = self
            .store
            .find_freight_forwarder(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Freight forwarder '{}' not found", id)))?;

        let reviews = self.store.reviews_for(&[id]).await?;
        let summary = aggregate(&reviews, filter);

        tracing::debug!(
            "Aggregated {} of {} reviews for freight forwarder {} (filtered: {})",
            summary.review_count,
            reviews.len(),
            id,
            !filter.is_empty()
        );

        Ok(FreightForwarderDetailDto::new(ff, summary))
    }

    /// Company names containing `query`
    pub async fn suggestions(&self, query: &str, limit: Option<i64>) -> Result<Vec<String>> {
        self.store
            .suggest_names(query, limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT))
            .await
    }
}
