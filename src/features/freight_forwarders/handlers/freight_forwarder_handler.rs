use std::sync::Arc;

use axum::{extract::State, Json};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppPath, AppQuery};
use crate::features::freight_forwarders::dtos::{
    FreightForwarderDetailDto, FreightForwarderResponseDto, ListFreightForwardersQuery,
    LocationFilterQuery, SuggestionsQuery,
};
use crate::features::freight_forwarders::services::FreightForwarderService;
use crate::features::ratings::LocationFilter;
use crate::shared::types::{ApiResponse, Meta};

/// List freight forwarders
///
/// Paginated, ordered by name. Each entry carries its overall average rating
/// and review count.
#[utoipa::path(
    get,
    path = "/api/freight-forwarders",
    params(ListFreightForwardersQuery),
    responses(
        (status = 200, description = "List of freight forwarders", body = ApiResponse<Vec<FreightForwarderResponseDto>>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "freight-forwarders"
)]
pub async fn list_freight_forwarders(
    State(service): State<Arc<FreightForwarderService>>,
    AppQuery(query): AppQuery<ListFreightForwardersQuery>,
) -> Result<Json<ApiResponse<Vec<FreightForwarderResponseDto>>>> {
    query.validate()?;

    let (companies, total) = service
        .list(query.search.as_deref(), query.pagination())
        .await?;
    Ok(Json(ApiResponse::success(
        Some(companies),
        None,
        Some(Meta { total }),
    )))
}

/// Get freight forwarder by ID
///
/// `city` and `country` restrict the aggregated ratings to reviews from
/// matching locations (case-insensitive partial match).
#[utoipa::path(
    get,
    path = "/api/freight-forwarders/{id}",
    params(
        ("id" = Uuid, Path, description = "Freight forwarder ID"),
        LocationFilterQuery
    ),
    responses(
        (status = 200, description = "Freight forwarder found", body = ApiResponse<FreightForwarderDetailDto>),
        (status = 400, description = "Invalid ID or filter"),
        (status = 404, description = "Freight forwarder not found")
    ),
    tag = "freight-forwarders"
)]
pub async fn get_freight_forwarder(
    State(service): State<Arc<FreightForwarderService>>,
    AppPath(id): AppPath<Uuid>,
    AppQuery(query): AppQuery<LocationFilterQuery>,
) -> Result<Json<ApiResponse<FreightForwarderDetailDto>>> {
    query.validate()?;

    let filter = LocationFilter::new(query.city.as_deref(), query.country.as_deref());
    let detail = service.get_detail(id, &filter).await?;
    Ok(Json(ApiResponse::success(Some(detail), None, None)))
}

/// Suggest freight forwarder names
#[utoipa::path(
    get,
    path = "/api/search/suggestions",
    params(SuggestionsQuery),
    responses(
        (status = 200, description = "Matching company names", body = ApiResponse<Vec<String>>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "freight-forwarders"
)]
pub async fn get_suggestions(
    State(service): State<Arc<FreightForwarderService>>,
    AppQuery(query): AppQuery<SuggestionsQuery>,
) -> Result<Json<ApiResponse<Vec<String>>>> {
    query.validate()?;

    let names = service.suggestions(&query.q, query.limit).await?;
    Ok(Json(ApiResponse::success(Some(names), None, None)))
}
