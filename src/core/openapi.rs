use utoipa::{Modify, OpenApi};

use crate::features::freight_forwarders::{
    dtos as freight_forwarders_dtos, handlers as freight_forwarders_handlers,
};
use crate::features::ratings::dtos as ratings_dtos;
use crate::features::reviews::{dtos as reviews_dtos, handlers as reviews_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Freight forwarders (public)
        freight_forwarders_handlers::list_freight_forwarders,
        freight_forwarders_handlers::get_freight_forwarder,
        freight_forwarders_handlers::get_suggestions,
        // Reviews (public)
        reviews_handlers::list_questions,
        reviews_handlers::list_reviews_by_freight_forwarder,
        reviews_handlers::get_review,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Ratings
            ratings_dtos::RatingSummary,
            ratings_dtos::CategoryScoreSummary,
            // Freight forwarders
            freight_forwarders_dtos::FreightForwarderResponseDto,
            freight_forwarders_dtos::FreightForwarderDetailDto,
            ApiResponse<Vec<freight_forwarders_dtos::FreightForwarderResponseDto>>,
            ApiResponse<freight_forwarders_dtos::FreightForwarderDetailDto>,
            ApiResponse<Vec<String>>,
            // Reviews
            reviews_dtos::QuestionDto,
            reviews_dtos::QuestionCategoryDto,
            reviews_dtos::ReviewResponseDto,
            reviews_dtos::CategoryScoreDto,
            reviews_dtos::ReviewDetailDto,
            ApiResponse<Vec<reviews_dtos::QuestionCategoryDto>>,
            ApiResponse<Vec<reviews_dtos::ReviewResponseDto>>,
            ApiResponse<reviews_dtos::ReviewDetailDto>,
        )
    ),
    tags(
        (name = "freight-forwarders", description = "Freight forwarders and their aggregated ratings (public)"),
        (name = "reviews", description = "Reviews and review questions (public)"),
    ),
    info(
        title = "Logiscore API",
        version = "0.1.0",
        description = "Freight forwarder ratings API",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
