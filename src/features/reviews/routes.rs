use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::reviews::handlers;
use crate::features::reviews::services::ReviewService;

/// Create routes for the reviews feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<ReviewService>) -> Router {
    Router::new()
        .route("/api/reviews/questions", get(handlers::list_questions))
        .route(
            "/api/reviews/freight-forwarder/{id}",
            get(handlers::list_reviews_by_freight_forwarder),
        )
        .route("/api/reviews/{id}", get(handlers::get_review))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;
    use uuid::Uuid;

    use crate::shared::test_helpers::{
        aged, category_score, question, random_freight_forwarder, review, InMemoryReviewStore,
    };

    fn server(store: InMemoryReviewStore) -> TestServer {
        let service = Arc::new(ReviewService::new(Arc::new(store)));
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_list_questions_grouped() {
        let store = InMemoryReviewStore {
            questions: vec![
                question("responsiveness", "Responsiveness", "resp_1"),
                question("documentation", "Documentation", "doc_1"),
                question("responsiveness", "Responsiveness", "resp_2"),
            ],
            ..Default::default()
        };
        let server = server(store);

        let response = server.get("/api/reviews/questions").await;
        response.assert_status_ok();

        let body: Value = response.json();
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["id"], "responsiveness");
        assert_eq!(data[0]["questions"].as_array().unwrap().len(), 2);
        assert_eq!(data[1]["id"], "documentation");
        assert_eq!(
            data[0]["questions"][0]["ratingDefinitions"]["5"],
            "Excellent"
        );
    }

    #[tokio::test]
    async fn test_list_questions_in_form_order() {
        let resp_2 = question("responsiveness", "Responsiveness", "resp_2");
        let resp_10 = question("responsiveness", "Responsiveness", "resp_10");
        let doc_1 = question("documentation", "Documentation", "doc_1");
        let mut retired = question("customs", "Customs", "customs_1");
        retired.is_active = false;

        let store = InMemoryReviewStore {
            questions: vec![retired, doc_1, resp_10, resp_2],
            ..Default::default()
        };
        let server = server(store);

        let response = server.get("/api/reviews/questions").await;
        response.assert_status_ok();

        let body: Value = response.json();
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["id"], "responsiveness");
        assert_eq!(data[0]["questions"][0]["id"], "resp_2");
        assert_eq!(data[0]["questions"][1]["id"], "resp_10");
        assert_eq!(data[1]["id"], "documentation");
    }

    #[tokio::test]
    async fn test_list_questions_by_category() {
        let store = InMemoryReviewStore {
            questions: vec![
                question("responsiveness", "Responsiveness", "resp_1"),
                question("documentation", "Documentation", "doc_1"),
            ],
            ..Default::default()
        };
        let server = server(store);

        let response = server
            .get("/api/reviews/questions")
            .add_query_param("category", "documentation")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["name"], "Documentation");
    }

    #[tokio::test]
    async fn test_list_questions_rejects_bad_category() {
        let server = server(InMemoryReviewStore::default());

        let response = server
            .get("/api/reviews/questions")
            .add_query_param("category", "Not Valid!")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_list_reviews_newest_first() {
        let company = random_freight_forwarder();
        let older = aged(review(company.id, Some(2.0)), 3);
        let newer = review(company.id, Some(4.0));
        let other = review(Uuid::new_v4(), Some(1.0));
        let (older_id, newer_id) = (older.id, newer.id);

        let store = InMemoryReviewStore {
            freight_forwarders: vec![company.clone()],
            reviews: vec![older, other, newer],
            ..Default::default()
        };
        let server = server(store);

        let response = server
            .get(&format!("/api/reviews/freight-forwarder/{}", company.id))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["id"], newer_id.to_string());
        assert_eq!(data[1]["id"], older_id.to_string());
        assert_eq!(data[0]["aggregate_rating"], 4.0);
    }

    #[tokio::test]
    async fn test_list_reviews_unknown_company() {
        let server = server(InMemoryReviewStore::default());

        let response = server
            .get(&format!("/api/reviews/freight-forwarder/{}", Uuid::new_v4()))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_review_with_scores() {
        let company = random_freight_forwarder();
        let mut r = review(company.id, Some(3.0));
        r.shipment_reference = Some("SHP-2025-0042".to_string());
        r.category_scores = vec![
            category_score(r.id, "pricing", "Pricing", 3),
            category_score(r.id, "service", "Service", 4),
        ];
        let (id, user_id) = (r.id, r.user_id);

        let store = InMemoryReviewStore {
            freight_forwarders: vec![company],
            reviews: vec![r],
            ..Default::default()
        };
        let server = server(store);

        let response = server.get(&format!("/api/reviews/{}", id)).await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"]["id"], id.to_string());
        assert_eq!(body["data"]["category_scores"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"]["category_scores"][1]["rating"], 4);
        assert_eq!(body["data"]["shipment_reference"], "SHP-2025-0042");
        assert_eq!(body["data"]["is_active"], true);
        assert_eq!(
            body["data"]["user_id"],
            user_id.map(|u| u.to_string()).unwrap()
        );
    }

    #[tokio::test]
    async fn test_get_review_not_found_and_bad_id() {
        let server = server(InMemoryReviewStore::default());

        let response = server.get(&format!("/api/reviews/{}", Uuid::new_v4())).await;
        response.assert_status(StatusCode::NOT_FOUND);

        let response = server.get("/api/reviews/not-a-uuid").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }
}
