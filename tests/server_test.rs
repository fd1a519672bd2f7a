use std::sync::Arc;

use actix_web::{test, web, App};
use anyhow::Result;
use async_trait::async_trait;
use go_travel_bot::db::Database;
use go_travel_bot::engine::{ChatEngine, ENGLISH_CORPUS};
use go_travel_bot::server::configure_routes;
use go_travel_bot::service::ChatService;
use go_travel_bot::weather::{ForecastProvider, OneCallResponse};
use tempfile::TempDir;

/// Provider stub that behaves like a failed fetch
struct NoForecast;

#[async_trait]
impl ForecastProvider for NoForecast {
    async fn fetch(&self, _latitude: f64, _longitude: f64) -> Result<Option<OneCallResponse>> {
        Ok(None)
    }
}

fn chat_service() -> (TempDir, Arc<ChatService>) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("test.db");
    let db = Database::new(&db_path.display().to_string(), 5).expect("Failed to create database");
    db.seed().expect("Failed to seed database");

    let mut engine = ChatEngine::new(0.65, "Which location would you like the weather forecast?")
        .expect("Failed to create engine");
    engine
        .train_from_corpus(ENGLISH_CORPUS)
        .expect("Failed to train from corpus");
    engine
        .train_from_database(&db)
        .expect("Failed to train from database");

    (
        temp_dir,
        Arc::new(ChatService::new(db, engine, Box::new(NoForecast))),
    )
}

#[actix_web::test]
async fn test_index_serves_chat_page() {
    let (_guard, service) = chat_service();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .configure(configure_routes),
    )
    .await;

    let request = test::TestRequest::get().uri("/").to_request();
    let response = test::call_service(&app, request).await;

    assert!(response.status().is_success());
    let content_type = response
        .headers()
        .get("content-type")
        .expect("content-type header")
        .to_str()
        .expect("ascii header");
    assert!(content_type.starts_with("text/html"));

    let body = test::read_body(response).await;
    let page = std::str::from_utf8(&body).expect("utf-8 page");
    assert!(page.contains("Go Travel Bot"));
}

#[actix_web::test]
async fn test_post_message_returns_json_reply() {
    let (_guard, service) = chat_service();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .configure(configure_routes),
    )
    .await;

    let request = test::TestRequest::post()
        .uri("/")
        .set_form(&[("message", "hello")])
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(
        body["response"],
        "Hi there! Ask me about the weather anywhere in your itinerary."
    );
}

#[actix_web::test]
async fn test_post_without_message_field_prompts_for_location() {
    let (_guard, service) = chat_service();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .configure(configure_routes),
    )
    .await;

    let request = test::TestRequest::post()
        .uri("/")
        .set_form(&[("unused", "x")])
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(
        body["response"],
        "Please enter a location for weather information."
    );
}
