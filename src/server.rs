//! HTTP surface
//!
//! One route: `GET /` renders the chat page, `POST /` accepts the form
//! field `message` and replies with `{"response": "<text>"}`. Degradations
//! are plain placeholder text inside the JSON; no structured error is ever
//! returned.

use std::sync::Arc;

use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::service::ChatService;

/// Inbound chat form; a missing `message` field counts as empty input
#[derive(Debug, Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    message: String,
}

/// Outbound reply envelope
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    response: String,
}

/// Serve the chat input page
async fn index_page() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../templates/index.html"))
}

/// Handle one chat message
async fn post_message(
    form: web::Form<ChatForm>,
    service: web::Data<Arc<ChatService>>,
) -> impl Responder {
    let response = service.handle_message(&form.message).await;
    web::Json(ChatResponse { response })
}

/// Register the chat routes on an actix app
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index_page))
        .route("/", web::post().to(post_message));
}

/// Run the HTTP server until shutdown
pub async fn run(host: &str, port: u16, service: Arc<ChatService>) -> Result<()> {
    info!("Starting server on {}:{}", host, port);

    let data = web::Data::new(service);

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(configure_routes)
    })
    .bind((host, port))
    .with_context(|| format!("Failed to bind {host}:{port}"))?
    .run()
    .await
    .context("Server terminated with an error")
}
