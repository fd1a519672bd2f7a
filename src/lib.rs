//! Go Travel Bot - Weather-Aware Travel Chatbot
//!
//! A Rust library and web service for answering travel questions: it spots
//! location names in free-text messages, fetches current and 7-day weather,
//! and pairs the conditions with a curated activity suggestion. Anything
//! that mentions no known location falls through to a trainable best-match
//! conversational engine.
//!
//! # Features
//!
//! - Substring location detection against a seeded location table
//! - OpenWeather One Call client (current + daily, metric units)
//! - Weather-conditioned activity suggestions from SQLite
//! - Trainable conversational fallback with a bundled corpus
//! - actix-web surface returning `{"response": ...}` JSON

/// Response block composition and placeholder strings
pub mod composer;
/// Configuration management
pub mod config;
/// Database operations and connection pooling
pub mod db;
/// Conversational fallback engine
pub mod engine;
/// Logging setup and utilities
pub mod logging;
/// Location detection in messages
pub mod matcher;
/// Metrics collection
pub mod metrics;
/// Data models and structures
pub mod models;
/// Database schema definitions
pub mod schema;
/// Seed data for locations, activities, and training utterances
pub mod seed;
/// HTTP routes and server startup
pub mod server;
/// The chat request pipeline
pub mod service;
/// Weather provider client
pub mod weather;

// Re-export key components for easier access
pub use config::AppConfig;
pub use db::Database;
pub use engine::ChatEngine;
pub use service::ChatService;
pub use weather::{ForecastProvider, OpenWeatherClient};
