//! The chat request pipeline
//!
//! `ChatService` owns the database handle, the trained conversational
//! engine, and the forecast provider, and turns one inbound message into one
//! reply string. All collaborators are injected at startup; nothing here
//! reaches for globals.

use std::time::Instant;

use tracing::error;

use crate::composer::{
    compose_location_report, join_reports, EMPTY_MESSAGE_PROMPT, NO_ACTIVITY_SUGGESTION,
};
use crate::db::Database;
use crate::engine::ChatEngine;
use crate::matcher;
use crate::metrics::MetricsCollector;
use crate::weather::ForecastProvider;

/// Chat request handler shared by all server workers
pub struct ChatService {
    db: Database,
    engine: ChatEngine,
    weather: Box<dyn ForecastProvider>,
    metrics: MetricsCollector,
}

impl ChatService {
    /// Create the service from its collaborators. The engine must already
    /// be trained.
    #[must_use]
    pub fn new(db: Database, engine: ChatEngine, weather: Box<dyn ForecastProvider>) -> Self {
        Self {
            db,
            engine,
            weather,
            metrics: MetricsCollector::default(),
        }
    }

    /// Handle one user message and produce the reply text.
    ///
    /// Control flow: lowercase the message, match stored location names by
    /// substring, and either compose a weather block per matched location or
    /// hand the message to the conversational engine. A location whose
    /// weather fetch fails is dropped from the reply without an error.
    pub async fn handle_message(&self, raw_message: &str) -> String {
        let start = Instant::now();

        if raw_message.trim().is_empty() {
            return EMPTY_MESSAGE_PROMPT.to_string();
        }

        let user_input = raw_message.to_lowercase();

        let all_locations = match self.db.all_locations() {
            Ok(locations) => locations,
            Err(e) => {
                error!("Failed to load locations: {:#}", e);
                Vec::new()
            }
        };

        let mentioned = matcher::mentioned_locations(&user_input, &all_locations);
        let matched = mentioned.len();

        let reply = if mentioned.is_empty() {
            let reply = self.engine.get_response(&user_input);
            self.metrics.record_fallback_response();
            reply
        } else {
            let mut reports = Vec::new();
            for location in mentioned {
                match self
                    .weather
                    .fetch(location.latitude, location.longitude)
                    .await
                {
                    Ok(Some(payload)) => {
                        let suggestion =
                            self.activity_suggestion(location.id, payload.current_main());
                        reports.push(compose_location_report(location, &payload, &suggestion));
                    }
                    // Non-200 responses are logged by the client; the location
                    // is silently dropped from the reply either way.
                    Ok(None) => {}
                    Err(e) => {
                        error!("Weather fetch failed for {}: {:#}", location.name, e);
                    }
                }
            }
            join_reports(&reports)
        };

        // Recorded once the reply is built so the duration covers the
        // weather fetches and engine lookup, not just the match step.
        self.metrics.record_chat_request(matched, start.elapsed());
        reply
    }

    /// Look up the recommendation for a location and current condition,
    /// falling back to the fixed placeholder
    fn activity_suggestion(&self, location_id: i64, weather_condition: &str) -> String {
        match self
            .db
            .get_activity_suggestion(location_id, &weather_condition.to_lowercase())
        {
            Ok(Some(activity)) => activity.recommendation,
            Ok(None) => NO_ACTIVITY_SUGGESTION.to_string(),
            Err(e) => {
                error!("Activity lookup failed: {:#}", e);
                NO_ACTIVITY_SUGGESTION.to_string()
            }
        }
    }
}
