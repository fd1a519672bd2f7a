use std::time::Duration;

use metrics::{counter, histogram};

/// Metric names for the chat request path
#[derive(Debug, Clone)]
pub struct MetricsCollector {
    // Chat metrics
    pub chat_requests_total: &'static str,
    pub chat_request_duration: &'static str,
    pub fallback_responses_total: &'static str,

    // Weather metrics
    pub weather_fetches_total: &'static str,
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self {
            chat_requests_total: "go_travel_chat_requests_total",
            chat_request_duration: "go_travel_chat_request_duration_seconds",
            fallback_responses_total: "go_travel_fallback_responses_total",

            weather_fetches_total: "go_travel_weather_fetches_total",
        }
    }
}

impl MetricsCollector {
    /// Record one handled chat request and how many locations it matched
    pub fn record_chat_request(&self, matched_locations: usize, duration: Duration) {
        let outcome = if matched_locations == 0 {
            "fallback"
        } else {
            "weather"
        };

        counter!(self.chat_requests_total, "outcome" => outcome).increment(1);
        histogram!(self.chat_request_duration).record(duration.as_secs_f64());
    }

    /// Record a reply produced by the conversational engine
    pub fn record_fallback_response(&self) {
        counter!(self.fallback_responses_total).increment(1);
    }

    /// Record the outcome of one weather fetch
    pub fn record_weather_fetch(&self, success: bool) {
        let status = if success { "success" } else { "error" };
        counter!(self.weather_fetches_total, "status" => status).increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_names() {
        let collector = MetricsCollector::default();
        assert_eq!(collector.chat_requests_total, "go_travel_chat_requests_total");
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        // Without an installed recorder the macros drop the values silently
        let collector = MetricsCollector::default();
        collector.record_chat_request(1, Duration::from_millis(5));
        collector.record_fallback_response();
        collector.record_weather_fetch(false);
    }
}
