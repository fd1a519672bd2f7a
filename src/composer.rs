//! Response composition
//!
//! Builds the per-location reply block from current conditions, the 7-day
//! outlook, and the activity suggestion, and joins blocks for multiple
//! matched locations. Every degradation here is a fixed placeholder string;
//! no error ever reaches the user.

use crate::models::Location;
use crate::weather::OneCallResponse;

/// Emitted when the payload carries no daily series
pub const FORECAST_UNAVAILABLE: &str = "Couldn't get the forecast data.";

/// Emitted when no activity row matches the current condition
pub const NO_ACTIVITY_SUGGESTION: &str =
    "No activity suggestion available for this weather condition.";

/// Emitted for empty or whitespace-only input
pub const EMPTY_MESSAGE_PROMPT: &str = "Please enter a location for weather information.";

/// Format the 7-day outlook: daily entries 1 through 7 (skipping today),
/// one line per day with the primary category and the minimum temperature.
///
/// A payload with no daily series yields [`FORECAST_UNAVAILABLE`]. A series
/// shorter than 8 entries silently produces fewer lines.
#[must_use]
pub fn format_seven_day_forecast(payload: &OneCallResponse) -> String {
    let Some(daily) = payload.daily.as_ref() else {
        return FORECAST_UNAVAILABLE.to_string();
    };

    let mut forecast_message = String::new();
    for day in daily.iter().skip(1).take(7) {
        let main_weather = day
            .weather
            .first()
            .map_or("Unknown", |condition| condition.main.as_str());
        forecast_message.push_str(&format!(
            "{}. Temperature: {}°C\n",
            main_weather, day.temp.min
        ));
    }

    forecast_message
}

/// Build the four-part reply block for one location
#[must_use]
pub fn compose_location_report(
    location: &Location,
    payload: &OneCallResponse,
    activity_suggestion: &str,
) -> String {
    let current_weather_response = format!(
        "The current weather in {} is {} with a temperature of {}°C.",
        location.name,
        payload.current_main(),
        payload.current.temp
    );

    let forecast_message = format_seven_day_forecast(payload);

    format!(
        "{current_weather_response}\n\n\
         7-day Forecast:\n\
         {forecast_message}\n\n\
         Activity Suggestion:\n\
         {activity_suggestion}"
    )
}

/// Join the per-location blocks into the final reply
#[must_use]
pub fn join_reports(reports: &[String]) -> String {
    reports.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::{CurrentConditions, DailyForecast, DailyTemperature, WeatherCondition};

    fn payload_with_daily(days: usize) -> OneCallResponse {
        let daily = (0..days)
            .map(|i| DailyForecast {
                temp: DailyTemperature { min: i as f64 },
                weather: vec![WeatherCondition {
                    main: "Clouds".to_string(),
                }],
            })
            .collect();

        OneCallResponse {
            current: CurrentConditions {
                temp: 12.0,
                weather: vec![WeatherCondition {
                    main: "Rain".to_string(),
                }],
            },
            daily: Some(daily),
        }
    }

    #[test]
    fn test_forecast_emits_seven_lines_skipping_today() {
        let payload = payload_with_daily(8);
        let forecast = format_seven_day_forecast(&payload);

        let lines: Vec<_> = forecast.lines().collect();
        assert_eq!(lines.len(), 7);
        // Today (index 0, min 0) is skipped; the window starts at index 1
        assert_eq!(lines[0], "Clouds. Temperature: 1°C");
        assert_eq!(lines[6], "Clouds. Temperature: 7°C");
    }

    #[test]
    fn test_forecast_missing_daily_yields_placeholder() {
        let payload = OneCallResponse {
            current: CurrentConditions {
                temp: 5.0,
                weather: vec![],
            },
            daily: None,
        };
        assert_eq!(format_seven_day_forecast(&payload), FORECAST_UNAVAILABLE);
    }

    #[test]
    fn test_forecast_short_series_truncates_silently() {
        let payload = payload_with_daily(4);
        let forecast = format_seven_day_forecast(&payload);
        assert_eq!(forecast.lines().count(), 3);
    }

    #[test]
    fn test_location_report_layout() {
        let location = Location {
            id: 1,
            name: "Oxford".to_string(),
            latitude: 51.752,
            longitude: -1.2577,
        };
        let report = compose_location_report(&location, &payload_with_daily(8), "Go punting.");

        assert!(report
            .starts_with("The current weather in Oxford is Rain with a temperature of 12°C."));
        assert!(report.contains("7-day Forecast:\n"));
        assert!(report.ends_with("Activity Suggestion:\nGo punting."));
    }

    #[test]
    fn test_reports_joined_with_single_space() {
        let reports = vec!["first".to_string(), "second".to_string()];
        assert_eq!(join_reports(&reports), "first second");
    }
}
