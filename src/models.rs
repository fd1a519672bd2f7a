//! Data models for locations, activities, and chatbot training data
//!
//! This module contains the row structs read out of the database and the
//! `New*` structs used to insert seed data.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A named place with fixed coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Database primary key
    pub id: i64,
    /// Unique display name, e.g. "Corfe Castle"
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

/// A weather-condition-specific activity recommendation tied to a location
#[derive(Debug, Clone)]
pub struct Activity {
    /// Database primary key
    pub id: i64,
    /// Foreign key to the owning location
    pub location_id: i64,
    /// Weather condition label, compared case-insensitively ("Rain", "Clear", ...)
    pub weather_condition: String,
    /// Short activity name
    pub activity: String,
    /// Recommendation text shown to the user
    pub recommendation: String,
}

/// A cached forecast payload
///
/// The table is kept so existing database files stay compatible; the request
/// path never touches it.
#[derive(Debug, Clone)]
pub struct WeatherCacheEntry {
    /// Database primary key
    pub id: i64,
    /// Location name the payload was fetched for
    pub location: String,
    /// Serialized forecast payload
    pub forecast_data: String,
    /// When the entry was stored
    pub timestamp: NaiveDateTime,
}

/// A scripted prompt/response pair used to train the conversational engine
#[derive(Debug, Clone)]
pub struct TrainingUtterance {
    /// Database primary key
    pub id: i64,
    /// Training prompt, unique at seed time
    pub input_text: String,
    /// Scripted response
    pub response_text: String,
}

/// Data for inserting a new location
#[derive(Debug, Clone)]
pub struct NewLocation {
    /// Unique display name
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

/// Data for inserting a new activity
#[derive(Debug, Clone)]
pub struct NewActivity {
    /// Foreign key to the owning location
    pub location_id: i64,
    /// Weather condition label
    pub weather_condition: String,
    /// Short activity name
    pub activity: String,
    /// Recommendation text
    pub recommendation: String,
}

/// Data for inserting a new training utterance
#[derive(Debug, Clone)]
pub struct NewTrainingUtterance {
    /// Training prompt
    pub input_text: String,
    /// Scripted response
    pub response_text: String,
}
