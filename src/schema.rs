//! Database schema definitions
//!
//! This module provides constants for table and column names used with
//! rusqlite queries, so the query strings in `db` stay typo-proof.

/// Locations table schema
pub mod locations {
    /// Table name
    pub const TABLE: &str = "locations";
    /// Primary key column
    pub const ID: &str = "id";
    /// Unique location name column
    pub const NAME: &str = "name";
    /// Latitude column
    pub const LATITUDE: &str = "latitude";
    /// Longitude column
    pub const LONGITUDE: &str = "longitude";
}

/// Activities table schema
pub mod activities {
    /// Table name
    pub const TABLE: &str = "activities";
    /// Primary key column
    pub const ID: &str = "id";
    /// Foreign key to locations table
    pub const LOCATION_ID: &str = "location_id";
    /// Weather condition label column (compared case-insensitively)
    pub const WEATHER_CONDITION: &str = "weather_condition";
    /// Activity name column
    pub const ACTIVITY: &str = "activity";
    /// Recommendation text column
    pub const RECOMMENDATION: &str = "recommendation";
}

/// Weather cache table schema
///
/// Kept so existing database files keep their layout; the request path
/// never reads or writes it.
pub mod weather_cache {
    /// Table name
    pub const TABLE: &str = "weather_cache";
    /// Primary key column
    pub const ID: &str = "id";
    /// Location name column
    pub const LOCATION: &str = "location";
    /// Serialized forecast payload column
    pub const FORECAST_DATA: &str = "forecast_data";
    /// Entry timestamp column
    pub const TIMESTAMP: &str = "timestamp";
}

/// Chatbot training data table schema
pub mod chatbot_training_data {
    /// Table name
    pub const TABLE: &str = "chatbot_training_data";
    /// Primary key column
    pub const ID: &str = "id";
    /// Training prompt column (unique at seed time)
    pub const INPUT_TEXT: &str = "input_text";
    /// Scripted response column
    pub const RESPONSE_TEXT: &str = "response_text";
}
