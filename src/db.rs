use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::info;

use crate::models::{
    Activity, Location, NewActivity, NewLocation, NewTrainingUtterance, TrainingUtterance,
    WeatherCacheEntry,
};
use crate::schema::{activities, chatbot_training_data, locations, weather_cache};
use crate::seed;

// Type aliases for the database connection pool
pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Database manager for handling connections and operations
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Create a new database connection pool and run migrations
    pub fn new(database_path: &str, max_connections: u32) -> Result<Self> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = Path::new(database_path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Set up connection manager and pool
        let manager = SqliteConnectionManager::file(database_path);
        let pool = Pool::builder()
            .max_size(max_connections)
            .build(manager)
            .context("Failed to create database connection pool")?;

        // Run migrations
        let conn = pool.get()?;
        Self::run_migrations(&conn)?;

        Ok(Self { pool })
    }

    /// Run database migrations
    fn run_migrations(conn: &Connection) -> Result<()> {
        // Create tables if they don't exist
        conn.execute_batch(include_str!(
            "../migrations/2025-06-01-000000_create_tables/up.sql"
        ))
        .context("Failed to run initial migration")?;

        Ok(())
    }

    /// Get a connection from the pool
    pub fn get_connection(&self) -> Result<DbConnection> {
        self.pool.get().context("Failed to get database connection")
    }

    /// Seed the database with the bundled locations, activities, and
    /// training utterances. Rows that already exist are left untouched, so
    /// running this on every startup is safe.
    pub fn seed(&self) -> Result<()> {
        let conn = self.get_connection()?;

        for new_location in seed::locations() {
            let location = self.ensure_location(&conn, &new_location)?;
            for new_activity in seed::activities_for(&location.name, location.id) {
                self.ensure_activity(&conn, &new_activity)?;
            }
        }

        for utterance in seed::training_utterances() {
            self.ensure_training_utterance(&conn, &utterance)?;
        }

        info!("Database seeding completed");
        Ok(())
    }

    /// Ensure a location exists, returning the stored row
    fn ensure_location(&self, conn: &Connection, new_location: &NewLocation) -> Result<Location> {
        let existing: Option<Location> = conn
            .query_row(
                &format!(
                    "SELECT * FROM {} WHERE {} = ?",
                    locations::TABLE,
                    locations::NAME
                ),
                params![new_location.name],
                Self::map_location,
            )
            .optional()?;

        if let Some(location) = existing {
            return Ok(location);
        }

        conn.execute(
            &format!(
                "INSERT INTO {} ({}, {}, {}) VALUES (?, ?, ?)",
                locations::TABLE,
                locations::NAME,
                locations::LATITUDE,
                locations::LONGITUDE
            ),
            params![
                new_location.name,
                new_location.latitude,
                new_location.longitude
            ],
        )?;

        Ok(Location {
            id: conn.last_insert_rowid(),
            name: new_location.name.clone(),
            latitude: new_location.latitude,
            longitude: new_location.longitude,
        })
    }

    /// Ensure an activity exists for its location
    fn ensure_activity(&self, conn: &Connection, new_activity: &NewActivity) -> Result<()> {
        let exists: bool = conn.query_row(
            &format!(
                "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = ? AND {} = ?)",
                activities::TABLE,
                activities::LOCATION_ID,
                activities::ACTIVITY
            ),
            params![new_activity.location_id, new_activity.activity],
            |row| row.get(0),
        )?;

        if !exists {
            conn.execute(
                &format!(
                    "INSERT INTO {} ({}, {}, {}, {}) VALUES (?, ?, ?, ?)",
                    activities::TABLE,
                    activities::LOCATION_ID,
                    activities::WEATHER_CONDITION,
                    activities::ACTIVITY,
                    activities::RECOMMENDATION
                ),
                params![
                    new_activity.location_id,
                    new_activity.weather_condition,
                    new_activity.activity,
                    new_activity.recommendation
                ],
            )?;
        }

        Ok(())
    }

    /// Ensure a training utterance exists, keyed by its input text
    fn ensure_training_utterance(
        &self,
        conn: &Connection,
        utterance: &NewTrainingUtterance,
    ) -> Result<()> {
        let exists: bool = conn.query_row(
            &format!(
                "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = ?)",
                chatbot_training_data::TABLE,
                chatbot_training_data::INPUT_TEXT
            ),
            params![utterance.input_text],
            |row| row.get(0),
        )?;

        if !exists {
            conn.execute(
                &format!(
                    "INSERT INTO {} ({}, {}) VALUES (?, ?)",
                    chatbot_training_data::TABLE,
                    chatbot_training_data::INPUT_TEXT,
                    chatbot_training_data::RESPONSE_TEXT
                ),
                params![utterance.input_text, utterance.response_text],
            )?;
        }

        Ok(())
    }

    /// Get all stored locations in insertion order
    pub fn all_locations(&self) -> Result<Vec<Location>> {
        let conn = self.get_connection()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT * FROM {} ORDER BY {} ASC",
            locations::TABLE,
            locations::ID
        ))?;

        let location_iter = stmt.query_map(params![], Self::map_location)?;

        let mut results = Vec::new();
        for location in location_iter {
            results.push(location?);
        }

        Ok(results)
    }

    /// Get a location by its unique name
    pub fn get_location_by_name(&self, name: &str) -> Result<Option<Location>> {
        let conn = self.get_connection()?;

        let location = conn
            .query_row(
                &format!(
                    "SELECT * FROM {} WHERE {} = ?",
                    locations::TABLE,
                    locations::NAME
                ),
                params![name],
                Self::map_location,
            )
            .optional()?;

        Ok(location)
    }

    /// Get the first activity for a location matching the weather condition,
    /// compared case-insensitively. Returns the full row; callers usually
    /// only want the recommendation text.
    pub fn get_activity_suggestion(
        &self,
        location_id: i64,
        weather_condition: &str,
    ) -> Result<Option<Activity>> {
        let conn = self.get_connection()?;

        let activity = conn
            .query_row(
                &format!(
                    "SELECT * FROM {} WHERE {} = ? AND LOWER({}) = LOWER(?) LIMIT 1",
                    activities::TABLE,
                    activities::LOCATION_ID,
                    activities::WEATHER_CONDITION
                ),
                params![location_id, weather_condition],
                Self::map_activity,
            )
            .optional()?;

        Ok(activity)
    }

    /// Get all scripted training utterances in insertion order
    pub fn all_training_utterances(&self) -> Result<Vec<TrainingUtterance>> {
        let conn = self.get_connection()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT * FROM {} ORDER BY {} ASC",
            chatbot_training_data::TABLE,
            chatbot_training_data::ID
        ))?;

        let utterance_iter = stmt.query_map(params![], Self::map_training_utterance)?;

        let mut results = Vec::new();
        for utterance in utterance_iter {
            results.push(utterance?);
        }

        Ok(results)
    }

    /// Store a serialized forecast payload for a location.
    ///
    /// Compatibility accessor for the `weather_cache` table; the request
    /// path does not use it.
    pub fn cache_forecast(&self, location: &str, forecast_data: &str) -> Result<()> {
        let conn = self.get_connection()?;

        conn.execute(
            &format!(
                "INSERT INTO {} ({}, {}, {}) VALUES (?, ?, ?)",
                weather_cache::TABLE,
                weather_cache::LOCATION,
                weather_cache::FORECAST_DATA,
                weather_cache::TIMESTAMP
            ),
            params![location, forecast_data, Utc::now().naive_utc()],
        )?;

        Ok(())
    }

    /// Get the most recent cached forecast for a location, if any
    pub fn latest_cached_forecast(&self, location: &str) -> Result<Option<WeatherCacheEntry>> {
        let conn = self.get_connection()?;

        let entry = conn
            .query_row(
                &format!(
                    "SELECT * FROM {} WHERE {} = ? ORDER BY {} DESC LIMIT 1",
                    weather_cache::TABLE,
                    weather_cache::LOCATION,
                    weather_cache::ID
                ),
                params![location],
                Self::map_weather_cache_entry,
            )
            .optional()?;

        Ok(entry)
    }

    /// Map a database row to a Location
    fn map_location(row: &Row) -> rusqlite::Result<Location> {
        Ok(Location {
            id: row.get(locations::ID)?,
            name: row.get(locations::NAME)?,
            latitude: row.get(locations::LATITUDE)?,
            longitude: row.get(locations::LONGITUDE)?,
        })
    }

    /// Map a database row to an Activity
    fn map_activity(row: &Row) -> rusqlite::Result<Activity> {
        Ok(Activity {
            id: row.get(activities::ID)?,
            location_id: row.get(activities::LOCATION_ID)?,
            weather_condition: row.get(activities::WEATHER_CONDITION)?,
            activity: row.get(activities::ACTIVITY)?,
            recommendation: row.get(activities::RECOMMENDATION)?,
        })
    }

    /// Map a database row to a TrainingUtterance
    fn map_training_utterance(row: &Row) -> rusqlite::Result<TrainingUtterance> {
        Ok(TrainingUtterance {
            id: row.get(chatbot_training_data::ID)?,
            input_text: row.get(chatbot_training_data::INPUT_TEXT)?,
            response_text: row.get(chatbot_training_data::RESPONSE_TEXT)?,
        })
    }

    /// Map a database row to a WeatherCacheEntry
    fn map_weather_cache_entry(row: &Row) -> rusqlite::Result<WeatherCacheEntry> {
        Ok(WeatherCacheEntry {
            id: row.get(weather_cache::ID)?,
            location: row.get(weather_cache::LOCATION)?,
            forecast_data: row.get(weather_cache::FORECAST_DATA)?,
            timestamp: row.get(weather_cache::TIMESTAMP)?,
        })
    }
}
