use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use go_travel_bot::config::AppConfig;
use go_travel_bot::db::Database;
use go_travel_bot::engine::{ChatEngine, ENGLISH_CORPUS};
use go_travel_bot::logging::{init_logging, OperationTimer};
use go_travel_bot::server;
use go_travel_bot::service::ChatService;
use go_travel_bot::weather::{read_api_key, OpenWeatherClient};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the chatbot web server
    Serve {
        /// Host address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to the SQLite database file
        #[arg(short, long)]
        database: Option<String>,

        /// Path to the file holding the OpenWeather API key
        #[arg(short, long)]
        api_key_file: Option<String>,
    },
    /// Create the schema and insert seed data, then exit
    Seed {
        /// Path to the SQLite database file
        #[arg(short, long)]
        database: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let mut config = AppConfig::load()?;

    // Initialize logging
    init_logging(
        Some(&config.get_log_level()),
        config.logging.format == "json",
    )?;

    info!("Starting go-travel-bot");

    // Parse command line arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            database,
            api_key_file,
        } => {
            // Command line arguments override the configuration
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(database) = database {
                config.database.path = database;
            }
            if let Some(api_key_file) = api_key_file {
                config.weather.api_key_file = api_key_file;
            }

            serve(&config).await
        }
        Commands::Seed { database } => {
            if let Some(database) = database {
                config.database.path = database;
            }

            let db = Database::new(&config.get_database_path(), config.database.max_connections)?;
            db.seed()?;
            info!("Seed complete");
            Ok(())
        }
    }
}

/// Wire up the service and run the web server
async fn serve(config: &AppConfig) -> Result<()> {
    // Open the database and make sure schema and seed data are in place
    let db = Database::new(&config.get_database_path(), config.database.max_connections)?;
    db.seed()?;

    // Train the conversational engine once, before accepting requests:
    // bundled corpus first, then the scripted utterances from the database
    let timer = OperationTimer::new("engine_training");
    let mut engine = ChatEngine::new(
        config.chatbot.similarity_threshold,
        &config.chatbot.default_response,
    )?;
    engine.train_from_corpus(ENGLISH_CORPUS)?;
    engine.train_from_database(&db)?;
    timer.finish();
    info!("Conversational engine ready ({} pairs)", engine.trained_pairs());

    // Weather client; a missing key file degrades to no weather data
    let api_key = read_api_key(Path::new(&config.weather.api_key_file));
    let weather = OpenWeatherClient::new(api_key).with_base_url(&config.weather.base_url);

    let service = Arc::new(ChatService::new(db, engine, Box::new(weather)));

    server::run(&config.server.host, config.server.port, service).await
}
