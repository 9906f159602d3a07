mod config;
mod database;
mod entities;
mod error;
mod handoff;
mod logging;
mod models;
mod normalize;
mod ports;
mod services;
mod spotify_rs;
#[cfg(test)]
mod test_utils;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::{Result, eyre::Context};

use crate::{
    config::Config,
    database::Database,
    logging::init_tracing,
    services::sync::PlaylistSyncService,
    spotify_rs::{
        auth::{SpotifyApiCredentials, request_client_credentials_token},
        client::SpotifyClient,
    },
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The config file to use
    #[arg(short, long, env = "PLAYLIST_CACHE_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `info` or `playlist_cache=debug`
    #[arg(long, default_value = "info", global = true, env = "LOG_LEVEL")]
    log_level: String,

    /// OTLP gRPC endpoint to export traces to
    #[arg(long, global = true, env = "OTLP_ENDPOINT")]
    otlp_endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Refresh the cache from every configured playlist
    Sync {
        /// Spotify application client id
        #[arg(long, env = "SPOTIFY_CLIENT_ID")]
        client_id: String,

        /// Spotify application client secret
        #[arg(long, env = "SPOTIFY_CLIENT_SECRET", hide_env_values = true)]
        client_secret: String,

        /// Cache database url, overrides `database_url` from the config file
        #[arg(long, env = "DB_CONNECTION_STRING", hide_env_values = true)]
        database_url: Option<String>,
    },
    /// Print the number of cached rows per table
    Status {
        /// Cache database url, overrides `database_url` from the config file
        #[arg(long, env = "DB_CONNECTION_STRING", hide_env_values = true)]
        database_url: Option<String>,
    },
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Create a default config file, if it doesn't exist
    CreateDefault,
    /// Print the path to the config file
    Path,
}

/// Explicit config file, else the default location, else built-in defaults
fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(path),
        None if Config::config_path().is_some_and(|p| p.exists()) => Config::load(),
        None => {
            tracing::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    };

    config.wrap_err("Failed to load playlist-cache config")
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let _telemetry = init_tracing(&args.log_level, args.otlp_endpoint.as_deref())?;

    match args.command {
        Commands::Sync {
            client_id,
            client_secret,
            database_url,
        } => {
            let config = load_config(args.config.as_ref())?;
            let database_url = config.database_url(database_url.as_deref())?;

            let credentials = SpotifyApiCredentials::new(client_id, client_secret);
            let token = request_client_credentials_token(&config.token_url, &credentials)
                .await
                .wrap_err("Failed to get spotify access token")?;

            let database = Database::connect(&database_url)
                .await
                .wrap_err("Failed to open cache database")?;

            let service = PlaylistSyncService::new(
                Arc::new(database),
                SpotifyClient::new(&config.api_base_url),
                token.access_token,
                config.playlists,
            );
            let report = service.run().await.wrap_err("Failed to update cache")?;

            println!(
                "Synced {} playlists ({} tracks), {} new rows",
                report.playlists,
                report.tracks,
                report.inserted.total()
            );
            println!("{}", report.inserted);
        }
        Commands::Status { database_url } => {
            let config = load_config(args.config.as_ref())?;
            let database_url = config.database_url(database_url.as_deref())?;
            let database = Database::connect(&database_url)
                .await
                .wrap_err("Failed to open cache database")?;

            let counts = database
                .table_counts()
                .await
                .wrap_err("Failed to count cached rows")?;
            println!("{counts}");
        }
        Commands::Config(config_commands) => match config_commands {
            ConfigCommands::CreateDefault => {
                let path = args.config.or_else(Config::config_path).ok_or_else(|| {
                    color_eyre::eyre::eyre!("No config directory on this platform")
                })?;
                if Config::create_default_at(&path)? {
                    tracing::info!("Default config created at {}", path.display());
                } else {
                    tracing::info!("Config already exists at {}", path.display());
                }
            }
            ConfigCommands::Path => match Config::config_path() {
                Some(path) => println!("{}", path.display()),
                None => println!("No default config path found"),
            },
        },
    }

    Ok(())
}
