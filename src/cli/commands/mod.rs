//! CLI command definitions and dispatch.
//!
//! Each subcommand lives in its own submodule:
//! - `listen`: Run the display against a channel
//! - `query`: One-shot table lookups and catalog searches
//!
//! Settings come from the config file, then command-line flags and their
//! environment variables on top.

mod listen;
mod query;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};

use crate::catalog::{self, Aggregator};
use crate::config::{self, Config};
use crate::error::{Result, ResultExt};
use crate::lookup::LookupStore;
use crate::present::PresentationSink;
use crate::router::{Pipeline, Router};

pub use listen::cmd_listen;
pub use query::{cmd_lookup, cmd_resolve, cmd_search};

/// Vibe Display CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: OS config directory)
    #[arg(long, global = true, env = "VIBE_DISPLAY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub tables: TableArgs,

    #[command(flatten)]
    pub credentials: CredentialArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Lookup table overrides
#[derive(Args, Debug, Default)]
pub struct TableArgs {
    /// Song table file or URL
    #[arg(long, global = true, env = "VIBE_SONGS_TABLE")]
    pub songs: Option<String>,

    /// Vibe table file or URL
    #[arg(long, global = true, env = "VIBE_VIBES_TABLE")]
    pub vibes: Option<String>,
}

/// Catalog credential overrides
#[derive(Args, Debug, Default)]
pub struct CredentialArgs {
    #[arg(long, global = true, env = "SPOTIFY_CLIENT_ID", hide_env_values = true)]
    pub spotify_client_id: Option<String>,

    #[arg(long, global = true, env = "SPOTIFY_CLIENT_SECRET", hide_env_values = true)]
    pub spotify_client_secret: Option<String>,

    #[arg(long, global = true, env = "TIDAL_CLIENT_ID", hide_env_values = true)]
    pub tidal_client_id: Option<String>,

    #[arg(long, global = true, env = "TIDAL_CLIENT_SECRET", hide_env_values = true)]
    pub tidal_client_secret: Option<String>,

    /// RapidAPI key for Deezer
    #[arg(long, global = true, env = "RAPIDAPI_KEY", hide_env_values = true)]
    pub rapidapi_key: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Listen on the channel and show what the primary device is playing
    Listen {
        /// Channel name
        #[arg(long)]
        channel: Option<String>,
        /// Device whose music drives the display
        #[arg(long)]
        primary_device: Option<i64>,
        /// Read channel messages from a file instead of stdin
        #[arg(long)]
        replay: Option<PathBuf>,
        /// Drop results from music changes that have been superseded
        #[arg(long)]
        discard_superseded: bool,
        /// Show the scrolling banner
        #[arg(long)]
        banner: bool,
    },
    /// Resolve a music ID through the song table and the catalogs
    Resolve {
        music_id: i64,
    },
    /// Search the catalogs for a title and artist
    Search {
        title: String,
        artist: String,
    },
    /// Show the song and vibe rows for a music ID
    Lookup {
        music_id: i64,
    },
    /// Write a config file with the current settings
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Commands {
    /// `listen` with no flags, run when no command is given
    fn default_listen() -> Self {
        Self::Listen {
            channel: None,
            primary_device: None,
            replay: None,
            discard_superseded: false,
            banner: false,
        }
    }
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn settings(&self) -> Config {
        let mut config = match &self.config {
            Some(path) => config::load_from(path),
            None => config::load(),
        };
        self.apply_overrides(&mut config);
        config
    }

    fn apply_overrides(&self, config: &mut Config) {
        override_with(&mut config.tables.songs, &self.tables.songs);
        override_with(&mut config.tables.vibes, &self.tables.vibes);

        let creds = &mut config.credentials;
        let args = &self.credentials;
        override_opt(&mut creds.spotify_client_id, &args.spotify_client_id);
        override_opt(&mut creds.spotify_client_secret, &args.spotify_client_secret);
        override_opt(&mut creds.tidal_client_id, &args.tidal_client_id);
        override_opt(&mut creds.tidal_client_secret, &args.tidal_client_secret);
        override_opt(&mut creds.rapidapi_key, &args.rapidapi_key);

        if let Some(Commands::Listen {
            channel,
            primary_device,
            discard_superseded,
            banner,
            ..
        }) = &self.command
        {
            override_with(&mut config.channel.name, channel);
            if let Some(id) = primary_device {
                config.channel.primary_device_id = *id;
            }
            config.display.discard_superseded |= *discard_superseded;
            config.display.show_banner |= *banner;
        }
    }
}

fn override_with(slot: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        slot.clone_from(value);
    }
}

fn override_opt(slot: &mut Option<String>, value: &Option<String>) {
    if value.is_some() {
        slot.clone_from(value);
    }
}

/// Run the specified CLI command, `listen` if none was given.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.settings();
    let default_command = Commands::default_listen();
    let command = cli.command.as_ref().unwrap_or(&default_command);

    match command {
        Commands::InitConfig { force } => cmd_init_config(cli, &config, *force),
        Commands::Listen { replay, .. } => cmd_listen(&runtime()?, &config, replay.as_deref()),
        Commands::Resolve { music_id } => cmd_resolve(&runtime()?, &config, *music_id),
        Commands::Search { title, artist } => cmd_search(&runtime()?, &config, title, artist),
        Commands::Lookup { music_id } => cmd_lookup(&runtime()?, &config, *music_id),
    }
}

/// Single-threaded runtime. The router and every pipeline it spawns run
/// cooperatively on the thread that calls `block_on`.
fn runtime() -> std::io::Result<Runtime> {
    Builder::new_current_thread().enable_all().build()
}

/// Write the effective settings to the config file
fn cmd_init_config(cli: &Cli, config: &Config, force: bool) -> anyhow::Result<()> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => config::config_path().ok_or(config::ConfigError::NoConfigDir)?,
    };

    if path.exists() && !force {
        eprintln!("Config already exists at {:?}", path);
        eprintln!("Use --force to overwrite it.");
        std::process::exit(1);
    }

    config::save_to(config, &path).with_context("writing config")?;
    println!("✓ Wrote config to {:?}", path);
    Ok(())
}

// ============================================================================
// Wiring
// ============================================================================

/// Lookup store over the configured tables
pub fn build_lookup(config: &Config, http_client: &reqwest::Client) -> LookupStore {
    let lookup =
        LookupStore::from_locations(&config.tables.songs, &config.tables.vibes, http_client);
    tracing::info!(
        target: "lookup",
        "Song table: {}, vibe table: {}",
        lookup.song_location(),
        lookup.vibe_location()
    );
    lookup
}

/// Catalog clients with the configured credentials
pub fn build_aggregator(config: &Config, http_client: reqwest::Client) -> Aggregator {
    let creds = &config.credentials;
    let spotify = creds.spotify();
    let tidal = creds.tidal();

    if spotify.is_none() {
        tracing::warn!(target: "catalog", "Spotify credentials not configured");
    }
    if tidal.is_none() {
        tracing::warn!(target: "catalog", "Tidal credentials not configured");
    }
    if creds.rapidapi_key.is_none() {
        tracing::warn!(target: "catalog", "RapidAPI key not configured, Deezer links disabled");
    }

    Aggregator::with_credentials(http_client, spotify, tidal, creds.rapidapi_key.clone())
}

/// Router wired to the configured tables, catalogs and `sink`
pub fn build_router(config: &Config, sink: Arc<dyn PresentationSink>) -> Result<Router> {
    let http_client = catalog::http_client().with_context("building HTTP client")?;
    let lookup = build_lookup(config, &http_client);
    let aggregator = build_aggregator(config, http_client);

    let pipeline = Pipeline::new(lookup, aggregator, sink, config.display.discard_superseded);
    Ok(Router::new(pipeline, config.channel.primary_device_id))
}
