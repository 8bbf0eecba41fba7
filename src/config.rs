use crate::catalog::{HttpSettings, DEFAULT_API_BASE_URL};
use crate::grid::DisplayDefaults;
use clap::Parser;
use config::{
    Config as ConfigCrate, ConfigError as ConfigCrateError, Environment, File, Map, Source, Value,
};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

// Defaults used when neither the file, the environment nor the command line set a value.
const DEFAULT_PRICE: u32 = 500;
const DEFAULT_CURRENCY_SYMBOL: &str = "৳";
const DEFAULT_DESCRIPTION_MAX_LEN: usize = 100;
const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=Plant+Image";
const DEFAULT_CARD_ACTIVATION_DELAY_MS: u64 = 150;
const DEFAULT_ADDED_FEEDBACK_MS: u64 = 1000;
const DEFAULT_DISCARD_STALE: bool = false;
const ENV_PREFIX: &str = "GREEN_EARTH";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigCrateError),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Green Earth tree shop for the terminal", long_about = None)]
pub struct CliArgs {
    /// Path to a custom configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Base URL of the plant catalog API
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Where to write the log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Give up on catalog requests after this many seconds
    #[arg(long)]
    pub request_timeout_secs: Option<u64>,

    /// Drop catalog replies that were overtaken by a newer request
    #[arg(long)]
    pub discard_stale_responses: Option<bool>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub debug_config: bool,
}

// Optional fields allow for layered config (defaults -> file -> env -> args).
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    api_base_url: Option<String>,
    default_price: Option<u32>,
    currency_symbol: Option<String>,
    description_max_len: Option<usize>,
    placeholder_image: Option<String>,
    card_activation_delay_ms: Option<u64>,
    added_feedback_ms: Option<u64>,
    request_timeout_secs: Option<u64>,
    discard_stale_responses: Option<bool>,
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub default_price: u32,
    pub currency_symbol: String,
    pub description_max_len: usize,
    pub placeholder_image: String,
    pub card_activation_delay_ms: u64,
    pub added_feedback_ms: u64,
    pub request_timeout_secs: Option<u64>,
    pub discard_stale_responses: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            default_price: DEFAULT_PRICE,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            description_max_len: DEFAULT_DESCRIPTION_MAX_LEN,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            card_activation_delay_ms: DEFAULT_CARD_ACTIVATION_DELAY_MS,
            added_feedback_ms: DEFAULT_ADDED_FEEDBACK_MS,
            request_timeout_secs: None,
            discard_stale_responses: DEFAULT_DISCARD_STALE,
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn display_defaults(&self) -> DisplayDefaults {
        DisplayDefaults {
            default_price: self.default_price,
            description_max_len: self.description_max_len,
            placeholder_image: self.placeholder_image.clone(),
        }
    }

    pub fn http_settings(&self) -> HttpSettings {
        HttpSettings {
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            use_system_proxy: true,
        }
    }

    pub fn card_activation_delay(&self) -> Duration {
        Duration::from_millis(self.card_activation_delay_ms)
    }

    pub fn added_feedback(&self) -> Duration {
        Duration::from_millis(self.added_feedback_ms)
    }

    pub fn format_price(&self, amount: u64) -> String {
        format!("{}{}", self.currency_symbol, amount)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "green-earth")
}

pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn default_log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().join("green-earth.log"))
}

/// Loads configuration from the file, `GREEN_EARTH_*` environment variables
/// and the command line, in increasing priority.
pub fn load_config(args: &CliArgs) -> Result<AppConfig, ConfigError> {
    let env_source = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true);
    // An unreadable environment counts as no overrides.
    let env_map: Map<String, Value> = env_source.collect().unwrap_or_else(|_| Map::new());

    build_config(args, Some(env_map))
}

/// Separate from [`load_config`] so tests can supply their own overrides.
pub fn build_config(
    args: &CliArgs,
    override_source: Option<Map<String, Value>>,
) -> Result<AppConfig, ConfigError> {
    let config_file_path = args.config.clone().or_else(default_config_path);

    let mut config_builder = ConfigCrate::builder();

    if let Some(ref path) = config_file_path {
        config_builder = config_builder.add_source(File::from(path.clone()).required(false));
    }

    // Overrides beat the file.
    if let Some(overrides) = override_source {
        for (key, value) in overrides {
            config_builder = config_builder.set_override(&key, value)?;
        }
    }

    let loaded: FileConfig = config_builder.build()?.try_deserialize()?;

    let config = AppConfig {
        api_base_url: args
            .api_base_url
            .clone()
            .or(loaded.api_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        default_price: loaded.default_price.unwrap_or(DEFAULT_PRICE),
        currency_symbol: loaded
            .currency_symbol
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string()),
        description_max_len: loaded
            .description_max_len
            .unwrap_or(DEFAULT_DESCRIPTION_MAX_LEN),
        placeholder_image: loaded
            .placeholder_image
            .unwrap_or_else(|| DEFAULT_PLACEHOLDER_IMAGE.to_string()),
        card_activation_delay_ms: loaded
            .card_activation_delay_ms
            .unwrap_or(DEFAULT_CARD_ACTIVATION_DELAY_MS),
        added_feedback_ms: loaded
            .added_feedback_ms
            .unwrap_or(DEFAULT_ADDED_FEEDBACK_MS),
        request_timeout_secs: args.request_timeout_secs.or(loaded.request_timeout_secs),
        discard_stale_responses: args
            .discard_stale_responses
            .or(loaded.discard_stale_responses)
            .unwrap_or(DEFAULT_DISCARD_STALE),
        log_file: args
            .log_file
            .clone()
            .or(loaded.log_file)
            .or_else(default_log_path),
    };

    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let url = config.api_base_url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::ValidationError(format!(
            "api_base_url must be an http(s) URL, got {:?}",
            config.api_base_url
        )));
    }
    if config.description_max_len == 0 {
        return Err(ConfigError::ValidationError(
            "description_max_len must be at least 1".to_string(),
        ));
    }
    if config.request_timeout_secs == Some(0) {
        return Err(ConfigError::ValidationError(
            "request_timeout_secs must be at least 1 when set".to_string(),
        ));
    }
    Ok(())
}
