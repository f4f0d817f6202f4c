//! Configuration Loader - File Loading and Validation
//!
//! Resolves where configuration comes from (CLI argument, environment
//! variable, working directory, or the embedded default), parses the
//! TOML, and validates it with clear error messages.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::AppConfig;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "CATEGORY_SCANNER_CONFIG";

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Default configuration compiled into the binary.
pub const EMBEDDED_CONFIG: &str = include_str!("../../config.toml");

/// Where the configuration is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
  /// A TOML file on disk.
  File(PathBuf),
  /// The compiled-in default.
  Embedded,
}

impl std::fmt::Display for ConfigSource {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::File(path) => write!(f, "{}", path.display()),
      Self::Embedded => write!(f, "<embedded>"),
    }
  }
}

/// Pick the configuration source.
///
/// Precedence: explicit CLI path, then `CATEGORY_SCANNER_CONFIG`, then
/// `config.toml` in the working directory if it exists, then the
/// embedded default. Explicit paths are used even if missing, so a typo
/// surfaces as a read error instead of silently falling back.
pub fn resolve_source(cli_path: Option<String>, env_path: Option<String>) -> ConfigSource {
  if let Some(path) = cli_path.or(env_path).filter(|p| !p.trim().is_empty()) {
    return ConfigSource::File(PathBuf::from(path));
  }

  let local = Path::new(DEFAULT_CONFIG_FILE);
  if local.is_file() {
    ConfigSource::File(local.to_path_buf())
  } else {
    ConfigSource::Embedded
  }
}

/// Load and validate configuration from a source.
pub fn load(source: &ConfigSource) -> Result<AppConfig> {
  match source {
    ConfigSource::File(path) => load_config(path),
    ConfigSource::Embedded => parse_config(EMBEDDED_CONFIG)
      .context("Embedded default configuration is invalid"),
  }
}

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
  let path = path.as_ref();

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  parse_config(&content).with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig = toml::from_str(content).context("Failed to parse TOML")?;

  validate_config(&config)?;

  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Non-empty endpoint URLs
/// - A credential variable name
/// - Page size within the provider's bounds
/// - Non-empty, unique allow-list ids
fn validate_config(config: &AppConfig) -> Result<()> {
  // API validation
  anyhow::ensure!(
    !config.api.base_url.trim().is_empty(),
    "API base_url must not be empty"
  );
  anyhow::ensure!(
    !config.api.api_key_env.trim().is_empty(),
    "api_key_env must name an environment variable"
  );
  anyhow::ensure!(
    (1..=1000).contains(&config.api.member_limit),
    "member_limit must be in [1, 1000], got {}",
    config.api.member_limit
  );
  anyhow::ensure!(
    config.api.timeout_seconds > 0,
    "API timeout_seconds must be positive"
  );
  anyhow::ensure!(
    !config.api.convert.trim().is_empty(),
    "convert currency must not be empty"
  );

  // Venue validation
  for (name, url) in [
    ("spot_url", &config.venue.spot_url),
    ("usd_margined_url", &config.venue.usd_margined_url),
    ("coin_margined_url", &config.venue.coin_margined_url),
  ] {
    anyhow::ensure!(!url.trim().is_empty(), "Venue {name} must not be empty");
  }
  anyhow::ensure!(
    config.venue.timeout_seconds > 0,
    "Venue timeout_seconds must be positive"
  );

  // Allow-list validation
  let mut seen = HashSet::new();
  for (i, category) in config.categories.iter().enumerate() {
    anyhow::ensure!(
      !category.id.trim().is_empty(),
      "Category {} ({}) has empty id",
      i,
      category.label
    );
    anyhow::ensure!(
      seen.insert(category.id.as_str()),
      "Category id {} is listed more than once",
      category.id
    );
  }

  Ok(())
}
