//! Category Scanner — Entry Point
//!
//! Prints the allow-listed CoinMarketCap categories, largest market cap
//! first, each with the constituents that are tradable on Binance.
//!
//! Wiring sequence:
//! 1. Resolve and load config (CLI arg, CATEGORY_SCANNER_CONFIG, ./config.toml, embedded)
//! 2. Init tracing (stderr; pretty or JSON)
//! 3. Load the API key from env (fails before any network call)
//! 4. Create CoinMarketCapClient (CategorySource port)
//! 5. Create BinanceExchangeInfo (InstrumentSource port)
//! 6. Run CategoryScanner and print the report to stdout
//!
//! Exit codes: 0 success, 1 configuration or fatal fetch error,
//! 2 report printed but some categories failed.

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use category_scanner::adapters::binance::BinanceExchangeInfo;
use category_scanner::adapters::coinmarketcap::{ApiKey, CoinMarketCapClient};
use category_scanner::config::loader::{self, CONFIG_ENV};
use category_scanner::config::{AppSection, LogFormat};
use category_scanner::domain::category::CategoryFilter;
use category_scanner::domain::report::ScanReport;
use category_scanner::usecases::{CategoryScanner, VenueCollector};

/// Exit code when the report is incomplete.
const EXIT_PARTIAL: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
  match run().await {
    Ok(code) => code,
    Err(e) => {
      eprintln!("Error: {e:#}");
      ExitCode::FAILURE
    }
  }
}

async fn run() -> Result<ExitCode> {
  // ── 1. Load configuration ───────────────────────────────
  let source = loader::resolve_source(std::env::args().nth(1), std::env::var(CONFIG_ENV).ok());
  let config = loader::load(&source).context("Failed to load configuration")?;

  // ── 2. Initialize logging (stdout is reserved for the report) ──
  init_tracing(&config.app);

  info!(
    name = %config.app.name,
    version = env!("CARGO_PKG_VERSION"),
    config = %source,
    "Starting category scanner"
  );
  info!(
    categories = config.categories.len(),
    member_limit = config.api.member_limit,
    on_member_error = ?config.scan.on_member_error,
    "Configuration loaded successfully"
  );
  let allow_list = config.allow_list();
  for (id, label) in allow_list.iter() {
    debug!(id, label, "Allow-listed category");
  }

  // ── 3. Credentials ──────────────────────────────────────
  let api_key = ApiKey::from_env(&config.api.api_key_env)?;

  // ── 4-5. Adapters ───────────────────────────────────────
  let provider = Arc::new(
    CoinMarketCapClient::new(api_key, config.coinmarketcap())
      .context("Failed to create CoinMarketCap client")?,
  );
  let venue = Arc::new(
    BinanceExchangeInfo::new(config.binance_endpoints(), config.venue.timeout())
      .context("Failed to create Binance client")?,
  );

  // ── 6. Scan ─────────────────────────────────────────────
  let scanner = CategoryScanner::new(
    provider,
    VenueCollector::new(venue),
    CategoryFilter::new(&config.scan.exclude_name_substrings, allow_list),
    config.scan.on_member_error,
  );
  let report = match scanner.run().await {
    Ok(report) => report,
    Err(e) => {
      // Blocks reconciled before an abort still reach stdout.
      if let Some(completed) = e.completed() {
        print_report(completed)?;
      }
      return Err(e.into());
    }
  };
  print_report(&report)?;

  if report.is_complete() {
    return Ok(ExitCode::SUCCESS);
  }

  eprintln!("\n{} categories could not be fetched:", report.failures.len());
  for failure in &report.failures {
    eprintln!("  {failure}");
  }
  Ok(ExitCode::from(EXIT_PARTIAL))
}

fn print_report(report: &ScanReport) -> Result<()> {
  let mut stdout = std::io::stdout().lock();
  write!(stdout, "{report}").context("Failed to write report")?;
  stdout.flush().context("Failed to write report")
}

fn init_tracing(app: &AppSection) {
  let filter = tracing_subscriber::EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&app.log_level));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr);

  match app.log_format {
    LogFormat::Json => builder.json().init(),
    LogFormat::Pretty => builder.compact().init(),
  }
}
