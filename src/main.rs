use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use countries::api::CountryQueryService;
use countries::core::CountryQueryState;
use countries::core::config::{self, CliOverrides, DEFAULT_LOG_LEVEL};
use countries::view;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "countries", about = "Look up countries by name")]
struct Args {
    /// Name to search for. Omit to load the initial list.
    term: Option<String>,

    /// API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds (0 = none)
    #[arg(long)]
    timeout: Option<u64>,

    /// Where to write the log
    #[arg(long, default_value = "countries.log")]
    log_file: PathBuf,
}

/// File logger that passes every record; `log::set_max_level` does the
/// filtering so the level can be tightened once config is resolved.
fn init_logger(path: &Path) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }
    log::set_max_level(DEFAULT_LOG_LEVEL);
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    init_logger(&args.log_file);

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{e}, using defaults");
        eprintln!("{e}, using defaults");
        config::CountriesConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url.as_deref(),
            timeout_secs: args.timeout,
        },
    );
    log::set_max_level(resolved.log_level);

    log::info!("countries starting up against {}", resolved.base_url);

    let service = CountryQueryService::from_config(&resolved)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let query = CountryQueryState::new(Arc::new(service));

    let term = args.term.unwrap_or_default();
    query.search(&term).await.map_err(io::Error::other)?;

    print!("{}", view::render_state(&query.snapshot()));
    Ok(())
}
