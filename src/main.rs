use clap::Parser;
use messenger::core::config::{self, CliOverrides, MessengerConfig};
use messenger::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "messenger", about = "Send Wellfound messages through the automation backend")]
struct Args {
    /// Backend base URL (default http://localhost:5000)
    #[arg(long)]
    backend_url: Option<String>,

    /// File holding the raw cookie string to transfer
    #[arg(long)]
    cookie_file: Option<PathBuf>,

    /// Domain stamped onto transferred cookies (default .wellfound.com)
    #[arg(long)]
    cookie_domain: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("messenger.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        MessengerConfig::default()
    });
    let cli = CliOverrides {
        backend_url: args.backend_url,
        cookie_file: args.cookie_file,
        cookie_domain: args.cookie_domain,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Messenger starting up: backend={}, cookie domain={}, cookie source={:?}",
        resolved.backend_url,
        resolved.cookie_scope.domain,
        resolved.cookie_source
    );

    tui::run(resolved)
}
