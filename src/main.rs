use clap::Parser;
use log::{error, info};
use std::path::Path;

use cardtime::configuration::Config;
use cardtime::web_interface::WebServer;

#[derive(Parser)]
#[command(name = "cardtime")]
#[command(version = "0.1.0")]
#[command(about = "Work-time scraper for a Redmine card-info instance")]
struct Args {
    /// Optional TOML configuration file; defaults apply when omitted
    config_file: Option<String>,
}

#[tokio::main]
async fn main() {
    // Example how to log
    // https://docs.rs/env_logger/latest/env_logger/
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .init();

    println!(
        "
==============================================================================
                 cardtime - Redmine work-time scraper v0.1.0
==============================================================================
"
    );

    info!("Importing configuration");

    // Get command-line arguments
    let args = Args::parse();

    let config = match args.config_file {
        Some(path) => match Config::from_file(Path::new(path.as_str())) {
            Ok(config) => config,
            Err(e) => {
                error!("Unable to import configuration from file: {:?}", e);
                std::process::exit(1);
            }
        },
        None => {
            let config = Config::default();
            if let Err(e) = config.validate() {
                error!("Default configuration is invalid: {:?}", e);
                std::process::exit(1);
            }
            config
        }
    };

    info!("Configuration imported successfully");
    info!("Scraping target: {}", config.base_url());

    let server = WebServer::new(config);
    if let Err(e) = server.start().await {
        error!("Error occured in the web server: {:?}, exiting...", e);
        std::process::exit(1);
    }
}
