use campaign_client::config::AppConfig;
use campaign_client::error::render_chain;
use campaign_client::logging::init_subscriber;
use std::io;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    init_subscriber();

    info!("Starting campaign client...");

    let config = match AppConfig::new() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("\nERROR: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    match campaign_client::run(&config, &mut stdout) {
        Ok(campaign_id) => {
            info!("Campaign created: {}", campaign_id);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Campaign submission failed: {:?}", e);
            eprintln!("\nERROR: {}", render_chain(&e));
            ExitCode::FAILURE
        }
    }
}
