use pixgen::config::Config;
use pixgen::logger::{self, LoggerConfig};
use pixgen::server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_with_config(LoggerConfig::development())?;

    match dotenv::dotenv() {
        Ok(_) => log::info!(".env file loaded"),
        Err(_) => log::warn!("No .env file found, using system environment variables"),
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    logger::log_startup_info("pixgen", env!("CARGO_PKG_VERSION"), &config);
    logger::log_config_info(&config);

    server::run(config).await?;

    Ok(())
}
