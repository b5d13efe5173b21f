//! Configuration and process setup

pub mod config;

pub use config::Config;

use crate::common::logger::init_logger_with_file;

/// Load `.env`, read [`Config`] and initialize logging
///
/// Hosts call this once at startup.
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;
    tracing::info!(
        environment = %config.environment,
        superadmins = config.superadmin_ids.len(),
        "Listing core configured"
    );
    Ok(config)
}
