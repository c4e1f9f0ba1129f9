use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub service_name: String,
    pub environment: String,
    pub log_level: String,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            service_name: std::env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "hhcatalog".to_string()),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            log_level: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info".to_string()),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.service_name.trim().is_empty() {
            return Err(AppError::Config("SERVICE_NAME must not be empty".to_string()));
        }
        tracing_subscriber::EnvFilter::try_new(&self.log_level)
            .map_err(|e| AppError::Config(format!("invalid RUST_LOG '{}': {}", self.log_level, e)))?;
        Ok(())
    }
}

// Logs go to stderr; stdout carries command output.
pub fn init_logging(config: LoggingConfig) -> Result<(), AppError> {
    config.validate()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| AppError::Config(e.to_string()))?;

    tracing::debug!(
        service = %config.service_name,
        environment = %config.environment,
        "logging initialized"
    );
    Ok(())
}
