//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the AMY backend.

use std::path::Path;

use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::forms::ValidationErrors;
use crate::utils::errors::{AmyError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer on drop and must be held for the
/// lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| AmyError::Config(format!("Invalid log filter {}: {}", config.level, e)))?;

    let guard = match config.file_path.as_deref() {
        Some(file_path) => {
            let path = Path::new(file_path);
            let directory = path.parent().unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "amy.log".to_string());

            let file_appender = tracing_appender::rolling::daily(directory, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
                .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking))
                .try_init()
                .map_err(|e| AmyError::Config(format!("Logging already initialized: {}", e)))?;

            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
                .try_init()
                .map_err(|e| AmyError::Config(format!("Logging already initialized: {}", e)))?;

            None
        }
    };

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a data fix that was applied
pub fn log_data_fix_applied(name: &str, updated: usize, skipped: usize) {
    info!(
        data_fix = name,
        updated = updated,
        skipped = skipped,
        "Data fix applied"
    );
}

/// Log a data fix that was already recorded in the history table
pub fn log_data_fix_skipped(name: &str) {
    debug!(data_fix = name, "Data fix already applied");
}

/// Log a rejected form submission
pub fn log_form_rejected(form: &str, errors: &ValidationErrors) {
    warn!(
        form = form,
        fields = ?errors.field_names(),
        non_field_errors = errors.non_field_errors().len(),
        "Form submission rejected"
    );
}

/// Log a record created through a form
pub fn log_record_created(table: &str, id: i64) {
    info!(table = table, id = id, "Record created");
}
