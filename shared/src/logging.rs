//! Shared logging utilities for consistent tracing across the deployment tools
//!
//! Output goes to stderr so that the generated launch script on stdout stays
//! clean when the CLI is piped into a page template.

use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Default level used when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Build the per-crate filter directive for a base level
pub fn level_filter(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or(DEFAULT_LOG_LEVEL);
    format!("deployer={base_level},shared={base_level}")
}

/// Initialize tracing subscriber with an optional log level
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = level_filter(log_level);

    fmt()
        .with_env_filter(EnvFilter::new(&filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    tracing::debug!("Log filter: {filter}");
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for deployment-aware info logging
#[macro_export]
macro_rules! deploy_info {
    ($deployment:expr, $($arg:tt)*) => {
        tracing::info!(
            deployment = %$deployment,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for deployment-aware warning logging
#[macro_export]
macro_rules! deploy_warn {
    ($deployment:expr, $($arg:tt)*) => {
        tracing::warn!(
            deployment = %$deployment,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for deployment-aware error logging
#[macro_export]
macro_rules! deploy_error {
    ($deployment:expr, $($arg:tt)*) => {
        tracing::error!(
            deployment = %$deployment,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for deployment-aware debug logging
#[macro_export]
macro_rules! deploy_debug {
    ($deployment:expr, $($arg:tt)*) => {
        tracing::debug!(
            deployment = %$deployment,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(deployment: &str, details: &str) {
    info!(
        deployment = %deployment,
        timestamp = format_timestamp(),
        "🚀 Preparing {}",
        details
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(deployment: &str, context: &str, error: &dyn std::fmt::Display) {
    error!(
        deployment = %deployment,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(deployment: &str, message: &str) {
    info!(
        deployment = %deployment,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}
