//! Logging subsystem built on `tracing-subscriber`.

mod manager;
mod types;

#[cfg(test)]
mod tests;

pub use manager::{LoggingError, init};
// Re-export tracing-appender types for convenience
pub use tracing_appender::rolling::Rotation;
pub use types::{FileLoggingConfig, LoggerConfig, StdoutConfig};
