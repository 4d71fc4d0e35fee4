//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" | "compact" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// DynamoDB table holding the items; `None` selects the in-memory table
    pub table_name: Option<String>,
    /// Limit for a single table call in milliseconds, 0 disables it
    pub table_timeout_ms: u64,
    /// Endpoint override for a local DynamoDB
    pub aws_endpoint_url: Option<String>,
    /// AWS region override
    pub aws_region: Option<String>,
    /// Log output format
    pub log_format: LogFormat,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `DYNAMODB_TABLE` - Item table name (default: unset, in-memory table)
    /// - `TABLE_TIMEOUT_MS` - Per-call table timeout (default: 3000, 0 disables)
    /// - `AWS_ENDPOINT_URL` - DynamoDB endpoint override (default: unset)
    /// - `AWS_REGION` - AWS region (default: SDK provider chain)
    /// - `LOG_FORMAT` - `text` or `json` (default: text)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            table_name: non_empty_var("DYNAMODB_TABLE"),
            table_timeout_ms: env::var("TABLE_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.table_timeout_ms),
            aws_endpoint_url: non_empty_var("AWS_ENDPOINT_URL"),
            aws_region: non_empty_var("AWS_REGION"),
            log_format: env::var("LOG_FORMAT")
                .ok()
                .and_then(|v| LogFormat::parse(&v))
                .unwrap_or(defaults.log_format),
        }
    }

    /// Returns the table call timeout, or `None` when disabled.
    pub fn table_timeout(&self) -> Option<Duration> {
        (self.table_timeout_ms > 0).then(|| Duration::from_millis(self.table_timeout_ms))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            table_name: None,
            table_timeout_ms: 3000,
            aws_endpoint_url: None,
            aws_region: None,
            log_format: LogFormat::Text,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
