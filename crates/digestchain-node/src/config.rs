//! Node configuration from CLI flags and environment variables.
//!
//! There is no ambient configuration state: everything a collaborator needs
//! is carried in an explicit struct handed to its constructor.

use clap::Parser;
use std::net::SocketAddr;

use crate::logging::LogFormat;

/// Command line interface for the digestchain node.
#[derive(Debug, Parser)]
#[command(name = "digestchain-node", about = "digestchain HTTP node")]
pub struct Cli {
    /// Address to serve HTTP on.
    #[arg(long, default_value = "127.0.0.1:8080", env = "DIGESTCHAIN_LISTEN")]
    pub listen: SocketAddr,

    /// Base URL of the content source API.
    #[arg(
        long,
        default_value = "https://api.twitter.com/1.1",
        env = "DIGESTCHAIN_SOURCE_URL"
    )]
    pub source_url: String,

    /// Bearer token for the content source API.
    #[arg(long, default_value = "", env = "DIGESTCHAIN_SOURCE_TOKEN")]
    pub source_token: String,

    /// Maximum number of result pages to pull per retrieval.
    #[arg(long, default_value_t = 18, env = "DIGESTCHAIN_SOURCE_PAGES")]
    pub source_pages: usize,

    /// Log format: "human" or "json".
    #[arg(long, default_value = "human", env = "DIGESTCHAIN_LOG_FORMAT")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "info", env = "DIGESTCHAIN_LOG_LEVEL")]
    pub log_level: String,
}

/// Resolved node configuration.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub listen: SocketAddr,
    pub log_format: LogFormat,
    pub log_level: String,
    pub source: SourceConfig,
}

/// Configuration for the content-retrieval collaborator.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Base URL of the upstream API.
    pub base_url: String,
    /// Bearer token; empty disables authentication headers.
    pub token: String,
    /// Upper bound on result pages fetched per identifier.
    pub page_limit: usize,
}

impl NodeConfig {
    /// Build a config from parsed CLI arguments.
    pub fn from_cli(cli: Cli) -> Self {
        let log_format = match cli.log_format.as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Human,
        };
        Self {
            listen: cli.listen,
            log_format,
            log_level: cli.log_level,
            source: SourceConfig {
                base_url: cli.source_url,
                token: cli.source_token,
                page_limit: cli.source_pages,
            },
        }
    }
}
