//! Server configuration
//!
//! Values come from, in order of precedence: command line flags (or their
//! environment variables), an optional YAML file, built-in defaults.
//!
//! ```yaml
//! interface: 0.0.0.0
//! port: 8080
//! workers: 4
//! document_root: ./static
//! log_level: debug
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Parser;
use serde::Deserialize;
use tracing::Level;

pub const DEFAULT_INTERFACE: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_WORKERS: usize = 5;
pub const DEFAULT_DOCUMENT_ROOT: &str = "static";

/// Command line flags.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "static-httpd", version, about = "Basic HTTP server for static files")]
pub struct Cli {
    /// Interface to open the listener on [default: 127.0.0.1]
    #[arg(short, long, env = "HTTPD_INTERFACE")]
    pub interface: Option<String>,

    /// Port to listen on [default: 8080]
    #[arg(short, long, env = "HTTPD_PORT")]
    pub port: Option<u16>,

    /// Number of server workers [default: 5]
    #[arg(short, long, env = "HTTPD_WORKERS")]
    pub workers: Option<usize>,

    /// Directory with the site files [default: ./static]
    #[arg(short = 'r', long = "root", env = "HTTPD_ROOT")]
    pub document_root: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long, env = "HTTPD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log verbosity: trace, debug, info, warn or error [default: info]
    #[arg(long, env = "HTTPD_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Shape of the YAML configuration file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub interface: Option<String>,
    pub port: Option<u16>,
    pub workers: Option<usize>,
    pub document_root: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl FileConfig {
    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(text).context("Invalid configuration file")
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&text)
    }
}

/// Fully resolved, immutable server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub interface: String,
    pub port: u16,
    pub workers: usize,
    pub document_root: PathBuf,
    pub log_level: Level,
}

impl Config {
    /// Parses the process arguments and merges in the config file, if any.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_cli(Cli::parse())
    }

    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::from_path(path)?,
            None => FileConfig::default(),
        };
        Self::merge(cli, file)
    }

    /// Flags win over file values, file values win over defaults.
    pub fn merge(cli: Cli, file: FileConfig) -> anyhow::Result<Self> {
        let log_level = cli
            .log_level
            .or(file.log_level)
            .unwrap_or_else(|| "info".to_string());

        let config = Self {
            interface: cli
                .interface
                .or(file.interface)
                .unwrap_or_else(|| DEFAULT_INTERFACE.to_string()),
            port: cli.port.or(file.port).unwrap_or(DEFAULT_PORT),
            workers: cli.workers.or(file.workers).unwrap_or(DEFAULT_WORKERS),
            document_root: cli
                .document_root
                .or(file.document_root)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCUMENT_ROOT)),
            log_level: log_level
                .parse::<Level>()
                .map_err(|_| anyhow::anyhow!("Invalid log level: {}", log_level))?,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.workers == 0 {
            bail!("At least one worker is required");
        }
        self.listen_addr()?;
        Ok(())
    }

    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        // Bracket bare IPv6 literals
        let addr = if self.interface.contains(':') && !self.interface.starts_with('[') {
            format!("[{}]:{}", self.interface, self.port)
        } else {
            format!("{}:{}", self.interface, self.port)
        };

        addr.parse::<SocketAddr>()
            .with_context(|| format!("Invalid listen address {}", addr))
    }
}
