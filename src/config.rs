use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming an optional YAML file with tuning knobs
pub const CONFIG_ENV: &str = "DOCSERVE_CONFIG";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub document_root: PathBuf,
    #[serde(default)]
    pub log_path: Option<PathBuf>,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default)]
    pub port: u16,
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,
}

/// Values taken from the command line; they override the file.
#[derive(Debug, Clone)]
pub struct CliArgs {
    pub document_root: PathBuf,
    pub port: u16,
    pub log_path: Option<PathBuf>,
    pub max_concurrent: Option<usize>,
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_max_concurrent() -> usize {
    100
}

fn default_read_timeout_secs() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: 0,
            max_concurrent: default_max_concurrent(),
            read_timeout_secs: default_read_timeout_secs(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}

impl Config {
    pub fn new(document_root: impl Into<PathBuf>, port: u16) -> Self {
        Self {
            document_root: document_root.into(),
            log_path: None,
            server: ServerConfig {
                port,
                ..ServerConfig::default()
            },
        }
    }

    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(yaml).context("Invalid configuration")
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Build the effective configuration: the file named by `DOCSERVE_CONFIG`
    /// if any, then the command line on top.
    pub fn load(args: CliArgs) -> anyhow::Result<Self> {
        let base = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::new(PathBuf::new(), 0),
        };
        Ok(base.with_args(args))
    }

    pub fn with_args(mut self, args: CliArgs) -> Self {
        self.document_root = args.document_root;
        self.server.port = args.port;
        if args.log_path.is_some() {
            self.log_path = args.log_path;
        }
        if let Some(max) = args.max_concurrent {
            self.server.max_concurrent = max;
        }
        self
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.document_root.is_dir() {
            anyhow::bail!(
                "document root {} is not a directory",
                self.document_root.display()
            );
        }
        if self.server.max_concurrent == 0 {
            anyhow::bail!("max_concurrent must be at least 1");
        }
        Ok(())
    }
}
