// src/core/config_manager.rs
//! Process-wide configuration, built once at startup and passed by reference

use crate::matching::MatchWeights;
use crate::referral::TimingConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigManager {
    #[serde(skip, default = "default_environment")]
    pub environment: String,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
    /// JSON log file, truncated on startup
    #[serde(default)]
    pub json_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub matching: MatchWeights,
    #[serde(default)]
    pub timing: TimingConfig,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: ConfigManager,
    production: ConfigManager,
}

fn default_environment() -> String {
    "local".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::from([127, 0, 0, 1]),
            port: 8000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "job_insights=info,jobtrail=info,rocket::server=off".to_string(),
            json_file: None,
        }
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            scoring: ScoringConfig::default(),
        }
    }
}

impl ConfigManager {
    /// Load configuration for the current environment.
    ///
    /// Lookup order: explicit path, `JOBTRAIL_CONFIG`, `config.yaml` in the
    /// working directory. Without any file the defaults apply.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let environment = Self::get_environment();

        let path = explicit_path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var("JOBTRAIL_CONFIG").ok().map(PathBuf::from));

        let mut config = match path {
            Some(path) => Self::load_from_file(&path, &environment)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load_from_file(Path::new(DEFAULT_CONFIG_FILE), &environment)?
            }
            None => Self {
                environment: environment.clone(),
                ..Self::default()
            },
        };

        if let Ok(port) = std::env::var("JOBTRAIL_PORT") {
            config.server.port = port
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("JOBTRAIL_PORT must be a valid port number"))?;
        }

        config.validate()?;
        Ok(config)
    }

    fn get_environment() -> String {
        std::env::var("JOBTRAIL_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| default_environment())
    }

    fn load_from_file(path: &Path, environment: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_yaml(&content, environment)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Pick the `local` or `production` section of a YAML document.
    pub fn from_yaml(content: &str, environment: &str) -> Result<Self> {
        let config_file: ConfigFile =
            serde_yaml::from_str(content).context("Invalid configuration YAML")?;

        let mut config = match environment {
            "production" => config_file.production,
            _ => config_file.local,
        };
        config.environment = environment.to_string();

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.scoring
            .matching
            .validate()
            .context("Invalid scoring.matching section")?;
        self.scoring
            .timing
            .validate()
            .context("Invalid scoring.timing section")?;
        Ok(())
    }

    pub fn log_summary(&self) {
        info!("Environment: {}", self.environment);
        info!("Server: http://{}:{}", self.server.address, self.server.port);
        info!(
            "Match weights: skills {:.2}, experience {:.2}, education {:.2}, location {:.2}",
            self.scoring.matching.skills,
            self.scoring.matching.experience,
            self.scoring.matching.education,
            self.scoring.matching.location
        );
        info!(
            "Referral confidence thresholds: high >= {}, medium >= {}",
            self.scoring.timing.high_threshold, self.scoring.timing.medium_threshold
        );
    }
}
