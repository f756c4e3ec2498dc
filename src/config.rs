use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Gaffer
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GafferConfig {
    /// Observability settings
    pub observability: ObservabilityConfig,
    /// Output rendering settings
    pub output: OutputConfig,
    /// Default viewer identity for CLI evaluations
    pub viewer: ViewerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable output
    pub json_logs: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Default output format when --format is not given
    pub format: OutputFormat,
}

/// Rendering format for command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text with status markers
    Text,
    /// Machine-readable JSON on stdout
    Json,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ViewerConfig {
    /// Treat the viewer as an admin when no flag says otherwise
    pub admin: bool,
    /// Username used to resolve event ownership (can be set via env var)
    pub user: Option<String>,
}

impl Default for GafferConfig {
    fn default() -> Self {
        Self {
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
                json_logs: false,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
            },
            viewer: ViewerConfig {
                admin: false,
                user: None, // Will be read from env var or .gaffer-rc
            },
        }
    }
}

impl GafferConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration files (gaffer.toml, .gaffer-rc)
    /// 3. Environment variables (prefixed with GAFFER_)
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("observability.log_level", defaults.observability.log_level)?
            .set_default("observability.json_logs", defaults.observability.json_logs)?
            .set_default("output.format", "text")?
            .set_default("viewer.admin", defaults.viewer.admin)?;

        // Try to load from configuration files
        if Path::new("gaffer.toml").exists() {
            builder = builder.add_source(File::with_name("gaffer"));
        }

        if Path::new(".gaffer-rc").exists() {
            builder = builder.add_source(File::with_name(".gaffer-rc"));
        }

        // Override with environment variables
        builder = builder.add_source(
            Environment::with_prefix("GAFFER")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;

        let mut gaffer_config: GafferConfig = config.try_deserialize()?;

        // Special handling for the viewer username - check multiple sources
        if gaffer_config.viewer.user.is_none() {
            if let Ok(user) = std::env::var("GAFFER_USER") {
                gaffer_config.viewer.user = Some(user);
            } else if let Ok(user) = std::env::var("USER") {
                gaffer_config.viewer.user = Some(user);
            }
        }

        Ok(gaffer_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<GafferConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        // Load .env file first
        let _ = GafferConfig::load_env_file();
        GafferConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static GafferConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

/// Initialize configuration (called at startup)
pub fn init_config() -> Result<()> {
    let _config = config()?;
    tracing::info!("Configuration loaded successfully");
    Ok(())
}
