use std::path::PathBuf;

use salesgen_core::GenerationParams;

use crate::CliError;

/// Overrides the base directory holding the `customers` and `orders` tables.
pub const OUTPUT_DIR_ENV: &str = "DELTA_OUTPUT_DIR";
/// `text` (default) or `json` diagnostics on stderr.
pub const LOG_FORMAT_ENV: &str = "SALESGEN_LOG_FORMAT";
pub const DEFAULT_OUTPUT_DIR: &str = "data";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, CliError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(CliError::InvalidConfig(format!(
                "{LOG_FORMAT_ENV} must be 'text' or 'json', got '{other}'"
            ))),
        }
    }
}

/// Everything a run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub output_dir: PathBuf,
    pub log_format: LogFormat,
    pub params: GenerationParams,
}

impl RunSettings {
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let output_dir = lookup(OUTPUT_DIR_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
        let log_format = match lookup(LOG_FORMAT_ENV) {
            Some(value) => LogFormat::parse(&value)?,
            None => LogFormat::default(),
        };

        Ok(Self {
            output_dir,
            log_format,
            params: GenerationParams::default(),
        })
    }

    pub fn table_path(&self, table: &str) -> PathBuf {
        self.output_dir.join(table)
    }
}
