#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::adapters::{BuiltinCatalog, CsvCatalog, StaticCatalog};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{GmtError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const VALID: [&'static str; 2] = ["text", "json"];
}

impl FromStr for OutputFormat {
    type Err = GmtError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(GmtError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: s.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", Self::VALID.join(", ")),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Where the catalog comes from once CLI flags and the config file are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogChoice {
    Builtin,
    Csv(String),
    Inline(Vec<crate::domain::model::CityEntry>),
}

impl CatalogChoice {
    pub fn into_source(self) -> Box<dyn CatalogSource> {
        match self {
            CatalogChoice::Builtin => Box::new(BuiltinCatalog),
            CatalogChoice::Csv(path) => Box::new(CsvCatalog::new(path)),
            CatalogChoice::Inline(entries) => Box::new(StaticCatalog::new(entries)),
        }
    }
}

/// Effective settings after applying CLI flags over the config file over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub exclude: bool,
    pub format: OutputFormat,
    pub catalog: CatalogChoice,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            exclude: false,
            format: OutputFormat::Text,
            catalog: CatalogChoice::Builtin,
        }
    }
}

impl Settings {
    pub fn merge(
        file: Option<&TomlConfig>,
        csv_override: Option<&str>,
        exclude_flag: bool,
        format_override: Option<OutputFormat>,
    ) -> Result<Self> {
        let mut settings = Settings::default();

        if let Some(config) = file {
            settings.exclude = config.search.exclude;
            settings.format = config.output_format()?;
            settings.catalog = config.catalog_choice();
        }

        if let Some(path) = csv_override {
            settings.catalog = CatalogChoice::Csv(path.to_string());
        }
        if exclude_flag {
            settings.exclude = true;
        }
        if let Some(format) = format_override {
            settings.format = format;
        }

        Ok(settings)
    }
}
