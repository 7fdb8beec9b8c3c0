use crate::config::{OutputFormat, Settings, TomlConfig};
use crate::utils::error::{GmtError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "gmt-match")]
#[command(about = "Find cities in (or outside) a GMT offset")]
pub struct CliConfig {
    /// GMT offset to search for, e.g. 2 or -4
    #[arg(short, long, allow_hyphen_values = true)]
    pub offset: Option<String>,

    /// Return cities NOT in this GMT offset
    #[arg(short = 'x', long)]
    pub exclude: bool,

    /// CSV file with `name,gmt_offset` rows to use instead of the built-in cities
    #[arg(long)]
    pub catalog: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print the catalog and exit
    #[arg(long)]
    pub list: bool,

    /// Prompt for offsets on stdin
    #[arg(short, long)]
    pub interactive: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn load_file_config(&self) -> Result<Option<TomlConfig>> {
        let Some(path) = &self.config else {
            return Ok(None);
        };
        tracing::debug!("Loading configuration from {}", path);
        let config = TomlConfig::from_file(path)?;
        config.validate()?;
        Ok(Some(config))
    }

    pub fn resolve(&self) -> Result<Settings> {
        self.validate()?;
        let file = self.load_file_config()?;
        Settings::merge(
            file.as_ref(),
            self.catalog.as_deref(),
            self.exclude,
            self.format,
        )
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.catalog {
            validation::validate_path("--catalog", path)?;
        }
        if let Some(path) = &self.config {
            validation::validate_path("--config", path)?;
        }
        if self.interactive && self.offset.is_some() {
            return Err(GmtError::ConfigValidationError {
                field: "--offset".to_string(),
                message: "cannot be combined with --interactive".to_string(),
            });
        }
        Ok(())
    }
}
