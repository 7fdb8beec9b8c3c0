use crate::config::{CatalogChoice, OutputFormat};
use crate::core::encoder::{MAX_OFFSET, MIN_OFFSET};
use crate::domain::model::CityEntry;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub catalog: Option<CatalogConfig>,
    #[serde(default)]
    pub cities: Vec<CityEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub exclude: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: String,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        let config = toml::from_str(&processed)?;
        Ok(config)
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        match &self.output.format {
            Some(format) => format.parse(),
            None => Ok(OutputFormat::default()),
        }
    }

    /// A catalog path wins over inline `[[cities]]`; with neither, the built-in list is used.
    pub fn catalog_choice(&self) -> CatalogChoice {
        if let Some(catalog) = &self.catalog {
            CatalogChoice::Csv(catalog.path.clone())
        } else if !self.cities.is_empty() {
            CatalogChoice::Inline(self.cities.clone())
        } else {
            CatalogChoice::Builtin
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(catalog) = &self.catalog {
            validation::validate_path("catalog.path", &catalog.path)?;
        }

        self.output_format()?;

        for (index, city) in self.cities.iter().enumerate() {
            validation::validate_non_empty_string(&format!("cities[{}].name", index), &city.name)?;
            validation::validate_range(
                &format!("cities[{}].gmt_offset", index),
                city.gmt_offset,
                MIN_OFFSET,
                MAX_OFFSET,
            )?;
        }

        if self.catalog.is_some() && !self.cities.is_empty() {
            tracing::warn!("Both [catalog] path and [[cities]] are set; [[cities]] is ignored");
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
