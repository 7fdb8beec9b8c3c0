pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{BuiltinCatalog, CsvCatalog, StaticCatalog};
pub use crate::config::{OutputFormat, Settings, TomlConfig};
pub use crate::core::controller::SearchController;
pub use crate::core::encoder::{encode, OffsetMask};
pub use crate::core::matcher::{build_catalog, search, Catalog};
pub use crate::domain::model::{City, CityEntry, Query, ResultSet};
pub use crate::domain::ports::CatalogSource;
pub use crate::utils::error::{GmtError, Result};
