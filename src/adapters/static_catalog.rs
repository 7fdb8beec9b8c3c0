use crate::domain::model::CityEntry;
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;

/// Catalog rows held in memory, e.g. the `[[cities]]` table of a config file.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: Vec<CityEntry>,
}

impl StaticCatalog {
    pub fn new(entries: Vec<CityEntry>) -> Self {
        Self { entries }
    }
}

impl CatalogSource for StaticCatalog {
    fn load_entries(&self) -> Result<Vec<CityEntry>> {
        Ok(self.entries.clone())
    }

    fn describe(&self) -> String {
        format!("inline list ({} cities)", self.entries.len())
    }
}
