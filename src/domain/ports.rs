use crate::domain::model::CityEntry;
use crate::utils::error::Result;

/// Supplies the raw city list the catalog is built from.
pub trait CatalogSource {
    fn load_entries(&self) -> Result<Vec<CityEntry>>;

    /// Short human-readable description used in logs.
    fn describe(&self) -> String;
}
