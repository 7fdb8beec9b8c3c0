use crate::domain::model::CityEntry;
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;

const BUILTIN_CITIES: &[(&str, i32)] = &[
    ("Moscow", 3),
    ("Paris", 2),
    ("Berlin", 2),
    ("Brussels", 2),
    ("Amsterdam", 2),
    ("Rome", 2),
    ("London", 1),
    ("Dublin", 1),
    ("New York", -4),
    ("Washington, DC", -4),
    ("St. Louis", -5),
    ("Los Angeles", -7),
    ("Tokyo", 9),
    ("Beijing", 8),
    ("Ho Chi Mihn City", 7),
    ("Mumbai", 5),
];

/// The default city list shipped with the tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn entries() -> Vec<CityEntry> {
        BUILTIN_CITIES
            .iter()
            .map(|&(name, offset)| CityEntry::new(name, offset))
            .collect()
    }
}

impl CatalogSource for BuiltinCatalog {
    fn load_entries(&self) -> Result<Vec<CityEntry>> {
        Ok(Self::entries())
    }

    fn describe(&self) -> String {
        format!("built-in list ({} cities)", BUILTIN_CITIES.len())
    }
}
