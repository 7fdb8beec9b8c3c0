use crate::core::encoder::{encode, is_in_range, MAX_OFFSET, MIN_OFFSET};
use crate::domain::model::{City, CityEntry, Query, ResultSet};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{GmtError, Result};
use std::collections::HashSet;

/// The immutable, ordered city catalog. Built once, then only read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    cities: Vec<City>,
}

impl Catalog {
    pub fn from_source<S: CatalogSource + ?Sized>(source: &S) -> Result<Self> {
        tracing::debug!("Loading catalog from {}", source.describe());
        let entries = source.load_entries()?;
        build_catalog(entries)
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, City> {
        self.cities.iter()
    }

    pub fn search(&self, query: Query) -> ResultSet<'_> {
        search(self, query)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a City;
    type IntoIter = std::slice::Iter<'a, City>;

    fn into_iter(self) -> Self::IntoIter {
        self.cities.iter()
    }
}

/// Builds the catalog in input order, encoding each offset once.
///
/// Catalog rows are trusted configuration, so a blank name or an offset
/// outside `-11..=12` is rejected rather than silently mis-encoded.
pub fn build_catalog<I>(entries: I) -> Result<Catalog>
where
    I: IntoIterator<Item = CityEntry>,
{
    let mut seen = HashSet::new();
    let mut cities = Vec::new();

    for entry in entries {
        if entry.name.trim().is_empty() {
            return Err(GmtError::InvalidCatalogEntry {
                name: entry.name,
                reason: "city name cannot be empty".to_string(),
            });
        }
        if !is_in_range(entry.gmt_offset) {
            return Err(GmtError::InvalidCatalogEntry {
                reason: format!(
                    "offset {} is outside {}..={}",
                    entry.gmt_offset, MIN_OFFSET, MAX_OFFSET
                ),
                name: entry.name,
            });
        }
        if !seen.insert(entry.name.clone()) {
            tracing::warn!("Duplicate city name in catalog: {}", entry.name);
        }
        cities.push(City::from_entry(entry));
    }

    tracing::debug!("Built catalog with {} cities", cities.len());
    Ok(Catalog { cities })
}

pub fn search(catalog: &Catalog, query: Query) -> ResultSet<'_> {
    let search_mask = encode(query.offset);

    let matches = catalog
        .iter()
        .filter(|city| {
            if query.exclude {
                !city.mask().intersects(search_mask)
            } else {
                city.mask().contains(search_mask)
            }
        })
        .collect();

    let results = ResultSet::new(matches);
    tracing::debug!(
        "Search offset={} exclude={} matched {} of {} cities",
        query.offset,
        query.exclude,
        results.len(),
        catalog.len()
    );
    results
}
