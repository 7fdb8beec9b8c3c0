use crate::core::encoder::{encode, OffsetMask};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw catalog row as supplied by a [`CatalogSource`](crate::domain::ports::CatalogSource).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityEntry {
    pub name: String,
    pub gmt_offset: i32,
}

impl CityEntry {
    pub fn new(name: impl Into<String>, gmt_offset: i32) -> Self {
        Self {
            name: name.into(),
            gmt_offset,
        }
    }
}

/// A catalog city with its offset mask computed once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct City {
    name: String,
    gmt_offset: i32,
    mask: OffsetMask,
}

impl City {
    pub(crate) fn from_entry(entry: CityEntry) -> Self {
        Self {
            mask: encode(entry.gmt_offset),
            name: entry.name,
            gmt_offset: entry.gmt_offset,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gmt_offset(&self) -> i32 {
        self.gmt_offset
    }

    pub fn mask(&self) -> OffsetMask {
        self.mask
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (GMT {:+})", self.name, self.gmt_offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub offset: i32,
    pub exclude: bool,
}

impl Query {
    pub fn include(offset: i32) -> Self {
        Self {
            offset,
            exclude: false,
        }
    }

    pub fn exclude(offset: i32) -> Self {
        Self {
            offset,
            exclude: true,
        }
    }
}

/// Matching cities in catalog order, borrowed from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultSet<'a> {
    cities: Vec<&'a City>,
}

impl<'a> ResultSet<'a> {
    pub(crate) fn new(cities: Vec<&'a City>) -> Self {
        Self { cities }
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a City> + '_ {
        self.cities.iter().copied()
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.cities.iter().map(|city| city.name()).collect()
    }
}

impl<'a> IntoIterator for ResultSet<'a> {
    type Item = &'a City;
    type IntoIter = std::vec::IntoIter<&'a City>;

    fn into_iter(self) -> Self::IntoIter {
        self.cities.into_iter()
    }
}
