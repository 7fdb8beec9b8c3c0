pub mod controller;
pub mod encoder;
pub mod matcher;

pub use crate::domain::model::{City, CityEntry, Query, ResultSet};
pub use crate::domain::ports::CatalogSource;
pub use crate::utils::error::Result;
