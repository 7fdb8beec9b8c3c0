// Adapters layer: concrete catalog sources (built-in list, CSV files, in-memory rows).

pub mod builtin;
pub mod csv_catalog;
pub mod static_catalog;

pub use builtin::BuiltinCatalog;
pub use csv_catalog::CsvCatalog;
pub use static_catalog::StaticCatalog;
