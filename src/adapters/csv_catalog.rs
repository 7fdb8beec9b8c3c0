use crate::domain::model::CityEntry;
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Reads a headered `name,gmt_offset` CSV file.
#[derive(Debug, Clone)]
pub struct CsvCatalog {
    path: PathBuf,
}

impl CsvCatalog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_entries<R: Read>(reader: R) -> Result<Vec<CityEntry>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        for row in csv_reader.deserialize() {
            let entry: CityEntry = row?;
            entries.push(entry);
        }
        Ok(entries)
    }
}

impl CatalogSource for CsvCatalog {
    fn load_entries(&self) -> Result<Vec<CityEntry>> {
        let file = std::fs::File::open(&self.path)?;
        let entries = Self::read_entries(file)?;
        tracing::debug!("Read {} rows from {}", entries.len(), self.path.display());
        Ok(entries)
    }

    fn describe(&self) -> String {
        format!("CSV file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::GmtError;

    #[test]
    fn test_read_entries_trims_fields() {
        let data = "name,gmt_offset\nParis, 2\n\"Washington, DC\", -4\n";
        let entries = CsvCatalog::read_entries(data.as_bytes()).unwrap();
        assert_eq!(
            entries,
            vec![CityEntry::new("Paris", 2), CityEntry::new("Washington, DC", -4)]
        );
    }

    #[test]
    fn test_read_entries_rejects_non_integer_offset() {
        let data = "name,gmt_offset\nMumbai,5.5\n";
        let err = CsvCatalog::read_entries(data.as_bytes()).unwrap_err();
        assert!(matches!(err, GmtError::CsvError(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = CsvCatalog::new("/definitely/not/here/cities.csv");
        assert!(matches!(source.load_entries(), Err(GmtError::IoError(_))));
    }
}
