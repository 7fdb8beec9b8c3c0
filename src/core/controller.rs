use crate::core::matcher::{search, Catalog};
use crate::domain::model::{Query, ResultSet};
use crate::utils::error::Result;
use crate::utils::validation::parse_offset_input;

/// Search screen state: the offset text, the exclude flag and the last results.
///
/// Only [`submit`](Self::submit) runs a search. Editing the input or the flag
/// leaves the current results alone.
#[derive(Debug, Clone)]
pub struct SearchController<'a> {
    catalog: &'a Catalog,
    input: String,
    exclude: bool,
    results: ResultSet<'a>,
    last_query: Option<Query>,
}

impl<'a> SearchController<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            input: String::new(),
            exclude: false,
            results: ResultSet::default(),
            last_query: None,
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn exclude(&self) -> bool {
        self.exclude
    }

    pub fn results(&self) -> &ResultSet<'a> {
        &self.results
    }

    /// The query that produced the current results, if any search has run.
    pub fn last_query(&self) -> Option<Query> {
        self.last_query
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn set_exclude(&mut self, exclude: bool) {
        self.exclude = exclude;
    }

    pub fn toggle_exclude(&mut self) -> bool {
        self.exclude = !self.exclude;
        self.exclude
    }

    /// Validates the input and replaces the results with a fresh search.
    /// On invalid input the previous results are kept and no search runs.
    pub fn submit(&mut self) -> Result<&ResultSet<'a>> {
        let offset = parse_offset_input(&self.input).inspect_err(|_| {
            tracing::debug!("Rejected offset input {:?}", self.input);
        })?;

        let query = Query {
            offset,
            exclude: self.exclude,
        };
        self.results = search(self.catalog, query);
        self.last_query = Some(query);
        Ok(&self.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::matcher::build_catalog;
    use crate::domain::model::CityEntry;
    use crate::utils::error::GmtError;

    fn catalog() -> Catalog {
        build_catalog(vec![
            CityEntry::new("Paris", 2),
            CityEntry::new("Berlin", 2),
            CityEntry::new("Dublin", 1),
        ])
        .unwrap()
    }

    #[test]
    fn test_starts_empty() {
        let catalog = catalog();
        let controller = SearchController::new(&catalog);
        assert_eq!(controller.input(), "");
        assert!(!controller.exclude());
        assert!(controller.results().is_empty());
        assert_eq!(controller.last_query(), None);
    }

    #[test]
    fn test_submit_runs_search() {
        let catalog = catalog();
        let mut controller = SearchController::new(&catalog);
        controller.set_input("2");
        let results = controller.submit().unwrap();
        assert_eq!(results.names(), ["Paris", "Berlin"]);
        assert_eq!(controller.last_query(), Some(Query::include(2)));
    }

    #[test]
    fn test_toggle_only_applies_on_next_submit() {
        let catalog = catalog();
        let mut controller = SearchController::new(&catalog);
        controller.set_input("2");
        controller.submit().unwrap();

        assert!(controller.toggle_exclude());
        assert_eq!(controller.results().names(), ["Paris", "Berlin"]);

        controller.submit().unwrap();
        assert_eq!(controller.results().names(), ["Dublin"]);
    }

    #[test]
    fn test_invalid_input_keeps_previous_results() {
        let catalog = catalog();
        let mut controller = SearchController::new(&catalog);
        controller.set_input("1");
        controller.submit().unwrap();

        controller.set_input("abc");
        let err = controller.submit().unwrap_err();
        assert!(matches!(err, GmtError::InvalidOffsetInput { .. }));
        assert_eq!(controller.results().names(), ["Dublin"]);
        assert_eq!(controller.last_query(), Some(Query::include(1)));
    }

    #[test]
    fn test_set_exclude() {
        let catalog = catalog();
        let mut controller = SearchController::new(&catalog);
        controller.set_exclude(true);
        controller.set_input("99");
        assert_eq!(controller.submit().unwrap().len(), 3);
    }
}
