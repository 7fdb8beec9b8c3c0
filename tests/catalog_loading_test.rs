use anyhow::Result;
use gmt_match::config::CatalogChoice;
use gmt_match::utils::validation::Validate;
use gmt_match::{Catalog, CsvCatalog, GmtError, Query, SearchController, Settings, TomlConfig};
use tempfile::TempDir;

#[test]
fn test_csv_catalog_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let csv_path = temp_dir.path().join("cities.csv");
    std::fs::write(
        &csv_path,
        "name,gmt_offset\nReykjavik,0\nLisbon,1\nCairo,3\nAccra,0\n",
    )?;

    let catalog = Catalog::from_source(&CsvCatalog::new(&csv_path))?;
    assert_eq!(catalog.len(), 4);

    let mut controller = SearchController::new(&catalog);
    controller.set_input("0");
    assert_eq!(controller.submit()?.names(), ["Reykjavik", "Accra"]);

    controller.toggle_exclude();
    assert_eq!(controller.submit()?.names(), ["Lisbon", "Cairo"]);
    Ok(())
}

#[test]
fn test_csv_catalog_with_out_of_range_row_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let csv_path = temp_dir.path().join("cities.csv");
    std::fs::write(&csv_path, "name,gmt_offset\nAuckland,13\n")?;

    let err = Catalog::from_source(&CsvCatalog::new(&csv_path)).unwrap_err();
    assert!(matches!(err, GmtError::InvalidCatalogEntry { .. }));
    Ok(())
}

#[test]
fn test_toml_config_with_csv_path() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let csv_path = temp_dir.path().join("cities.csv");
    std::fs::write(&csv_path, "name,gmt_offset\nMumbai,5\nTokyo,9\n")?;

    let normalized = csv_path.to_str().unwrap().replace('\\', "/");
    let config_path = temp_dir.path().join("gmt-match.toml");
    std::fs::write(
        &config_path,
        format!(
            r#"
[search]
exclude = true

[catalog]
path = "{}"
"#,
            normalized
        ),
    )?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;

    let settings = Settings::merge(Some(&config), None, false, None)?;
    assert!(settings.exclude);
    assert_eq!(settings.catalog, CatalogChoice::Csv(normalized));

    let source = settings.catalog.into_source();
    let catalog = Catalog::from_source(source.as_ref())?;
    let results = catalog.search(Query {
        offset: 5,
        exclude: settings.exclude,
    });
    assert_eq!(results.names(), ["Tokyo"]);
    Ok(())
}

#[test]
fn test_toml_inline_cities() -> Result<()> {
    let config = TomlConfig::from_toml_str(
        r#"
[[cities]]
name = "Honolulu"
gmt_offset = -10

[[cities]]
name = "Anchorage"
gmt_offset = -8
"#,
    )?;
    config.validate()?;

    let settings = Settings::merge(Some(&config), None, false, None)?;
    let catalog = Catalog::from_source(settings.catalog.into_source().as_ref())?;
    assert_eq!(catalog.search(Query::include(-10)).names(), ["Honolulu"]);
    assert!(catalog.search(Query::include(-9)).is_empty());
    Ok(())
}
