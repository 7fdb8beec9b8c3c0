use crate::config::OutputFormat;
use crate::core::matcher::Catalog;
use crate::domain::model::{Query, ResultSet};
use crate::utils::error::Result;
use serde_json::json;
use std::io::Write;

pub fn render_catalog<W: Write>(out: &mut W, catalog: &Catalog, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Cities")?;
            for city in catalog {
                writeln!(out, "  {}", city)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, catalog.cities())?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn render_results<W: Write>(
    out: &mut W,
    query: Query,
    results: &ResultSet<'_>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Results ({})", results.len())?;
            if results.is_empty() {
                writeln!(out, "No cities found.")?;
            }
            for city in results.iter() {
                writeln!(out, "  {}", city)?;
            }
        }
        OutputFormat::Json => {
            let body = json!({
                "query": query,
                "count": results.len(),
                "cities": results,
            });
            serde_json::to_writer_pretty(&mut *out, &body)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::matcher::build_catalog;
    use crate::domain::model::CityEntry;

    fn catalog() -> Catalog {
        build_catalog(vec![CityEntry::new("Paris", 2), CityEntry::new("New York", -4)]).unwrap()
    }

    #[test]
    fn test_text_results() {
        let catalog = catalog();
        let query = Query::include(-4);
        let mut out = Vec::new();
        render_results(&mut out, query, &catalog.search(query), OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Results (1)\n  New York (GMT -4)\n");
    }

    #[test]
    fn test_text_empty_results() {
        let catalog = catalog();
        let query = Query::include(0);
        let mut out = Vec::new();
        render_results(&mut out, query, &catalog.search(query), OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Results (0)\nNo cities found.\n");
    }

    #[test]
    fn test_json_results() {
        let catalog = catalog();
        let query = Query::exclude(-4);
        let mut out = Vec::new();
        render_results(&mut out, query, &catalog.search(query), OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["query"]["exclude"], true);
        assert_eq!(value["cities"][0]["name"], "Paris");
        assert_eq!(value["cities"][0]["gmt_offset"], 2);
        assert_eq!(value["cities"][0]["mask"], 1 << 10);
    }

    #[test]
    fn test_text_catalog() {
        let mut out = Vec::new();
        render_catalog(&mut out, &catalog(), OutputFormat::Text).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Cities\n  Paris (GMT +2)\n  New York (GMT -4)\n"
        );
    }
}
