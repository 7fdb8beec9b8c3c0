use crate::app::render::{render_catalog, render_results};
use crate::config::OutputFormat;
use crate::core::controller::SearchController;
use crate::core::matcher::Catalog;
use crate::utils::error::{GmtError, Result};
use std::io::{BufRead, Write};

const HELP: &str = "Enter a GMT offset to search. Commands: :x toggle exclude, :list show cities, :help, :q quit";

/// Line-oriented search prompt driving a [`SearchController`].
pub struct Session<'a> {
    controller: SearchController<'a>,
    format: OutputFormat,
}

impl<'a> Session<'a> {
    pub fn new(catalog: &'a Catalog, exclude: bool, format: OutputFormat) -> Self {
        let mut controller = SearchController::new(catalog);
        controller.set_exclude(exclude);
        Self { controller, format }
    }

    pub fn controller(&self) -> &SearchController<'a> {
        &self.controller
    }

    /// Runs until `:q` or end of input. Invalid offsets are reported and the
    /// prompt continues; only I/O and rendering failures end the session.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        writeln!(out, "{}", HELP)?;
        self.prompt(out)?;

        for line in input.lines() {
            let line = line?;
            match line.trim() {
                ":q" | ":quit" => break,
                ":x" | ":exclude" => {
                    let exclude = self.controller.toggle_exclude();
                    let mode = if exclude { "NOT in" } else { "in" };
                    writeln!(out, "Searching for cities {} the given offset", mode)?;
                }
                ":list" => render_catalog(out, self.controller.catalog(), self.format)?,
                ":help" => writeln!(out, "{}", HELP)?,
                _ => self.submit(&line, out)?,
            }
            self.prompt(out)?;
        }

        writeln!(out)?;
        Ok(())
    }

    fn submit<W: Write>(&mut self, text: &str, out: &mut W) -> Result<()> {
        self.controller.set_input(text);
        match self.controller.submit() {
            Ok(_) => {}
            Err(e @ GmtError::InvalidOffsetInput { .. }) => {
                tracing::info!("{}", e);
                writeln!(out, "{}", e.user_friendly_message())?;
                return Ok(());
            }
            Err(e) => return Err(e),
        }

        match self.controller.last_query() {
            Some(query) => render_results(out, query, self.controller.results(), self.format),
            None => Ok(()),
        }
    }

    fn prompt<W: Write>(&self, out: &mut W) -> Result<()> {
        let mode = if self.controller.exclude() { "exclude" } else { "include" };
        write!(out, "gmt [{}]> ", mode)?;
        out.flush()?;
        Ok(())
    }
}
