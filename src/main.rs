use clap::Parser;
use gmt_match::app::render::{render_catalog, render_results};
use gmt_match::app::session::Session;
use gmt_match::utils::error::ErrorSeverity;
use gmt_match::utils::logger;
use gmt_match::{Catalog, CliConfig, GmtError, OutputFormat, SearchController};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.format == Some(OutputFormat::Json) {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "{} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig) -> Result<(), GmtError> {
    let settings = config.resolve()?;
    let source = settings.catalog.into_source();
    let catalog = Catalog::from_source(source.as_ref())?;
    tracing::info!("Loaded {} cities from {}", catalog.len(), source.describe());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if config.list {
        return render_catalog(&mut out, &catalog, settings.format);
    }

    match &config.offset {
        Some(text) => {
            let mut controller = SearchController::new(&catalog);
            controller.set_exclude(settings.exclude);
            controller.set_input(text.as_str());
            controller.submit()?;
            match controller.last_query() {
                Some(query) => render_results(&mut out, query, controller.results(), settings.format),
                None => Ok(()),
            }
        }
        None => {
            let stdin = std::io::stdin();
            let mut session = Session::new(&catalog, settings.exclude, settings.format);
            session.run(stdin.lock(), &mut out)
        }
    }
}
