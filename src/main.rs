use anyhow::Result;
use clap::Parser;
use geotriage::geotriage_core::cli::{self, Cli};
use geotriage::geotriage_core::{mailer, report, scan, GeotriageError, MailConfig};
use simplelog::{CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, WriteLogger};
use std::fs::File;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize loggers
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        LevelFilter::Warn,
        Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )];

    if cli.log {
        loggers.push(WriteLogger::new(
            cli.log_level,
            Config::default(),
            File::create("geotriage.log")?,
        ));
    }

    CombinedLogger::init(loggers)?;

    dotenv::dotenv().ok();

    // Resolve mail settings and recipients before any filesystem work, so a
    // missing credential fails fast instead of after a long walk
    let delivery = if cli.no_email {
        None
    } else {
        let config = MailConfig::from_env().map_err(GeotriageError::from)?;

        let raw = match cli.to {
            Some(list) => list,
            None => cli::prompt_recipients()?,
        };

        let mut recipients = cli::parse_recipient_list(&raw);
        // The examiner always gets a copy
        recipients.push(config.sender.clone());

        Some((config, recipients))
    };

    let path = match cli.path {
        Some(path) => path,
        None => cli::prompt_path()?,
    };

    let results = scan::collect_results(&path)?;
    let located = results.iter().filter(|r| r.coordinates.is_some()).count();
    println!(
        "Analyzed {} photos ({} with GPS data, {} without)",
        results.len(),
        located,
        results.len() - located
    );

    let report_path = Path::new(report::REPORT_FILE_NAME);
    report::write_report(report_path, &results)?;
    println!("Geolocation data written to {}", report::REPORT_FILE_NAME);

    if let Some((config, recipients)) = delivery {
        let summary = mailer::send_report(&config, &recipients, report_path)?;
        println!("Report distribution: {}", summary);
    }

    Ok(())
}
