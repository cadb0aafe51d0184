mod cli;
mod config;
mod logging;
mod report;

use std::process::ExitCode;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use pagecheck_engine::{AtomicFileWriter, PageLoader, PageValidator};
use pagecheck_logging::{pagecheck_error, pagecheck_info};

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::report::{exit_code, RunReport, EXIT_UNAVAILABLE};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::initialize(cli.log, cli.verbose);

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            pagecheck_error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_UNAVAILABLE)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<u8> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    cli.apply(&mut config);

    let settings = config.http_settings();
    let validator =
        PageValidator::with_settings(settings.clone(), config.endpoint()?, config.badge_style())
            .context("building validator client")?;
    let loader = PageLoader::new(settings);

    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    let (page, outcome) = runtime.block_on(async {
        let mut page = loader
            .load(&cli.target)
            .await
            .with_context(|| format!("loading {}", cli.target))?;
        let outcome = validator.run(&mut page).await;
        anyhow::Ok((page, outcome))
    })?;

    let annotated = match &config.output_dir {
        Some(dir) => {
            let path = AtomicFileWriter::new(dir.clone())
                .write_page(&page)
                .with_context(|| format!("writing annotated page to {}", dir.display()))?;
            pagecheck_info!("annotated page written to {}", path.display());
            Some(path)
        }
        None => None,
    };

    let report = RunReport::new(&cli.target, &outcome, annotated.as_deref(), Utc::now());
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }

    Ok(exit_code(&outcome))
}
