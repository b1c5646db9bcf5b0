use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use indicatif_log_bridge::LogWrapper;

use iobfeat::cli::Cli;
use iobfeat::pipeline::run;

fn main() -> std::io::Result<()> {
    if let Err(err) = run_cli() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
    Ok(())
}

fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let multi = init_logging()?;
    let config = cli.to_config()?;

    let progress_bar = multi.add(create_progress_bar(cli.quiet));
    let report = run(&config, &progress_bar)?;
    progress_bar.finish_with_message(format!("{} sentences processed", report.stats.sentences));

    println!(
        "Features for {} sentences written to {}",
        report.stats.sentences, report.output
    );
    Ok(())
}

fn init_logging() -> Result<MultiProgress> {
    let logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .build();
    let level = logger.filter();
    let multi = MultiProgress::new();
    LogWrapper::new(multi.clone(), logger).try_init()?;
    log::set_max_level(level);
    Ok(multi)
}

fn create_progress_bar(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let progress_bar = ProgressBar::new_spinner();
    progress_bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} sentences {msg}")
            .expect("Failed to create progress bar style"),
    );
    progress_bar.enable_steady_tick(Duration::from_millis(100));
    progress_bar
}
