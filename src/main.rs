// Tue Jan 13 2026 - Alex

use case_harvester::{
    config::Config,
    orchestration::{RunObserver, RunReport, SourceOutcome, SourceReport},
    source::SourceDescriptor,
    utils::{format_duration, logging, pluralize, LoggingUtils},
    HarvestEngine,
};
use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Harvests case counts from configured sources", long_about = None)]
struct Args {
    #[arg(short, long)]
    config: PathBuf,

    /// Overrides the configured output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(long)]
    log_level: Option<String>,

    #[arg(long)]
    log_file: Option<PathBuf>,

    #[arg(long)]
    no_progress: bool,

    #[arg(long)]
    no_color: bool,
}

struct ProgressObserver {
    bar: Option<ProgressBar>,
}

impl ProgressObserver {
    fn new(enabled: bool) -> Self {
        Self {
            bar: enabled.then(ProgressBar::hidden),
        }
    }
}

impl RunObserver for ProgressObserver {
    fn begin(&mut self, total: usize) {
        if let Some(pb) = &self.bar {
            pb.set_length(total as u64);
            pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
            if let Ok(style) =
                ProgressStyle::default_bar().template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            {
                pb.set_style(style.progress_chars("#>-"));
            }
        }
    }

    fn source_started(&mut self, descriptor: &SourceDescriptor) {
        if let Some(pb) = &self.bar {
            pb.set_message(descriptor.name());
        }
    }

    fn source_finished(&mut self, _report: &SourceReport) {
        if let Some(pb) = &self.bar {
            pb.inc(1);
        }
    }
}

impl Drop for ProgressObserver {
    fn drop(&mut self) {
        if let Some(pb) = &self.bar {
            pb.finish_and_clear();
        }
    }
}

fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(args) {
        eprintln!("{} {:#}", "[!]".red(), e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    init_logging(&args)?;

    let mut config = Config::load(&args.config)?;
    if let Some(dir) = &args.output {
        config = config.with_output_dir(dir.clone());
    }

    let base_dir = args.config.parent().unwrap_or_else(|| Path::new("."));
    let registry = config.build_registry(base_dir);

    println!("{} Scraping data...", "[*]".blue());
    let start_time = Instant::now();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start runtime")?;

    let engine = HarvestEngine::new();
    let (results, report) = {
        let mut observer = ProgressObserver::new(!args.no_progress);
        runtime.block_on(engine.run_with_report(&registry, &mut observer))
    };

    println!(
        "{} Data scraped for {}",
        "[+]".green(),
        pluralize(results.len(), "location", "locations")
    );
    print_failures(&report);

    let written = config
        .output_manager()
        .write(&results)
        .context("Failed to write output")?;
    println!("{} Wrote {}", "[+]".green(), written.json_path.display());
    println!("{} Wrote {}", "[+]".green(), written.csv_path.display());

    println!(
        "{} {} in {}",
        "[+]".green(),
        report.summary(),
        format_duration(start_time.elapsed())
    );
    Ok(())
}

fn init_logging(args: &Args) -> anyhow::Result<()> {
    let level = match &args.log_level {
        Some(name) => LoggingUtils::level_from_str(name),
        None => LoggingUtils::level_from_verbosity(args.verbose),
    };

    if let Some(path) = &args.log_file {
        LoggingUtils::init_logger_with_file(level, path)
            .with_context(|| format!("Cannot open log file {}", path.display()))?;
        return Ok(());
    }

    if args.log_level.is_none() && args.verbose == 0 && logging::init_from_env() {
        return Ok(());
    }
    LoggingUtils::init_logger(level, !args.no_color);
    Ok(())
}

fn print_failures(report: &RunReport) {
    if report.failed() == 0 {
        return;
    }

    println!("{}", "Failed sources:".yellow().bold());
    for source in report.failures() {
        if let SourceOutcome::Failed(failure) = &source.outcome {
            println!("  {} {}", source.name.cyan(), failure.to_string().red());
        }
    }
}
