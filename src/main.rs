//! CLI entry point for the bike-share report tool.
//!
//! Provides an interactive explorer, a one-shot report command, and a sweep
//! over every city and filter combination.

use anyhow::Result;
use bikeshare_report::calendar::{DaySelector, MonthSelector};
use bikeshare_report::city::City;
use bikeshare_report::filter::TripFilter;
use bikeshare_report::loader::load_city;
use bikeshare_report::output::{write_json, write_report};
use bikeshare_report::prompt::Prompter;
use bikeshare_report::report::Report;
use bikeshare_report::session::{explore, sweep};
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_report")]
#[command(about = "Explore US bike-share trip data", long_about = None)]
struct Cli {
    /// Directory containing chicago.csv, new_york_city.csv and washington.csv
    #[arg(long, global = true, env = "BIKESHARE_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer prompts for city, month and day, then page through the results
    Explore,
    /// Print one report without prompting
    Report {
        /// chicago, "new york city" or washington
        #[arg(short, long)]
        city: City,

        /// all, or a month name
        #[arg(short, long, default_value = "all")]
        month: MonthSelector,

        /// all, or a weekday name
        #[arg(short, long, default_value = "all")]
        day: DaySelector,

        /// Print the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Build a report for every city, month and day combination
    Sweep,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/bikeshare_report.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_report.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    // Prompts go to stdout, so keep stderr quiet unless asked
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    info!(data_dir = %cli.data_dir.display(), "Starting");

    match cli.command.unwrap_or(Commands::Explore) {
        Commands::Explore => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            explore(&mut prompter, &cli.data_dir)?;
        }
        Commands::Report {
            city,
            month,
            day,
            json,
        } => {
            let dataset = load_city(&cli.data_dir, city)?;
            let (report, _) = Report::build(&dataset, TripFilter::new(month, day));

            let mut out = io::stdout().lock();
            if json {
                write_json(&mut out, &report)?;
            } else {
                write_report(&mut out, &report)?;
            }
            out.flush()?;
        }
        Commands::Sweep => {
            let rows = sweep(&cli.data_dir, &City::ALL)?;
            for row in &rows {
                info!(
                    city = %row.city,
                    month = %row.filter.month,
                    day = %row.filter.day,
                    trips = row.trip_count,
                    "Sweep combination"
                );
            }
            let empty = rows.iter().filter(|r| r.trip_count == 0).count();
            println!(
                "Built {} reports across {} cities ({} with no matching trips)",
                rows.len(),
                City::ALL.len(),
                empty
            );
        }
    }

    Ok(())
}
