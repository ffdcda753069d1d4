//! `estonian-holidays` CLI -- compute Estonian holidays and write the iCalendar feed.
//!
//! ## Usage
//!
//! ```sh
//! # Write docs/estonian-holidays.ics for the window around this year
//! estonian-holidays
//!
//! # Pin the current year and choose the output path
//! estonian-holidays generate --year 2025 -o public/holidays.ics
//!
//! # Print the feed instead of writing it
//! estonian-holidays generate --stdout
//!
//! # List the computed events (plain or JSON)
//! estonian-holidays list --year 2025 --json
//!
//! # Easter Sunday for a year
//! estonian-holidays easter 2025
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use holiday_engine::feed::{events_for, DEFAULT_OUTPUT_DIR, DEFAULT_OUTPUT_FILE};
use holiday_engine::{
    easter_sunday, generate, write_feed, Clock, FeedMetadata, FeedSummary, FixedClock,
    SystemClock,
};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "estonian-holidays",
    version,
    about = "Estonian public holidays and shortened work days as an iCalendar feed",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log filter (e.g. "debug", "holiday_engine=trace"); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Args, Clone)]
struct YearArg {
    /// Treat this as the current year instead of reading the system clock
    #[arg(
        long,
        env = "ESTONIAN_HOLIDAYS_YEAR",
        value_parser = clap::value_parser!(i32).range(1584..=9994)
    )]
    year: Option<i32>,
}

#[derive(Args, Clone)]
struct GenerateArgs {
    /// Output file
    #[arg(short, long, env = "ESTONIAN_HOLIDAYS_OUTPUT")]
    output: Option<PathBuf>,

    /// Print the feed to stdout instead of writing a file (ignores --output)
    #[arg(long)]
    stdout: bool,

    #[command(flatten)]
    year: YearArg,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the iCalendar feed (default)
    Generate(GenerateArgs),
    /// List the computed events in chronological order
    List {
        /// Emit JSON instead of one line per event
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        year: YearArg,
    },
    /// Print the date of Easter Sunday
    Easter {
        #[arg(value_parser = clap::value_parser!(i32).range(1583..=9999))]
        year: i32,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    if let Err(err) = run(cli) {
        tracing::debug!(error = ?err, "calendar generation failed");
        eprintln!("❌ Error generating calendar: {err:#}");
        process::exit(1);
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Generate(args)) => run_generate(args),
        Some(Commands::List { json, year }) => run_list(json, &year),
        Some(Commands::Easter { year }) => {
            println!("{}", easter_sunday(year));
            Ok(())
        }
        None => run_generate(cli.generate),
    }
}

/// The clock for window selection: `--year` pins it, otherwise the system
/// clock is read once.
fn clock(year: &YearArg) -> Result<FixedClock> {
    match year.year {
        Some(y) => FixedClock::for_year(y)
            .with_context(|| format!("Year {y} cannot be represented")),
        None => Ok(FixedClock(SystemClock.today())),
    }
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let clock = clock(&args.year)?;
    tracing::info!(year = clock.current_year(), "generating Estonian holiday calendar");

    let feed = generate(&clock, &FeedMetadata::default()).context("Failed to create calendar")?;

    if args.stdout {
        print!("{}", feed.document);
        return Ok(());
    }

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR).join(DEFAULT_OUTPUT_FILE));
    write_feed(&path, &feed.document).context("Failed to save calendar")?;

    println!("✅ Calendar generated successfully: {}", path.display());
    print_summary(&feed.summary);
    Ok(())
}

fn print_summary(summary: &FeedSummary) {
    println!("📅 Total events: {}", summary.total);
    println!("   - Public holidays (day offs): {}", summary.day_offs);
    println!("   - Shortened work days: {}", summary.shortened);
    if let (Some(first), Some(last)) = (summary.first_year, summary.last_year) {
        println!("   - Years covered: {first}-{last}");
    }
}

fn run_list(json: bool, year: &YearArg) -> Result<()> {
    let clock = clock(year)?;
    let events = events_for(&clock);

    if json {
        let out = serde_json::to_string_pretty(&events).context("Failed to serialize events")?;
        println!("{out}");
        return Ok(());
    }

    for event in &events {
        println!(
            "{}  {}  {}",
            event.start,
            event.busy_status.as_str(),
            event.title
        );
    }
    Ok(())
}
