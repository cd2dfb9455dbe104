//! `festplan` CLI — pick a conflict-free festival schedule from a showings catalog.
//!
//! ## Usage
//!
//! ```sh
//! # Show the numbered catalog
//! festplan list --catalog festival.json
//!
//! # Prompt for items, then print every conflict-free schedule
//! festplan plan --catalog festival.json
//!
//! # Non-interactive, restricted to two days, as JSON
//! festplan plan --catalog festival.json --select 1,3,4 \
//!     --available 2026-03-14,2026-03-15 --format json
//!
//! # Only count the schedules
//! festplan plan --catalog festival.json --select 1,3,4 --count
//!
//! # Explain which showings of the selected items overlap
//! festplan conflicts --catalog festival.json --select 1,3
//!
//! # Rewrite a catalog with every end time resolved
//! festplan normalize --catalog festival.json -o resolved.json
//! ```
//!
//! Logging goes to stderr and follows `RUST_LOG` (default `warn`, `-v` for `debug`).

mod config;
mod prompt;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::debug;
use schedule_engine::{
    count_schedules, filter_selection, find_conflicts, generate, generate_parallel, parse_indices,
    Catalog, Conflict, DesiredSelection, Item, Schedule, Showing,
};

use crate::config::FileConfig;

#[derive(Parser)]
#[command(
    name = "festplan",
    version,
    about = "Build conflict-free schedules from a festival catalog"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct CatalogArgs {
    /// Catalog JSON file
    #[arg(short, long)]
    catalog: PathBuf,
    /// Minutes assumed for showings with no end time or duration
    #[arg(long)]
    default_duration: Option<u32>,
    /// TOML config file with defaults
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the numbered catalog
    List {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// Generate every conflict-free schedule for the selected items
    Plan {
        #[command(flatten)]
        catalog: CatalogArgs,
        /// Catalog numbers to schedule, e.g. "1,3,4" (prompts if omitted)
        #[arg(short, long)]
        select: Option<String>,
        /// Comma-separated dates you can attend (YYYY-MM-DD); all dates if omitted
        #[arg(long, value_delimiter = ',')]
        available: Vec<NaiveDate>,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
        /// Explore first-level choices on separate threads
        #[arg(long)]
        parallel: bool,
        /// Print only the number of schedules (sequential search)
        #[arg(long, conflicts_with = "parallel")]
        count: bool,
    },
    /// List overlapping showings between the selected items
    Conflicts {
        #[command(flatten)]
        catalog: CatalogArgs,
        /// Catalog numbers to compare, e.g. "1,3"
        #[arg(short, long)]
        select: String,
        /// Comma-separated dates you can attend (YYYY-MM-DD); all dates if omitted
        #[arg(long, value_delimiter = ',')]
        available: Vec<NaiveDate>,
    },
    /// Rewrite a catalog with every end time resolved
    Normalize {
        #[command(flatten)]
        catalog: CatalogArgs,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::List { catalog } => {
            let (catalog, _) = load_catalog(&catalog)?;
            print!("{}", render_catalog(catalog.items()));
        }
        Commands::Plan {
            catalog,
            select,
            available,
            format,
            parallel,
            count,
        } => {
            let (catalog, config) = load_catalog(&catalog)?;
            let selection = match select {
                Some(raw) => select_items(catalog.items(), &raw)?,
                None => {
                    let stdin = io::stdin();
                    let mut stderr = io::stderr();
                    write!(stderr, "{}", render_catalog(catalog.items()))?;
                    prompt::prompt_selection(catalog.items(), &mut stdin.lock(), &mut stderr)?
                }
            };
            let constraint = config.availability(&available);
            debug!(
                "planning {} items over {} available dates",
                selection.len(),
                constraint.available_dates.len()
            );

            let items = filter_selection(&selection.items(), &constraint)
                .context("Failed to plan schedules")?;

            if count {
                println!("{}", count_schedules(&items)?);
                return Ok(());
            }

            let schedules = if parallel {
                generate_parallel(&items)?
            } else {
                generate(&items)?
            };

            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&schedules)?),
                Format::Text => print!("{}", render_plan(&schedules, &items)),
            }
        }
        Commands::Conflicts {
            catalog,
            select,
            available,
        } => {
            let (catalog, config) = load_catalog(&catalog)?;
            let selection = select_items(catalog.items(), &select)?;
            let items = filter_selection(&selection.items(), &config.availability(&available))
                .context("Failed to compare selection")?;
            print!("{}", render_conflicts(&find_conflicts(&items)));
        }
        Commands::Normalize { catalog, output } => {
            let (catalog, _) = load_catalog(&catalog)?;
            match output {
                Some(path) => catalog
                    .save(&path)
                    .with_context(|| format!("Failed to write file: {}", path.display()))?,
                None => println!("{}", catalog.to_json()?),
            }
        }
    }

    Ok(())
}

fn load_catalog(args: &CatalogArgs) -> Result<(Catalog, FileConfig)> {
    let config = FileConfig::load(args.config.as_deref())?;
    let options = config.catalog_options(args.default_duration);
    let catalog = Catalog::load(&args.catalog, &options)
        .with_context(|| format!("Failed to load catalog: {}", args.catalog.display()))?;
    Ok((catalog, config))
}

fn select_items(items: &[Item], raw: &str) -> Result<DesiredSelection> {
    let indices = parse_indices(raw)?;
    Ok(DesiredSelection::from_indices(items, &indices)?)
}

fn showing_line(showing: &Showing) -> String {
    format!(
        "{} {}-{}  {}",
        showing.date,
        showing.start.format("%H:%M"),
        showing.end.format("%H:%M"),
        showing.location
    )
}

fn render_catalog(items: &[Item]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, item.name));
        for showing in &item.showings {
            out.push_str(&format!("   {}\n", showing_line(showing)));
        }
    }
    out
}

fn render_plan(schedules: &[Schedule], items: &[Item]) -> String {
    if schedules.is_empty() {
        let mut out = String::from("No conflict-free schedule exists for this selection.\n");
        let conflicts = find_conflicts(items);
        if !conflicts.is_empty() {
            out.push('\n');
            out.push_str(&render_conflicts(&conflicts));
        }
        return out;
    }

    let noun = if schedules.len() == 1 { "schedule" } else { "schedules" };
    let mut out = format!("Found {} {}.\n", schedules.len(), noun);
    for (i, schedule) in schedules.iter().enumerate() {
        out.push_str(&format!("\nSchedule {}:\n", i + 1));
        for entry in schedule.iter() {
            out.push_str(&format!("  {}: {}\n", entry.item, showing_line(&entry.showing)));
        }
    }
    out
}

fn render_conflicts(conflicts: &[Conflict]) -> String {
    if conflicts.is_empty() {
        return "No conflicts.\n".to_string();
    }
    let mut out = String::from("Conflicts:\n");
    for c in conflicts {
        out.push_str(&format!(
            "  {} ({}) overlaps {} ({}) by {} min\n",
            c.item_a,
            showing_line(&c.showing_a),
            c.item_b,
            showing_line(&c.showing_b),
            c.overlap_minutes
        ));
    }
    out
}
