//! lazer-typeahead: search item lists and run picker sessions from the terminal.

mod output;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lazer_core::config::Config;
use lazer_core::error::{exit_codes, Error, ResultExt};
use lazer_search::{search_scored, Corpus, Item, SearchKeys};
use lazer_telemetry::{metrics, TelemetryConfig, Timer};
use lazer_typeahead::{SelectionEvent, SelectorOptions, TypeaheadSelector};
use output::{format_duration, format_item, Status};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "lazer-typeahead")]
#[command(about = "Typo-tolerant search and single-select picking over item lists")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a .lazer.toml configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search an item file and print the visible list
    Search {
        /// JSON array of {"text", "value"} objects
        items: PathBuf,
        /// Query; omit to list everything
        query: Option<String>,
        /// Maximum ranked results
        #[arg(short, long)]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Print timing and counters to stderr
        #[arg(long)]
        stats: bool,
    },
    /// Run a picker session driven by commands on stdin
    Pick {
        /// JSON array of {"text", "value"} objects
        items: PathBuf,
        /// Current selection
        #[arg(short, long)]
        selected: Option<String>,
        /// Picker heading
        #[arg(short, long)]
        title: Option<String>,
        /// Print the terminal event as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    fn json(&self) -> bool {
        match self {
            Commands::Search { json, .. } | Commands::Pick { json, .. } => *json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.command.json();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report(&e, json),
    };

    let mut telemetry = TelemetryConfig::from(&config.schema.telemetry);
    if cli.verbose {
        telemetry = telemetry.verbose();
    }
    let _guard = match lazer_telemetry::init_with_config(telemetry) {
        Ok(guard) => guard,
        Err(e) => {
            Status::error(&format!("{:#}", e));
            return ExitCode::from(exit_codes::FAILURE);
        }
    };

    // `_guard` must drop before exit or the log file loses buffered lines.
    match run(cli.command, &config) {
        Ok(code) => ExitCode::from(code),
        Err(err) => match err.downcast_ref::<Error>() {
            Some(e) => report(e, json),
            None => {
                Status::error(&format!("{:#}", err));
                ExitCode::from(exit_codes::FAILURE)
            }
        },
    }
}

fn run(command: Commands, config: &Config) -> Result<u8> {
    match command {
        Commands::Search { items, query, limit, json, stats } => {
            let items = load_items(&items)?;

            let mut options = SelectorOptions::from(&config.schema.typeahead);
            if let Some(limit) = limit {
                options.limit = limit;
            }
            options.validate().map_err(Error::from)?;

            let corpus = Corpus::with_keys(items, SearchKeys::default(), options.search);
            let timer = Timer::start("search_ms");
            let results = search_scored(&corpus, query.as_deref(), options.limit);
            let elapsed = timer.stop();
            metrics().increment("searches");

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for result in &results {
                    println!("{:>5}  {}", result.score, format_item(result.item));
                }
                Status::success(&format!(
                    "{} of {} items in {}",
                    results.len(),
                    corpus.len(),
                    format_duration(elapsed)
                ));
            }

            if stats {
                eprintln!("{}", serde_json::to_string_pretty(&metrics().export_json())?);
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Pick { items, selected, title, json } => {
            let items = load_items(&items)?;

            let typeahead = &config.schema.typeahead;
            let mut picker =
                TypeaheadSelector::from_config(items, selected, typeahead).map_err(Error::from)?;
            if let Some(title) = title {
                picker = picker.with_title(title);
            }

            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            let event = session::run(&mut picker, stdin.lock(), &mut stdout)?;

            if json {
                println!("{}", serde_json::to_string(&event)?);
            } else {
                match &event {
                    SelectionEvent::Change(Some(value)) => {
                        Status::success(&format!("Selected {}", value));
                    }
                    SelectionEvent::Change(None) => {
                        Status::warning("Confirmed with nothing selected");
                    }
                    SelectionEvent::Cancel => Status::warning("Cancelled"),
                }
            }

            if event == SelectionEvent::Cancel {
                return Ok(exit_codes::CANCELLED);
            }
            Ok(exit_codes::SUCCESS)
        }
    }
}

/// Read and parse an item file.
fn load_items(path: &Path) -> lazer_core::Result<Vec<Item>> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }
    let content = std::fs::read_to_string(path)?;
    let items: Vec<Item> = serde_json::from_str(&content)
        .map_err(Error::from)
        .context(format!("While reading {}", path.display()))?;

    tracing::debug!(path = %path.display(), items = items.len(), "Items loaded");
    Ok(items)
}

/// Print `err` (as an error report when `json` is set) and pick the exit status.
fn report(err: &Error, json: bool) -> ExitCode {
    match serde_json::to_string(&err.to_report()) {
        Ok(line) if json => eprintln!("{}", line),
        _ => Status::error(&err.to_string()),
    }
    ExitCode::from(exit_codes::for_code(err.code))
}
