pub mod achievements;
pub mod aggregate;
pub mod cli;
pub mod columns;
pub mod derive;
pub mod error;
pub mod io_utils;
pub mod report;
pub mod roster;
pub mod table;
pub mod webhook;

use std::{env, path::Path, sync::OnceLock};

use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, info, warn};

use crate::{
    cli::{Cli, Commands},
    derive::WarRecord,
};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("nodewar_stats", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Report(args) => handle_report(&args),
        Commands::Stats(args) => handle_stats(&args),
        Commands::Check(args) => handle_check(&args),
    }
}

fn load_war_table(
    input: &Path,
    delimiter: Option<u8>,
    encoding_label: Option<&str>,
) -> Result<Vec<WarRecord>> {
    let delimiter = io_utils::resolve_input_delimiter(input, delimiter);
    let encoding = io_utils::resolve_encoding(encoding_label)?;
    let records = roster::load_roster(input, delimiter, encoding)?;
    Ok(derive::derive_records(records))
}

fn handle_report(args: &cli::ReportArgs) -> Result<()> {
    let meta = report::WarMeta::new(&args.date, &args.node, &args.outcome)?;
    let records = load_war_table(&args.input, args.delimiter, args.input_encoding.as_deref())?;
    info!(
        "Loaded {} player row(s) from '{}'",
        records.len(),
        args.input.display()
    );

    let summaries = aggregate::summarize(&records);
    let earned = achievements::evaluate(&records);
    info!(
        "Summarized {} column(s); {} achievement(s) earned",
        summaries.len(),
        earned.len()
    );

    let payload = report::build_payload(&meta, records.len(), &summaries, &earned);
    match args.webhook.as_deref() {
        Some(url) => match webhook::deliver(url, &payload) {
            Ok(()) => info!("Report delivered to webhook"),
            Err(err) => {
                warn!("{err}; printing report to console instead");
                print!("{}", report::render_console(&payload));
            }
        },
        None => {
            info!("No webhook configured; printing report to console");
            print!("{}", report::render_console(&payload));
        }
    }
    Ok(())
}

fn handle_stats(args: &cli::StatsArgs) -> Result<()> {
    let records = load_war_table(&args.input, args.delimiter, args.input_encoding.as_deref())?;
    let summaries = aggregate::summarize(&records);
    let headers = vec![
        "column".to_string(),
        "statistic".to_string(),
        "value".to_string(),
        "players".to_string(),
    ];
    table::print_table(&headers, &aggregate::summary_rows(&summaries));
    info!("Computed superlatives for {} column(s)", summaries.len());

    if args.achievements {
        let earned = achievements::evaluate(&records);
        let headers = vec![
            "achievement".to_string(),
            "earned".to_string(),
            "players".to_string(),
        ];
        println!();
        table::print_table(&headers, &achievements::achievement_rows(&earned, records.len()));
        info!("{} achievement(s) earned", earned.len());
    }
    Ok(())
}

fn handle_check(args: &cli::CheckArgs) -> Result<()> {
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    for input in &args.inputs {
        let delimiter = io_utils::resolve_input_delimiter(input, args.delimiter);
        let records = roster::load_roster(input, delimiter, encoding)?;
        info!(
            "✓ {:?}: {} player row(s) match the war schema",
            input,
            records.len()
        );
    }
    Ok(())
}
