use clap::Parser;

use kol_diet_planner::catalog::{load_snapshot, CatalogSnapshot};
use kol_diet_planner::cli::{Cli, Command};
use kol_diet_planner::error::{PlannerError, Result};
use kol_diet_planner::interface::{
    display_plan, display_variants, resolve_item, write_plan_csv, write_plan_json,
};
use kol_diet_planner::models::PlannerOptions;
use kol_diet_planner::planner::{self, enumerate};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", error_message(&e));
        std::process::exit(1);
    }
}

/// Message printed on failure. No-plan outcomes already describe themselves.
fn error_message(e: &PlannerError) -> String {
    if e.is_no_plan() {
        e.to_string()
    } else {
        format!("Error: {}", e)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let prices = cli.prices.exists().then_some(cli.prices.as_path());
    if prices.is_none() {
        log::warn!("Price file {:?} not found; every item will be unavailable", cli.prices);
    }

    let catalog = load_snapshot(cli.data.as_path(), prices)?;
    println!(
        "Loaded {} consumables ({} priced)",
        catalog.len(),
        catalog.priced_count()
    );

    let options = cli.options.resolve(&catalog)?;

    match cli.command.unwrap_or_default() {
        Command::Plan { csv, json } => {
            cmd_plan(&catalog, &options, csv.as_deref(), json.as_deref())
        }
        Command::Variants { item } => cmd_variants(&catalog, &options, &item),
    }
}

/// Find and display the best diet.
fn cmd_plan(
    catalog: &CatalogSnapshot,
    options: &PlannerOptions,
    csv: Option<&std::path::Path>,
    json: Option<&std::path::Path>,
) -> Result<()> {
    println!(
        "Planning for {}/{}/{} organ space at {:.0} meat per adventure...",
        options.stomach, options.liver, options.spleen, options.value_of_adventure
    );

    let plan = planner::plan(catalog, options)?;

    display_plan(&plan, catalog, options);

    if let Some(path) = csv {
        write_plan_csv(&plan, path)?;
        println!("Wrote diet to {:?}", path);
    }
    if let Some(path) = json {
        write_plan_json(&plan, path)?;
        println!("Wrote plan to {:?}", path);
    }

    Ok(())
}

/// Show every priced variant of one item.
fn cmd_variants(catalog: &CatalogSnapshot, options: &PlannerOptions, query: &str) -> Result<()> {
    let id = resolve_item(catalog, query)?;
    let item = catalog
        .get(id)
        .ok_or_else(|| PlannerError::ItemNotFound(query.to_string()))?;

    let variants = enumerate(item, catalog, options);
    display_variants(&variants, catalog);

    Ok(())
}
