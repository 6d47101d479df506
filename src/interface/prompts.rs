use dialoguer::{Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::catalog::{CatalogProvider, CatalogSnapshot};
use crate::error::{PlannerError, Result};
use crate::models::{PlannerOptions, PlayerClass};

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.9;

/// Resolve an item id or name to an id.
///
/// Numeric queries are taken as ids. Names match exactly (case-insensitive)
/// first, then by best fuzzy similarity above the threshold.
pub fn resolve_item(catalog: &CatalogSnapshot, query: &str) -> Result<u32> {
    let query = query.trim();
    if let Ok(id) = query.parse::<u32>() {
        return Ok(id);
    }

    if let Some(item) = catalog.find_by_name(query) {
        return Ok(item.id);
    }

    let needle = query.to_lowercase();
    catalog
        .consumables()
        .iter()
        .map(|c| (c, jaro_winkler(&c.name.to_lowercase(), &needle)))
        .filter(|(_, score)| *score >= FUZZY_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(c, _)| c.id)
        .ok_or_else(|| PlannerError::ItemNotFound(query.to_string()))
}

/// Parse an `ITEM=N` usage limit.
pub fn parse_limit(catalog: &CatalogSnapshot, raw: &str) -> Result<(u32, i64)> {
    let (item, cap) = raw
        .rsplit_once('=')
        .ok_or_else(|| PlannerError::InvalidInput(format!("expected ITEM=N, got '{}'", raw)))?;

    let cap: i64 = cap
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("invalid limit in '{}'", raw)))?;

    Ok((resolve_item(catalog, item)?, cap))
}

fn prompt_number(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number".to_string()))
}

fn prompt_capacity(prompt: &str, default: i64) -> Result<i64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for the player's class.
pub fn prompt_class(current: Option<PlayerClass>) -> Result<Option<PlayerClass>> {
    let mut items: Vec<String> = vec!["(none)".to_string()];
    items.extend(PlayerClass::ALL.iter().map(|c| c.to_string()));

    let default = current
        .and_then(|c| PlayerClass::ALL.iter().position(|x| *x == c))
        .map(|i| i + 1)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Class")
        .items(&items)
        .default(default)
        .interact()?;

    Ok(selection.checked_sub(1).map(|i| PlayerClass::ALL[i]))
}

/// Prompt for the boolean bonuses that apply this session.
pub fn prompt_toggles(options: &mut PlannerOptions) -> Result<()> {
    let labels = [
        "Pizza Lover",
        "Tuxedo shirt",
        "Ode to Booze",
        "Saucemaven",
        "Sweet Synthesis",
        "Mayo Clinic",
        "Mafia pinky ring",
    ];
    let defaults = [
        options.pizza_lover,
        options.tuxedo_shirt,
        options.ode_to_booze,
        options.saucemaven,
        options.sweet_synthesis,
        options.mayo_clinic,
        options.mafia_pinky_ring,
    ];

    let chosen = MultiSelect::new()
        .with_prompt("Active bonuses (space to toggle)")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    let on = |i: usize| chosen.contains(&i);
    options.pizza_lover = on(0);
    options.tuxedo_shirt = on(1);
    options.ode_to_booze = on(2);
    options.saucemaven = on(3);
    options.sweet_synthesis = on(4);
    options.mayo_clinic = on(5);
    options.mafia_pinky_ring = on(6);

    Ok(())
}

/// Collect planner options interactively, starting from `options`.
pub fn collect_planner_options(mut options: PlannerOptions) -> Result<PlannerOptions> {
    options.value_of_adventure =
        prompt_number("Value of an adventure (meat)", options.value_of_adventure)?;
    options.base_meat = prompt_number("Base meat drop", options.base_meat)?;
    options.stomach = prompt_capacity("Stomach space", options.stomach)?;
    options.liver = prompt_capacity("Liver space", options.liver)?;
    options.spleen = prompt_capacity("Spleen space", options.spleen)?;
    prompt_toggles(&mut options)?;
    options.class = prompt_class(options.class)?;

    options.validate()?;
    Ok(options)
}
