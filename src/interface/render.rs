use crate::catalog::CatalogSnapshot;
use crate::models::{Plan, PlannerOptions, Variant};
use crate::planner::constants::SWEET_SYNTHESIS_KEY;

/// Serving options part of a variable key, e.g. `utensil=3323,munchies`.
pub fn serving_suffix(key: &str) -> &str {
    key.find('(')
        .map(|start| key[start + 1..].trim_end_matches(')'))
        .unwrap_or("")
}

/// Human-readable label for a diet entry.
fn entry_label(catalog: &CatalogSnapshot, key: &str, item_id: Option<u32>) -> String {
    match item_id {
        Some(id) => catalog.item_name(id),
        None if key == SWEET_SYNTHESIS_KEY => "Sweet Synthesis".to_string(),
        None => key.to_string(),
    }
}

/// Display a plan as an aligned table.
pub fn display_plan(plan: &Plan, catalog: &CatalogSnapshot, options: &PlannerOptions) {
    if plan.is_empty() {
        println!("Nothing is worth consuming at this value of adventure.");
        return;
    }

    println!();
    println!("=== Diet Plan ===");
    println!();

    let labels: Vec<String> = plan
        .diet
        .iter()
        .map(|e| entry_label(catalog, &e.key, e.item_id))
        .collect();
    let max_name_len = labels.iter().map(|l| l.len()).max().unwrap_or(10);

    for (entry, label) in plan.diet.iter().zip(&labels) {
        let suffix = serving_suffix(&entry.key);
        let servings = if suffix.is_empty() {
            String::new()
        } else {
            format!("  [{}]", suffix)
        };

        println!(
            "{:>3} x {:<width$} - {:>3} adv | {:>10.0} meat each{}",
            entry.quantity,
            label,
            entry.turns,
            entry.profit,
            servings,
            width = max_name_len
        );
    }

    let (stomach, liver, spleen) = plan.organ_usage();

    println!();
    println!("--- Summary ---");
    println!("Total profit: {:.0}", plan.profit);
    println!("Total adventures: {}", plan.turns);
    println!("Stomach: {}/{}", stomach, options.stomach);
    println!("Liver: {}/{}", liver, options.liver);
    println!("Spleen: {}/{}", spleen, options.spleen);
    println!();
}

/// Display the priced variants of one item.
pub fn display_variants(variants: &[Variant], catalog: &CatalogSnapshot) {
    let Some(first) = variants.first() else {
        println!("No profitable way to consume this item.");
        return;
    };

    println!();
    println!("=== {} ({} variants) ===", catalog.item_name(first.item_id()), variants.len());
    println!();

    for variant in variants {
        println!(
            "  {:<48} {:>3} adv | S:{} L:{} P:{} | {:.0} meat",
            variant.key.to_string(),
            variant.turns,
            variant.stomach,
            variant.liver,
            variant.spleen,
            variant.profit
        );
    }

    println!();
}
