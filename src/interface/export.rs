use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::Plan;

/// Write the diet to a CSV file.
pub fn write_plan_csv(plan: &Plan, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["key", "item_id", "quantity", "turns", "profit"])?;

    for entry in &plan.diet {
        wtr.write_record([
            entry.key.clone(),
            entry.item_id.map(|id| id.to_string()).unwrap_or_default(),
            entry.quantity.to_string(),
            entry.turns.to_string(),
            format!("{:.2}", entry.profit),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the plan to a JSON file.
pub fn write_plan_json(plan: &Plan, path: &Path) -> Result<()> {
    let json = serde_json::json!({
        "profit": plan.profit,
        "turns": plan.turns,
        "diet": plan.diet.iter().map(|e| {
            serde_json::json!({
                "key": e.key,
                "itemId": e.item_id,
                "quantity": e.quantity,
                "turns": e.turns,
                "profit": e.profit,
            })
        }).collect::<Vec<_>>(),
    });

    fs::write(path, serde_json::to_string_pretty(&json)?)?;
    Ok(())
}
