use std::collections::HashMap;

use crate::error::{PlannerError, Result};
use crate::models::{DietEntry, Plan};
use crate::planner::model::{Model, ModelVariable};
use crate::planner::solver::Assignment;

/// Turn a solver assignment into a plan.
///
/// Turns are recomputed from the model rather than taken from the solver.
/// Entries keep the solver's order; zero quantities are dropped.
pub fn interpret(model: &Model, assignment: &Assignment) -> Result<Plan> {
    let by_key: HashMap<&str, &ModelVariable> = model
        .variables
        .iter()
        .map(|v| (v.key.as_str(), v))
        .collect();

    let mut diet = Vec::new();
    for (key, quantity) in &assignment.quantities {
        if *quantity == 0 {
            continue;
        }
        let variable = by_key
            .get(key.as_str())
            .ok_or_else(|| PlannerError::Solver(format!("unknown variable in solution: {}", key)))?;

        diet.push(DietEntry {
            key: key.clone(),
            item_id: variable.tags.item,
            quantity: *quantity,
            turns: variable.turns,
            profit: variable.profit,
            stomach: variable.stomach,
            liver: variable.liver,
            spleen: variable.spleen,
        });
    }

    let turns = diet.iter().map(DietEntry::total_turns).sum();

    Ok(Plan {
        profit: assignment.objective,
        turns,
        diet,
    })
}
