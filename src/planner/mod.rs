pub mod attributes;
pub mod constants;
pub mod enumeration;
pub mod evaluation;
pub mod interpret;
pub mod model;
pub mod solver;

pub use attributes::{parse_notes, tokenize_notes, Attributes};
pub use constants::*;
pub use enumeration::{enumerate, enumerate_all, serving_options};
pub use evaluation::{effect_profit, evaluate};
pub use interpret::interpret;
pub use model::{build, Constraint, ConstraintTarget, Model, ModelVariable};
pub use solver::{Assignment, MicroLpSolver, Solver};

use crate::catalog::CatalogProvider;
use crate::error::Result;
use crate::models::{Plan, PlannerOptions};

/// Build the integer program for a catalog snapshot.
pub fn build_model(catalog: &impl CatalogProvider, options: &PlannerOptions) -> Result<Model> {
    options.validate()?;
    let variants = enumerate_all(catalog, options);
    build(variants, options, catalog.usage_limits())
}

/// Find the most profitable diet with the given solver.
pub fn plan_with(
    catalog: &impl CatalogProvider,
    options: &PlannerOptions,
    solver: &impl Solver,
) -> Result<Plan> {
    let model = build_model(catalog, options)?;
    let assignment = solver.solve(&model)?;
    let plan = interpret(&model, &assignment)?;

    log::info!(
        "Plan: {} entries, {} turns, {:.0} profit",
        plan.diet.len(),
        plan.turns,
        plan.profit
    );

    Ok(plan)
}

/// Find the most profitable diet.
pub fn plan(catalog: &impl CatalogProvider, options: &PlannerOptions) -> Result<Plan> {
    plan_with(catalog, options, &MicroLpSolver)
}
