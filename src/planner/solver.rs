use good_lp::{
    constraint, microlp, variable, Expression, ProblemVariables, ResolutionError, Solution,
    SolverModel, Variable,
};

use crate::error::{PlannerError, Result};
use crate::planner::model::Model;

/// An optimal integer assignment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Assignment {
    /// Objective value of the assignment.
    pub objective: f64,
    /// Variables with positive quantity, in model order.
    pub quantities: Vec<(String, u32)>,
}

/// An integer programming backend.
pub trait Solver {
    /// Maximize the model's objective over non-negative integers.
    ///
    /// Either returns a complete optimum or fails; there are no partial results.
    fn solve(&self, model: &Model) -> Result<Assignment>;
}

/// Pure Rust branch and bound through `good_lp`'s microlp backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct MicroLpSolver;

/// Smallest objective gain that counts as an improving direction.
const RAY_TOLERANCE: f64 = 1e-6;

/// Rows with at least one non-zero coefficient, as `(terms, max)`.
///
/// A row with no terms reads `0 <= max`, so a negative max is infeasible.
fn submitted_rows(model: &Model, handles: &[Variable]) -> Result<Vec<(Vec<(f64, Variable)>, i64)>> {
    let mut rows = Vec::new();
    for row in &model.constraints {
        let terms: Vec<(f64, Variable)> = model
            .variables
            .iter()
            .zip(handles)
            .map(|(v, h)| (v.coefficient(row.target) as f64, *h))
            .filter(|(k, _)| *k != 0.0)
            .collect();

        if terms.is_empty() {
            if row.max < 0 {
                return Err(PlannerError::Infeasible);
            }
            continue;
        }
        rows.push((terms, row.max));
    }
    Ok(rows)
}

fn resolution_error(e: ResolutionError) -> PlannerError {
    log::warn!("Solver failed: {}", e);
    match e {
        ResolutionError::Infeasible => PlannerError::Infeasible,
        ResolutionError::Unbounded => PlannerError::Unbounded,
        other => PlannerError::Solver(other.to_string()),
    }
}

/// Whether some non-negative direction raises profit without using any
/// capped resource.
///
/// Bounded LP over `0 <= d <= 1` with every row's right-hand side set to 0.
/// A feasible model with such a direction has no finite optimum.
fn has_improving_ray(model: &Model) -> Result<bool> {
    let mut vars = ProblemVariables::new();
    let handles: Vec<Variable> = model
        .variables
        .iter()
        .map(|_| vars.add(variable().min(0).max(1)))
        .collect();

    let objective: Expression = model
        .variables
        .iter()
        .zip(&handles)
        .map(|(v, h)| v.profit * *h)
        .sum();

    let mut problem = vars.maximise(objective).using(microlp);
    for (terms, _) in submitted_rows(model, &handles)? {
        let lhs: Expression = terms.into_iter().map(|(k, h)| k * h).sum();
        problem = problem.with(constraint!(lhs <= 0.0));
    }

    let solution = problem.solve().map_err(resolution_error)?;
    let gain: f64 = model
        .variables
        .iter()
        .zip(&handles)
        .map(|(v, h)| v.profit * solution.value(*h))
        .sum();
    Ok(gain > RAY_TOLERANCE)
}

impl Solver for MicroLpSolver {
    fn solve(&self, model: &Model) -> Result<Assignment> {
        if model.variables.is_empty() {
            // Only constant rows remain: 0 <= max
            if model.constraints.iter().any(|c| c.max < 0) {
                return Err(PlannerError::Infeasible);
            }
            return Ok(Assignment::default());
        }

        let mut vars = ProblemVariables::new();
        let handles: Vec<Variable> = model
            .variables
            .iter()
            .map(|_| vars.add(variable().integer().min(0)))
            .collect();

        let rows = submitted_rows(model, &handles)?;

        // The backend clamps integer variables instead of reporting an
        // unbounded objective, so unboundedness is decided here.
        let unbounded = has_improving_ray(model)?;
        let origin_feasible = rows.iter().all(|(_, max)| *max >= 0);
        if unbounded && origin_feasible {
            log::warn!("Model objective is unbounded");
            return Err(PlannerError::Unbounded);
        }

        let objective: Expression = model
            .variables
            .iter()
            .zip(&handles)
            .map(|(v, h)| v.profit * *h)
            .sum();

        let mut problem = vars.maximise(objective).using(microlp);
        for (terms, max) in rows {
            let lhs: Expression = terms.into_iter().map(|(k, h)| k * h).sum();
            let max = max as f64;
            problem = problem.with(constraint!(lhs <= max));
        }

        let solution = problem.solve().map_err(resolution_error)?;

        // Feasible with an improving direction: no finite optimum
        if unbounded {
            log::warn!("Model objective is unbounded");
            return Err(PlannerError::Unbounded);
        }

        let rounded: Vec<u32> = handles
            .iter()
            .map(|h| solution.value(*h).round().max(0.0) as u32)
            .collect();

        if !model.is_feasible(&rounded) {
            return Err(PlannerError::Solver(
                "rounded solution violates a constraint".to_string(),
            ));
        }

        let mut objective = 0.0;
        let mut quantities = Vec::new();
        for (v, qty) in model.variables.iter().zip(rounded) {
            if qty > 0 {
                objective += v.profit * f64::from(qty);
                quantities.push((v.key.clone(), qty));
            }
        }

        Ok(Assignment {
            objective,
            quantities,
        })
    }
}
