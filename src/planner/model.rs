use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::error::{PlannerError, Result};
use crate::models::{Accessory, PlannerOptions, Tags, Variant};
use crate::planner::constants::*;

/// What a constraint row sums over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintTarget {
    Stomach,
    Liver,
    Spleen,
    /// Uses of one utensil.
    Accessory(Accessory),
    /// Uses of one catalog item, across all its variants.
    Item(u32),
}

impl fmt::Display for ConstraintTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintTarget::Stomach => f.write_str("stomach"),
            ConstraintTarget::Liver => f.write_str("liver"),
            ConstraintTarget::Spleen => f.write_str("spleen"),
            ConstraintTarget::Accessory(a) => write!(f, "utensil:{}", a.item_id()),
            ConstraintTarget::Item(id) => write!(f, "id:{}", id),
        }
    }
}

/// `sum(coefficient * qty) <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    pub target: ConstraintTarget,
    pub max: i64,
}

/// One non-negative integer variable of the model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelVariable {
    pub key: String,
    /// Objective coefficient.
    pub profit: f64,
    pub turns: i64,
    pub stomach: i64,
    pub liver: i64,
    pub spleen: i64,
    pub tags: Tags,
}

impl ModelVariable {
    /// Coefficient of this variable in a constraint row.
    pub fn coefficient(&self, target: ConstraintTarget) -> i64 {
        match target {
            ConstraintTarget::Stomach => self.stomach,
            ConstraintTarget::Liver => self.liver,
            ConstraintTarget::Spleen => self.spleen,
            ConstraintTarget::Accessory(a) => i64::from(self.tags.accessory == Some(a)),
            ConstraintTarget::Item(id) => i64::from(self.tags.item == Some(id)),
        }
    }
}

impl From<Variant> for ModelVariable {
    fn from(variant: Variant) -> Self {
        Self {
            key: variant.key.to_string(),
            profit: variant.profit,
            turns: variant.turns,
            stomach: variant.stomach,
            liver: variant.liver,
            spleen: variant.spleen,
            tags: variant.tags,
        }
    }
}

/// An integer program: maximize total profit subject to `<=` rows.
#[derive(Debug, Clone, Default)]
pub struct Model {
    pub variables: Vec<ModelVariable>,
    pub constraints: Vec<Constraint>,
}

impl Model {
    pub fn variable(&self, key: &str) -> Option<&ModelVariable> {
        self.variables.iter().find(|v| v.key == key)
    }

    pub fn constraint(&self, target: ConstraintTarget) -> Option<&Constraint> {
        self.constraints.iter().find(|c| c.target == target)
    }

    /// Whether an integer assignment, indexed like `variables`, satisfies every row.
    pub fn is_feasible(&self, quantities: &[u32]) -> bool {
        self.constraints.iter().all(|c| {
            let used: i64 = self
                .variables
                .iter()
                .zip(quantities)
                .map(|(v, q)| v.coefficient(c.target) * i64::from(*q))
                .sum();
            used <= c.max
        })
    }
}

/// The Sweet Synthesis pseudo-item: one spleen for a +300% meat buff.
pub fn sweet_synthesis_variable(options: &PlannerOptions) -> ModelVariable {
    ModelVariable {
        key: SWEET_SYNTHESIS_KEY.to_string(),
        profit: options.value_meat_drop(SWEET_SYNTHESIS_MEAT_PERCENT)
            * SWEET_SYNTHESIS_DURATION as f64,
        turns: 0,
        stomach: 0,
        liver: 0,
        spleen: SWEET_SYNTHESIS_SPLEEN,
        tags: Tags::default(),
    }
}

/// Assemble the integer program.
///
/// `default_limits` are the catalog's usage caps; `options.limits` override
/// them per item. Fails if two variables share a key.
pub fn build(
    variants: Vec<Variant>,
    options: &PlannerOptions,
    default_limits: BTreeMap<u32, i64>,
) -> Result<Model> {
    let mut variables: Vec<ModelVariable> = variants.into_iter().map(ModelVariable::from).collect();

    if options.sweet_synthesis {
        variables.push(sweet_synthesis_variable(options));
    }

    let mut seen = HashSet::new();
    for variable in &variables {
        if !seen.insert(variable.key.as_str()) {
            return Err(PlannerError::DuplicateVariable(variable.key.clone()));
        }
    }

    let mut constraints = vec![
        Constraint {
            target: ConstraintTarget::Stomach,
            max: options.stomach,
        },
        Constraint {
            target: ConstraintTarget::Liver,
            max: options.liver,
        },
        Constraint {
            target: ConstraintTarget::Spleen,
            max: options.spleen,
        },
    ];

    // Each utensil is used at most once per plan
    constraints.extend(Accessory::ALL.map(|a| Constraint {
        target: ConstraintTarget::Accessory(a),
        max: 1,
    }));

    let mut limits = default_limits;
    limits.extend(options.limits.iter().map(|(id, cap)| (*id, *cap)));
    constraints.extend(limits.into_iter().map(|(id, max)| Constraint {
        target: ConstraintTarget::Item(id),
        max,
    }));

    log::info!(
        "Built model with {} variables and {} constraints",
        variables.len(),
        constraints.len()
    );

    Ok(Model {
        variables,
        constraints,
    })
}
