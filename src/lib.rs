pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;

#[cfg(test)]
#[macro_use]
extern crate assert_float_eq;

pub use catalog::{CatalogProvider, CatalogSnapshot};
pub use error::{PlannerError, Result};
pub use models::{Consumable, Effect, Plan, PlannerOptions};
pub use planner::plan;
