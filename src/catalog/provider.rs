use std::collections::{BTreeMap, HashMap};

use crate::models::Consumable;
use crate::planner::constants::default_usage_limits;

/// Read-only access to the item catalog, effects and prices.
///
/// The planner depends only on this trait, so any loader that has
/// materialized its data can back a planning call.
pub trait CatalogProvider {
    /// All consumables in catalog order.
    fn consumables(&self) -> &[Consumable];

    /// Modifier table of the effect a consumable refers to.
    ///
    /// Returns `None` for references that cannot be resolved.
    fn effect_modifiers(&self, reference: &str) -> Option<&HashMap<String, String>>;

    /// Current price of an item; 0 means unavailable.
    fn price(&self, id: u32) -> f64;

    /// Per-item usage caps that apply before user overrides.
    fn usage_limits(&self) -> BTreeMap<u32, i64> {
        default_usage_limits()
    }

    /// Price of an item if it can be bought at all.
    fn available_price(&self, id: u32) -> Option<f64> {
        let price = self.price(id);
        (price.is_finite() && price > 0.0).then_some(price)
    }
}
