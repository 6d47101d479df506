use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::provider::CatalogProvider;
use crate::models::{Consumable, Effect};
use crate::planner::constants::{default_usage_limits, FIXED_PRICES};

/// Matches effect references of the form `[123]Some Effect`.
static EFFECT_ID_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(\d+)\]").expect("valid effect id pattern"));

/// An in-memory catalog snapshot.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    consumables: Vec<Consumable>,
    effects_by_id: HashMap<u32, Effect>,
    /// Effect name to id; the first effect with a given name wins.
    effect_ids_by_name: HashMap<String, u32>,
    prices: HashMap<u32, f64>,
    usage_limits: BTreeMap<u32, i64>,
}

impl CatalogSnapshot {
    /// Build a snapshot. Consumables are deduplicated by id, last occurrence wins.
    pub fn new(consumables: Vec<Consumable>, effects: Vec<Effect>, prices: HashMap<u32, f64>) -> Self {
        let mut order: Vec<u32> = Vec::new();
        let mut by_id: HashMap<u32, Consumable> = HashMap::new();
        for item in consumables {
            let id = item.id;
            if by_id.insert(id, item).is_none() {
                order.push(id);
            }
        }
        let consumables = order
            .into_iter()
            .filter_map(|id| by_id.remove(&id))
            .collect();

        let mut effects_by_id = HashMap::new();
        let mut effect_ids_by_name = HashMap::new();
        for effect in effects {
            effect_ids_by_name
                .entry(effect.name.clone())
                .or_insert(effect.id);
            effects_by_id.insert(effect.id, effect);
        }

        Self {
            consumables,
            effects_by_id,
            effect_ids_by_name,
            prices,
            usage_limits: default_usage_limits(),
        }
    }

    /// Replace the built-in usage cap table.
    pub fn with_usage_limits(mut self, limits: BTreeMap<u32, i64>) -> Self {
        self.usage_limits = limits;
        self
    }

    /// Replace the market price table.
    pub fn with_prices(mut self, prices: HashMap<u32, f64>) -> Self {
        self.prices = prices;
        self
    }

    pub fn get(&self, id: u32) -> Option<&Consumable> {
        self.consumables.iter().find(|c| c.id == id)
    }

    /// Find a consumable by exact name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Consumable> {
        let needle = name.to_lowercase();
        self.consumables
            .iter()
            .find(|c| c.name.to_lowercase() == needle)
    }

    /// Display name for an item id.
    pub fn item_name(&self, id: u32) -> String {
        self.get(id)
            .map(|c| c.display_name())
            .unwrap_or_else(|| format!("[{}]", id))
    }

    pub fn len(&self) -> usize {
        self.consumables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.consumables.is_empty()
    }

    pub fn priced_count(&self) -> usize {
        self.consumables
            .iter()
            .filter(|c| self.available_price(c.id).is_some())
            .count()
    }
}

impl CatalogProvider for CatalogSnapshot {
    fn consumables(&self) -> &[Consumable] {
        &self.consumables
    }

    fn effect_modifiers(&self, reference: &str) -> Option<&HashMap<String, String>> {
        let reference = reference.trim();
        let reference = reference
            .strip_prefix('"')
            .and_then(|r| r.strip_suffix('"'))
            .unwrap_or(reference);
        if reference.is_empty() {
            return None;
        }

        let id = match EFFECT_ID_REF.captures(reference) {
            Some(caps) => caps[1].parse::<u32>().ok()?,
            None => *self.effect_ids_by_name.get(reference)?,
        };
        self.effects_by_id.get(&id).map(|e| &e.modifiers)
    }

    fn price(&self, id: u32) -> f64 {
        FIXED_PRICES
            .iter()
            .find(|(fixed, _)| *fixed == id)
            .map(|(_, price)| *price)
            .unwrap_or_else(|| self.prices.get(&id).copied().unwrap_or(0.0))
    }

    fn usage_limits(&self) -> BTreeMap<u32, i64> {
        self.usage_limits.clone()
    }
}
