use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::snapshot::CatalogSnapshot;
use crate::error::{PlannerError, Result};
use crate::models::{Consumable, Effect};

/// On-disk catalog layout.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    consumables: Vec<Consumable>,
    #[serde(default)]
    effects: Vec<Effect>,
}

/// One entry of a market price dump.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceEntry {
    item_id: u32,
    value: f64,
}

/// Price files come either as a market dump or as a plain id map.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PriceFile {
    Entries(Vec<PriceEntry>),
    /// Keyed by id; JSON object keys are always strings.
    Map(HashMap<String, f64>),
}

/// Load consumables and effects from a JSON file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<(Vec<Consumable>, Vec<Effect>)> {
    let content = fs::read_to_string(path)?;
    let file: CatalogFile = serde_json::from_str(&content)?;
    Ok((file.consumables, file.effects))
}

/// Load item prices from a JSON file.
///
/// Later entries for the same id win.
pub fn load_prices<P: AsRef<Path>>(path: P) -> Result<HashMap<u32, f64>> {
    let content = fs::read_to_string(path)?;
    let prices: HashMap<u32, f64> = match serde_json::from_str(&content)? {
        PriceFile::Entries(entries) => entries
            .into_iter()
            .map(|e| (e.item_id, e.value))
            .collect(),
        PriceFile::Map(map) => map
            .into_iter()
            .map(|(id, price)| -> Result<(u32, f64)> {
                let id = id.trim().parse::<u32>().map_err(|_| {
                    PlannerError::InvalidInput(format!("invalid item id in price file: '{}'", id))
                })?;
                Ok((id, price))
            })
            .collect::<Result<_>>()?,
    };
    Ok(prices)
}

/// Load a full snapshot from a catalog file and an optional price file.
pub fn load_snapshot<P: AsRef<Path>>(catalog: P, prices: Option<P>) -> Result<CatalogSnapshot> {
    let (consumables, effects) = load_catalog(catalog)?;
    let prices = match prices {
        Some(path) => load_prices(path)?,
        None => HashMap::new(),
    };
    Ok(CatalogSnapshot::new(consumables, effects, prices))
}
