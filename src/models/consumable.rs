use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A consumable catalog entry.
///
/// Organ costs are the raw catalog figures; cleansers listed in `notes` are
/// applied later, during evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consumable {
    pub id: u32,

    #[serde(default)]
    pub name: String,

    /// Base adventures gained. May be zero or negative.
    #[serde(default)]
    pub turns: i64,

    #[serde(default)]
    pub stomach: i64,

    #[serde(default)]
    pub liver: i64,

    #[serde(default)]
    pub spleen: i64,

    /// Comma separated annotations such as `SALAD` or `-5 fullness`.
    #[serde(default)]
    pub notes: String,

    /// Reference to the effect granted on consumption, empty if none.
    #[serde(default)]
    pub effect: String,

    #[serde(default)]
    pub effect_duration: i64,
}

impl Consumable {
    /// Display name, falling back to `[id]` for unnamed entries.
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            format!("[{}]", self.id)
        } else {
            self.name.clone()
        }
    }

    pub fn has_effect(&self) -> bool {
        !self.effect.trim().is_empty()
    }
}

impl PartialEq for Consumable {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Consumable {}

impl std::hash::Hash for Consumable {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A status effect and its modifier table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Effect {
    pub id: u32,

    pub name: String,

    /// Modifier name to raw value, e.g. `"Meat Drop" => "30"`.
    #[serde(default)]
    pub modifiers: HashMap<String, String>,
}
