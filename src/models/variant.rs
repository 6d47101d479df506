use std::fmt;

use crate::planner::constants::{FROSTY_MUG, SALAD_FORK};

/// A reusable utensil, usable once per plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Accessory {
    SaladFork,
    FrostyMug,
}

impl Accessory {
    pub const ALL: [Accessory; 2] = [Accessory::SaladFork, Accessory::FrostyMug];

    /// Catalog id of the utensil.
    pub fn item_id(self) -> u32 {
        match self {
            Accessory::SaladFork => SALAD_FORK,
            Accessory::FrostyMug => FROSTY_MUG,
        }
    }
}

/// A Mayo Clinic treatment applied to a food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Treatment {
    Mayoflex,
    Mayodiol,
    Mayozapine,
}

impl Treatment {
    pub const ALL: [Treatment; 3] = [
        Treatment::Mayoflex,
        Treatment::Mayodiol,
        Treatment::Mayozapine,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Treatment::Mayoflex => "mayoflex",
            Treatment::Mayodiol => "mayodiol",
            Treatment::Mayozapine => "mayozapine",
        }
    }
}

/// An item folded into a variant's price rather than chosen by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chaser {
    Munchies,
    Whetstone,
    Aioli,
}

impl Chaser {
    pub fn name(self) -> &'static str {
        match self {
            Chaser::Munchies => "munchies",
            Chaser::Whetstone => "whetstone",
            Chaser::Aioli => "aioli",
        }
    }
}

/// How an item is served: at most one utensil and at most one treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ServingOption {
    pub accessory: Option<Accessory>,
    pub treatment: Option<Treatment>,
}

impl ServingOption {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn with_accessory(accessory: Accessory) -> Self {
        Self {
            accessory: Some(accessory),
            treatment: None,
        }
    }

    pub fn with_treatment(treatment: Treatment, accessory: Option<Accessory>) -> Self {
        Self {
            accessory,
            treatment: Some(treatment),
        }
    }
}

/// Identity of a variant within a model.
///
/// Rendered as `id` or `id(utensil=3323,mayo=mayoflex,munchies,...)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantKey {
    pub item_id: u32,
    pub option: ServingOption,
    pub chasers: Vec<Chaser>,
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut servings = Vec::new();
        if let Some(accessory) = self.option.accessory {
            servings.push(format!("utensil={}", accessory.item_id()));
        }
        if let Some(treatment) = self.option.treatment {
            servings.push(format!("mayo={}", treatment.name()));
        }
        servings.extend(self.chasers.iter().map(|c| c.name().to_string()));

        if servings.is_empty() {
            write!(f, "{}", self.item_id)
        } else {
            write!(f, "{}({})", self.item_id, servings.join(","))
        }
    }
}

/// Constraint membership of a model variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tags {
    /// Counts against the usage cap of this item id.
    pub item: Option<u32>,
    /// Counts against the single use of this utensil.
    pub accessory: Option<Accessory>,
}

/// One priced way of consuming a catalog item.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub key: VariantKey,
    /// Net organ usage; negative values free up space.
    pub stomach: i64,
    pub liver: i64,
    pub spleen: i64,
    pub turns: i64,
    pub profit: f64,
    pub tags: Tags,
}

impl Variant {
    pub fn item_id(&self) -> u32 {
        self.key.item_id
    }
}
