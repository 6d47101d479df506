/// One line of a diet: a variant and how many times to consume it.
#[derive(Debug, Clone, PartialEq)]
pub struct DietEntry {
    /// Model variable key.
    pub key: String,

    /// Catalog item behind the entry, `None` for pseudo-items.
    pub item_id: Option<u32>,

    pub quantity: u32,

    /// Turns per unit.
    pub turns: i64,

    /// Profit per unit.
    pub profit: f64,

    /// Organ usage per unit.
    pub stomach: i64,
    pub liver: i64,
    pub spleen: i64,
}

impl DietEntry {
    pub fn total_turns(&self) -> i64 {
        self.turns * self.quantity as i64
    }

    pub fn total_profit(&self) -> f64 {
        self.profit * self.quantity as f64
    }
}

/// The optimal consumption plan.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Plan {
    pub profit: f64,
    pub turns: i64,
    pub diet: Vec<DietEntry>,
}

impl Plan {
    pub fn is_empty(&self) -> bool {
        self.diet.is_empty()
    }

    /// Total (stomach, liver, spleen) filled by the diet.
    pub fn organ_usage(&self) -> (i64, i64, i64) {
        self.diet.iter().fold((0, 0, 0), |(s, l, p), e| {
            let q = e.quantity as i64;
            (s + e.stomach * q, l + e.liver * q, p + e.spleen * q)
        })
    }

    /// Quantity chosen for a variable key, 0 if absent.
    pub fn quantity_of(&self, key: &str) -> u32 {
        self.diet
            .iter()
            .filter(|e| e.key == key)
            .map(|e| e.quantity)
            .sum()
    }
}
