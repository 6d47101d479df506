use std::collections::BTreeMap;

// ─────────────────────────────────────────────────────────────────────────────
// Catalog item ids
// ─────────────────────────────────────────────────────────────────────────────

/// Munchies pill: bonus adventures from the next food.
pub const MUNCHIES_PILL: u32 = 1619;

/// Ol' Scratch's salad fork.
pub const SALAD_FORK: u32 = 3323;

/// Frosty's frosty mug.
pub const FROSTY_MUG: u32 = 3324;

/// Whet stone: +1 adventure from the next consumable.
pub const WHETSTONE: u32 = 11107;

/// Mini kiwi aioli: +1 adventure per fullness of the next food.
pub const MINI_KIWI_AIOLI: u32 = 11598;

// ─────────────────────────────────────────────────────────────────────────────
// Turn modifiers
// ─────────────────────────────────────────────────────────────────────────────

/// Salad fork bonus fraction for salads and for everything else.
pub const SALAD_FORK_BONUS: f64 = 0.5;
pub const SALAD_FORK_BONUS_OTHER: f64 = 0.3;

/// Frosty mug bonus fraction for beers and for everything else.
pub const FROSTY_MUG_BONUS: f64 = 0.5;
pub const FROSTY_MUG_BONUS_OTHER: f64 = 0.3;

/// Refined Palate bonus on wines.
pub const REFINED_PALATE_BONUS: f64 = 0.25;

/// Mafia pinky ring bonus on wines, stacked after Refined Palate.
pub const PINKY_RING_BONUS: f64 = 0.125;

pub const TUXEDO_SHIRT_TURNS: i64 = 2;

pub const SAUCEMAVEN_TURNS: i64 = 3;

/// Extra Saucemaven turns for Pastamancers and Saucerors.
pub const SAUCEMAVEN_MYS_TURNS: i64 = 2;

pub const MAYOFLEX_TURNS: i64 = 1;

pub const WHETSTONE_TURNS: i64 = 1;

/// Munchies pill bonus by base adventures of the food.
pub fn munchies_turns(base_turns: i64) -> i64 {
    match base_turns {
        t if t < 1 => 0,
        t if t < 4 => 3,
        t if t < 7 => 2,
        _ => 1,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sweet Synthesis
// ─────────────────────────────────────────────────────────────────────────────

/// Model variable key of the synthesis pseudo-item.
pub const SWEET_SYNTHESIS_KEY: &str = "sweetsynthesis";

/// Synthesis: Greed grants +300% meat drop.
pub const SWEET_SYNTHESIS_MEAT_PERCENT: f64 = 300.0;

pub const SWEET_SYNTHESIS_DURATION: i64 = 30;

pub const SWEET_SYNTHESIS_SPLEEN: i64 = 1;

// ─────────────────────────────────────────────────────────────────────────────
// Prices and limits
// ─────────────────────────────────────────────────────────────────────────────

/// Prices that do not come from the market.
pub const FIXED_PRICES: &[(u32, f64)] = &[
    (7589, 250.0),
    (7590, 250.0),
    (7591, 250.0),
    (7592, 500.0),
    (7593, 500.0),
    (7594, 500.0),
    (7595, 500.0),
    (7596, 5000.0),
    (7597, 10000.0),
    (7598, 20000.0),
    (7599, 100000.0),
];

/// Items that can only be consumed a limited number of times.
pub const DEFAULT_USAGE_LIMITS: &[(u32, i64)] = &[
    (3325, 1),   // jar of fermented pickle juice
    (3326, 1),   // voodoo snuff
    (3327, 1),   // extra-greasy slider
    (3338, 1),   // frozen banquet
    (8819, 1),   // The Plumber's Mushroom Stew
    (8821, 1),   // The Mad Liquor
    (8822, 1),   // Doc Clock's thyme cocktail
    (8823, 1),   // Mr. Burnsger
    (8824, 1),   // The Inquisitor's unidentifiable object
    (10060, 23), // magical sausage
    (10991, 1),  // Pizza of Legend
    (10992, 1),  // Calzone of Legend
    (11000, 1),  // Deep Dish of Legend
];

/// Default usage caps as a map.
pub fn default_usage_limits() -> BTreeMap<u32, i64> {
    DEFAULT_USAGE_LIMITS.iter().copied().collect()
}
