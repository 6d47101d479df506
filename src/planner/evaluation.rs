use crate::catalog::CatalogProvider;
use crate::models::{
    Accessory, Chaser, Consumable, PlannerOptions, ServingOption, Tags, Treatment, Variant,
    VariantKey,
};
use crate::planner::attributes::Attributes;
use crate::planner::constants::*;

/// Round half toward positive infinity.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Parse a modifier value such as `50`, `+50` or `50%`.
///
/// Unparseable values count as zero.
pub fn parse_modifier_value(raw: &str) -> f64 {
    raw.trim()
        .trim_end_matches('%')
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Expected meat value of the effect a consumable grants.
///
/// Only `Meat Drop` is valued; other modifiers contribute nothing.
pub fn effect_profit(
    item: &Consumable,
    catalog: &impl CatalogProvider,
    options: &PlannerOptions,
    duration: i64,
) -> f64 {
    if !item.has_effect() {
        return 0.0;
    }
    let Some(modifiers) = catalog.effect_modifiers(&item.effect) else {
        return 0.0;
    };

    modifiers
        .iter()
        .map(|(modifier, value)| match modifier.as_str() {
            "Meat Drop" => options.value_meat_drop(parse_modifier_value(value)) * duration as f64,
            _ => 0.0,
        })
        .sum()
}

/// Turns added by a utensil for the current turn count.
fn accessory_bonus(accessory: Accessory, attrs: &Attributes, turns: i64) -> i64 {
    let turns = turns as f64;
    match accessory {
        Accessory::SaladFork => {
            let frac = if attrs.salad {
                SALAD_FORK_BONUS
            } else {
                SALAD_FORK_BONUS_OTHER
            };
            (turns * frac).ceil() as i64
        }
        Accessory::FrostyMug => {
            let frac = if attrs.beer {
                FROSTY_MUG_BONUS
            } else {
                FROSTY_MUG_BONUS_OTHER
            };
            (turns * frac).floor() as i64
        }
    }
}

/// Price one way of consuming an item.
///
/// Returns `None` when the item cannot be used (vampyre food, no price, an
/// unpriced utensil) or when the result would lose meat.
///
/// Bonuses apply in a fixed order: munchies, utensil, wine, Ode, tuxedo,
/// Pizza Lover, Saucemaven, mayo treatment, then the whetstone and aioli
/// chasers. The aioli therefore sees the stomach cost after mayodiol.
pub fn evaluate(
    item: &Consumable,
    attrs: &Attributes,
    catalog: &impl CatalogProvider,
    options: &PlannerOptions,
    serving: ServingOption,
) -> Option<Variant> {
    // Vampyre food cannot be eaten in a normal ascension
    if attrs.vampyre {
        return None;
    }

    let mut cost = catalog.available_price(item.id)?;
    let voa = options.value_of_adventure;

    let mut turns = item.turns;
    let mut stomach = item.stomach - attrs.stomach_cleansed();
    let mut liver = item.liver - attrs.liver_cleansed();
    let spleen = item.spleen - attrs.spleen_cleansed();

    let mut chasers = Vec::new();

    // Munchies pill
    if stomach > 0 {
        let bonus = munchies_turns(turns);
        if let Some(price) = catalog.available_price(MUNCHIES_PILL) {
            if price < voa * bonus as f64 {
                chasers.push(Chaser::Munchies);
                cost += price;
                turns += bonus;
            }
        }
    }

    // Utensils
    if let Some(accessory) = serving.accessory {
        let price = catalog.available_price(accessory.item_id())?;
        turns += accessory_bonus(accessory, attrs, turns);
        cost += price;
    }

    if attrs.wine {
        // Refined Palate
        turns += (turns as f64 * REFINED_PALATE_BONUS).floor() as i64;

        if options.mafia_pinky_ring {
            turns += round_half_up(turns as f64 * PINKY_RING_BONUS) as i64;
        }
    }

    if options.ode_to_booze && liver > 0 {
        turns += liver;
    }

    if options.tuxedo_shirt && attrs.martini {
        turns += TUXEDO_SHIRT_TURNS;
    }

    if options.pizza_lover && attrs.pizza {
        turns += stomach;
    }

    if options.saucemaven && attrs.saucy {
        turns += SAUCEMAVEN_TURNS;
        if options.class.is_some_and(|c| c.is_mysticality()) {
            turns += SAUCEMAVEN_MYS_TURNS;
        }
    }

    // Mayo Clinic
    let mut duration = item.effect_duration;
    let mut treatment = None;
    if options.mayo_clinic && stomach > 0 {
        if let Some(mayo) = serving.treatment {
            match mayo {
                Treatment::Mayoflex => turns += MAYOFLEX_TURNS,
                Treatment::Mayodiol => {
                    stomach -= 1;
                    liver += 1;
                }
                Treatment::Mayozapine => duration *= 2,
            }
            treatment = Some(mayo);
        }
    }

    if let Some(price) = catalog.available_price(WHETSTONE) {
        if price < voa {
            chasers.push(Chaser::Whetstone);
            cost += price;
            turns += WHETSTONE_TURNS;
        }
    }

    if let Some(price) = catalog.available_price(MINI_KIWI_AIOLI) {
        if price < voa * stomach as f64 {
            chasers.push(Chaser::Aioli);
            cost += price;
            turns += stomach;
        }
    }

    let profit = turns as f64 * voa - cost + effect_profit(item, catalog, options, duration);

    // A losing variant is never part of an optimal diet
    if profit < 0.0 {
        return None;
    }

    Some(Variant {
        key: VariantKey {
            item_id: item.id,
            option: ServingOption {
                accessory: serving.accessory,
                treatment,
            },
            chasers,
        },
        stomach,
        liver,
        spleen,
        turns,
        profit,
        tags: Tags {
            item: Some(item.id),
            accessory: serving.accessory,
        },
    })
}
