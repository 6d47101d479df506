use crate::catalog::CatalogProvider;
use crate::models::{Accessory, Consumable, PlannerOptions, ServingOption, Treatment, Variant};
use crate::planner::attributes::{parse_notes, Attributes};
use crate::planner::evaluation::evaluate;

/// Serving options worth pricing for an item.
///
/// Gating uses the organ costs left after cleansers: the salad fork and
/// mayo treatments only for foods, the frosty mug only for booze. A
/// treatment is never combined with the mug.
pub fn serving_options(
    item: &Consumable,
    attrs: &Attributes,
    options: &PlannerOptions,
) -> Vec<ServingOption> {
    let stomach = item.stomach - attrs.stomach_cleansed();
    let liver = item.liver - attrs.liver_cleansed();

    let mut servings = vec![ServingOption::plain()];

    if stomach > 0 {
        servings.push(ServingOption::with_accessory(Accessory::SaladFork));
        if options.mayo_clinic {
            for mayo in Treatment::ALL {
                servings.push(ServingOption::with_treatment(mayo, None));
                servings.push(ServingOption::with_treatment(mayo, Some(Accessory::SaladFork)));
            }
        }
    }
    if liver > 0 {
        servings.push(ServingOption::with_accessory(Accessory::FrostyMug));
    }

    servings
}

/// Every profitable variant of one item.
pub fn enumerate(
    item: &Consumable,
    catalog: &impl CatalogProvider,
    options: &PlannerOptions,
) -> Vec<Variant> {
    let attrs = parse_notes(&item.notes);
    if attrs.vampyre || catalog.available_price(item.id).is_none() {
        return Vec::new();
    }

    serving_options(item, &attrs, options)
        .into_iter()
        .filter_map(|serving| evaluate(item, &attrs, catalog, options, serving))
        .collect()
}

/// Variants for the whole catalog, in catalog order.
pub fn enumerate_all(catalog: &impl CatalogProvider, options: &PlannerOptions) -> Vec<Variant> {
    let variants: Vec<Variant> = catalog
        .consumables()
        .iter()
        .flat_map(|item| enumerate(item, catalog, options))
        .collect();

    log::debug!(
        "Enumerated {} variants from {} consumables",
        variants.len(),
        catalog.consumables().len()
    );

    variants
}
