#[macro_use]
extern crate assert_float_eq;

use std::collections::{BTreeMap, HashMap};

use kol_diet_planner::catalog::CatalogSnapshot;
use kol_diet_planner::models::{Consumable, Effect, PlannerOptions};
use kol_diet_planner::planner::{
    build_model, plan, ConstraintTarget, FROSTY_MUG, SALAD_FORK, SWEET_SYNTHESIS_KEY,
};
use kol_diet_planner::PlannerError;

fn make_item(id: u32, turns: i64, stomach: i64, liver: i64, spleen: i64, notes: &str) -> Consumable {
    Consumable {
        id,
        name: format!("item {}", id),
        turns,
        stomach,
        liver,
        spleen,
        notes: notes.to_string(),
        effect: String::new(),
        effect_duration: 0,
    }
}

fn snapshot(items: Vec<Consumable>, prices: &[(u32, f64)]) -> CatalogSnapshot {
    CatalogSnapshot::new(items, vec![], prices.iter().copied().collect())
        .with_usage_limits(BTreeMap::new())
}

#[test]
fn test_single_food_with_salad_fork() {
    let catalog = snapshot(
        vec![make_item(1, 1, 1, 0, 0, "")],
        &[(1, 100.0), (SALAD_FORK, 500.0)],
    );
    let options = PlannerOptions::with_voa(1000.0);

    let model = build_model(&catalog, &options).unwrap();
    assert_float_absolute_eq!(model.variable("1").unwrap().profit, 900.0, 1e-9);
    // (1 + ceil(0.3)) * 1000 - 100 - 500
    assert_float_absolute_eq!(model.variable("1(utensil=3323)").unwrap().profit, 1400.0, 1e-9);

    let plan = plan(&catalog, &options).unwrap();
    assert_eq!(plan.quantity_of("1(utensil=3323)"), 1);
    assert_eq!(plan.quantity_of("1"), 14);
    assert_float_absolute_eq!(plan.profit, 1400.0 + 14.0 * 900.0, 1e-6);
    assert_eq!(plan.turns, 2 + 14);
    assert_eq!(plan.organ_usage(), (15, 0, 0));
}

#[test]
fn test_accessories_used_once() {
    let catalog = snapshot(
        vec![
            make_item(1, 10, 2, 0, 0, "SALAD"),
            make_item(2, 10, 0, 2, 0, "BEER"),
        ],
        &[(1, 100.0), (2, 100.0), (SALAD_FORK, 10.0), (FROSTY_MUG, 10.0)],
    );
    let options = PlannerOptions::with_voa(1000.0);

    let plan = plan(&catalog, &options).unwrap();
    assert_eq!(plan.quantity_of("1(utensil=3323)"), 1);
    assert_eq!(plan.quantity_of("2(utensil=3324)"), 1);
    assert_eq!(plan.quantity_of("1"), 6);
    assert_eq!(plan.quantity_of("2"), 6);

    let (stomach, liver, spleen) = plan.organ_usage();
    assert!(stomach <= options.stomach);
    assert!(liver <= options.liver);
    assert!(spleen <= options.spleen);
}

#[test]
fn test_cleanser_is_free_to_fill() {
    let catalog = snapshot(
        vec![make_item(1, 2, 5, 0, 1, "-5 fullness")],
        &[(1, 10.0)],
    );
    let options = PlannerOptions {
        stomach: 0,
        ..PlannerOptions::with_voa(1000.0)
    };

    let model = build_model(&catalog, &options).unwrap();
    assert_eq!(model.variable("1").unwrap().stomach, 0);

    let plan = plan(&catalog, &options).unwrap();
    assert_eq!(plan.quantity_of("1"), 15);
    assert_eq!(plan.organ_usage(), (0, 0, 15));
}

#[test]
fn test_sweet_synthesis_fills_spleen() {
    let catalog = snapshot(vec![make_item(1, 1, 1, 0, 0, "")], &[(1, 10.0)]);
    let options = PlannerOptions {
        sweet_synthesis: true,
        base_meat: 300.0,
        ..PlannerOptions::with_voa(1000.0)
    };

    let plan = plan(&catalog, &options).unwrap();
    assert_eq!(plan.quantity_of(SWEET_SYNTHESIS_KEY), 15);
    assert_eq!(plan.quantity_of("1"), 15);
    assert_float_absolute_eq!(plan.profit, 15.0 * 27000.0 + 15.0 * 990.0, 1e-6);
    // Synthesis grants no adventures
    assert_eq!(plan.turns, 15);
}

#[test]
fn test_better_spleen_item_beats_synthesis() {
    let catalog = snapshot(vec![make_item(1, 40, 0, 0, 1, "")], &[(1, 10.0)]);
    let options = PlannerOptions {
        sweet_synthesis: true,
        base_meat: 300.0,
        ..PlannerOptions::with_voa(1000.0)
    };

    let plan = plan(&catalog, &options).unwrap();
    assert_eq!(plan.quantity_of("1"), 15);
    assert_eq!(plan.quantity_of(SWEET_SYNTHESIS_KEY), 0);
}

#[test]
fn test_default_limits_apply() {
    // magical sausage: no organ cost, capped at 23 by default
    let catalog = CatalogSnapshot::new(
        vec![make_item(10060, 1, 0, 0, 0, "")],
        vec![],
        HashMap::from([(10060, 100.0)]),
    );
    let options = PlannerOptions::with_voa(1000.0);
    let plan = plan(&catalog, &options).unwrap();
    assert_eq!(plan.quantity_of("10060"), 23);

    let limited = PlannerOptions {
        limits: BTreeMap::from([(10060, 4)]),
        ..options
    };
    let plan = kol_diet_planner::plan(&catalog, &limited).unwrap();
    assert_eq!(plan.quantity_of("10060"), 4);
}

#[test]
fn test_limit_spans_all_variants_of_an_item() {
    let catalog = snapshot(
        vec![make_item(7, 5, 1, 0, 0, "")],
        &[(7, 100.0), (SALAD_FORK, 100.0)],
    );
    let options = PlannerOptions {
        limits: BTreeMap::from([(7, 2)]),
        ..PlannerOptions::with_voa(1000.0)
    };

    let model = build_model(&catalog, &options).unwrap();
    assert_eq!(model.constraint(ConstraintTarget::Item(7)).unwrap().max, 2);

    let plan = plan(&catalog, &options).unwrap();
    let total: u32 = plan.diet.iter().map(|e| e.quantity).sum();
    assert_eq!(total, 2);
    assert_eq!(plan.quantity_of("7(utensil=3323)"), 1);
}

#[test]
fn test_effect_value_counts() {
    let item = Consumable {
        effect: "[77]Greedy".to_string(),
        effect_duration: 10,
        ..make_item(1, 1, 0, 1, 0, "")
    };
    let catalog = CatalogSnapshot::new(
        vec![item],
        vec![Effect {
            id: 77,
            name: "Greedy".to_string(),
            modifiers: HashMap::from([("Meat Drop".to_string(), "100".to_string())]),
        }],
        HashMap::from([(1, 2000.0)]),
    );
    let options = PlannerOptions {
        base_meat: 200.0,
        ..PlannerOptions::with_voa(1000.0)
    };

    // 1000 - 2000 + 200 * 1.0 * 10
    let model = build_model(&catalog, &options).unwrap();
    assert_float_absolute_eq!(model.variable("1").unwrap().profit, 1000.0, 1e-9);

    // Without the effect the item loses meat and is pruned
    let no_meat = PlannerOptions::with_voa(1000.0);
    assert!(build_model(&catalog, &no_meat).unwrap().variables.is_empty());
}

#[test]
fn test_empty_catalog_gives_empty_plan() {
    let catalog = CatalogSnapshot::default();
    let plan = plan(&catalog, &PlannerOptions::with_voa(1000.0)).unwrap();
    assert!(plan.is_empty());
    assert_eq!(plan.turns, 0);
    assert_eq!(plan.profit, 0.0);
}

#[test]
fn test_negative_capacity_is_infeasible() {
    let catalog = snapshot(vec![make_item(1, 3, 1, 0, 0, "")], &[(1, 10.0)]);
    let options = PlannerOptions {
        liver: -1,
        ..PlannerOptions::with_voa(1000.0)
    };
    let err = plan(&catalog, &options).unwrap_err();
    assert!(matches!(err, PlannerError::Infeasible));
    assert!(err.is_no_plan());
}

#[test]
fn test_uncapped_free_item_is_unbounded() {
    let catalog = snapshot(vec![make_item(1, 3, 0, 0, 0, "")], &[(1, 10.0)]);
    let err = plan(&catalog, &PlannerOptions::with_voa(1000.0)).unwrap_err();
    assert!(matches!(err, PlannerError::Unbounded));
}

#[test]
fn test_invalid_options_rejected() {
    let catalog = CatalogSnapshot::default();
    let err = plan(&catalog, &PlannerOptions::with_voa(-5.0)).unwrap_err();
    assert!(matches!(err, PlannerError::InvalidInput(_)));
}
