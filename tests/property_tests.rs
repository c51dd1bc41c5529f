//! Property tests over the aggregator

use footprint::prelude::*;
use proptest::prelude::*;

fn diet_strategy() -> impl Strategy<Value = Diet> {
    prop_oneof![
        Just(Diet::Meat),
        Just(Diet::Mixed),
        Just(Diet::Vegetarian),
        Just(Diet::Vegan),
    ]
}

fn quantity_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0.0f64..100_000.0).prop_map(|q| q.to_string()),
        (0u32..10_000).prop_map(|q| q.to_string()),
        Just(String::new()),
        "[a-z ]{0,6}",
    ]
}

prop_compose! {
    fn input_strategy()(
        e in quantity_strategy(),
        g in quantity_strategy(),
        v in quantity_strategy(),
        f in quantity_strategy(),
        w in quantity_strategy(),
        diet in diet_strategy(),
    ) -> FootprintInput {
        FootprintInput::new()
            .with_electricity(e)
            .with_gas(g)
            .with_vehicle(v)
            .with_flights(f)
            .with_waste(w)
            .with_diet(diet)
    }
}

proptest! {
    #[test]
    fn prop_total_matches_category_sum(input in input_strategy()) {
        let r = compute(&input, EmissionFactorTable::builtin()).unwrap();
        prop_assert!((r.total - r.sum_unrounded()).abs() <= 0.01);
        prop_assert_eq!(r.total, round2(r.sum_unrounded()));
    }

    #[test]
    fn prop_compute_is_deterministic(input in input_strategy()) {
        let table = EmissionFactorTable::builtin();
        let a = compute(&input, table).unwrap();
        let b = compute(&input.clone(), table).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_diet_change_only_touches_diet(input in input_strategy(), other in diet_strategy()) {
        let table = EmissionFactorTable::builtin();
        let a = compute(&input, table).unwrap();
        let b = compute(&input.clone().with_diet(other), table).unwrap();
        for c in ScalarCategory::ALL {
            prop_assert_eq!(a.get(c.category()), b.get(c.category()));
        }
        if input.diet == other {
            prop_assert_eq!(a.total, b.total);
        } else {
            prop_assert_ne!(a.get(Category::Diet), b.get(Category::Diet));
        }
    }

    #[test]
    fn prop_chart_values_are_rounded_categories(input in input_strategy()) {
        let r = compute(&input, EmissionFactorTable::builtin()).unwrap();
        prop_assert_eq!(r.chart_series.len(), 6);
        for (point, (category, kg)) in r.chart_series.iter().zip(r.iter()) {
            prop_assert_eq!(point.name.as_str(), category.label());
            prop_assert_eq!(point.value, round2(kg));
        }
    }

    #[test]
    fn prop_round2_idempotent(x in -1.0e9f64..1.0e9) {
        let once = round2(x);
        prop_assert_eq!(round2(once), once);
    }

    #[test]
    fn prop_non_negative_inputs_give_non_negative_values(input in input_strategy()) {
        let r = compute(&input, EmissionFactorTable::builtin()).unwrap();
        for (_, kg) in r.iter() {
            prop_assert!(kg >= 0.0);
        }
    }
}
