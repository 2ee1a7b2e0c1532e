// Seeded random instances checked against the exhaustive reference search.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use restock_planner::logging;
use restock_planner::{
    schedule_cost, DynamicProgrammingPolicy, ExhaustiveSearchPolicy, PlanRequest, RestockPolicy,
    ScheduleParameters,
};

/// Normal demand rounded to whole units, negatives clamped to zero.
fn normal_demand(rng: &mut StdRng, days: usize, mean: f64, std_dev: f64) -> Vec<u32> {
    let normal = Normal::new(mean, std_dev).expect("positive std dev");
    (0..days)
        .map(|_| {
            let value: f64 = normal.sample(rng);
            let rounded = value.round();
            if rounded < 0.0 {
                0
            } else {
                rounded as u32
            }
        })
        .collect()
}

fn random_params(rng: &mut StdRng) -> ScheduleParameters {
    ScheduleParameters::new(
        rng.gen_range(1..=5),
        rng.gen_range(0..=6),
        f64::from(rng.gen_range(0..=30u32)),
        f64::from(rng.gen_range(0..=4u32)),
    )
}

#[test]
fn planner_matches_reference_on_sub_truckload_demand() {
    logging::init_test();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let dp = DynamicProgrammingPolicy::new();
    let reference = ExhaustiveSearchPolicy::new(6);

    for _ in 0..200 {
        let params = random_params(&mut rng);
        let days = rng.gen_range(1..=5);
        let demand: Vec<u32> = normal_demand(&mut rng, days, 2.0, 1.5)
            .into_iter()
            .map(|units| units % params.delivery_capacity)
            .collect();
        let request = PlanRequest::new(demand);

        let planned = dp.plan(&params, &request).unwrap();
        let expected = reference.plan(&params, &request).unwrap();
        assert_eq!(
            planned.total_cost, expected.total_cost,
            "{} and {} disagree on {:?} with {:?}",
            dp.name(),
            reference.name(),
            request.demand,
            params
        );
    }
}

#[test]
fn planner_matches_reference_with_opening_stock() {
    let mut rng = StdRng::seed_from_u64(42);
    let dp = DynamicProgrammingPolicy::new();
    let reference = ExhaustiveSearchPolicy::new(6);

    for _ in 0..200 {
        let params = random_params(&mut rng);
        let days = rng.gen_range(1..=5);
        let demand = normal_demand(&mut rng, days, 4.0, 3.0);
        let starting_inventory = rng.gen_range(0..=params.storage_capacity);
        let request = PlanRequest::new(demand).with_starting_inventory(starting_inventory);

        let planned = dp.plan(&params, &request).unwrap();
        let expected = reference.plan(&params, &request).unwrap();
        assert_eq!(
            planned.total_cost, expected.total_cost,
            "disagreement on {:?} starting with {} under {:?}",
            request.demand, starting_inventory, params
        );

        match planned.orders {
            Some(orders) => {
                assert_eq!(schedule_cost(&params, &request, &orders), Ok(planned.total_cost));
            }
            None => assert!(expected.orders.is_none()),
        }
    }
}

#[test]
fn empty_store_is_always_feasible() {
    // Every day can be served by its own deliveries.
    let mut rng = StdRng::seed_from_u64(7);
    let dp = DynamicProgrammingPolicy::new();

    for _ in 0..100 {
        let params = random_params(&mut rng);
        let days = rng.gen_range(1..=12);
        let request = PlanRequest::new(normal_demand(&mut rng, days, 4.0, 3.0));
        let planned = dp.plan(&params, &request).unwrap();
        let orders = planned.orders.expect("feasible from an empty store");
        assert_eq!(schedule_cost(&params, &request, &orders), Ok(planned.total_cost));
    }
}
