// src/strategy/implementations.rs

use crate::error::PlanError;
use crate::model::cost::{is_cheaper, CostModel};
use crate::planning::config::{PlanRequest, ScheduleParameters};
use crate::planning::planner::{Plan, Planner};
use crate::strategy::traits::RestockPolicy;
use tracing::debug;

// =========================================================================
// 1. Dynamic Programming Policy
// =========================================================================

/// The production policy: truckload decomposition plus backward induction.
/// Polynomial in horizon, storage capacity and delivery capacity.
#[derive(Debug, Clone, Default)]
pub struct DynamicProgrammingPolicy;

impl DynamicProgrammingPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl RestockPolicy for DynamicProgrammingPolicy {
    fn name(&self) -> &'static str {
        "dynamic-programming"
    }

    fn plan(
        &self,
        params: &ScheduleParameters,
        request: &PlanRequest,
    ) -> Result<Plan, PlanError> {
        Planner::new(params.clone())?.plan(request)
    }
}

// =========================================================================
// 2. Exhaustive Search Policy
// =========================================================================

/// Tries every order size on every day, with no one-truck limit.
///
/// Orders above the delivery capacity pay one dispatch per truck. Running time
/// grows like `(storage_capacity + 1) ^ horizon`, so this is only meant as a
/// reference answer for small instances.
#[derive(Debug, Clone)]
pub struct ExhaustiveSearchPolicy {
    max_horizon: usize,
}

impl Default for ExhaustiveSearchPolicy {
    fn default() -> Self {
        Self { max_horizon: 8 }
    }
}

impl ExhaustiveSearchPolicy {
    pub fn new(max_horizon: usize) -> Self {
        Self { max_horizon }
    }
}

impl RestockPolicy for ExhaustiveSearchPolicy {
    fn name(&self) -> &'static str {
        "exhaustive-search"
    }

    fn plan(
        &self,
        params: &ScheduleParameters,
        request: &PlanRequest,
    ) -> Result<Plan, PlanError> {
        params.validate()?;
        request.validate(params)?;
        if request.horizon() > self.max_horizon {
            return Err(PlanError::HorizonTooLarge {
                horizon: request.horizon(),
                limit: self.max_horizon,
            });
        }

        let search = Search::new(params, &request.demand);
        let Some((total_cost, orders)) =
            search.best_from(0, u64::from(request.starting_inventory))
        else {
            return Ok(Plan::infeasible());
        };

        let orders = orders
            .into_iter()
            .enumerate()
            .map(|(day, units)| {
                u32::try_from(units).map_err(|_| PlanError::QuantityOverflow { day })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(total_cost, horizon = search.horizon(), "exhaustive search finished");
        Ok(Plan {
            total_cost,
            orders: Some(orders),
        })
    }
}

struct Search<'a> {
    demand: &'a [u32],
    // demand_after[i] = total demand of days i.. (one extra trailing zero)
    demand_after: Vec<u64>,
    storage: u64,
    cost: CostModel,
}

impl<'a> Search<'a> {
    fn new(params: &ScheduleParameters, demand: &'a [u32]) -> Self {
        let mut demand_after = vec![0u64; demand.len() + 1];
        for day in (0..demand.len()).rev() {
            demand_after[day] = demand_after[day + 1] + u64::from(demand[day]);
        }
        Self {
            demand,
            demand_after,
            storage: u64::from(params.storage_capacity),
            cost: CostModel::new(params),
        }
    }

    fn horizon(&self) -> usize {
        self.demand.len()
    }

    /// Cheapest way to serve days `day..` starting with `inventory` on hand.
    fn best_from(&self, day: usize, inventory: u64) -> Option<(f64, Vec<u64>)> {
        if day == self.demand.len() {
            return (inventory == 0).then(|| (0.0, Vec::new()));
        }

        let demand = u64::from(self.demand[day]);
        // Carrying more than the rest of the horizon needs always ends in leftover.
        let max_carry = self.storage.min(self.demand_after[day + 1]);
        let lowest = demand.saturating_sub(inventory);
        let highest = (demand + max_carry).checked_sub(inventory)?;

        let mut best: Option<(f64, Vec<u64>)> = None;
        for order in lowest..=highest {
            let carry_over = inventory + order - demand;
            let Some((rest_cost, rest)) = self.best_from(day + 1, carry_over) else {
                continue;
            };

            let total = self.cost.fleet_dispatch_cost(order)
                + self.cost.holding_cost(carry_over)
                + rest_cost;
            if best.as_ref().map_or(true, |(cost, _)| is_cheaper(total, *cost)) {
                let mut orders = Vec::with_capacity(rest.len() + 1);
                orders.push(order);
                orders.extend(rest);
                best = Some((total, orders));
            }
        }

        best
    }
}
