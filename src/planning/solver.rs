// src/planning/solver.rs

use crate::model::cost::{is_cheaper, CostModel};
use crate::model::state::{State, StateEntry, StateTable};
use crate::planning::config::ScheduleParameters;
use tracing::debug;

/// Backward induction over demand suffixes.
///
/// For a suffix of `k` days entered with `f` units on hand:
///
/// ```text
/// cost(k, f) = min over order in [0, delivery_capacity] of
///     dispatch(order) + holding(f + order - d) + cost(k - 1, f + order - d)
/// ```
///
/// where `d` is the suffix's first-day demand and `f + order - d` must lie in
/// `[0, storage_capacity]`. The last day orders exactly its shortfall.
///
/// Earlier days never order more than one truck. Splitting an oversized order
/// into a full truck today and the excess tomorrow uses no more trucks and
/// carries less stock overnight, so some optimum always fits in
/// `[0, delivery_capacity]`.
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    params: &'a ScheduleParameters,
    cost: CostModel,
}

impl<'a> Solver<'a> {
    pub fn new(params: &'a ScheduleParameters) -> Self {
        Self {
            params,
            cost: CostModel::new(params),
        }
    }

    /// Solves every suffix of `demand`, shortest first.
    ///
    /// `demand` must be non-empty.
    pub fn solve(&self, demand: &[u32]) -> StateTable {
        let night_limits = vec![self.params.storage_capacity; demand.len()];
        self.solve_with_night_limits(demand, &night_limits)
    }

    /// Like `solve`, but the stock carried after day `i` may not exceed
    /// `night_limits[i]` (itself capped by the storage capacity). Used when part
    /// of the storage is already taken by opening stock.
    pub(crate) fn solve_with_night_limits(
        &self,
        demand: &[u32],
        night_limits: &[u32],
    ) -> StateTable {
        debug_assert_eq!(demand.len(), night_limits.len());
        let mut table = StateTable::new(demand.to_vec(), self.params.storage_capacity);
        if demand.is_empty() {
            return table;
        }

        table.seed_base_case(&self.cost);
        self.log_layer(&table, 1);

        for days_remaining in 2..=demand.len() {
            let night_limit = night_limits[demand.len() - days_remaining];
            self.step(&mut table, days_remaining, night_limit);
            self.log_layer(&table, days_remaining);
        }

        table
    }

    fn step(&self, table: &mut StateTable, days_remaining: usize, night_limit: u32) {
        let layer = (0..=self.params.storage_capacity)
            .map(|inventory| {
                self.solve_state(table, State::new(days_remaining, inventory), night_limit)
            })
            .collect();
        table.push_layer(layer);
    }

    /// Picks the cheapest first-day order for `state`, reading only the layer below.
    /// Ties go to the smallest order.
    fn solve_state(&self, table: &StateTable, state: State, night_limit: u32) -> StateEntry {
        let demand = u64::from(table.suffix_demand(state.days_remaining));
        let inventory = u64::from(state.inventory_level);
        let max_carry = u64::from(self.params.storage_capacity.min(night_limit));
        let capacity = u64::from(self.params.delivery_capacity);

        let mut best = StateEntry::infeasible();

        // Orders outside this window stock out or overflow storage.
        let lowest = demand.saturating_sub(inventory);
        let Some(highest) = (max_carry + demand).checked_sub(inventory) else {
            return best;
        };
        let highest = highest.min(capacity);

        for order in lowest..=highest {
            let carry_over = inventory + order - demand;
            let next = State::new(state.days_remaining - 1, carry_over as u32);
            let remaining = table.minimal_cost(next);
            if remaining.is_infinite() {
                continue;
            }

            let total = self.cost.delivery_dispatch_cost(order as u32)
                + self.cost.holding_cost(carry_over)
                + remaining;

            if is_cheaper(total, best.minimal_cost) {
                best = StateEntry::feasible(total, order as u32);
            }
        }

        best
    }

    fn log_layer(&self, table: &StateTable, days_remaining: usize) {
        let feasible = (0..=self.params.storage_capacity)
            .filter_map(|inventory| table.entry(State::new(days_remaining, inventory)))
            .filter(|entry| entry.is_feasible())
            .count();
        debug!(
            days_remaining,
            demand = table.suffix_demand(days_remaining),
            feasible_states = feasible,
            "solved suffix layer"
        );
    }
}
