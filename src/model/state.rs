// src/model/state.rs

use crate::model::cost::CostModel;

/// A memoization key: the last `days_remaining` days of the horizon,
/// entered with `inventory_level` units on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    pub days_remaining: usize,
    pub inventory_level: u32,
}

impl State {
    pub fn new(days_remaining: usize, inventory_level: u32) -> Self {
        Self {
            days_remaining,
            inventory_level,
        }
    }
}

/// Best known outcome for one state.
///
/// Only the first order of the optimal sequence is kept; the rest is
/// recovered by walking the table (see `StateTable::order_sequence`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateEntry {
    /// `f64::INFINITY` when no continuation meets demand exactly.
    pub minimal_cost: f64,
    pub first_order: Option<u32>,
}

impl StateEntry {
    pub fn infeasible() -> Self {
        Self {
            minimal_cost: f64::INFINITY,
            first_order: None,
        }
    }

    pub fn feasible(minimal_cost: f64, first_order: u32) -> Self {
        Self {
            minimal_cost,
            first_order: Some(first_order),
        }
    }

    pub fn is_feasible(&self) -> bool {
        self.minimal_cost.is_finite()
    }
}

/// Memo of `(days_remaining, inventory_level) -> StateEntry` for one demand sequence.
///
/// Layers are appended in order of increasing `days_remaining` and never revised.
#[derive(Debug, Clone)]
pub struct StateTable {
    demand: Vec<u32>,
    storage_capacity: u32,
    // layers[k - 1][f] holds the entry for State { days_remaining: k, inventory_level: f }
    layers: Vec<Vec<StateEntry>>,
}

impl StateTable {
    pub fn new(demand: Vec<u32>, storage_capacity: u32) -> Self {
        let horizon = demand.len();
        Self {
            demand,
            storage_capacity,
            layers: Vec::with_capacity(horizon),
        }
    }

    pub fn horizon(&self) -> usize {
        self.demand.len()
    }

    pub fn storage_capacity(&self) -> u32 {
        self.storage_capacity
    }

    /// Largest `days_remaining` with a finished layer.
    pub fn solved_days(&self) -> usize {
        self.layers.len()
    }

    /// Demand on the first day of the suffix of length `days_remaining`.
    /// `days_remaining` must lie in `[1, horizon]`.
    pub(crate) fn suffix_demand(&self, days_remaining: usize) -> u32 {
        self.demand[self.horizon() - days_remaining]
    }

    pub fn entry(&self, state: State) -> Option<&StateEntry> {
        if state.days_remaining == 0 {
            return None;
        }
        self.layers
            .get(state.days_remaining - 1)?
            .get(state.inventory_level as usize)
    }

    /// Minimal cost of `state`, infinite for states outside the solved table.
    pub fn minimal_cost(&self, state: State) -> f64 {
        self.entry(state)
            .map_or(f64::INFINITY, |entry| entry.minimal_cost)
    }

    /// Fills `days_remaining = 1`: the last day must end with an empty store,
    /// so the only admissible order is the exact shortfall.
    pub fn seed_base_case(&mut self, cost: &CostModel) {
        debug_assert!(self.layers.is_empty(), "base case seeded twice");
        let demand = self.suffix_demand(1);

        let layer = (0..=self.storage_capacity)
            .map(|inventory| {
                if inventory > demand {
                    StateEntry::infeasible()
                } else if inventory < demand {
                    let shortfall = demand - inventory;
                    StateEntry::feasible(cost.delivery_dispatch_cost(shortfall), shortfall)
                } else {
                    StateEntry::feasible(0.0, 0)
                }
            })
            .collect();

        self.layers.push(layer);
    }

    /// Appends the layer for `days_remaining = solved_days() + 1`.
    pub(crate) fn push_layer(&mut self, layer: Vec<StateEntry>) {
        debug_assert_eq!(layer.len(), self.storage_capacity as usize + 1);
        debug_assert!(self.layers.len() < self.horizon());
        self.layers.push(layer);
    }

    /// Rebuilds the optimal order sequence of `state` day by day,
    /// following each day's carry-over into the next layer down.
    pub fn order_sequence(&self, state: State) -> Option<Vec<u32>> {
        let mut orders = Vec::with_capacity(state.days_remaining);
        let mut current = state;

        loop {
            let entry = self.entry(current)?;
            if !entry.is_feasible() {
                return None;
            }
            let order = entry.first_order?;
            orders.push(order);

            if current.days_remaining == 1 {
                return Some(orders);
            }

            let on_hand = u64::from(current.inventory_level) + u64::from(order);
            let carry_over = on_hand - u64::from(self.suffix_demand(current.days_remaining));
            current = State::new(current.days_remaining - 1, u32::try_from(carry_over).ok()?);
        }
    }
}
