// src/planning/planner.rs

use crate::error::PlanError;
use crate::model::state::State;
use crate::planning::config::{PlanRequest, ScheduleParameters};
use crate::planning::solver::Solver;
use serde::Serialize;
use tracing::{info, warn};

/// Per-day demand split into whole truckloads and the remainder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemandSplit {
    /// `demand / delivery_capacity`: deliveries needed no matter how the schedule looks.
    pub forced_loads: Vec<u32>,
    /// `demand % delivery_capacity`: the part left to the solver.
    pub residual: Vec<u32>,
}

impl DemandSplit {
    pub fn total_forced_loads(&self) -> u64 {
        self.forced_loads.iter().map(|&loads| u64::from(loads)).sum()
    }
}

/// Splits each day's demand into full truckloads and a residual.
///
/// `delivery_capacity` must be positive.
pub fn split_demand(demand: &[u32], delivery_capacity: u32) -> DemandSplit {
    let (forced_loads, residual) = demand
        .iter()
        .map(|&units| (units / delivery_capacity, units % delivery_capacity))
        .unzip();
    DemandSplit {
        forced_loads,
        residual,
    }
}

/// A restocking schedule and what it costs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    /// `f64::INFINITY` when no schedule meets demand exactly.
    pub total_cost: f64,
    /// Units to order on each day; `None` for an infeasible instance.
    pub orders: Option<Vec<u32>>,
}

impl Plan {
    pub fn infeasible() -> Self {
        Self {
            total_cost: f64::INFINITY,
            orders: None,
        }
    }

    pub fn is_feasible(&self) -> bool {
        self.total_cost.is_finite() && self.orders.is_some()
    }

    /// Zero-based indices of the days with a delivery.
    pub fn delivery_days(&self) -> Vec<usize> {
        self.orders
            .iter()
            .flatten()
            .enumerate()
            .filter(|&(_, &units)| units > 0)
            .map(|(day, _)| day)
            .collect()
    }
}

/// Entry point: validates the inputs, nets the opening stock out of demand,
/// solves the residual problem and adds the forced truckloads back.
#[derive(Debug, Clone)]
pub struct Planner {
    params: ScheduleParameters,
}

impl Planner {
    pub fn new(params: ScheduleParameters) -> Result<Self, PlanError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &ScheduleParameters {
        &self.params
    }

    pub fn plan(&self, request: &PlanRequest) -> Result<Plan, PlanError> {
        request.validate(&self.params)?;

        let Some(opening) = net_opening_stock(&request.demand, request.starting_inventory) else {
            warn!(
                horizon = request.horizon(),
                starting_inventory = request.starting_inventory,
                "opening stock exceeds total demand"
            );
            return Ok(Plan::infeasible());
        };

        let capacity = self.params.delivery_capacity;
        let split = split_demand(&opening.net_demand, capacity);

        // Shelf space still held by opening stock is unavailable to deliveries.
        let night_limits: Vec<u32> = opening
            .left_after_day
            .iter()
            .map(|&left| self.params.storage_capacity - left)
            .collect();

        let table =
            Solver::new(&self.params).solve_with_night_limits(&split.residual, &night_limits);
        let start = State::new(request.horizon(), 0);
        let residual_cost = table.minimal_cost(start);

        let Some(residual_orders) = table.order_sequence(start) else {
            warn!(
                horizon = request.horizon(),
                starting_inventory = request.starting_inventory,
                "no schedule meets demand exactly"
            );
            return Ok(Plan::infeasible());
        };

        let orders = residual_orders
            .iter()
            .zip(&split.forced_loads)
            .enumerate()
            .map(|(day, (&residual, &loads))| {
                loads
                    .checked_mul(capacity)
                    .and_then(|forced| forced.checked_add(residual))
                    .ok_or(PlanError::QuantityOverflow { day })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let opening_holding = self.params.holding_cost_per_unit * opening.units_held() as f64;
        let total_cost = residual_cost
            + split.total_forced_loads() as f64 * self.params.delivery_cost
            + opening_holding;

        info!(
            horizon = request.horizon(),
            total_cost,
            forced_loads = split.total_forced_loads(),
            opening_holding,
            "restock plan solved"
        );

        Ok(Plan {
            total_cost,
            orders: Some(orders),
        })
    }
}

/// Demand left after the opening stock is used up, earliest days first.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OpeningStock {
    net_demand: Vec<u32>,
    // opening units still on the shelf after each day
    left_after_day: Vec<u32>,
}

impl OpeningStock {
    /// Unit-nights of opening stock, each paying holding once.
    fn units_held(&self) -> u64 {
        self.left_after_day.iter().map(|&left| u64::from(left)).sum()
    }
}

/// `None` when opening stock would outlive the horizon.
fn net_opening_stock(demand: &[u32], starting_inventory: u32) -> Option<OpeningStock> {
    let mut on_hand = starting_inventory;
    let mut net_demand = Vec::with_capacity(demand.len());
    let mut left_after_day = Vec::with_capacity(demand.len());

    for &units in demand {
        let used = units.min(on_hand);
        on_hand -= used;
        net_demand.push(units - used);
        left_after_day.push(on_hand);
    }

    (on_hand == 0).then_some(OpeningStock {
        net_demand,
        left_after_day,
    })
}
