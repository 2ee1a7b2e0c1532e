// src/simulation/replay.rs

use crate::error::ScheduleViolation;
use crate::model::cost::CostModel;
use crate::model::stockroom::Stockroom;
use crate::planning::config::{PlanRequest, ScheduleParameters};
use serde::Serialize;
use tracing::trace;

/// One replayed day. Serializable so callers can export the history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    pub day: usize,
    pub demand: u32,
    pub opening_inventory: u64,
    pub delivered: u32,
    pub closing_inventory: u64,
    pub dispatch_cost: f64,
    pub holding_cost: f64,
}

impl DayRecord {
    pub fn cost(&self) -> f64 {
        self.dispatch_cost + self.holding_cost
    }
}

/// Walks an order sequence through the stockroom day by day and prices it.
///
/// Every day must be served in full, overnight stock must fit in storage and
/// the store must be empty after the last day. Orders larger than one truck
/// are priced per truck.
pub struct ScheduleReplay<'a> {
    cost: CostModel,
    demand: &'a [u32],
    orders: &'a [u32],
    stockroom: Stockroom,
    current_day: usize,
    pub history: Vec<DayRecord>,
}

impl<'a> ScheduleReplay<'a> {
    pub fn new(
        params: &ScheduleParameters,
        request: &'a PlanRequest,
        orders: &'a [u32],
    ) -> Result<Self, ScheduleViolation> {
        if orders.len() != request.demand.len() {
            return Err(ScheduleViolation::LengthMismatch {
                orders: orders.len(),
                days: request.demand.len(),
            });
        }

        Ok(Self {
            cost: CostModel::new(params),
            demand: &request.demand,
            orders,
            stockroom: Stockroom::new(params.storage_capacity, request.starting_inventory),
            current_day: 0,
            history: Vec::with_capacity(orders.len()),
        })
    }

    pub fn run(&mut self) -> Result<(), ScheduleViolation> {
        while self.current_day < self.demand.len() {
            self.step()?;
        }

        let leftover = self.stockroom.inventory;
        if leftover > 0 {
            return Err(ScheduleViolation::Leftover { units: leftover });
        }
        Ok(())
    }

    fn step(&mut self) -> Result<(), ScheduleViolation> {
        let day = self.current_day;
        let demand = self.demand[day];
        let order = self.orders[day];
        let opening_inventory = self.stockroom.inventory;

        self.stockroom.receive_delivery(order);
        self.stockroom.serve_demand(day, demand)?;
        let carry_over = self.stockroom.close_day(day)?;

        let record = DayRecord {
            day,
            demand,
            opening_inventory,
            delivered: order,
            closing_inventory: carry_over,
            dispatch_cost: self.cost.fleet_dispatch_cost(u64::from(order)),
            holding_cost: self.cost.holding_cost(carry_over),
        };
        trace!(day, order, demand, carry_over, "replayed day");

        self.history.push(record);
        self.current_day += 1;
        Ok(())
    }

    pub fn total_cost(&self) -> f64 {
        self.history.iter().map(DayRecord::cost).sum()
    }

    /// `(dispatch, holding)` totals.
    pub fn cost_breakdown(&self) -> (f64, f64) {
        self.history.iter().fold((0.0, 0.0), |(dispatch, holding), record| {
            (dispatch + record.dispatch_cost, holding + record.holding_cost)
        })
    }
}

/// Replays `orders` and returns the day records, or the first violation.
pub fn replay_schedule(
    params: &ScheduleParameters,
    request: &PlanRequest,
    orders: &[u32],
) -> Result<Vec<DayRecord>, ScheduleViolation> {
    let mut replay = ScheduleReplay::new(params, request, orders)?;
    replay.run()?;
    Ok(replay.history)
}

/// Total cost of a valid schedule.
pub fn schedule_cost(
    params: &ScheduleParameters,
    request: &PlanRequest,
    orders: &[u32],
) -> Result<f64, ScheduleViolation> {
    let mut replay = ScheduleReplay::new(params, request, orders)?;
    replay.run()?;
    Ok(replay.total_cost())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_schedule_costs_24() {
        let params = ScheduleParameters::default();
        let request = PlanRequest::new(vec![2, 0, 2, 2]);
        let mut replay = ScheduleReplay::new(&params, &request, &[3, 0, 3, 0]).unwrap();
        replay.run().unwrap();

        let closing: Vec<u64> = replay.history.iter().map(|r| r.closing_inventory).collect();
        assert_eq!(closing, vec![1, 1, 2, 0]);
        assert_eq!(replay.cost_breakdown(), (20.0, 4.0));
        assert_eq!(replay.total_cost(), 24.0);
    }

    #[test]
    fn oversized_orders_are_priced_per_truck() {
        let params = ScheduleParameters::default();
        let request = PlanRequest::new(vec![7]);
        assert_eq!(schedule_cost(&params, &request, &[7]), Ok(30.0));
    }

    #[test]
    fn violations() {
        let params = ScheduleParameters::new(3, 2, 10.0, 1.0);
        let request = PlanRequest::new(vec![1, 1]);

        assert_eq!(
            replay_schedule(&params, &request, &[1]),
            Err(ScheduleViolation::LengthMismatch { orders: 1, days: 2 })
        );
        assert!(matches!(
            replay_schedule(&params, &request, &[0, 2]),
            Err(ScheduleViolation::Shortage { day: 0, .. })
        ));
        assert!(matches!(
            replay_schedule(&params, &request, &[3, 0]),
            Err(ScheduleViolation::Leftover { units: 1 })
        ));

        let tight = ScheduleParameters::new(5, 2, 10.0, 1.0);
        assert!(matches!(
            replay_schedule(&tight, &request, &[4, 0]),
            Err(ScheduleViolation::Overflow { day: 0, carry_over: 3, .. })
        ));
    }

    #[test]
    fn starting_inventory_counts() {
        let params = ScheduleParameters::default();
        let request = PlanRequest::new(vec![1, 1]).with_starting_inventory(2);
        let history = replay_schedule(&params, &request, &[0, 0]).unwrap();
        assert_eq!(history[0].opening_inventory, 2);
        assert_eq!(history[1].closing_inventory, 0);
        assert_eq!(history.iter().map(DayRecord::cost).sum::<f64>(), 1.0);
    }
}
