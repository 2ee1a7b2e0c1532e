// src/model/cost.rs

use crate::planning::config::ScheduleParameters;

/// Delivery and holding costs for one set of parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    delivery_capacity: u32,
    delivery_cost: f64,
    holding_cost_per_unit: f64,
}

impl CostModel {
    pub fn new(params: &ScheduleParameters) -> Self {
        Self {
            delivery_capacity: params.delivery_capacity,
            delivery_cost: params.delivery_cost,
            holding_cost_per_unit: params.holding_cost_per_unit,
        }
    }

    /// Flat dispatch cost of a delivery day, independent of the order size.
    pub fn delivery_dispatch_cost(&self, order_volume: u32) -> f64 {
        if order_volume > 0 {
            self.delivery_cost
        } else {
            0.0
        }
    }

    /// Dispatch cost of an order of any size: one flat charge per truck needed.
    /// Equal to `delivery_dispatch_cost` whenever the order fits in one truck.
    pub fn fleet_dispatch_cost(&self, order_volume: u64) -> f64 {
        let capacity = u64::from(self.delivery_capacity.max(1));
        let trucks = order_volume.div_ceil(capacity);
        trucks as f64 * self.delivery_cost
    }

    /// Cost of keeping `carry_over_volume` units overnight.
    pub fn holding_cost(&self, carry_over_volume: u64) -> f64 {
        carry_over_volume as f64 * self.holding_cost_per_unit
    }
}

/// `candidate` beats `incumbent` by more than floating-point noise.
///
/// Sums of fractional costs taken in different orders can differ in the last
/// bits; those count as ties so the first (smallest) order keeps winning.
pub fn is_cheaper(candidate: f64, incumbent: f64) -> bool {
    if incumbent.is_infinite() {
        return candidate < incumbent;
    }
    candidate < incumbent - COST_TOLERANCE * incumbent.abs().max(1.0)
}

const COST_TOLERANCE: f64 = 1e-9;

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> CostModel {
        CostModel::new(&ScheduleParameters::default())
    }

    #[test]
    fn dispatch_is_flat() {
        let m = model();
        assert_eq!(m.delivery_dispatch_cost(0), 0.0);
        assert_eq!(m.delivery_dispatch_cost(1), 10.0);
        assert_eq!(m.delivery_dispatch_cost(3), 10.0);
    }

    #[test]
    fn fleet_cost_counts_trucks() {
        let m = model();
        assert_eq!(m.fleet_dispatch_cost(0), 0.0);
        assert_eq!(m.fleet_dispatch_cost(3), 10.0);
        assert_eq!(m.fleet_dispatch_cost(4), 20.0);
        assert_eq!(m.fleet_dispatch_cost(9), 30.0);
        for volume in 0..=3u32 {
            assert_eq!(
                m.fleet_dispatch_cost(u64::from(volume)),
                m.delivery_dispatch_cost(volume)
            );
        }
    }

    #[test]
    fn rounding_noise_is_a_tie() {
        assert!(!is_cheaper(0.1 + 0.2, 0.3));
        assert!(!is_cheaper(0.3, 0.1 + 0.2));
        assert!(is_cheaper(0.29, 0.3));
        assert!(is_cheaper(1e12, f64::INFINITY));
        assert!(!is_cheaper(f64::INFINITY, f64::INFINITY));
    }

    #[test]
    fn holding_is_linear() {
        let m = CostModel::new(&ScheduleParameters::new(3, 10, 10.0, 0.5));
        assert_eq!(m.holding_cost(0), 0.0);
        assert_eq!(m.holding_cost(4), 2.0);
    }
}
