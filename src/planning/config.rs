// src/planning/config.rs

use crate::error::PlanError;
use serde::{Deserialize, Serialize};

/// Fixed parameters of one restocking problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleParameters {
    /// Max units one delivery can bring.
    pub delivery_capacity: u32,
    /// Max units that may be held overnight.
    pub storage_capacity: u32,
    /// Flat cost of a day with a delivery, regardless of its size.
    pub delivery_cost: f64,
    /// Cost of keeping one unit from one day to the next.
    pub holding_cost_per_unit: f64,
}

impl Default for ScheduleParameters {
    fn default() -> Self {
        Self {
            delivery_capacity: 3,
            storage_capacity: 10,
            delivery_cost: 10.0,
            holding_cost_per_unit: 1.0,
        }
    }
}

impl ScheduleParameters {
    pub fn new(
        delivery_capacity: u32,
        storage_capacity: u32,
        delivery_cost: f64,
        holding_cost_per_unit: f64,
    ) -> Self {
        Self {
            delivery_capacity,
            storage_capacity,
            delivery_cost,
            holding_cost_per_unit,
        }
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        if self.delivery_capacity == 0 {
            return Err(PlanError::ZeroDeliveryCapacity);
        }
        check_cost("delivery_cost", self.delivery_cost)?;
        check_cost("holding_cost_per_unit", self.holding_cost_per_unit)?;
        Ok(())
    }
}

fn check_cost(field: &'static str, value: f64) -> Result<(), PlanError> {
    // NaN fails both comparisons
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PlanError::InvalidCost { field, value })
    }
}

/// What to plan for: one demand value per day and the stock on hand before day 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub demand: Vec<u32>,
    pub starting_inventory: u32,
}

impl PlanRequest {
    pub fn new(demand: Vec<u32>) -> Self {
        Self {
            demand,
            starting_inventory: 0,
        }
    }

    pub fn with_starting_inventory(mut self, starting_inventory: u32) -> Self {
        self.starting_inventory = starting_inventory;
        self
    }

    pub fn horizon(&self) -> usize {
        self.demand.len()
    }

    /// Checks the request against the parameters it will be solved with.
    pub fn validate(&self, params: &ScheduleParameters) -> Result<(), PlanError> {
        if self.demand.is_empty() {
            return Err(PlanError::EmptyDemand);
        }
        if self.starting_inventory > params.storage_capacity {
            return Err(PlanError::StartingInventoryOutOfRange {
                starting_inventory: self.starting_inventory,
                storage_capacity: params.storage_capacity,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_reference_scenario() {
        let params = ScheduleParameters::default();
        assert_eq!(params, ScheduleParameters::new(3, 10, 10.0, 1.0));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn rejects_zero_capacity() {
        let params = ScheduleParameters::new(0, 10, 10.0, 1.0);
        assert_eq!(params.validate(), Err(PlanError::ZeroDeliveryCapacity));
    }

    #[test]
    fn rejects_negative_and_nan_costs() {
        let negative = ScheduleParameters::new(3, 10, -1.0, 1.0);
        assert!(matches!(
            negative.validate(),
            Err(PlanError::InvalidCost { field: "delivery_cost", .. })
        ));

        let nan = ScheduleParameters::new(3, 10, 10.0, f64::NAN);
        assert!(matches!(
            nan.validate(),
            Err(PlanError::InvalidCost { field: "holding_cost_per_unit", .. })
        ));
    }

    #[test]
    fn zero_costs_and_zero_storage_are_allowed() {
        assert!(ScheduleParameters::new(1, 0, 0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn request_bounds() {
        let params = ScheduleParameters::default();
        assert_eq!(
            PlanRequest::new(vec![]).validate(&params),
            Err(PlanError::EmptyDemand)
        );
        assert_eq!(
            PlanRequest::new(vec![1]).with_starting_inventory(11).validate(&params),
            Err(PlanError::StartingInventoryOutOfRange {
                starting_inventory: 11,
                storage_capacity: 10,
            })
        );
        assert!(PlanRequest::new(vec![1])
            .with_starting_inventory(10)
            .validate(&params)
            .is_ok());
    }
}
