// src/model/stockroom.rs

use crate::error::ScheduleViolation;

/// Stock on hand at the store, advanced one day at a time.
#[derive(Debug, Clone)]
pub struct Stockroom {
    storage_capacity: u32,
    pub inventory: u64,
}

impl Stockroom {
    pub fn new(storage_capacity: u32, initial_inventory: u32) -> Self {
        Self {
            storage_capacity,
            inventory: u64::from(initial_inventory),
        }
    }

    /// Step 1: the morning delivery arrives.
    pub fn receive_delivery(&mut self, quantity: u32) {
        self.inventory += u64::from(quantity);
    }

    /// Step 2: serve the day's demand in full. Backorders are not allowed.
    pub fn serve_demand(&mut self, day: usize, demand: u32) -> Result<(), ScheduleViolation> {
        if self.inventory < u64::from(demand) {
            return Err(ScheduleViolation::Shortage {
                day,
                available: self.inventory,
                demand,
            });
        }
        self.inventory -= u64::from(demand);
        Ok(())
    }

    /// Step 3: whatever is left goes into storage overnight.
    ///
    /// Returns the carried quantity.
    pub fn close_day(&self, day: usize) -> Result<u64, ScheduleViolation> {
        if self.inventory > u64::from(self.storage_capacity) {
            return Err(ScheduleViolation::Overflow {
                day,
                carry_over: self.inventory,
                storage_capacity: self.storage_capacity,
            });
        }
        Ok(self.inventory)
    }
}
