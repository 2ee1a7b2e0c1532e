// src/error.rs

use thiserror::Error;

/// Errors raised before any planning work starts.
///
/// Infeasible instances are not errors: they come back as a `Plan` with an
/// infinite cost.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error("delivery capacity must be at least 1 unit")]
    ZeroDeliveryCapacity,

    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidCost { field: &'static str, value: f64 },

    #[error("demand sequence must cover at least one day")]
    EmptyDemand,

    #[error("starting inventory {starting_inventory} exceeds storage capacity {storage_capacity}")]
    StartingInventoryOutOfRange {
        starting_inventory: u32,
        storage_capacity: u32,
    },

    #[error("order quantity for day {day} does not fit in 32 bits")]
    QuantityOverflow { day: usize },

    #[error("horizon of {horizon} days is too long for exhaustive search (limit {limit})")]
    HorizonTooLarge { horizon: usize, limit: usize },
}

/// Reasons an order sequence cannot be replayed against a demand sequence.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleViolation {
    #[error("schedule has {orders} orders for {days} days of demand")]
    LengthMismatch { orders: usize, days: usize },

    #[error("day {day}: {available} units on hand, {demand} demanded")]
    Shortage { day: usize, available: u64, demand: u32 },

    #[error("day {day}: carrying {carry_over} units overnight exceeds storage capacity {storage_capacity}")]
    Overflow {
        day: usize,
        carry_over: u64,
        storage_capacity: u32,
    },

    #[error("{units} units left over after the last day")]
    Leftover { units: u64 },
}
