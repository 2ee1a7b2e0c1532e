// src/strategy/traits.rs

use crate::error::PlanError;
use crate::planning::config::{PlanRequest, ScheduleParameters};
use crate::planning::planner::Plan;
use std::fmt::Debug;

/// Something that turns a demand sequence into a restocking plan.
///
/// `Send + Sync` so policies can be shared across worker threads.
pub trait RestockPolicy: Debug + Send + Sync {
    /// Short label for logs and comparisons.
    fn name(&self) -> &'static str;

    /// Plans orders for `request`.
    ///
    /// Configuration problems are errors; an instance with no valid schedule
    /// is an `Ok` plan with infinite cost.
    fn plan(&self, params: &ScheduleParameters, request: &PlanRequest) -> Result<Plan, PlanError>;
}
