//! Minimum-cost restocking schedules for a storable commodity.
//!
//! Given per-day demand, a truck capacity, a storage limit, a flat cost per
//! delivery and a per-unit overnight holding cost, [`Planner`] finds how much
//! to order each day so that every day's demand is met exactly and nothing is
//! left over after the last day.
//!
//! ```
//! use restock_planner::{PlanRequest, Planner, ScheduleParameters};
//!
//! let planner = Planner::new(ScheduleParameters::default())?;
//! let plan = planner.plan(&PlanRequest::new(vec![2, 0, 2, 2]))?;
//! assert_eq!(plan.total_cost, 24.0);
//! assert_eq!(plan.orders, Some(vec![3, 0, 3, 0]));
//! # Ok::<(), restock_planner::PlanError>(())
//! ```

pub mod error;
pub mod logging;
pub mod model;
pub mod planning;
pub mod simulation;
pub mod strategy;

pub use error::{PlanError, ScheduleViolation};
pub use model::cost::CostModel;
pub use model::state::{State, StateEntry, StateTable};
pub use planning::config::{PlanRequest, ScheduleParameters};
pub use planning::planner::{split_demand, DemandSplit, Plan, Planner};
pub use planning::solver::Solver;
pub use simulation::replay::{replay_schedule, schedule_cost, DayRecord, ScheduleReplay};
pub use strategy::implementations::{DynamicProgrammingPolicy, ExhaustiveSearchPolicy};
pub use strategy::traits::RestockPolicy;
