//! Application-level configuration.
//!
//! - [`PlanParams`] — models, sampling, image options and execution mode

pub mod plan_params;

pub use plan_params::{ExecutionMode, PlanParams};
