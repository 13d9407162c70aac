//! Design plan domain
//!
//! - [`DesignPlan`] - aggregate of every agent result for one submission
//! - [`PlanPhase`] - the stages a plan run passes through

pub mod entities;
pub mod phase;

pub use entities::DesignPlan;
pub use phase::PlanPhase;
