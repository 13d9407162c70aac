//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod run_plan;
pub mod studio_session;

#[cfg(test)]
pub(crate) mod test_support;
