//! Agent domain
//!
//! Roles, requests and results of the individual model exchanges that make
//! up a design plan.

pub mod model_config;
pub mod request;
pub mod result;
pub mod role;
pub mod value_objects;
