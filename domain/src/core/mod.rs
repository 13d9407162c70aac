//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — hosted text and image models
//! - [`error::BriefError`] — validation errors for room briefs

pub mod error;
pub mod model;
pub mod string;
