//! Room brief domain
//!
//! A [`RoomBrief`] is the validated description of one room submitted for
//! design. It is built from a raw [`BriefDraft`] and stays immutable for the
//! duration of one plan run.

pub mod entities;
pub mod value_objects;

pub use entities::{BriefDraft, PhotoUpload, RoomBrief};
pub use value_objects::{Budget, DesignStyle, PhotoType, ReferencePhoto, DEFAULT_CURRENCY};
