//! Prompt domain
//!
//! Templates that interpolate a [`RoomBrief`](crate::RoomBrief) into the
//! instruction text for each agent role.

mod template;

pub use template::PromptTemplate;
