//! Agent requests - derived deterministically from a [`RoomBrief`].

use super::result::AgentResult;
use super::role::{ImageRole, TextRole};
use crate::brief::{ReferencePhoto, RoomBrief};
use crate::prompt::PromptTemplate;

/// One text agent request: a role-specific system instruction plus the
/// interpolated brief.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRequest {
    pub role: TextRole,
    pub system_instruction: String,
    pub user_content: String,
}

impl AgentRequest {
    /// Request for one of the specialists (architect, furniture, colorist).
    pub fn specialist(role: TextRole, brief: &RoomBrief) -> Self {
        Self {
            role,
            system_instruction: PromptTemplate::system_for(role).to_string(),
            user_content: PromptTemplate::specialist_prompt(role, brief),
        }
    }

    /// Summary request fed with the specialist results of the same run.
    pub fn summary(brief: &RoomBrief, specialists: &[AgentResult]) -> Self {
        Self {
            role: TextRole::Summarizer,
            system_instruction: PromptTemplate::summary_system().to_string(),
            user_content: PromptTemplate::summary_prompt(brief, specialists),
        }
    }
}

/// One image agent request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub role: ImageRole,
    pub prompt: String,
    /// Reference photo to edit from, when the role uses one and the user
    /// supplied it.
    pub reference_photo: Option<ReferencePhoto>,
}

impl ImageRequest {
    pub fn for_role(role: ImageRole, brief: &RoomBrief) -> Self {
        let reference_photo = if role.uses_reference_photo() {
            brief.reference_photo().cloned()
        } else {
            None
        };
        Self {
            role,
            prompt: PromptTemplate::image_prompt(role, brief),
            reference_photo,
        }
    }
}
