//! Domain error types

use thiserror::Error;

/// Validation errors raised while turning raw form input into a [`RoomBrief`].
///
/// These never reach the model client: a brief that fails validation
/// is rejected before any request is built.
///
/// [`RoomBrief`]: crate::brief::RoomBrief
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BriefError {
    #[error("Room description cannot be empty")]
    EmptyDescription,

    #[error("Budget must be greater than zero")]
    InvalidBudget,

    #[error("Unknown style: {0} (expected one of Modern, Minimal, Classic, Boho, Luxury, Japandi)")]
    UnknownStyle(String),

    #[error("Unsupported reference photo type: {0} (expected jpg, jpeg or png)")]
    UnsupportedPhoto(String),

    #[error("Reference photo is empty")]
    EmptyPhoto,
}

impl BriefError {
    /// Name of the form field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            BriefError::EmptyDescription => "description",
            BriefError::InvalidBudget => "budget",
            BriefError::UnknownStyle(_) => "style",
            BriefError::UnsupportedPhoto(_) | BriefError::EmptyPhoto => "reference_photo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_description_display() {
        let error = BriefError::EmptyDescription;
        assert_eq!(error.to_string(), "Room description cannot be empty");
    }

    #[test]
    fn test_field_names() {
        assert_eq!(BriefError::EmptyDescription.field(), "description");
        assert_eq!(BriefError::InvalidBudget.field(), "budget");
        assert_eq!(BriefError::UnknownStyle("x".into()).field(), "style");
        assert_eq!(BriefError::EmptyPhoto.field(), "reference_photo");
    }
}
