//! Room brief entities

use super::value_objects::{Budget, DEFAULT_CURRENCY, DesignStyle, PhotoType, ReferencePhoto};
use crate::core::error::BriefError;
use serde::{Deserialize, Serialize};

/// Raw reference photo as received from the caller (file name + bytes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl PhotoUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    fn into_reference_photo(self) -> Result<ReferencePhoto, BriefError> {
        let ext = std::path::Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        let photo_type = PhotoType::from_extension(ext)?;
        ReferencePhoto::new(self.bytes, photo_type)
    }
}

/// Unvalidated form input for one submission.
///
/// Every field is kept as the caller typed it; [`BriefDraft::validate`]
/// is the only way to obtain a [`RoomBrief`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BriefDraft {
    pub description: String,
    pub style: String,
    pub purpose: String,
    pub budget: u64,
    pub currency: String,
    pub reference_photo: Option<PhotoUpload>,
}

impl Default for BriefDraft {
    fn default() -> Self {
        Self {
            description: String::new(),
            style: DesignStyle::default().as_str().to_string(),
            purpose: String::new(),
            budget: 15_000,
            currency: DEFAULT_CURRENCY.to_string(),
            reference_photo: None,
        }
    }
}

impl BriefDraft {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    pub fn with_budget(mut self, budget: u64) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_reference_photo(mut self, photo: PhotoUpload) -> Self {
        self.reference_photo = Some(photo);
        self
    }

    /// Validate the draft into a [`RoomBrief`].
    ///
    /// The description is checked first so an empty form reports the
    /// field the user most likely forgot.
    pub fn validate(self) -> Result<RoomBrief, BriefError> {
        if self.description.trim().is_empty() {
            return Err(BriefError::EmptyDescription);
        }
        let style: DesignStyle = self.style.parse()?;
        let budget = Budget::new(self.budget, self.currency)?;
        let reference_photo = self
            .reference_photo
            .map(PhotoUpload::into_reference_photo)
            .transpose()?;

        Ok(RoomBrief {
            description: self.description,
            style,
            purpose: self.purpose,
            budget,
            reference_photo,
        })
    }
}

/// A validated room brief (Entity)
///
/// Field values are stored exactly as submitted; prompt templates insert
/// them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomBrief {
    description: String,
    style: DesignStyle,
    purpose: String,
    budget: Budget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reference_photo: Option<ReferencePhoto>,
}

impl RoomBrief {
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn style(&self) -> DesignStyle {
        self.style
    }

    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    pub fn reference_photo(&self) -> Option<&ReferencePhoto> {
        self.reference_photo.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> BriefDraft {
        BriefDraft::new("Cozy living room 4x5m with one big window")
            .with_style("Japandi")
            .with_purpose("Relaxing, watching TV")
            .with_budget(20_000)
    }

    #[test]
    fn test_validate_keeps_values_verbatim() {
        let brief = draft().validate().unwrap();
        assert_eq!(brief.description(), "Cozy living room 4x5m with one big window");
        assert_eq!(brief.style(), DesignStyle::Japandi);
        assert_eq!(brief.purpose(), "Relaxing, watching TV");
        assert_eq!(brief.budget().amount(), 20_000);
        assert_eq!(brief.budget().currency(), "SAR");
        assert!(brief.reference_photo().is_none());
    }

    #[test]
    fn test_empty_description_rejected() {
        assert_eq!(
            BriefDraft::new("").validate(),
            Err(BriefError::EmptyDescription)
        );
        assert_eq!(
            BriefDraft::new("  \n\t").validate(),
            Err(BriefError::EmptyDescription)
        );
    }

    #[test]
    fn test_description_checked_before_other_fields() {
        let result = BriefDraft::new("").with_style("Gothic").with_budget(0).validate();
        assert_eq!(result, Err(BriefError::EmptyDescription));
    }

    #[test]
    fn test_zero_budget_rejected() {
        assert_eq!(
            draft().with_budget(0).validate(),
            Err(BriefError::InvalidBudget)
        );
    }

    #[test]
    fn test_photo_upload_validated() {
        let brief = draft()
            .with_reference_photo(PhotoUpload::new("room.JPEG", vec![0xff, 0xd8]))
            .validate()
            .unwrap();
        let photo = brief.reference_photo().unwrap();
        assert_eq!(photo.photo_type(), PhotoType::Jpeg);

        let err = draft()
            .with_reference_photo(PhotoUpload::new("room.webp", vec![1]))
            .validate()
            .unwrap_err();
        assert_eq!(err, BriefError::UnsupportedPhoto("webp".to_string()));
    }

    #[test]
    fn test_photo_without_extension_rejected() {
        let err = draft()
            .with_reference_photo(PhotoUpload::new("room", vec![1]))
            .validate()
            .unwrap_err();
        assert_eq!(err, BriefError::UnsupportedPhoto(String::new()));
    }
}
