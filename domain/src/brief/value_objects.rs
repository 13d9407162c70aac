//! Room brief value objects - style, budget and reference photo.

use crate::core::error::BriefError;
use crate::util::base64_bytes;
use serde::{Deserialize, Serialize};

/// Currency label used when none is configured.
pub const DEFAULT_CURRENCY: &str = "SAR";

/// Preferred interior style (Value Object)
///
/// A fixed, small set. Parsing is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DesignStyle {
    #[default]
    Modern,
    Minimal,
    Classic,
    Boho,
    Luxury,
    Japandi,
}

impl DesignStyle {
    /// All styles in presentation order.
    pub const ALL: [DesignStyle; 6] = [
        DesignStyle::Modern,
        DesignStyle::Minimal,
        DesignStyle::Classic,
        DesignStyle::Boho,
        DesignStyle::Luxury,
        DesignStyle::Japandi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DesignStyle::Modern => "Modern",
            DesignStyle::Minimal => "Minimal",
            DesignStyle::Classic => "Classic",
            DesignStyle::Boho => "Boho",
            DesignStyle::Luxury => "Luxury",
            DesignStyle::Japandi => "Japandi",
        }
    }
}

impl std::fmt::Display for DesignStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DesignStyle {
    type Err = BriefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| BriefError::UnknownStyle(wanted.to_string()))
    }
}

/// Room budget: a positive whole amount in a labelled currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    amount: u64,
    currency: String,
}

impl Budget {
    /// Create a budget, rejecting zero.
    pub fn new(amount: u64, currency: impl Into<String>) -> Result<Self, BriefError> {
        if amount == 0 {
            return Err(BriefError::InvalidBudget);
        }
        Ok(Self {
            amount,
            currency: currency.into(),
        })
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl std::fmt::Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Image formats accepted for a reference photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoType {
    Jpeg,
    Png,
}

impl PhotoType {
    /// Resolve a file extension (`jpg`, `jpeg`, `png`, any case).
    pub fn from_extension(ext: &str) -> Result<Self, BriefError> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(PhotoType::Jpeg),
            "png" => Ok(PhotoType::Png),
            other => Err(BriefError::UnsupportedPhoto(other.to_string())),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            PhotoType::Jpeg => "image/jpeg",
            PhotoType::Png => "image/png",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            PhotoType::Jpeg => "jpg",
            PhotoType::Png => "png",
        }
    }
}

/// User-supplied reference photo of the room.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencePhoto {
    #[serde(with = "base64_bytes")]
    bytes: Vec<u8>,
    photo_type: PhotoType,
}

impl ReferencePhoto {
    pub fn new(bytes: Vec<u8>, photo_type: PhotoType) -> Result<Self, BriefError> {
        if bytes.is_empty() {
            return Err(BriefError::EmptyPhoto);
        }
        Ok(Self { bytes, photo_type })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn photo_type(&self) -> PhotoType {
        self.photo_type
    }

    /// Conventional upload file name for this photo.
    pub fn file_name(&self) -> String {
        format!("reference.{}", self.photo_type.extension())
    }
}

impl std::fmt::Debug for ReferencePhoto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferencePhoto")
            .field("photo_type", &self.photo_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl std::fmt::Display for ReferencePhoto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "attached ({}, {} bytes)",
            self.photo_type.mime_type(),
            self.bytes.len()
        )
    }
}
