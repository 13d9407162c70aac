//! Turning command-line and prompt input into a [`BriefDraft`]

use std::io;
use std::path::Path;
use studio_domain::{BriefDraft, PhotoUpload};

/// Read a reference photo from disk.
///
/// The extension is checked later by brief validation; this only reads the
/// bytes and keeps the file name.
pub fn load_photo(path: &Path) -> io::Result<PhotoUpload> {
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(PhotoUpload::new(file_name, bytes))
}

/// Form fields as entered, before validation.
#[derive(Debug, Clone, Default)]
pub struct BriefFields<'a> {
    pub description: &'a str,
    pub style: &'a str,
    pub purpose: &'a str,
    pub budget: u64,
    pub photo: Option<&'a Path>,
}

impl BriefFields<'_> {
    /// Build a draft in the given currency, reading the photo if any.
    pub fn into_draft(self, currency: &str) -> io::Result<BriefDraft> {
        let mut draft = BriefDraft::new(self.description)
            .with_style(self.style)
            .with_purpose(self.purpose)
            .with_budget(self.budget)
            .with_currency(currency);
        if let Some(path) = self.photo {
            draft = draft.with_reference_photo(load_photo(path)?);
        }
        Ok(draft)
    }
}
