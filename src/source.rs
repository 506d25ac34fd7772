use crate::grid::RawGrid;
use thiserror::Error;
use url::Url;

/// Errors raised while resolving a spreadsheet identity.
#[derive(Error, Debug)]
pub enum SheetIdError {
    #[error("Invalid spreadsheet url '{0}'")]
    UrlError(String),

    #[error("No spreadsheet key in url '{0}'")]
    MissingKey(String),
}

/// Identity of a source spreadsheet, usable as a cache key.
///
/// Wraps the document key that worksheet APIs address spreadsheets by,
/// as lifted from a sharing url.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SheetId {
    key: String,
}

impl SheetId {
    /// Wraps an already-known spreadsheet key.
    pub fn new(key: &str) -> Self {
        Self { key: key.to_owned() }
    }

    /// Extracts the spreadsheet key from a Google Sheets url, the
    /// `<key>` in `https://docs.google.com/spreadsheets/d/<key>/edit`.
    pub fn from_url(value: &str) -> Result<Self, SheetIdError> {
        let url = Url::parse(value).map_err(|_| SheetIdError::UrlError(value.to_owned()))?;
        let mut segments = url
            .path_segments()
            .ok_or_else(|| SheetIdError::UrlError(value.to_owned()))?;
        segments
            .find(|segment| *segment == "d")
            .and_then(|_| segments.next())
            .filter(|key| !key.is_empty())
            .map(|key| Self { key: key.to_owned() })
            .ok_or_else(|| SheetIdError::MissingKey(value.to_owned()))
    }

    /// The bare document key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Input boundary: supplies the full worksheet grid for a spreadsheet.
///
/// Implementations own authentication and network concerns; the core only
/// requires that row order is preserved and cells are strings or absent.
pub trait GridSource {
    /// Fetches the current worksheet contents.
    fn fetch(&self, id: &SheetId) -> anyhow::Result<RawGrid>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_from_sharing_url() {
        let id = SheetId::from_url(
            "https://docs.google.com/spreadsheets/d/1-dV891Thy0HbL54N2xGHHqeT6TIOEmbrDNlayHLhwDU/edit?usp=sharing",
        )
        .unwrap();

        assert_eq!(id.key(), "1-dV891Thy0HbL54N2xGHHqeT6TIOEmbrDNlayHLhwDU");
    }

    #[test]
    fn key_from_bare_document_url() {
        let id = SheetId::from_url("https://docs.google.com/spreadsheets/d/abc123").unwrap();

        assert_eq!(id.key(), "abc123");
    }

    #[test]
    fn rejects_url_without_key() {
        assert!(SheetId::from_url("https://docs.google.com/spreadsheets/").is_err());
        assert!(SheetId::from_url("https://docs.google.com/spreadsheets/d/").is_err());
    }

    #[test]
    fn rejects_malformed_url() {
        assert!(SheetId::from_url("not a url").is_err());
    }

    #[test]
    fn explicit_key_matches_extracted_key() {
        let extracted = SheetId::from_url("https://docs.google.com/spreadsheets/d/abc123/edit").unwrap();

        assert_eq!(SheetId::new("abc123"), extracted);
    }
}
