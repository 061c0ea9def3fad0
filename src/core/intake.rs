//! Document intake: turning raw user input into an [`IntakeSource`].
//!
//! Only the file name of a picked or dropped file is ever used; contents are
//! never read. Empty input produces `None` and is silently ignored upstream.

use std::path::{Path, PathBuf};

use url::Url;

use crate::core::analysis::DocumentOrigin;

/// File name given to documents created from pasted text.
pub const PASTED_FILE_NAME: &str = "Pasted_Contract.txt";

/// Extensions the picker advertises. Advisory only, never enforced.
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["pdf", "doc", "docx", "txt"];

/// A submitted contract, before analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeSource {
    /// Path typed into the picker field.
    Picked(PathBuf),
    /// Path delivered by dropping a file onto the terminal.
    Dropped(PathBuf),
    /// Raw contract text.
    Pasted(String),
}

impl IntakeSource {
    /// Picker input. `None` when no path was entered.
    pub fn picked(raw: &str) -> Option<Self> {
        normalize_path(raw).map(|p| Self::Picked(PathBuf::from(p)))
    }

    /// Drop payload (a bracketed paste). `None` unless it is a single path.
    pub fn dropped(payload: &str) -> Option<Self> {
        normalize_path(payload).map(|p| Self::Dropped(PathBuf::from(p)))
    }

    /// Pasted contract text. `None` when it is empty or whitespace.
    pub fn pasted(text: &str) -> Option<Self> {
        if text.trim().is_empty() {
            None
        } else {
            Some(Self::Pasted(text.to_string()))
        }
    }

    /// Name the resulting document is stamped with.
    pub fn file_name(&self) -> String {
        match self {
            Self::Picked(path) | Self::Dropped(path) => file_name_of(path),
            Self::Pasted(_) => PASTED_FILE_NAME.to_string(),
        }
    }

    pub fn origin(&self) -> DocumentOrigin {
        match self {
            Self::Picked(_) => DocumentOrigin::Picked,
            Self::Dropped(_) => DocumentOrigin::Dropped,
            Self::Pasted(_) => DocumentOrigin::Pasted,
        }
    }
}

/// Whether the name carries one of the advertised extensions.
pub fn is_accepted(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(ext))
        })
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Clean up a path as terminals deliver it.
///
/// Trims whitespace, strips one pair of matching quotes, decodes `file://`
/// URIs and unescapes backslash-escaped spaces. Multi-line input is not a
/// path.
fn normalize_path(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.contains('\n') || trimmed.contains('\r') {
        return None;
    }

    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|rest| rest.strip_suffix(*q))
        })
        .unwrap_or(trimmed);

    let path = if unquoted.starts_with("file://") {
        file_uri_to_path(unquoted)
    } else {
        unquoted.replace("\\ ", " ")
    };

    if path.trim().is_empty() {
        None
    } else {
        Some(path)
    }
}

/// Local path of a `file://` URI, percent-escapes decoded.
///
/// URIs the `url` crate rejects (or that name a remote host) keep their
/// path part, decoded as far as it is valid UTF-8.
fn file_uri_to_path(uri: &str) -> String {
    if let Ok(path) = Url::parse(uri).map_err(|_| ()).and_then(|u| u.to_file_path()) {
        return path.to_string_lossy().into_owned();
    }

    let rest = uri.strip_prefix("file://").unwrap_or(uri);
    urlencoding::decode(rest)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| rest.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("contract.pdf", "contract.pdf")]
    #[case("/home/me/docs/contract.pdf", "contract.pdf")]
    #[case("  ./offer letter.docx  ", "offer letter.docx")]
    #[case("notes", "notes")]
    fn test_picked_file_name(#[case] raw: &str, #[case] expected: &str) {
        let source = IntakeSource::picked(raw).unwrap();
        assert_eq!(source.file_name(), expected);
        assert_eq!(source.origin(), DocumentOrigin::Picked);
    }

    #[rstest]
    #[case("'/tmp/My Contract.pdf'", "My Contract.pdf")]
    #[case("\"/tmp/lease.txt\"", "lease.txt")]
    #[case("file:///tmp/nda.doc", "nda.doc")]
    #[case("file:///tmp/Offer%20Letter.docx", "Offer Letter.docx")]
    #[case("'file:///home/me/Vertr%C3%A4ge/Miete.pdf'", "Miete.pdf")]
    #[case("file://fileserver/share/Lease%20Draft.txt", "Lease Draft.txt")]
    #[case("/tmp/My\\ Contract.pdf", "My Contract.pdf")]
    fn test_dropped_payload_normalized(#[case] payload: &str, #[case] expected: &str) {
        let source = IntakeSource::dropped(payload).unwrap();
        assert_eq!(source.file_name(), expected);
        assert_eq!(source.origin(), DocumentOrigin::Dropped);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\"\"")]
    #[case("first line\nsecond line")]
    fn test_non_paths_rejected(#[case] raw: &str) {
        assert!(IntakeSource::picked(raw).is_none());
        assert!(IntakeSource::dropped(raw).is_none());
    }

    #[test]
    fn test_pasted_uses_placeholder_name() {
        let source = IntakeSource::pasted("The employee agrees...").unwrap();
        assert_eq!(source.file_name(), PASTED_FILE_NAME);
        assert_eq!(source.origin(), DocumentOrigin::Pasted);
    }

    #[test]
    fn test_pasted_whitespace_ignored() {
        assert!(IntakeSource::pasted("").is_none());
        assert!(IntakeSource::pasted(" \n\t ").is_none());
    }

    #[rstest]
    #[case("a.pdf", true)]
    #[case("a.PDF", true)]
    #[case("a.docx", true)]
    #[case("a.txt", true)]
    #[case("a.odt", false)]
    #[case("README", false)]
    fn test_accept_filter(#[case] name: &str, #[case] accepted: bool) {
        assert_eq!(is_accepted(name), accepted);
    }
}
