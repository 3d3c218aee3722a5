//! Incoming file descriptors and filename parsing

use serde::{Deserialize, Serialize};

/// One uploaded file as handed over by the upload layer.
///
/// Content is never passed in; only the name and size matter here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub filename: String,
    pub size_bytes: u64,
}

impl FileDescriptor {
    pub fn new(filename: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            filename: filename.into(),
            size_bytes,
        }
    }
}

/// A filename split at its last dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFile<'a> {
    pub filename: &'a str,
    pub basename: &'a str,
    pub extension: &'a str,
}

impl<'a> ParsedFile<'a> {
    /// Split `filename` into basename and extension.
    ///
    /// A dot at position 0 (`.env`) does not start an extension. Any string
    /// is accepted, including the empty string.
    pub fn parse(filename: &'a str) -> Self {
        match filename.rfind('.') {
            Some(dot) if dot > 0 => Self {
                filename,
                basename: &filename[..dot],
                extension: &filename[dot + 1..],
            },
            _ => Self {
                filename,
                basename: filename,
                extension: "",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Midnight_Dreams.wav", "Midnight_Dreams", "wav" ; "simple")]
    #[test_case("beat.v2.final.mp3", "beat.v2.final", "mp3" ; "last dot wins")]
    #[test_case("README", "README", "" ; "no dot")]
    #[test_case(".hidden", ".hidden", "" ; "leading dot only")]
    #[test_case(".hidden.wav", ".hidden", "wav" ; "leading dot plus extension")]
    #[test_case("trailing.", "trailing", "" ; "trailing dot")]
    #[test_case("", "", "" ; "empty")]
    fn test_parse(filename: &str, basename: &str, extension: &str) {
        let parsed = ParsedFile::parse(filename);
        assert_eq!(parsed.filename, filename);
        assert_eq!(parsed.basename, basename);
        assert_eq!(parsed.extension, extension);
    }

    #[test]
    fn test_parse_multibyte_names() {
        let parsed = ParsedFile::parse("Café_Noir.flac");
        assert_eq!(parsed.basename, "Café_Noir");
        assert_eq!(parsed.extension, "flac");
    }
}
