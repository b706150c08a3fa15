//! Codec modules for the loc/TSV format family.
//! One module per on-disk format, plus the byte-level plumbing they share.

pub mod full_tsv;
pub mod loc;
pub mod sheet;
pub mod tsv;

pub use sheet::{SheetDocument, SheetRow, SheetRowKind};

/// UTF-8 byte-order-mark, written at the start of every generated document.
pub const BOM: &str = "\u{feff}";

/// Reserved token marking header and separator rows in the TSV-family
/// formats. Never valid as an entry key.
pub const SENTINEL: &str = "###";

/// How codecs treat input that does not match the expected grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Skip rows and lines that do not match the grammar.
    #[default]
    Lenient,
    /// Report the first mismatch as [`crate::Error::Malformed`].
    Strict,
}

impl ParseMode {
    pub fn is_strict(self) -> bool {
        matches!(self, ParseMode::Strict)
    }
}

/// Decodes raw document bytes into parseable text.
///
/// Some editors pollute the first line with encoding-marker bytes (a
/// byte-order-mark or worse), so every leading byte >= 0x80 is dropped
/// before decoding. Carriage returns are stripped globally; the codecs
/// only ever see `\n` line endings.
pub fn decode_text(bytes: &[u8]) -> String {
    let mut start = 0;
    while start < bytes.len() && bytes[start] >= 0x80 {
        start += 1;
    }
    String::from_utf8_lossy(&bytes[start..]).replace('\r', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_text_skips_leading_marker_bytes() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"KEY\n");
        assert_eq!(decode_text(&bytes), "KEY\n");
    }

    #[test]
    fn test_decode_text_skips_arbitrary_high_bytes() {
        // Not a valid BOM, still consumed byte by byte.
        let mut bytes = vec![0xFE, 0xFF, 0x81];
        bytes.extend_from_slice(b"KEY\n");
        assert_eq!(decode_text(&bytes), "KEY\n");
    }

    #[test]
    fn test_decode_text_strips_carriage_returns() {
        assert_eq!(decode_text(b"KEY\r\n{\r\nvalue\r\n}\r\n"), "KEY\n{\nvalue\n}\n");
    }

    #[test]
    fn test_decode_text_keeps_interior_non_ascii() {
        let text = "KEY\n{\nGr\u{00F6}\u{00DF}e\n}\n";
        assert_eq!(decode_text(text.as_bytes()), text);
    }

    #[test]
    fn test_parse_mode_default_is_lenient() {
        assert_eq!(ParseMode::default(), ParseMode::Lenient);
        assert!(!ParseMode::Lenient.is_strict());
        assert!(ParseMode::Strict.is_strict());
    }
}
