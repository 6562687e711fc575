//! Character encodings for the text hashing path

use crate::{
    Error, Result,
    error::ValidationError,
};

/// Character encodings text can be converted with before hashing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextEncoding {
    /// UTF-8, used when no encoding is given
    #[default]
    Utf8,
    /// UTF-16 big-endian with a leading `FE FF` byte-order mark
    Utf16,
    /// UTF-16 big-endian, no byte-order mark
    Utf16Be,
    /// UTF-16 little-endian, no byte-order mark
    Utf16Le,
    /// ISO-8859-1
    Latin1,
    /// US-ASCII
    Ascii,
}

impl TextEncoding {
    /// Every supported encoding
    pub const ALL: [TextEncoding; 6] = [
        TextEncoding::Utf8,
        TextEncoding::Utf16,
        TextEncoding::Utf16Be,
        TextEncoding::Utf16Le,
        TextEncoding::Latin1,
        TextEncoding::Ascii,
    ];

    /// Canonical label of the encoding
    pub fn label(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Utf16 => "UTF-16",
            TextEncoding::Utf16Be => "UTF-16BE",
            TextEncoding::Utf16Le => "UTF-16LE",
            TextEncoding::Latin1 => "ISO-8859-1",
            TextEncoding::Ascii => "US-ASCII",
        }
    }

    /// Encode `text` to bytes.
    ///
    /// Characters outside the encoding's repertoire are an error; nothing is
    /// replaced or dropped.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        match self {
            TextEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
            TextEncoding::Utf16 => {
                if text.is_empty() {
                    return Ok(Vec::new());
                }
                let mut bytes = vec![0xFE, 0xFF];
                bytes.extend(text.encode_utf16().flat_map(u16::to_be_bytes));
                Ok(bytes)
            }
            TextEncoding::Utf16Be => Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect()),
            TextEncoding::Utf16Le => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
            TextEncoding::Latin1 => self.encode_single_byte(text, 0xFF),
            TextEncoding::Ascii => self.encode_single_byte(text, 0x7F),
        }
    }

    fn encode_single_byte(&self, text: &str, max: u8) -> Result<Vec<u8>> {
        text.chars()
            .enumerate()
            .map(|(position, character)| {
                u8::try_from(character)
                    .ok()
                    .filter(|&byte| byte <= max)
                    .ok_or_else(|| {
                        Error::Validation(ValidationError::unencodable_text(
                            self.label(),
                            text,
                            character,
                            position,
                        ))
                    })
            })
            .collect()
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for TextEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "utf8" => Ok(TextEncoding::Utf8),
            "utf16" => Ok(TextEncoding::Utf16),
            "utf16be" => Ok(TextEncoding::Utf16Be),
            "utf16le" => Ok(TextEncoding::Utf16Le),
            "iso88591" | "latin1" => Ok(TextEncoding::Latin1),
            "usascii" | "ascii" => Ok(TextEncoding::Ascii),
            _ => Err(Error::Validation(ValidationError::unknown_encoding(s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_utf8() {
        assert_eq!(TextEncoding::default(), TextEncoding::Utf8);
        assert_eq!(TextEncoding::default().encode("é").unwrap(), vec![0xC3, 0xA9]);
    }

    #[test]
    fn test_utf16_variants() {
        assert_eq!(TextEncoding::Utf16Be.encode("A").unwrap(), vec![0x00, 0x41]);
        assert_eq!(TextEncoding::Utf16Le.encode("A").unwrap(), vec![0x41, 0x00]);
        assert_eq!(
            TextEncoding::Utf16.encode("A").unwrap(),
            vec![0xFE, 0xFF, 0x00, 0x41]
        );
        assert!(TextEncoding::Utf16.encode("").unwrap().is_empty());
    }

    #[test]
    fn test_utf16_surrogate_pairs() {
        // U+1F600 encodes as D83D DE00
        assert_eq!(
            TextEncoding::Utf16Be.encode("\u{1F600}").unwrap(),
            vec![0xD8, 0x3D, 0xDE, 0x00]
        );
    }

    #[test]
    fn test_latin1_maps_code_points_directly() {
        assert_eq!(TextEncoding::Latin1.encode("café").unwrap(), b"caf\xE9".to_vec());
    }

    #[test]
    fn test_latin1_rejects_characters_above_ff() {
        let err = TextEncoding::Latin1.encode("price: €5").unwrap_err();
        match err {
            Error::Validation(ValidationError::UnencodableText {
                encoding,
                input,
                character,
                position,
            }) => {
                assert_eq!(encoding, "ISO-8859-1");
                assert_eq!(input, "price: €5");
                assert_eq!(character, '€');
                assert_eq!(position, 7);
            }
            other => panic!("Expected UnencodableText, got {other:?}"),
        }
    }

    #[test]
    fn test_ascii_rejects_non_ascii() {
        assert_eq!(TextEncoding::Ascii.encode("abc").unwrap(), b"abc".to_vec());
        assert!(TextEncoding::Ascii.encode("é").is_err());
    }

    #[test]
    fn test_parse_labels() {
        let cases = [
            ("UTF-8", TextEncoding::Utf8),
            ("utf8", TextEncoding::Utf8),
            ("UTF-16", TextEncoding::Utf16),
            ("utf-16be", TextEncoding::Utf16Be),
            ("UTF_16LE", TextEncoding::Utf16Le),
            ("ISO-8859-1", TextEncoding::Latin1),
            ("latin1", TextEncoding::Latin1),
            ("US-ASCII", TextEncoding::Ascii),
            ("ascii", TextEncoding::Ascii),
        ];

        for (label, expected) in cases {
            assert_eq!(label.parse::<TextEncoding>().unwrap(), expected, "{label}");
        }
    }

    #[test]
    fn test_labels_round_trip_through_parse() {
        for encoding in TextEncoding::ALL {
            assert_eq!(encoding.label().parse::<TextEncoding>().unwrap(), encoding);
        }
    }

    #[test]
    fn test_unknown_label() {
        let err = "EBCDIC".parse::<TextEncoding>().unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::UnknownEncoding { ref label }) if label == "EBCDIC"
        ));
    }
}
