use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColourError {
    #[error("invalid argument: empty colour string")]
    Empty,
    #[error("invalid argument: invalid colour `{0}`")]
    Invalid(String),
}

/// An opaque RGB colour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const DEFAULT_FOREGROUND: Self = Self::rgb(0x1b, 0x1f, 0x23);
    pub const DEFAULT_BACKGROUND: Self = Self::rgb(0xff, 0xff, 0xff);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb`, `rrggbb`, `#rgb` or `rgb`, ignoring surrounding whitespace.
    pub fn from_hex(input: &str) -> Result<Self, ColourError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ColourError::Empty);
        }

        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || ColourError::Invalid(input.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
                Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                // #rgb expands each nibble: #f80 == #ff8800
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Self::rgb(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => Err(invalid()),
        }
    }

    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    #[must_use]
    pub fn to_rgb_bytes(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Colour {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Colour {
    type Error = ColourError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Colour> for String {
    fn from(colour: Colour) -> Self {
        colour.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hash_prefixed_hex() {
        assert_eq!(Colour::from_hex("#1b1f23"), Ok(Colour::rgb(0x1b, 0x1f, 0x23)));
    }

    #[test]
    fn parses_hex_without_hash_and_with_whitespace() {
        assert_eq!(Colour::from_hex("  FFffFF "), Ok(Colour::DEFAULT_BACKGROUND));
    }

    #[test]
    fn parses_short_form() {
        assert_eq!(Colour::from_hex("#f80"), Ok(Colour::rgb(0xff, 0x88, 0x00)));
    }

    #[test]
    fn empty_string_is_rejected() {
        assert_eq!(Colour::from_hex(""), Err(ColourError::Empty));
        assert_eq!(Colour::from_hex("   "), Err(ColourError::Empty));
    }

    #[test]
    fn malformed_strings_are_rejected() {
        for input in ["#12345", "#gggggg", "#1234567", "#", "blue", "#12 456"] {
            assert_eq!(
                Colour::from_hex(input),
                Err(ColourError::Invalid(input.to_string())),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn to_hex_is_lowercase_long_form() {
        assert_eq!(Colour::rgb(0xAB, 0x01, 0xFF).to_hex(), "#ab01ff");
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Colour::DEFAULT_FOREGROUND).unwrap();
        assert_eq!(json, "\"#1b1f23\"");

        let parsed: Colour = serde_json::from_str("\"#ffffff\"").unwrap();
        assert_eq!(parsed, Colour::DEFAULT_BACKGROUND);

        assert!(serde_json::from_str::<Colour>("\"nope\"").is_err());
    }
}
