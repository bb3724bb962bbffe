use serde::{Deserialize, Serialize};

use crate::InvalidSymbolCode;

/// Outcome of a single letter-guess cell.
///
/// The discriminants are the canonical integer codes used by every numeric
/// computation (row sums, positional averages, materialized grid stacks).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::IsVariant,
)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Symbol {
    /// No guess was made in this cell.
    #[default]
    Empty = 0,
    /// Letter is not in the word.
    Absent = 1,
    /// Letter is in the word at a different position.
    Present = 2,
    /// Letter is in the word at this position.
    Correct = 3,
}

impl Symbol {
    /// All symbols ordered by their integer code.
    pub const ALL: [Symbol; 4] = [
        Symbol::Empty,
        Symbol::Absent,
        Symbol::Present,
        Symbol::Correct,
    ];

    /// Glyph emitted by the game for an absent letter (U+2B1C).
    pub const ABSENT_GLYPH: char = '\u{2B1C}';
    /// Glyph emitted by the game for a misplaced letter (U+1F7E8).
    pub const PRESENT_GLYPH: char = '\u{1F7E8}';
    /// Glyph emitted by the game for a correct letter (U+1F7E9).
    pub const CORRECT_GLYPH: char = '\u{1F7E9}';
    /// Hollow glyph used only when rendering unused cells (U+25A1).
    pub const EMPTY_GLYPH: char = '\u{25A1}';

    /// Returns the canonical integer code (0..=3).
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Converts a canonical integer code back into a symbol.
    pub const fn from_code(code: u8) -> Result<Self, InvalidSymbolCode> {
        match code {
            0 => Ok(Symbol::Empty),
            1 => Ok(Symbol::Absent),
            2 => Ok(Symbol::Present),
            3 => Ok(Symbol::Correct),
            _ => Err(InvalidSymbolCode(code)),
        }
    }

    /// Classifies one character of a decoded share text.
    ///
    /// Only the three glyphs the game emits are recognized. Everything else
    /// (line breaks, header text, stray whitespace) yields `None` and must not
    /// consume a grid cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordstat_engine::Symbol;
    ///
    /// assert_eq!(Symbol::classify('\u{1F7E9}'), Some(Symbol::Correct));
    /// assert_eq!(Symbol::classify('\n'), None);
    /// assert_eq!(Symbol::classify(Symbol::EMPTY_GLYPH), None);
    /// ```
    #[must_use]
    pub const fn classify(ch: char) -> Option<Self> {
        match ch {
            Self::ABSENT_GLYPH => Some(Symbol::Absent),
            Self::PRESENT_GLYPH => Some(Symbol::Present),
            Self::CORRECT_GLYPH => Some(Symbol::Correct),
            _ => None,
        }
    }

    /// Display glyph for presentation boundaries.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Symbol::Empty => Self::EMPTY_GLYPH,
            Symbol::Absent => Self::ABSENT_GLYPH,
            Symbol::Present => Self::PRESENT_GLYPH,
            Symbol::Correct => Self::CORRECT_GLYPH,
        }
    }

    /// Inverse of [`Symbol::glyph`], including the hollow empty glyph.
    #[must_use]
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            Self::EMPTY_GLYPH => Some(Symbol::Empty),
            _ => Self::classify(ch),
        }
    }
}

impl From<Symbol> for u8 {
    fn from(symbol: Symbol) -> Self {
        symbol.code()
    }
}

impl TryFrom<u8> for Symbol {
    type Error = InvalidSymbolCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Symbol::from_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::from_code(symbol.code()).unwrap(), symbol);
        }
        assert!(Symbol::from_code(4).is_err());
    }

    #[test]
    fn test_glyph_mapping_is_bidirectional() {
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::from_glyph(symbol.glyph()), Some(symbol));
        }
    }

    #[test]
    fn test_classify_skips_unrecognized() {
        for ch in ['\n', '\r', ' ', 'W', '3', '/', Symbol::EMPTY_GLYPH, '\u{2B1B}'] {
            assert_eq!(Symbol::classify(ch), None, "{ch:?} should be skipped");
        }
    }

    #[test]
    fn test_serialize_as_code() {
        let json = serde_json::to_string(&[Symbol::Empty, Symbol::Correct]).unwrap();
        assert_eq!(json, "[0,3]");
        let symbols: Vec<Symbol> = serde_json::from_str("[1,2]").unwrap();
        assert_eq!(symbols, [Symbol::Absent, Symbol::Present]);
        assert!(serde_json::from_str::<Symbol>("9").is_err());
    }
}
