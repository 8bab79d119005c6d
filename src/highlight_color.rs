#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The highlight colors a renderer distinguishes.
///
/// The color is a semantic tag. Mapping it to an actual RGB value is up to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum HighlightColor {
    /// Identifiers, symbols and everything not covered by another color.
    #[default]
    Default = 0,
    /// Numeric and boolean literals.
    Numbers = 1,
    /// Language keywords.
    Keywords = 2,
    /// Built-in datatypes.
    Datatypes = 3,
    /// Annotations, preprocessor directives and all-caps constants.
    Special = 4,
    /// Line and block comments.
    Comments = 5,
    /// String and char literals.
    Strings = 6,
}

impl HighlightColor {
    /// All colors, ordered by ordinal.
    pub const ALL: [HighlightColor; 7] = [
        HighlightColor::Default,
        HighlightColor::Numbers,
        HighlightColor::Keywords,
        HighlightColor::Datatypes,
        HighlightColor::Special,
        HighlightColor::Comments,
        HighlightColor::Strings,
    ];

    /// Get the ordinal of the color.
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Get the color with the given ordinal.
    /// Unknown ordinals map to [`HighlightColor::Default`].
    pub fn from_ordinal(ordinal: u8) -> Self {
        Self::ALL
            .get(ordinal as usize)
            .copied()
            .unwrap_or(HighlightColor::Default)
    }

    /// Get the name of the color.
    pub fn name(self) -> &'static str {
        match self {
            HighlightColor::Default => "default",
            HighlightColor::Numbers => "numbers",
            HighlightColor::Keywords => "keywords",
            HighlightColor::Datatypes => "datatypes",
            HighlightColor::Special => "special",
            HighlightColor::Comments => "comments",
            HighlightColor::Strings => "strings",
        }
    }
}

impl std::fmt::Display for HighlightColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_round_trip() {
        for (i, color) in HighlightColor::ALL.iter().enumerate() {
            assert_eq!(color.ordinal() as usize, i);
            assert_eq!(HighlightColor::from_ordinal(i as u8), *color);
        }
        assert_eq!(HighlightColor::from_ordinal(200), HighlightColor::Default);
    }

    #[test]
    fn test_display_respects_width() {
        assert_eq!(HighlightColor::Keywords.to_string(), "keywords");
        assert_eq!(format!("{:>9}|", HighlightColor::Keywords), " keywords|");
        assert_eq!(format!("{:<9}|", HighlightColor::Special), "special  |");
    }
}
