use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Color scheme variants a theming tool can generate from a seed image.
///
/// This is the closed set of values the picker may ever output. It renders
/// as the `scheme-*` identifiers understood by downstream palette generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeLabel {
    Content,
    Expressive,
    Fidelity,
    FruitSalad,
    Monochrome,
    Neutral,
    Rainbow,
    TonalSpot,
    Vibrant,
}

impl SchemeLabel {
    /// Every label, in identifier order.
    pub const ALL: [SchemeLabel; 9] = [
        SchemeLabel::Content,
        SchemeLabel::Expressive,
        SchemeLabel::Fidelity,
        SchemeLabel::FruitSalad,
        SchemeLabel::Monochrome,
        SchemeLabel::Neutral,
        SchemeLabel::Rainbow,
        SchemeLabel::TonalSpot,
        SchemeLabel::Vibrant,
    ];

    /// The external identifier, e.g. `scheme-tonal-spot`.
    pub const fn as_str(self) -> &'static str {
        match self {
            SchemeLabel::Content => "scheme-content",
            SchemeLabel::Expressive => "scheme-expressive",
            SchemeLabel::Fidelity => "scheme-fidelity",
            SchemeLabel::FruitSalad => "scheme-fruit-salad",
            SchemeLabel::Monochrome => "scheme-monochrome",
            SchemeLabel::Neutral => "scheme-neutral",
            SchemeLabel::Rainbow => "scheme-rainbow",
            SchemeLabel::TonalSpot => "scheme-tonal-spot",
            SchemeLabel::Vibrant => "scheme-vibrant",
        }
    }
}

impl fmt::Display for SchemeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text that is not one of the nine scheme identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown color scheme: {0}")]
pub struct UnknownScheme(pub String);

impl FromStr for SchemeLabel {
    type Err = UnknownScheme;

    /// Parse an exact identifier. Matching is case-sensitive and does not
    /// trim, since identifiers are compared verbatim downstream.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| UnknownScheme(s.to_string()))
    }
}
