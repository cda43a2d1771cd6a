//! Scheme classification.
//!
//! The decision policy is an ordered table of rules; the first rule whose
//! predicate holds decides the scheme. Nested branches are flattened, so
//! every row repeats the guards of the rows it sits under. All comparisons
//! are strict: a metric exactly at a threshold does not pass it.

use image_metrics::MetricBundle;

use crate::models::SchemeLabel;

/// Brightness below which a monochrome image gets the monochrome scheme.
pub const DARK_MONOCHROME_BRIGHTNESS: f64 = 80.0;
/// Colorfulness a many-colored image needs to count as very colorful.
pub const VIVID_COLORFULNESS: f64 = 60.0;
/// Saturation above which a very colorful image gets the rainbow scheme.
pub const RAINBOW_SATURATION: f64 = 100.0;
/// Colorfulness above which a very colorful image gets fruit salad.
pub const FRUIT_SALAD_COLORFULNESS: f64 = 80.0;
/// Lower colorfulness bound of moderately colorful images.
pub const MODERATE_COLORFULNESS: f64 = 50.0;
/// Saturation above which a moderately colorful image is vibrant.
pub const VIBRANT_SATURATION: f64 = 120.0;
/// Diversity above which a moderately colorful image gets tonal spot.
pub const TONAL_SPOT_DIVERSITY: usize = 40;
/// Lower colorfulness bound of mildly colorful images.
pub const MILD_COLORFULNESS: f64 = 30.0;
/// Saturation above which a mildly colorful image gets fidelity.
pub const FIDELITY_SATURATION: f64 = 80.0;
/// Lower colorfulness bound for preserving the existing color.
pub const LOW_COLORFULNESS: f64 = 20.0;
/// Brightness above which a nearly colorless image is neutral.
pub const NEUTRAL_BRIGHTNESS: f64 = 127.0;

/// One row of the decision table.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Short identifier, used in logs and tests
    pub name: &'static str,
    pub matches: fn(&MetricBundle) -> bool,
    pub label: SchemeLabel,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("label", &self.label)
            .finish()
    }
}

fn very_colorful(m: &MetricBundle) -> bool {
    !m.is_monochrome && m.has_many_colors && m.colorfulness > VIVID_COLORFULNESS
}

fn moderately_colorful(m: &MetricBundle) -> bool {
    !m.is_monochrome && !very_colorful(m) && m.colorfulness > MODERATE_COLORFULNESS
}

fn mildly_colorful(m: &MetricBundle) -> bool {
    !m.is_monochrome && m.colorfulness <= MODERATE_COLORFULNESS && m.colorfulness > MILD_COLORFULNESS
}

/// The scheme selection policy, in evaluation order. The last row always
/// matches.
pub const DEFAULT_RULES: &[Rule] = &[
    Rule {
        name: "dark-monochrome",
        matches: |m| m.is_monochrome && m.brightness < DARK_MONOCHROME_BRIGHTNESS,
        label: SchemeLabel::Monochrome,
    },
    Rule {
        name: "light-monochrome",
        matches: |m| m.is_monochrome,
        label: SchemeLabel::Neutral,
    },
    Rule {
        name: "vivid-saturated",
        matches: |m| very_colorful(m) && m.saturation > RAINBOW_SATURATION,
        label: SchemeLabel::Rainbow,
    },
    Rule {
        name: "vivid-intense",
        matches: |m| very_colorful(m) && m.colorfulness > FRUIT_SALAD_COLORFULNESS,
        label: SchemeLabel::FruitSalad,
    },
    Rule {
        name: "vivid",
        matches: very_colorful,
        label: SchemeLabel::Expressive,
    },
    Rule {
        name: "moderate-saturated",
        matches: |m| moderately_colorful(m) && m.saturation > VIBRANT_SATURATION,
        label: SchemeLabel::Vibrant,
    },
    Rule {
        name: "moderate-diverse",
        matches: |m| moderately_colorful(m) && m.diversity > TONAL_SPOT_DIVERSITY,
        label: SchemeLabel::TonalSpot,
    },
    Rule {
        name: "moderate",
        matches: moderately_colorful,
        label: SchemeLabel::Expressive,
    },
    Rule {
        name: "mild-saturated",
        matches: |m| mildly_colorful(m) && m.saturation > FIDELITY_SATURATION,
        label: SchemeLabel::Fidelity,
    },
    Rule {
        name: "mild",
        matches: mildly_colorful,
        label: SchemeLabel::Content,
    },
    Rule {
        name: "low",
        matches: |m| !m.is_monochrome && m.colorfulness > LOW_COLORFULNESS,
        label: SchemeLabel::Content,
    },
    Rule {
        name: "colorless-light",
        matches: |m| m.brightness > NEUTRAL_BRIGHTNESS,
        label: SchemeLabel::Neutral,
    },
    Rule {
        name: "colorless",
        matches: |_| true,
        label: SchemeLabel::TonalSpot,
    },
];

/// Evaluates a rule table against metric bundles.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    rules: &'static [Rule],
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    /// Classifier using [`DEFAULT_RULES`].
    pub fn new() -> Self {
        Self::with_rules(DEFAULT_RULES)
    }

    /// Classifier using a custom table, evaluated top to bottom.
    pub fn with_rules(rules: &'static [Rule]) -> Self {
        Self { rules }
    }

    /// First matching rule for `metrics`, if any.
    pub fn matching_rule(&self, metrics: &MetricBundle) -> Option<&'static Rule> {
        self.rules.iter().find(|rule| (rule.matches)(metrics))
    }

    /// Label of the first matching rule. `None` only for tables without a
    /// catch-all row.
    pub fn classify(&self, metrics: &MetricBundle) -> Option<SchemeLabel> {
        let rule = self.matching_rule(metrics)?;
        tracing::trace!(rule = rule.name, label = %rule.label, "Scheme rule matched");
        Some(rule.label)
    }
}
