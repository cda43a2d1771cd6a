//! Final guard on the externally visible scheme.
//!
//! Whatever the classifier produces, the picker only ever prints one of the
//! nine [`SchemeLabel`] identifiers. Anything else is replaced by
//! [`FALLBACK_SCHEME`].

use crate::models::SchemeLabel;

/// Scheme used when no valid scheme can be determined.
pub const FALLBACK_SCHEME: SchemeLabel = SchemeLabel::TonalSpot;

/// Accept a classifier result, substituting the fallback if there is none.
pub fn validate(candidate: Option<SchemeLabel>) -> SchemeLabel {
    candidate.unwrap_or_else(|| {
        tracing::warn!(fallback = %FALLBACK_SCHEME, "No scheme rule matched, using fallback");
        FALLBACK_SCHEME
    })
}

/// Accept a scheme identifier only if it belongs to the allowed set.
pub fn validate_name(candidate: &str) -> SchemeLabel {
    candidate.parse().unwrap_or_else(|err| {
        tracing::warn!(%err, fallback = %FALLBACK_SCHEME, "Replacing unknown scheme");
        FALLBACK_SCHEME
    })
}
