//! Common types shared across intelligence modules.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of distinct keyword hits at which confidence saturates.
const SATURATION_MATCHES: f64 = 3.0;

/// Confidence percentage clamped to the [0.0, 100.0] range.
///
/// This newtype keeps classification confidence valid by clamping any
/// input during construction.
///
/// # Examples
///
/// ```
/// use skillstack_intelligence::Confidence;
///
/// let c = Confidence::new(42.0);
/// assert_eq!(c.value(), 42.0);
///
/// assert_eq!(Confidence::new(250.0).value(), 100.0);
/// assert_eq!(Confidence::new(-5.0).value(), 0.0);
///
/// // Three or more keyword hits saturate.
/// assert_eq!(Confidence::from_matches(3).value(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    /// Create a new Confidence, clamping the value to [0.0, 100.0].
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 100.0))
    }

    /// Confidence derived from a keyword-match count: `min(100, count / 3 * 100)`.
    #[must_use]
    pub fn from_matches(count: usize) -> Self {
        if count == 0 {
            return Self::zero();
        }
        Self::new((count as f64 / SATURATION_MATCHES) * 100.0)
    }

    /// Get the inner percentage.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Create a zero confidence score.
    #[must_use]
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Create a full confidence score (100%).
    #[must_use]
    pub fn full() -> Self {
        Self(100.0)
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(0.0)
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}%", self.0)
    }
}

/// Error returned when a wire value does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    /// Which enum was being parsed (e.g. "platform").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Comma-separated list of accepted values.
    pub expected: String,
}

/// Parse `input` against a fixed set of variants, matching case-insensitively
/// on the value produced by `key`.
pub(crate) fn parse_variant<T: Copy>(
    kind: &'static str,
    all: &[T],
    key: impl Fn(T) -> &'static str,
    input: &str,
) -> Result<T, ParseEnumError> {
    let trimmed = input.trim();
    all.iter()
        .copied()
        .find(|v| key(*v).eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| ParseEnumError {
            kind,
            value: input.to_string(),
            expected: all
                .iter()
                .map(|v| key(*v))
                .collect::<Vec<_>>()
                .join(", "),
        })
}
