// src/numerics/types/tolerance.rs
// Comparison settings for approximate matrix equality.

/// Configuration for approximate floating point comparisons.
///
/// Two values match when they are equal, or when their difference is within
/// the larger of the absolute bound and the relative bound scaled by the
/// bigger magnitude of the two. An infinity only matches the same infinity
/// and NaN never matches anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Largest accepted absolute difference.
    pub absolute: f32,

    /// Largest accepted difference relative to the larger magnitude.
    pub relative: f32,
}

impl Default for Tolerance {
    /// Absolute bound of `1e-6` and relative bound of `1e-5`, enough for a
    /// handful of chained f32 products.
    fn default() -> Self {
        Self {
            absolute: 1e-6,
            relative: 1e-5,
        }
    }
}

impl Tolerance {
    pub fn new(absolute: f32, relative: f32) -> Self {
        Self { absolute, relative }
    }

    /// Only bit-for-bit equal values (and `0.0 == -0.0`) match.
    pub fn exact() -> Self {
        Self {
            absolute: 0.0,
            relative: 0.0,
        }
    }

    pub fn absolute(epsilon: f32) -> Self {
        Self {
            absolute: epsilon,
            relative: 0.0,
        }
    }

    pub fn relative(epsilon: f32) -> Self {
        Self {
            absolute: 0.0,
            relative: epsilon,
        }
    }

    pub fn matches(&self, a: f32, b: f32) -> bool {
        if a == b {
            return true;
        }
        // infinities only match themselves, NaN matches nothing
        if !a.is_finite() || !b.is_finite() {
            return false;
        }
        let diff = (a - b).abs();
        let scale = a.abs().max(b.abs());
        diff <= self.absolute || diff <= self.relative * scale
    }
}
