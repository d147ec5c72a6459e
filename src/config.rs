//! Comparison tolerances
//!
//! Floating-point products drift by a few ulps per recursion level, so
//! algebraic identities are checked componentwise against a tolerance:
//!   `|a - b| <= absolute  ||  |a - b| <= relative * max(|a|, |b|)`

/// Default absolute tolerance
pub const DEFAULT_ABSOLUTE: f64 = 1e-9;

/// Default relative tolerance
pub const DEFAULT_RELATIVE: f64 = 1e-9;

/// Tolerance used by [`crate::Hypercomplex::approx_eq`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Largest accepted absolute difference
    pub absolute: f64,

    /// Largest accepted difference relative to the larger magnitude
    pub relative: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: DEFAULT_ABSOLUTE,
            relative: DEFAULT_RELATIVE,
        }
    }
}

impl Tolerance {
    /// Create tolerance with explicit bounds (negative bounds clamp to 0)
    pub fn new(absolute: f64, relative: f64) -> Self {
        Self {
            absolute: absolute.max(0.0),
            relative: relative.max(0.0),
        }
    }

    /// Exact comparison
    pub fn strict() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Set absolute bound.
    pub fn with_absolute(mut self, absolute: f64) -> Self {
        self.absolute = absolute.max(0.0);
        self
    }

    /// Set relative bound.
    pub fn with_relative(mut self, relative: f64) -> Self {
        self.relative = relative.max(0.0);
        self
    }

    /// Check if `a` and `b` agree within this tolerance (NaN never does)
    #[inline]
    pub fn accepts(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        let diff = (a - b).abs();
        diff <= self.absolute || diff <= self.relative * a.abs().max(b.abs())
    }
}
