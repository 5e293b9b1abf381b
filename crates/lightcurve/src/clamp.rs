//! Domain clamping for the closed-form overlap terms.
//!
//! At regime boundaries the `acos` argument `(z - 1) / p` and the `sqrt`
//! argument `p^2 - (z - 1)^2` can drift just outside their domains through
//! roundoff. These helpers clamp to the nearest valid value and record
//! whether they had to.

/// A value that was either inside its domain or clamped onto its boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bounded {
    /// The argument was inside the domain.
    Within(f64),
    /// The argument was outside the domain and clamped.
    Clamped {
        /// Result computed from the clamped argument.
        value: f64,
        /// The original argument.
        raw: f64,
    },
}

impl Bounded {
    /// Returns the (possibly clamped) result.
    pub fn value(self) -> f64 {
        match self {
            Bounded::Within(v) | Bounded::Clamped { value: v, .. } => v,
        }
    }

    /// Returns true if the argument had to be clamped.
    pub fn was_clamped(self) -> bool {
        matches!(self, Bounded::Clamped { .. })
    }
}

/// `acos(x)` with `x` clamped to `[-1, 1]`.
pub fn acos_clamped(x: f64) -> Bounded {
    if (-1.0..=1.0).contains(&x) {
        Bounded::Within(x.acos())
    } else {
        Bounded::Clamped {
            value: x.clamp(-1.0, 1.0).acos(),
            raw: x,
        }
    }
}

/// `sqrt(x)` with negative `x` clamped to zero.
pub fn sqrt_clamped(x: f64) -> Bounded {
    if x >= 0.0 {
        Bounded::Within(x.sqrt())
    } else {
        Bounded::Clamped { value: 0.0, raw: x }
    }
}
