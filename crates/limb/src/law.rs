//! The nonlinear four-coefficient limb-darkening law.

use crate::error::LimbError;

/// Number of free coefficients in the nonlinear law.
pub const N_COEFFS: usize = 4;

/// Nonlinear limb-darkening law with coefficients `c1..c4`.
///
/// The surface brightness at normalised radius `r` is
///
/// ```text
/// mu   = sqrt(1 - r^2)
/// I(r) = 1 - sum_{n=1}^{4} c_n (1 - mu^(n/2))
/// ```
///
/// The implicit zeroth coefficient `c0 = 1 - c1 - c2 - c3 - c4` is derived
/// internally so that the full vector always sums to one.
///
/// # Example
///
/// ```
/// use transit_limb::LimbDarkening;
///
/// let law = LimbDarkening::new(0.5, -0.1, 0.4, -0.2).unwrap();
/// let c = law.coefficients();
/// assert!((c.iter().sum::<f64>() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimbDarkening {
    c: [f64; N_COEFFS],
}

impl LimbDarkening {
    /// Creates a law from the four coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`LimbError::NonFiniteCoefficient`] if any coefficient is NaN or infinite.
    pub fn new(c1: f64, c2: f64, c3: f64, c4: f64) -> Result<Self, LimbError> {
        let c = [c1, c2, c3, c4];
        for (i, &v) in c.iter().enumerate() {
            if !v.is_finite() {
                return Err(LimbError::NonFiniteCoefficient {
                    index: i + 1,
                    value: v,
                });
            }
        }
        Ok(Self { c })
    }

    /// Creates a law from a slice that must hold exactly `c1..c4`.
    ///
    /// # Errors
    ///
    /// Returns [`LimbError::CoefficientCount`] if `coeffs.len() != 4`, or
    /// [`LimbError::NonFiniteCoefficient`] for NaN/infinite values.
    pub fn from_slice(coeffs: &[f64]) -> Result<Self, LimbError> {
        match *coeffs {
            [c1, c2, c3, c4] => Self::new(c1, c2, c3, c4),
            _ => Err(LimbError::CoefficientCount { got: coeffs.len() }),
        }
    }

    /// A uniformly bright disk (all coefficients zero).
    pub fn uniform() -> Self {
        Self { c: [0.0; N_COEFFS] }
    }

    /// Returns the full coefficient vector `[c0, c1, c2, c3, c4]`
    /// with `c0 = 1 - c1 - c2 - c3 - c4`.
    pub fn coefficients(&self) -> [f64; N_COEFFS + 1] {
        let [c1, c2, c3, c4] = self.c;
        [1.0 - c1 - c2 - c3 - c4, c1, c2, c3, c4]
    }

    /// Normalisation constant `Omega = sum_{n=0}^{4} c_n / (n + 4)`.
    ///
    /// The disk-integrated intensity `int_0^1 I(r) 2r dr` equals `4 * Omega`.
    pub fn omega(&self) -> f64 {
        self.coefficients()
            .iter()
            .enumerate()
            .map(|(n, &c)| c / (n as f64 + 4.0))
            .sum()
    }

    /// Surface brightness at normalised radius `r`.
    ///
    /// # Errors
    ///
    /// Returns [`LimbError::RadiusOutOfRange`] unless `0 <= r <= 1`.
    pub fn intensity(&self, r: f64) -> Result<f64, LimbError> {
        if !(0.0..=1.0).contains(&r) {
            return Err(LimbError::RadiusOutOfRange { r });
        }
        Ok(self.intensity_unchecked(r))
    }

    /// Brightness without the domain check; callers guarantee `0 <= r <= 1`.
    #[inline]
    pub(crate) fn intensity_unchecked(&self, r: f64) -> f64 {
        // mu^(1/2) = (1 - r^2)^(1/4)
        let q = (1.0 - r * r).sqrt().sqrt();
        let mut q_n = 1.0;
        let mut out = 1.0;
        for &c in &self.c {
            q_n *= q;
            out -= c * (1.0 - q_n);
        }
        out
    }
}

impl Default for LimbDarkening {
    fn default() -> Self {
        Self::uniform()
    }
}
