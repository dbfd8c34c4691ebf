//! Legacy sentinel-based surface for the Beta distribution.
//!
//! Reproduces the reference contract exactly: construction never fails,
//! invalid shapes are recorded in a validity flag, and every gated query
//! returns an in-band numeric sentinel (`-2` invalid alpha, `-3` invalid
//! beta, `-9999` quantile non-convergence) instead of a typed error.
//!
//! New code should prefer [`crate::beta::Beta`]; this surface exists for
//! drop-in replacement of callers that branch on the sentinel values.

use crate::beta;

/// Sentinel returned by gated queries when alpha was non-positive.
pub const INVALID_ALPHA: f64 = -2.0;

/// Sentinel returned by gated queries when beta was non-positive.
pub const INVALID_BETA: f64 = -3.0;

/// Sentinel returned by `quantile` when the bisection did not converge.
pub const NO_CONVERGENCE: f64 = -9999.0;

/// Parameter validity, recorded once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    /// Both shape parameters are strictly positive.
    Valid,
    /// `alpha <= 0` at construction.
    InvalidAlpha,
    /// `beta <= 0` at construction.
    InvalidBeta,
}

/// Beta distribution with the legacy in-band error contract.
///
/// The shape parameters are stored as given, valid or not; the validity
/// flag gates every statistical query.
#[derive(Debug, Clone, Copy)]
pub struct BetaDistribution {
    alpha: f64,
    beta: f64,
    validity: Validity,
}

impl BetaDistribution {
    /// Create a distribution from raw shapes. Never fails; invalidity is
    /// recorded, not raised.
    ///
    /// The alpha check runs first and the beta check second, overwriting
    /// the flag, so when both shapes are invalid the caller observes the
    /// beta sentinel. This matches the reference constructor's evaluation
    /// order and is relied upon by compatibility tests.
    pub fn new(alpha: f64, beta: f64) -> Self {
        let mut validity = Validity::Valid;
        if alpha <= 0.0 {
            validity = Validity::InvalidAlpha;
        }
        if beta <= 0.0 {
            validity = Validity::InvalidBeta;
        }
        Self { alpha, beta, validity }
    }

    /// Typed view of the validity flag.
    pub fn validity(&self) -> Validity {
        self.validity
    }

    /// True when both shape parameters passed validation.
    pub fn is_valid(&self) -> bool {
        self.validity == Validity::Valid
    }

    /// Sentinel for the current validity state, `None` when valid.
    fn gate(&self) -> Option<f64> {
        match self.validity {
            Validity::Valid => None,
            Validity::InvalidAlpha => Some(INVALID_ALPHA),
            Validity::InvalidBeta => Some(INVALID_BETA),
        }
    }

    /// Probability density at `x`; zero outside the support.
    pub fn pdf(&self, x: f64) -> f64 {
        if let Some(s) = self.gate() {
            return s;
        }
        beta::pdf_raw(self.alpha, self.beta, x)
    }

    /// Cumulative probability at `x`, clamped to `[0, 1]` outside the
    /// support.
    pub fn cdf(&self, x: f64) -> f64 {
        if let Some(s) = self.gate() {
            return s;
        }
        beta::cdf_raw(self.alpha, self.beta, x)
    }

    /// Quantile at probability `p` by bisection.
    ///
    /// `p <= 0` returns 0 and `p >= 1` returns 100 (the search bounds of
    /// the reference implementation); non-convergence returns `-9999`.
    /// The validity gate runs before the boundary checks so an invalid
    /// instance never enters the search loop.
    pub fn quantile(&self, p: f64) -> f64 {
        if let Some(s) = self.gate() {
            return s;
        }
        if p <= 0.0 {
            return 0.0;
        }
        if p >= 1.0 {
            return 100.0;
        }
        match beta::quantile_bisect(self.alpha, self.beta, p) {
            Some(q) => q,
            None => NO_CONVERGENCE,
        }
    }

    /// Mean.
    pub fn mean(&self) -> f64 {
        if let Some(s) = self.gate() {
            return s;
        }
        beta::mean_raw(self.alpha, self.beta)
    }

    /// Variance.
    pub fn variance(&self) -> f64 {
        if let Some(s) = self.gate() {
            return s;
        }
        beta::variance_raw(self.alpha, self.beta)
    }

    /// Standard deviation.
    pub fn std_deviation(&self) -> f64 {
        if let Some(s) = self.gate() {
            return s;
        }
        beta::variance_raw(self.alpha, self.beta).sqrt()
    }

    /// Skewness.
    pub fn skewness(&self) -> f64 {
        if let Some(s) = self.gate() {
            return s;
        }
        beta::skewness_raw(self.alpha, self.beta)
    }

    /// Excess kurtosis.
    pub fn kurtosis(&self) -> f64 {
        if let Some(s) = self.gate() {
            return s;
        }
        beta::kurtosis_raw(self.alpha, self.beta)
    }

    /// Differential entropy.
    pub fn entropy(&self) -> f64 {
        if let Some(s) = self.gate() {
            return s;
        }
        beta::entropy_raw(self.alpha, self.beta)
    }

    /// Stored alpha, returned unconditionally (no validity gate).
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Stored beta, returned unconditionally (no validity gate).
    pub fn beta(&self) -> f64 {
        self.beta
    }
}
