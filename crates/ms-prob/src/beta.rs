//! Beta distribution evaluator.
//!
//! All evaluation is a pure function of the validated shape parameters and
//! the call argument. The non-trivial pieces are the CDF (regularized
//! incomplete Beta function, delegated to `statrs`) and the quantile
//! (bisection over that CDF); every moment is closed-form.

use ms_core::{Error, Result};
use serde::{Deserialize, Serialize};
use statrs::function::beta::{beta as beta_fn, beta_reg, ln_beta};
use statrs::function::gamma::digamma;

/// Stop tolerance for the quantile bisection, on the probability axis.
const EPS_STOP: f64 = 1e-7;

/// Iteration cap for the quantile bisection; doubles as the non-convergence
/// guard, so the search always terminates.
const MAX_BISECT_ITERS: u32 = 70;

/// Quantile search bounds, kept from the reference implementation.
///
/// The upper bound is 100 even though the Beta support is `[0, 1]`. The CDF
/// saturates to 1 above `x = 1`, so for interior `p` the bisection still
/// converges into the unit interval; only the literal `p >= 1` boundary
/// reflects the 100. See DESIGN.md.
const QUANTILE_LO: f64 = 0.0;
const QUANTILE_HI: f64 = 100.0;

// ---------------------------------------------------------------------------
// Raw formulas, shared by the typed and legacy surfaces.
// Callers are responsible for having validated the shape parameters.
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn pdf_raw(alpha: f64, beta: f64, x: f64) -> f64 {
    // Boundary policy of the reference: zero density at x <= 0 and x > 1,
    // so x = 1 is evaluated while x = 0 is not.
    if x <= 0.0 || x > 1.0 {
        return 0.0;
    }
    x.powf(alpha - 1.0) * (1.0 - x).powf(beta - 1.0) / beta_fn(alpha, beta)
}

#[inline]
pub(crate) fn cdf_raw(alpha: f64, beta: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x > 1.0 {
        return 1.0;
    }
    beta_reg(alpha, beta, x)
}

/// Bisection search for the inverse CDF.
///
/// Expects `p` strictly inside `(0, 1)`; boundary probabilities are handled
/// by the callers. Returns `None` when the epsilon bound was not reached
/// within the iteration cap.
pub(crate) fn quantile_bisect(alpha: f64, beta: f64, p: f64) -> Option<f64> {
    let mut lo = QUANTILE_LO;
    let mut hi = QUANTILE_HI;
    for _ in 0..MAX_BISECT_ITERS {
        let mid = 0.5 * (lo + hi);
        let pr = cdf_raw(alpha, beta, mid);
        let eps = (pr - p).abs();
        // New boundary selection before the convergence exit, so the
        // returned midpoint is the last one evaluated.
        if pr > p {
            hi = mid;
        } else {
            lo = mid;
        }
        if eps <= EPS_STOP {
            return Some(mid);
        }
    }
    None
}

#[inline]
pub(crate) fn mean_raw(alpha: f64, beta: f64) -> f64 {
    alpha / (alpha + beta)
}

#[inline]
pub(crate) fn variance_raw(alpha: f64, beta: f64) -> f64 {
    let s = alpha + beta;
    alpha * beta / (s * s * (s + 1.0))
}

#[inline]
pub(crate) fn skewness_raw(alpha: f64, beta: f64) -> f64 {
    let s = alpha + beta;
    2.0 * (beta - alpha) * (s + 1.0).sqrt() / ((alpha * beta).sqrt() * (s + 2.0))
}

/// Excess kurtosis.
#[inline]
pub(crate) fn kurtosis_raw(alpha: f64, beta: f64) -> f64 {
    let s = alpha + beta;
    let d = alpha - beta;
    let numer = 6.0 * (d * d * (s + 1.0) - alpha * beta * (s + 2.0));
    let denom = alpha * beta * (s + 2.0) * (s + 3.0);
    numer / denom
}

/// Differential entropy, in log-space for numerical stability.
#[inline]
pub(crate) fn entropy_raw(alpha: f64, beta: f64) -> f64 {
    ln_beta(alpha, beta) - (alpha - 1.0) * digamma(alpha) - (beta - 1.0) * digamma(beta)
        + (alpha + beta - 2.0) * digamma(alpha + beta)
}

// ---------------------------------------------------------------------------
// Typed surface.
// ---------------------------------------------------------------------------

/// Beta distribution with shape parameters `alpha` and `beta`.
///
/// Parameters are validated once at construction and immutable afterwards,
/// so instances are freely shareable across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beta {
    alpha: f64,
    beta: f64,
}

impl Beta {
    /// Create a `Beta(alpha, beta)` distribution.
    ///
    /// Both shapes must be finite and strictly positive.
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(Error::Validation(format!(
                "alpha must be finite and > 0, got {}",
                alpha
            )));
        }
        if !beta.is_finite() || beta <= 0.0 {
            return Err(Error::Validation(format!("beta must be finite and > 0, got {}", beta)));
        }
        Ok(Self { alpha, beta })
    }

    /// Shape parameter `alpha`.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Shape parameter `beta`.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Density at `x`.
    ///
    /// Zero outside the support (`x <= 0` or `x > 1`). For extreme shapes
    /// the direct formula may overflow; IEEE infinities/NaNs propagate
    /// unguarded.
    pub fn pdf(&self, x: f64) -> f64 {
        pdf_raw(self.alpha, self.beta, x)
    }

    /// Log-density at `x`.
    ///
    /// `-inf` outside the support; stable log-space evaluation inside,
    /// including the `x = 1` endpoint.
    pub fn ln_pdf(&self, x: f64) -> f64 {
        if x <= 0.0 || x > 1.0 {
            return f64::NEG_INFINITY;
        }
        let ln_norm = -ln_beta(self.alpha, self.beta);
        if x == 1.0 {
            if self.beta < 1.0 {
                return f64::INFINITY;
            }
            if self.beta > 1.0 {
                return f64::NEG_INFINITY;
            }
            // beta == 1: the (1-x) term is 0.
            return ln_norm;
        }
        ln_norm + (self.alpha - 1.0) * x.ln() + (self.beta - 1.0) * (1.0 - x).ln()
    }

    /// Cumulative probability `P(X <= x)`, the regularized incomplete Beta
    /// function `I_x(alpha, beta)` clamped to `[0, 1]` outside the support.
    pub fn cdf(&self, x: f64) -> f64 {
        cdf_raw(self.alpha, self.beta, x)
    }

    /// Quantile (inverse CDF) at probability `p`, by bisection.
    ///
    /// `p <= 0` returns the lower search bound and `p >= 1` the upper one
    /// (100, not 1 — the reference boundary behavior, see DESIGN.md).
    /// Non-convergence within the iteration cap is a `Computation` error.
    pub fn quantile(&self, p: f64) -> Result<f64> {
        if p <= 0.0 {
            return Ok(QUANTILE_LO);
        }
        if p >= 1.0 {
            return Ok(QUANTILE_HI);
        }
        quantile_bisect(self.alpha, self.beta, p).ok_or_else(|| {
            Error::Computation(format!(
                "quantile bisection did not converge within {} iterations for p = {}",
                MAX_BISECT_ITERS, p
            ))
        })
    }

    /// Median of the distribution, `quantile(0.5)`.
    pub fn median(&self) -> Result<f64> {
        self.quantile(0.5)
    }

    /// Mean `alpha / (alpha + beta)`.
    pub fn mean(&self) -> f64 {
        mean_raw(self.alpha, self.beta)
    }

    /// Variance `alpha*beta / ((alpha+beta)^2 (alpha+beta+1))`.
    pub fn variance(&self) -> f64 {
        variance_raw(self.alpha, self.beta)
    }

    /// Standard deviation, `sqrt(variance)`.
    pub fn std_deviation(&self) -> f64 {
        variance_raw(self.alpha, self.beta).sqrt()
    }

    /// Skewness; zero when `alpha == beta`.
    pub fn skewness(&self) -> f64 {
        skewness_raw(self.alpha, self.beta)
    }

    /// Excess kurtosis.
    pub fn kurtosis(&self) -> f64 {
        kurtosis_raw(self.alpha, self.beta)
    }

    /// Differential entropy.
    pub fn entropy(&self) -> f64 {
        entropy_raw(self.alpha, self.beta)
    }

    /// Bundle of the distribution's parameters and moments.
    pub fn summary(&self) -> BetaSummary {
        BetaSummary {
            alpha: self.alpha,
            beta: self.beta,
            mean: self.mean(),
            variance: self.variance(),
            std_deviation: self.std_deviation(),
            skewness: self.skewness(),
            kurtosis: self.kurtosis(),
            entropy: self.entropy(),
        }
    }
}

/// Moment summary of a configured Beta distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetaSummary {
    /// Shape parameter alpha
    pub alpha: f64,

    /// Shape parameter beta
    pub beta: f64,

    /// Mean
    pub mean: f64,

    /// Variance
    pub variance: f64,

    /// Standard deviation
    pub std_deviation: f64,

    /// Skewness
    pub skewness: f64,

    /// Excess kurtosis
    pub kurtosis: f64,

    /// Differential entropy
    pub entropy: f64,
}
