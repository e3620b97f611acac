//! Pearson correlation and ordinary-least-squares regression.
//!
//! Both statistics are undefined for fewer than two observations or for
//! degenerate (zero-variance) inputs. The contract is an explicit `None`
//! in that case; callers never see a `NaN` or an infinity.

use serde::{Deserialize, Serialize};

use crate::models::JoinedPair;

/// A fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Evaluates the line at `x`.
    #[must_use]
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Regression output for the lagged sentiment-vs-return scatter.
///
/// Either field is `None` when the underlying statistic is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    pub fit: Option<LinearFit>,
    pub correlation: Option<f64>,
}

impl RegressionResult {
    /// Computes both fit and correlation over the same pairs.
    #[must_use]
    pub fn compute(pairs: &[JoinedPair]) -> Self {
        Self {
            fit: ols_fit(pairs),
            correlation: pearson(pairs),
        }
    }
}

/// Mean-centered sums shared by `pearson` and `ols_fit`.
struct CenteredSums {
    mean_x: f64,
    mean_y: f64,
    covariance: f64,
    var_x: f64,
    var_y: f64,
}

fn centered_sums(pairs: &[JoinedPair]) -> Option<CenteredSums> {
    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.y).sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for pair in pairs {
        let dx = pair.x - mean_x;
        let dy = pair.y - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    Some(CenteredSums {
        mean_x,
        mean_y,
        covariance,
        var_x,
        var_y,
    })
}

/// Pearson correlation coefficient over paired observations.
///
/// Returns `None` for fewer than two pairs or when either variance is
/// zero; otherwise a value in [-1, 1].
#[must_use]
pub fn pearson(pairs: &[JoinedPair]) -> Option<f64> {
    let sums = centered_sums(pairs)?;

    let denominator = (sums.var_x * sums.var_y).sqrt();
    if denominator < f64::EPSILON {
        return None;
    }

    // Floating-point accumulation can land a hair outside [-1, 1]
    Some((sums.covariance / denominator).clamp(-1.0, 1.0))
}

/// Simple OLS fit over paired observations.
///
/// `slope = Σ(dx·dy) / Σdx²`, `intercept = mean_y - slope * mean_x`.
/// Returns `None` for fewer than two pairs or when all x values are
/// identical (zero denominator).
#[must_use]
pub fn ols_fit(pairs: &[JoinedPair]) -> Option<LinearFit> {
    let sums = centered_sums(pairs)?;

    if sums.var_x < f64::EPSILON {
        return None;
    }

    let slope = sums.covariance / sums.var_x;
    Some(LinearFit {
        slope,
        intercept: sums.mean_y - slope * sums.mean_x,
    })
}

/// Evaluates a fitted line at the two endpoints of a display domain,
/// yielding the segment to draw over a scatter plot.
#[must_use]
pub fn regression_line(fit: &LinearFit, x_min: f64, x_max: f64) -> [JoinedPair; 2] {
    [
        JoinedPair::new(x_min, fit.at(x_min)),
        JoinedPair::new(x_max, fit.at(x_max)),
    ]
}
