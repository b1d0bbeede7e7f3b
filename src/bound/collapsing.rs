//! Collapsing bounds.
//!
//! Both variants start at `B` and move toward zero as the trial goes on.

use std::fmt;

use crate::bound::{Bound, Conditions, FAMILY};
use crate::dependence::{Dependence, DependenceVariant, ParameterSet, Schema};
use crate::error::Result;

// `t` here is the collapse slope, not the time argument of `get_bound`.
static LINEAR: Schema = Schema::new(
    FAMILY,
    "collapsing_linear",
    "BoundCollapsingLinear",
    &["B", "t"],
);

static EXPONENTIAL: Schema = Schema::new(
    FAMILY,
    "collapsing_exponential",
    "BoundCollapsingExponential",
    &["B", "tau"],
);

/// A bound that decreases linearly and stops at zero
///
/// Parameters:
/// - `B`: the bound at time `t = 0`
/// - `t`: the slope (coefficient of time), should be greater than zero
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundCollapsingLinear {
    parameters: ParameterSet,
}

impl BoundCollapsingLinear {
    /// Create a linearly collapsing bound
    pub fn with_slope(b: f64, slope: f64) -> Result<Self> {
        Self::new([("B", b), ("t", slope)])
    }

    /// The bound at time zero
    pub fn b(&self) -> f64 {
        self.parameters.values()[0]
    }

    /// The collapse rate, declared as parameter `t`
    pub fn slope(&self) -> f64 {
        self.parameters.values()[1]
    }
}

impl Dependence for BoundCollapsingLinear {
    fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }
}

impl DependenceVariant for BoundCollapsingLinear {
    fn declaration() -> &'static Schema {
        &LINEAR
    }

    fn from_parameters(parameters: ParameterSet) -> Self {
        Self { parameters }
    }
}

impl Bound for BoundCollapsingLinear {
    fn get_bound(&self, t: f64, _conditions: &Conditions) -> Result<f64> {
        Ok((self.b() - self.slope() * t).max(0.0))
    }
}

impl fmt::Display for BoundCollapsingLinear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.parameters, f)
    }
}

/// A bound that decays exponentially toward zero
///
/// Parameters:
/// - `B`: the bound at time `t = 0`
/// - `tau`: the time constant of the collapse, should be greater than zero
///
/// # Examples
///
/// ```
/// use ddm_rs::bound::{Bound, BoundCollapsingExponential, Conditions};
///
/// let bound = BoundCollapsingExponential::with_tau(1.0, 0.1).unwrap();
/// let late = bound.get_bound(50.0, &Conditions::new()).unwrap();
/// assert!(late > 0.0 && late < 0.01);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundCollapsingExponential {
    parameters: ParameterSet,
}

impl BoundCollapsingExponential {
    /// Create an exponentially collapsing bound
    pub fn with_tau(b: f64, tau: f64) -> Result<Self> {
        Self::new([("B", b), ("tau", tau)])
    }

    /// The bound at time zero
    pub fn b(&self) -> f64 {
        self.parameters.values()[0]
    }

    /// The collapse time constant
    pub fn tau(&self) -> f64 {
        self.parameters.values()[1]
    }
}

impl Dependence for BoundCollapsingExponential {
    fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }
}

impl DependenceVariant for BoundCollapsingExponential {
    fn declaration() -> &'static Schema {
        &EXPONENTIAL
    }

    fn from_parameters(parameters: ParameterSet) -> Self {
        Self { parameters }
    }
}

impl Bound for BoundCollapsingExponential {
    fn get_bound(&self, t: f64, _conditions: &Conditions) -> Result<f64> {
        Ok(self.b() * f64::exp(-self.tau() * t))
    }
}

impl fmt::Display for BoundCollapsingExponential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.parameters, f)
    }
}
