//! Constant bound

use std::fmt;

use crate::bound::{Bound, Conditions, FAMILY};
use crate::dependence::{Dependence, DependenceVariant, ParameterSet, Schema};
use crate::error::Result;

static DECLARATION: Schema = Schema::new(FAMILY, "constant", "BoundConstant", &["B"]);

/// A bound that stays at `B` for the whole trial
///
/// # Examples
///
/// ```
/// use ddm_rs::bound::{Bound, BoundConstant, Conditions};
///
/// let bound = BoundConstant::with_b(1.0).unwrap();
/// assert_eq!(bound.get_bound(100.0, &Conditions::new()).unwrap(), 1.0);
/// assert_eq!(bound.to_string(), "BoundConstant(B=1.0)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundConstant {
    parameters: ParameterSet,
}

impl BoundConstant {
    /// Create a constant bound at height `b`
    pub fn with_b(b: f64) -> Result<Self> {
        Self::new([("B", b)])
    }

    /// The bound height
    pub fn b(&self) -> f64 {
        self.parameters.values()[0]
    }
}

impl Dependence for BoundConstant {
    fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }
}

impl DependenceVariant for BoundConstant {
    fn declaration() -> &'static Schema {
        &DECLARATION
    }

    fn from_parameters(parameters: ParameterSet) -> Self {
        Self { parameters }
    }
}

impl Bound for BoundConstant {
    fn get_bound(&self, _t: f64, _conditions: &Conditions) -> Result<f64> {
        Ok(self.b())
    }
}

impl fmt::Display for BoundConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.parameters, f)
    }
}
