//! # Bound Dependences
//!
//! The decision bound of a drift-diffusion model is symmetric: the upper
//! bound is `B(t)` and the lower bound is `-B(t)`. The variants in this module
//! describe how `B(t)` changes over the course of a trial.
//!
//! | Variant | Parameters | Bound at time `t` |
//! |---|---|---|
//! | [`BoundConstant`] | `B` | `B` |
//! | [`BoundCollapsingLinear`] | `B`, `t` (slope) | `max(B - slope * t, 0)` |
//! | [`BoundCollapsingExponential`] | `B`, `tau` | `B * exp(-tau * t)` |
//!
//! ## Example Usage
//!
//! ```rust
//! use ddm_rs::bound::{Bound, BoundCollapsingLinear, Conditions};
//!
//! let bound = BoundCollapsingLinear::with_slope(1.0, 0.1).unwrap();
//! let conditions = Conditions::new();
//!
//! assert_eq!(bound.get_bound(5.0, &conditions).unwrap(), 0.5);
//! assert_eq!(bound.get_bound(20.0, &conditions).unwrap(), 0.0);
//! assert_eq!(bound.to_string(), "BoundCollapsingLinear(B=1.0, t=0.1)");
//! ```

mod collapsing;
mod constant;

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::config::DependenceConfig;
use crate::dependence::{Dependence, DependenceVariant, Schema};
use crate::error::{DdmError, Result};

pub use collapsing::{BoundCollapsingExponential, BoundCollapsingLinear};
pub use constant::BoundConstant;

/// Family name shared by every bound variant
pub const FAMILY: &str = "Bound";

/// Experimental conditions of a trial, keyed by condition name
pub type Conditions = BTreeMap<String, f64>;

/// How the decision bound depends on time and conditions
///
/// Every variant must declare a `B` parameter, the bound at `t = 0`.
pub trait Bound: Dependence {
    /// The bound magnitude at time `t`
    ///
    /// Variants override this. The provided implementation reports
    /// [`DdmError::UnimplementedCapability`].
    fn get_bound(&self, t: f64, conditions: &Conditions) -> Result<f64> {
        let _ = (t, conditions);
        Err(DdmError::UnimplementedCapability {
            family: self.family().to_string(),
            variant: self.variant_name().to_string(),
            capability: "get_bound".to_string(),
        })
    }

    /// The bound at the start of the trial, i.e. the raw `B` parameter
    fn b_base(&self, _conditions: &Conditions) -> Result<f64> {
        self.parameter("B")
            .ok_or_else(|| DdmError::InvalidDeclaration {
                variant: self.schema().type_name.to_string(),
                reason: "B must be a required parameter".to_string(),
            })
    }

    /// Check that every required condition is present in `conditions`
    fn check_conditions(&self, conditions: &Conditions) -> Result<()> {
        match self
            .required_conditions()
            .iter()
            .find(|name| !conditions.contains_key(**name))
        {
            Some(name) => Err(DdmError::MissingCondition {
                variant: self.schema().type_name.to_string(),
                condition: name.to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl PartialEq for dyn Bound {
    fn eq(&self, other: &Self) -> bool {
        self.parameters() == other.parameters()
    }
}

impl Eq for dyn Bound {}

impl Hash for dyn Bound {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.parameters().hash(state);
    }
}

/// Declarations of every built-in bound variant
pub fn variants() -> [&'static Schema; 3] {
    [
        BoundConstant::declaration(),
        BoundCollapsingLinear::declaration(),
        BoundCollapsingExponential::declaration(),
    ]
}

/// Build a bound variant from its configuration
///
/// The variant is looked up by its `variant_name`. Parameters are validated
/// exactly as with direct construction.
///
/// # Examples
///
/// ```
/// use ddm_rs::bound::{self, Bound, Conditions};
/// use ddm_rs::config::DependenceConfig;
///
/// let config = DependenceConfig::from_json(
///     r#"{"name": "collapsing_exponential", "parameters": {"B": 1.0, "tau": 0.1}}"#,
/// )
/// .unwrap();
///
/// let bound = bound::from_config(&config).unwrap();
/// assert_eq!(bound.get_bound(0.0, &Conditions::new()).unwrap(), 1.0);
/// ```
pub fn from_config(config: &DependenceConfig) -> Result<Box<dyn Bound>> {
    let args = config
        .parameters
        .iter()
        .map(|(name, value)| (name.clone(), *value));

    let bound: Box<dyn Bound> = match config.name.as_str() {
        "constant" => Box::new(BoundConstant::new(args)?),
        "collapsing_linear" => Box::new(BoundCollapsingLinear::new(args)?),
        "collapsing_exponential" => Box::new(BoundCollapsingExponential::new(args)?),
        other => {
            return Err(DdmError::UnknownVariant {
                family: FAMILY.to_string(),
                name: other.to_string(),
            })
        }
    };

    debug!(bound = %bound, "bound built from configuration");
    Ok(bound)
}
