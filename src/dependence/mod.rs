//! # Dependence Contract
//!
//! A dependence describes how one model variable (the decision bound, the
//! drift rate, the noise level, ...) depends on time and on experimental
//! conditions. Each such variable is a *family*, and each algorithm for it is
//! a *variant* with a fixed parameter schema.
//!
//! ## Core Components
//!
//! - [`Schema`]: the static declaration of a variant
//! - [`ParameterSet`]: validated, immutable parameter values
//! - [`Dependence`]: object-safe access to an instance's identity and values
//! - [`DependenceVariant`]: validated construction of a concrete variant
//!
//! ## Declaring a Variant
//!
//! ```rust
//! use ddm_rs::dependence::{Dependence, DependenceVariant, ParameterSet, Schema};
//! use std::fmt;
//!
//! static DRIFT_LINEAR: Schema = Schema::new("Drift", "linear", "DriftLinear", &["drift", "x"])
//!     .with_defaults(&[("x", 0.0)]);
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! struct DriftLinear {
//!     parameters: ParameterSet,
//! }
//!
//! impl Dependence for DriftLinear {
//!     fn parameters(&self) -> &ParameterSet {
//!         &self.parameters
//!     }
//! }
//!
//! impl DependenceVariant for DriftLinear {
//!     fn declaration() -> &'static Schema {
//!         &DRIFT_LINEAR
//!     }
//!
//!     fn from_parameters(parameters: ParameterSet) -> Self {
//!         Self { parameters }
//!     }
//! }
//!
//! impl fmt::Display for DriftLinear {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         fmt::Display::fmt(&self.parameters, f)
//!     }
//! }
//!
//! let drift = DriftLinear::new([("drift", 0.3)]).unwrap();
//! assert_eq!(drift.to_string(), "DriftLinear(drift=0.3, x=0.0)");
//! assert_eq!(drift.family(), "Drift");
//! ```

pub mod parameters;
pub mod schema;


use std::fmt;

use tracing::debug;

use crate::error::Result;

pub use parameters::ParameterSet;
pub use schema::Schema;

/// A constructed dependence instance
///
/// Instances are immutable once built, so they can be shared between threads
/// that evaluate them concurrently.
pub trait Dependence: fmt::Debug + fmt::Display + Send + Sync {
    /// The validated parameter values of this instance
    fn parameters(&self) -> &ParameterSet;

    /// The declaration this instance was built from
    fn schema(&self) -> &'static Schema {
        self.parameters().schema()
    }

    /// Name of the family this instance belongs to
    fn family(&self) -> &'static str {
        self.schema().family
    }

    /// Identifier of the algorithm within the family
    fn variant_name(&self) -> &'static str {
        self.schema().variant_name
    }

    /// Conditions that must be supplied when evaluating this instance
    fn required_conditions(&self) -> &'static [&'static str] {
        self.schema().required_conditions
    }

    /// The value of a declared parameter
    fn parameter(&self, name: &str) -> Option<f64> {
        self.parameters().get(name)
    }
}

/// A concrete variant that can be built from a parameter mapping
pub trait DependenceVariant: Dependence + Sized {
    /// The static declaration of this variant
    fn declaration() -> &'static Schema;

    /// Wrap parameters already validated against [`declaration`](Self::declaration)
    fn from_parameters(parameters: ParameterSet) -> Self;

    /// Validate `args` against the declaration and build an instance
    ///
    /// See [`ParameterSet::build`] for the validation rules.
    fn new<I, K>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let parameters = ParameterSet::build(Self::declaration(), args)?;
        debug!(
            family = parameters.schema().family,
            variant = parameters.schema().variant_name,
            rendered = %parameters,
            "constructed dependence"
        );
        Ok(Self::from_parameters(parameters))
    }

    /// Build an instance entirely from declared defaults
    fn from_defaults() -> Result<Self> {
        Self::new(std::iter::empty::<(String, f64)>())
    }

    /// Build a copy of `self` with one declared parameter rebound
    fn with_parameter(&self, name: &str, value: f64) -> Result<Self> {
        self.parameters()
            .with_value(name, value)
            .map(Self::from_parameters)
    }
}
