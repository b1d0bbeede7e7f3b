//! Validated, immutable parameter values of a dependence instance
//!
//! A [`ParameterSet`] is the value record behind every variant instance. It is
//! only ever produced by [`ParameterSet::build`], which checks the supplied
//! names against the variant's [`Schema`], and it exposes no way to change a
//! value in place.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::warn;

use crate::dependence::schema::Schema;
use crate::error::{DdmError, Result};

/// Parameter values bound to a variant, stored in declared order
#[derive(Debug, Clone)]
pub struct ParameterSet {
    schema: &'static Schema,
    values: Vec<f64>,
}

impl ParameterSet {
    /// Validate `args` against `schema` and bind them
    ///
    /// Declared defaults are used as a base and caller arguments are laid
    /// over them. After merging, the set of names must equal the declared
    /// required parameters exactly; a missing or an extra name is reported as
    /// [`DdmError::ParameterMismatch`] with both name sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use ddm_rs::dependence::{ParameterSet, Schema};
    ///
    /// static DECLARATION: Schema =
    ///     Schema::new("Bound", "collapsing_linear", "BoundCollapsingLinear", &["B", "t"])
    ///         .with_defaults(&[("t", 0.5)]);
    ///
    /// let params = ParameterSet::build(&DECLARATION, [("B", 2.0)]).unwrap();
    /// assert_eq!(params.get("B"), Some(2.0));
    /// assert_eq!(params.get("t"), Some(0.5));
    ///
    /// assert!(ParameterSet::build(&DECLARATION, [("B", 2.0), ("tau", 1.0)]).is_err());
    /// ```
    pub fn build<I, K>(schema: &'static Schema, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        schema.validate()?;

        let mut merged: BTreeMap<String, f64> = schema
            .default_parameters
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect();
        for (name, value) in args {
            merged.insert(name.into(), value);
        }

        let provided: Vec<String> = merged.keys().cloned().collect();
        let expected = schema.sorted_parameters();
        if provided != expected {
            warn!(
                family = schema.family,
                variant = schema.variant_name,
                ?provided,
                ?expected,
                "parameter mismatch"
            );
            return Err(DdmError::ParameterMismatch {
                family: schema.family.to_string(),
                variant: schema.variant_name.to_string(),
                provided,
                expected,
            });
        }

        let values = schema
            .required_parameters
            .iter()
            .map(|name| {
                merged.get(*name).copied().ok_or_else(|| DdmError::InvalidDeclaration {
                    variant: schema.type_name.to_string(),
                    reason: format!("parameter '{}' could not be bound", name),
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        Ok(Self { schema, values })
    }

    /// The schema these values were validated against
    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// The value bound to `name`, if it is a declared parameter
    pub fn get(&self, name: &str) -> Option<f64> {
        self.schema
            .required_parameters
            .iter()
            .position(|param| *param == name)
            .map(|i| self.values[i])
    }

    /// Parameter names in declared order
    pub fn names(&self) -> &'static [&'static str] {
        self.schema.required_parameters
    }

    /// Parameter values in declared order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over `(name, value)` pairs in declared order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.schema
            .required_parameters
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    /// Number of bound parameters
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no parameters are bound (never true for a validated set)
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Produce a copy with a declared parameter rebound to `value`
    ///
    /// The receiver is never modified. Names outside the declared parameters
    /// are rejected with [`DdmError::ImmutableAttribute`].
    pub fn with_value(&self, name: &str, value: f64) -> Result<Self> {
        let index = self
            .schema
            .required_parameters
            .iter()
            .position(|param| *param == name)
            .ok_or_else(|| self.immutable(name))?;

        let mut values = self.values.clone();
        values[index] = value;
        Ok(Self {
            schema: self.schema,
            values,
        })
    }

    /// Removing a parameter is never allowed
    pub fn without(&self, name: &str) -> Result<Self> {
        Err(self.immutable(name))
    }

    fn immutable(&self, attribute: &str) -> DdmError {
        DdmError::ImmutableAttribute {
            variant: self.schema.type_name.to_string(),
            attribute: attribute.to_string(),
        }
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.schema.type_name)?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={:?}", name, value)?;
        }
        write!(f, ")")
    }
}

// Values compare bitwise so that equality stays reflexive for NaN and
// agrees with the rendered form used for hashing.
impl PartialEq for ParameterSet {
    fn eq(&self, other: &Self) -> bool {
        self.schema.same_variant(other.schema)
            && self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for ParameterSet {}

impl Hash for ParameterSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}
