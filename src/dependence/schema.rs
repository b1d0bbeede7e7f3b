//! Static parameter schemas for dependence variants
//!
//! A [`Schema`] is the declaration attached to every concrete variant: which
//! family it belongs to, what it is called, and exactly which parameters it
//! must be built with. Schemas are plain `'static` data, so each variant
//! declares its schema once in a `static` item.

use crate::error::{DdmError, Result};

/// The declaration of a dependence variant
///
/// # Examples
///
/// ```
/// use ddm_rs::dependence::Schema;
///
/// static DECLARATION: Schema = Schema::new("Bound", "constant", "BoundConstant", &["B"]);
///
/// assert!(DECLARATION.validate().is_ok());
/// assert!(DECLARATION.declares("B"));
/// assert!(DECLARATION.required_conditions.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schema {
    /// Name of the family (the variable that depends on others), e.g. `"Bound"`
    pub family: &'static str,

    /// Identifier of the algorithm within the family, e.g. `"constant"`
    pub variant_name: &'static str,

    /// Name used when rendering instances, e.g. `"BoundConstant"`
    pub type_name: &'static str,

    /// Parameters an instance must be built with, in display order
    pub required_parameters: &'static [&'static str],

    /// Default values for a subset of the required parameters
    pub default_parameters: &'static [(&'static str, f64)],

    /// Experimental conditions needed at evaluation time
    pub required_conditions: &'static [&'static str],
}

impl Schema {
    /// Declare a variant with no defaults and no required conditions
    pub const fn new(
        family: &'static str,
        variant_name: &'static str,
        type_name: &'static str,
        required_parameters: &'static [&'static str],
    ) -> Self {
        Self {
            family,
            variant_name,
            type_name,
            required_parameters,
            default_parameters: &[],
            required_conditions: &[],
        }
    }

    /// Attach default parameter values to the declaration
    pub const fn with_defaults(self, default_parameters: &'static [(&'static str, f64)]) -> Self {
        Self {
            default_parameters,
            ..self
        }
    }

    /// Attach required condition names to the declaration
    pub const fn with_conditions(self, required_conditions: &'static [&'static str]) -> Self {
        Self {
            required_conditions,
            ..self
        }
    }

    /// Check that the declaration itself is well formed
    ///
    /// A malformed declaration is a bug in the variant definition, not in the
    /// values a caller passed, and is reported as
    /// [`DdmError::InvalidDeclaration`].
    pub fn validate(&self) -> Result<()> {
        if self.family.is_empty() {
            return Err(self.invalid("a family name is required"));
        }
        if self.variant_name.is_empty() {
            return Err(self.invalid("a variant name is required"));
        }
        if self.type_name.is_empty() {
            return Err(self.invalid("a type name is required"));
        }
        if self.required_parameters.is_empty() {
            return Err(self.invalid("a list of required parameters is required"));
        }

        for (i, name) in self.required_parameters.iter().enumerate() {
            if name.is_empty() {
                return Err(self.invalid("parameter names must not be empty"));
            }
            if self.required_parameters[..i].contains(name) {
                return Err(self.invalid(&format!("parameter '{}' is declared twice", name)));
            }
        }

        for (name, _) in self.default_parameters {
            if !self.declares(name) {
                return Err(self.invalid(&format!(
                    "default given for undeclared parameter '{}'",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Whether `name` is one of the required parameters
    pub fn declares(&self, name: &str) -> bool {
        self.required_parameters.contains(&name)
    }

    /// The declared default for `name`, if any
    pub fn default_for(&self, name: &str) -> Option<f64> {
        self.default_parameters
            .iter()
            .find(|(param, _)| *param == name)
            .map(|(_, value)| *value)
    }

    /// Required parameter names in sorted order
    pub fn sorted_parameters(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .required_parameters
            .iter()
            .map(|name| name.to_string())
            .collect();
        names.sort();
        names
    }

    /// Whether both schemas describe the same concrete variant
    pub fn same_variant(&self, other: &Schema) -> bool {
        self.type_name == other.type_name
            && self.family == other.family
            && self.variant_name == other.variant_name
    }

    fn invalid(&self, reason: &str) -> DdmError {
        let variant = if self.type_name.is_empty() {
            format!("{}/{}", self.family, self.variant_name)
        } else {
            self.type_name.to_string()
        };
        DdmError::InvalidDeclaration {
            variant,
            reason: reason.to_string(),
        }
    }
}
