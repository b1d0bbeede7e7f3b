//! # ddm-rs
//!
//! `ddm-rs` provides the parameter-dependence layer of a drift-diffusion
//! decision-model toolkit.
//!
//! The library provides:
//! - A declarative contract for model components: each variant declares a
//!   family, a name, its required parameters, optional defaults and the
//!   experimental conditions it needs
//! - Validated, immutable construction with structural equality, a
//!   deterministic string form and hashing
//! - The bound family (constant, linearly and exponentially collapsing)
//! - JSON configuration, vectorised and parallel evaluation, and a
//!   trajectory cache for fitting sweeps
//!
//! ## Basic Usage
//!
//! ```
//! use ddm_rs::bound::{Bound, BoundConstant, Conditions};
//! use ddm_rs::dependence::DependenceVariant;
//!
//! let bound = BoundConstant::new([("B", 1.0)]).unwrap();
//! assert_eq!(bound.get_bound(0.0, &Conditions::new()).unwrap(), 1.0);
//! assert_eq!(bound.to_string(), "BoundConstant(B=1.0)");
//! assert_eq!(bound, BoundConstant::with_b(1.0).unwrap());
//! ```

// Public modules
pub mod error;

// Dependence contract
pub mod dependence;

// Concrete families
pub mod bound;

pub mod cache;
pub mod config;
pub mod sweep;

// Re-exports for convenience
pub use bound::{Bound, Conditions};
pub use dependence::{Dependence, DependenceVariant, ParameterSet, Schema};
pub use error::{DdmError, Result};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
