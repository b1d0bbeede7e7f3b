//! Memoisation of bound trajectories.
//!
//! During fitting the same bound is often evaluated many times over the same
//! time grid. [`BoundCache`] keys each trajectory on the variant's parameter
//! set plus the values of the conditions the variant declares it needs, so
//! two equal bounds share an entry and unrelated conditions do not split it.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use ndarray::Array1;
use tracing::trace;

use crate::bound::{Bound, Conditions};
use crate::dependence::ParameterSet;
use crate::error::Result;
use crate::sweep::bound_over;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    parameters: ParameterSet,
    // (name, value bits) of the required conditions, in declared order
    conditions: Vec<(&'static str, u64)>,
}

impl CacheKey {
    fn new(bound: &dyn Bound, conditions: &Conditions) -> Result<Self> {
        bound.check_conditions(conditions)?;

        let conditions = bound
            .required_conditions()
            .iter()
            .filter_map(|name| conditions.get(*name).map(|value| (*name, value.to_bits())))
            .collect();

        Ok(Self {
            parameters: bound.parameters().clone(),
            conditions,
        })
    }
}

/// A cache of bound trajectories over one fixed time grid
///
/// # Examples
///
/// ```
/// use ddm_rs::bound::{BoundConstant, Conditions};
/// use ddm_rs::cache::BoundCache;
/// use ddm_rs::sweep::time_grid;
///
/// let mut cache = BoundCache::new(time_grid(1.0, 0.1).unwrap());
/// let a = BoundConstant::with_b(1.0).unwrap();
/// let b = BoundConstant::with_b(1.0).unwrap();
///
/// cache.get_or_compute(&a, &Conditions::new()).unwrap();
/// cache.get_or_compute(&b, &Conditions::new()).unwrap();
/// assert_eq!(cache.len(), 1);
/// assert_eq!(cache.hits(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct BoundCache {
    times: Array1<f64>,
    entries: HashMap<CacheKey, Array1<f64>>,
    hits: usize,
    misses: usize,
}

impl BoundCache {
    /// Create an empty cache for the given time grid
    pub fn new(times: Array1<f64>) -> Self {
        Self {
            times,
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// The time grid every cached trajectory is evaluated on
    pub fn times(&self) -> &Array1<f64> {
        &self.times
    }

    /// Return the trajectory of `bound`, evaluating it on first use
    pub fn get_or_compute(&mut self, bound: &dyn Bound, conditions: &Conditions) -> Result<&Array1<f64>> {
        let key = CacheKey::new(bound, conditions)?;

        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                trace!(bound = %bound, "bound cache hit");
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                self.misses += 1;
                trace!(bound = %bound, "bound cache miss");
                let trajectory = bound_over(bound, &self.times, conditions)?;
                Ok(entry.insert(trajectory))
            }
        }
    }

    /// Number of cached trajectories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no trajectories
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all cached trajectories and reset the counters
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Lookups answered from the cache
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Lookups that required an evaluation
    pub fn misses(&self) -> usize {
        self.misses
    }
}
