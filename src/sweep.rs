//! Evaluation of bounds along a simulation time grid.
//!
//! The solver evaluates a bound once per time step, and a fitting sweep does
//! so for many candidate bounds. These helpers return whole trajectories as
//! `ndarray` vectors; with the `parallel` feature, many bounds can be
//! evaluated concurrently with Rayon since bound instances are immutable.

use ndarray::Array1;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::bound::{Bound, Conditions};
use crate::error::{DdmError, Result};

/// Largest number of steps [`time_grid`] will allocate
pub const MAX_GRID_STEPS: usize = 100_000_000;

// Absorbs rounding in `t_dur / dt` when `dt` divides `t_dur` exactly.
const STEP_TOLERANCE: f64 = 1e-9;

/// Build the time grid `0, dt, 2*dt, ..., t_dur`
///
/// The grid never runs past `t_dur`: when `dt` does not divide the duration
/// evenly, the last point is the largest multiple of `dt` below it.
///
/// # Arguments
///
/// * `t_dur` - Duration of the simulation, must be finite and non-negative
/// * `dt` - Time step, must be finite and positive
///
/// # Examples
///
/// ```
/// use ddm_rs::sweep::time_grid;
///
/// let times = time_grid(1.0, 0.25).unwrap();
/// assert_eq!(times.to_vec(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn time_grid(t_dur: f64, dt: f64) -> Result<Array1<f64>> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(DdmError::InvalidInput(format!(
            "time step must be positive and finite, got {}",
            dt
        )));
    }
    if !t_dur.is_finite() || t_dur < 0.0 {
        return Err(DdmError::InvalidInput(format!(
            "duration must be non-negative and finite, got {}",
            t_dur
        )));
    }

    let ratio = (t_dur / dt + STEP_TOLERANCE).floor();
    if !ratio.is_finite() || ratio >= MAX_GRID_STEPS as f64 {
        return Err(DdmError::InvalidInput(format!(
            "grid of duration {} with step {} exceeds {} steps",
            t_dur, dt, MAX_GRID_STEPS
        )));
    }

    let steps = ratio as usize;
    Ok(Array1::from_shape_fn(steps + 1, |i| i as f64 * dt))
}

/// Evaluate `bound` at every time in `times`
///
/// Required conditions are checked once up front. NaN times are rejected.
pub fn bound_over(bound: &dyn Bound, times: &Array1<f64>, conditions: &Conditions) -> Result<Array1<f64>> {
    bound.check_conditions(conditions)?;

    if times.iter().any(|t| t.is_nan()) {
        return Err(DdmError::InvalidInput(
            "time grid contains NaN".to_string(),
        ));
    }

    let values = times
        .iter()
        .map(|&t| bound.get_bound(t, conditions))
        .collect::<Result<Vec<f64>>>()?;

    Ok(Array1::from_vec(values))
}

/// Evaluate many bounds over the same grid in parallel
///
/// The result holds one trajectory per bound, in input order, and is
/// identical to calling [`bound_over`] on each bound in turn.
#[cfg(feature = "parallel")]
pub fn par_bounds_over(
    bounds: &[&dyn Bound],
    times: &Array1<f64>,
    conditions: &Conditions,
) -> Result<Vec<Array1<f64>>> {
    bounds
        .par_iter()
        .map(|bound| bound_over(*bound, times, conditions))
        .collect()
}
