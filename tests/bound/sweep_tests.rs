//! Integration tests for trajectory evaluation and caching

use approx::assert_relative_eq;
use ddm_rs::bound::{Bound, BoundCollapsingExponential, BoundCollapsingLinear, BoundConstant, Conditions};
use ddm_rs::cache::BoundCache;
use ddm_rs::sweep::{bound_over, time_grid};

#[test]
fn test_exponential_trajectory() {
    let bound = BoundCollapsingExponential::with_tau(1.0, 0.5).unwrap();
    let times = time_grid(4.0, 0.5).unwrap();

    let trajectory = bound_over(&bound, &times, &Conditions::new()).unwrap();
    assert_eq!(trajectory.len(), times.len());
    for (t, value) in times.iter().zip(trajectory.iter()) {
        assert_relative_eq!(*value, (-0.5 * t).exp(), epsilon = 1e-12);
    }
}

#[test]
fn test_cache_shares_equal_bounds() {
    let mut cache = BoundCache::new(time_grid(2.0, 0.01).unwrap());
    let empty = Conditions::new();

    let sweep: Vec<Box<dyn Bound>> = (0..10)
        .map(|i| {
            let slope = (i % 3) as f64 * 0.1;
            Box::new(BoundCollapsingLinear::with_slope(1.0, slope).unwrap()) as Box<dyn Bound>
        })
        .collect();

    for bound in &sweep {
        let trajectory = cache.get_or_compute(bound.as_ref(), &empty).unwrap();
        assert_eq!(trajectory.len(), 201);
    }

    assert_eq!(cache.len(), 3);
    assert_eq!(cache.misses(), 3);
    assert_eq!(cache.hits(), 7);
}

#[test]
fn test_cache_separates_variants_with_same_values() {
    let mut cache = BoundCache::new(time_grid(1.0, 0.5).unwrap());
    let empty = Conditions::new();

    let linear = BoundCollapsingLinear::with_slope(1.0, 1.0).unwrap();
    let exponential = BoundCollapsingExponential::with_tau(1.0, 1.0).unwrap();

    let a = cache.get_or_compute(&linear, &empty).unwrap().clone();
    let b = cache.get_or_compute(&exponential, &empty).unwrap().clone();

    assert_eq!(cache.len(), 2);
    assert_ne!(a, b);
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_sweep() {
    use ddm_rs::sweep::par_bounds_over;

    let bounds: Vec<Box<dyn Bound>> = (1..=50)
        .map(|i| Box::new(BoundConstant::with_b(i as f64).unwrap()) as Box<dyn Bound>)
        .collect();
    let refs: Vec<&dyn Bound> = bounds.iter().map(|b| b.as_ref()).collect();

    let times = time_grid(1.0, 0.1).unwrap();
    let trajectories = par_bounds_over(&refs, &times, &Conditions::new()).unwrap();

    assert_eq!(trajectories.len(), 50);
    for (i, trajectory) in trajectories.iter().enumerate() {
        assert!(trajectory.iter().all(|v| *v == (i + 1) as f64));
    }
}
