//! Bound Dependence Example
//!
//! This example shows how to build bound variants directly and from JSON,
//! evaluate them over a simulation time grid, and use them as cache keys.

use ddm_rs::bound::{self, Bound, BoundCollapsingExponential, BoundCollapsingLinear, BoundConstant, Conditions};
use ddm_rs::cache::BoundCache;
use ddm_rs::config::DependenceConfig;
use ddm_rs::dependence::DependenceVariant;
use ddm_rs::sweep::{bound_over, time_grid};

fn main() -> ddm_rs::Result<()> {
    let conditions = Conditions::new();
    let times = time_grid(2.0, 0.5)?;

    // Build the three built-in variants
    let bounds: Vec<Box<dyn Bound>> = vec![
        Box::new(BoundConstant::new([("B", 1.0)])?),
        Box::new(BoundCollapsingLinear::with_slope(1.0, 0.4)?),
        Box::new(BoundCollapsingExponential::with_tau(1.0, 0.4)?),
    ];

    println!("Bound trajectories over {:?}:", times.to_vec());
    for bound in &bounds {
        let trajectory = bound_over(bound.as_ref(), &times, &conditions)?;
        println!("  {:<45} {:?}", bound.to_string(), trajectory.to_vec());
    }

    // An invalid parameter set is rejected at construction
    match BoundConstant::new([("B", 1.0), ("extra", 2.0)]) {
        Ok(bound) => println!("Unexpectedly built {}", bound),
        Err(err) => println!("\nRejected: {}", err),
    }

    // Round-trip through the JSON configuration
    let json = DependenceConfig::new("collapsing_linear", [("B", 1.0), ("t", 0.4)]).to_json()?;
    println!("\nConfiguration:\n{}", json);
    let configured = bound::from_config(&DependenceConfig::from_json(&json)?)?;
    println!("Configured bound equals direct one: {}", *configured == *bounds[1]);

    // Equal bounds share a cache entry
    let mut cache = BoundCache::new(times.clone());
    for bound in bounds.iter().chain(std::iter::once(&configured)) {
        cache.get_or_compute(bound.as_ref(), &conditions)?;
    }
    println!(
        "\nCache: {} entries, {} hits, {} misses",
        cache.len(),
        cache.hits(),
        cache.misses()
    );

    Ok(())
}
