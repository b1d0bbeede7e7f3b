//! Integration tests for the built-in bound variants

use crate::test_helpers::{conditions, hash_of};
use approx::assert_relative_eq;
use ddm_rs::bound::{
    self, Bound, BoundCollapsingExponential, BoundCollapsingLinear, BoundConstant, Conditions,
};
use ddm_rs::dependence::{Dependence, DependenceVariant};
use ddm_rs::DdmError;
use std::collections::HashMap;

#[test]
fn test_constant_bound() {
    let bound = BoundConstant::new([("B", 1.0)]).unwrap();
    let empty = Conditions::new();

    assert_eq!(bound.get_bound(0.0, &empty).unwrap(), 1.0);
    assert_eq!(bound.get_bound(100.0, &empty).unwrap(), 1.0);

    // Conditions the variant does not use have no effect.
    let trial = conditions(&[("coherence", 0.8)]);
    assert_eq!(bound.get_bound(3.0, &trial).unwrap(), 1.0);
}

#[test]
fn test_linear_bound_clamps() {
    let bound = BoundCollapsingLinear::new([("B", 1.0), ("t", 0.1)]).unwrap();
    let empty = Conditions::new();

    assert_relative_eq!(bound.get_bound(5.0, &empty).unwrap(), 0.5, epsilon = 1e-12);
    assert_eq!(bound.get_bound(20.0, &empty).unwrap(), 0.0);
    assert_eq!(bound.get_bound(1.0e9, &empty).unwrap(), 0.0);
}

#[test]
fn test_exponential_bound_decays_but_stays_positive() {
    let bound = BoundCollapsingExponential::new([("B", 1.0), ("tau", 0.1)]).unwrap();
    let empty = Conditions::new();

    assert_eq!(bound.get_bound(0.0, &empty).unwrap(), 1.0);

    let mut previous = bound.get_bound(0.0, &empty).unwrap();
    for step in 1..=200 {
        let t = step as f64;
        let current = bound.get_bound(t, &empty).unwrap();
        assert!(current < previous, "bound must decrease at t = {}", t);
        assert!(current > 0.0, "bound must stay positive at t = {}", t);
        previous = current;
    }
}

#[test]
fn test_extra_parameter_is_reported() {
    let err = BoundConstant::new([("B", 1.0), ("extra", 2.0)]).unwrap_err();

    match &err {
        DdmError::ParameterMismatch {
            family,
            variant,
            provided,
            expected,
        } => {
            assert_eq!(family, "Bound");
            assert_eq!(variant, "constant");
            assert_eq!(provided, &vec!["B".to_string(), "extra".to_string()]);
            assert_eq!(expected, &vec!["B".to_string()]);
        }
        other => panic!("Expected ParameterMismatch, got {:?}", other),
    }
    assert!(err.to_string().contains(r#"unexpected ["extra"]"#));
}

#[test]
fn test_rendering_and_hash() {
    let first = BoundConstant::new([("B", 1.0)]).unwrap();
    let second = BoundConstant::new([("B", 1.0)]).unwrap();

    assert_eq!(first.to_string(), "BoundConstant(B=1.0)");
    assert_eq!(first.to_string(), second.to_string());
    assert_eq!(first, second);
    assert_eq!(hash_of(&first), hash_of(&second));

    let linear = BoundCollapsingLinear::with_slope(1.0, 0.1).unwrap();
    assert_eq!(linear.to_string(), "BoundCollapsingLinear(B=1.0, t=0.1)");

    let exponential = BoundCollapsingExponential::with_tau(2.5, 1e-3).unwrap();
    assert_eq!(exponential.to_string(), "BoundCollapsingExponential(B=2.5, tau=0.001)");
}

#[test]
fn test_boxed_bounds_as_map_keys() {
    let mut fitted: HashMap<Box<dyn Bound>, f64> = HashMap::new();

    fitted.insert(Box::new(BoundConstant::with_b(1.0).unwrap()), 10.0);
    fitted.insert(Box::new(BoundCollapsingLinear::with_slope(1.0, 0.1).unwrap()), 20.0);
    fitted.insert(Box::new(BoundConstant::with_b(1.0).unwrap()), 30.0);

    assert_eq!(fitted.len(), 2);

    let key: Box<dyn Bound> = Box::new(BoundConstant::with_b(1.0).unwrap());
    assert_eq!(fitted.get(&key), Some(&30.0));
    assert_eq!(hash_of(key.as_ref()), hash_of(&BoundConstant::with_b(1.0).unwrap()));
}

#[test]
fn test_b_base_matches_b() {
    let empty = Conditions::new();
    let bounds: Vec<Box<dyn Bound>> = vec![
        Box::new(BoundConstant::with_b(1.5).unwrap()),
        Box::new(BoundCollapsingLinear::with_slope(1.5, 0.2).unwrap()),
        Box::new(BoundCollapsingExponential::with_tau(1.5, 0.2).unwrap()),
    ];

    for bound in &bounds {
        assert_eq!(bound.b_base(&empty).unwrap(), 1.5);
        assert_eq!(bound.get_bound(0.0, &empty).unwrap(), 1.5);
        assert_eq!(bound.family(), bound::FAMILY);
    }
}

#[test]
fn test_registry_lists_builtin_variants() {
    let names: Vec<&str> = bound::variants().iter().map(|s| s.variant_name).collect();
    assert_eq!(
        names,
        vec!["constant", "collapsing_linear", "collapsing_exponential"]
    );
}
