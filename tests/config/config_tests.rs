//! Integration tests for loading and saving dependence configurations

use ddm_rs::bound::{self, Bound, BoundCollapsingExponential, BoundConstant, Conditions};
use ddm_rs::config::DependenceConfig;
use ddm_rs::dependence::Dependence;
use ddm_rs::DdmError;
use std::env;

#[test]
fn test_build_every_variant_from_json() {
    let cases = [
        (r#"{"name": "constant", "parameters": {"B": 1.0}}"#, "BoundConstant(B=1.0)"),
        (
            r#"{"name": "collapsing_linear", "parameters": {"B": 1.0, "t": 0.1}}"#,
            "BoundCollapsingLinear(B=1.0, t=0.1)",
        ),
        (
            r#"{"name": "collapsing_exponential", "parameters": {"tau": 0.1, "B": 1.0}}"#,
            "BoundCollapsingExponential(B=1.0, tau=0.1)",
        ),
    ];

    for (json, rendered) in cases {
        let config = DependenceConfig::from_json(json).unwrap();
        let built = bound::from_config(&config).unwrap();
        assert_eq!(built.to_string(), rendered);
    }
}

#[test]
fn test_configured_bound_equals_direct_construction() {
    let config = DependenceConfig::new("constant", [("B", 2.0)]);
    let configured = bound::from_config(&config).unwrap();
    let direct: Box<dyn Bound> = Box::new(BoundConstant::with_b(2.0).unwrap());

    assert!(configured == direct);
    assert_eq!(configured.get_bound(7.0, &Conditions::new()).unwrap(), 2.0);
}

#[test]
fn test_invalid_parameters_in_config() {
    let config = DependenceConfig::new("collapsing_linear", [("B", 1.0), ("tau", 0.1)]);
    let err = bound::from_config(&config).unwrap_err();

    match err {
        DdmError::ParameterMismatch {
            variant, provided, ..
        } => {
            assert_eq!(variant, "collapsing_linear");
            assert_eq!(provided, vec!["B", "tau"]);
        }
        other => panic!("Expected ParameterMismatch, got {:?}", other),
    }
}

#[test]
fn test_save_and_load() {
    let original = BoundCollapsingExponential::with_tau(1.25, 0.4).unwrap();
    let config = DependenceConfig::from_dependence(&original);

    let temp_dir = env::temp_dir();
    let path = temp_dir.join(format!("ddm_rs_bound_config_{}.json", std::process::id()));

    config.save_json(&path).unwrap();
    let loaded = DependenceConfig::load_json(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, config);

    let rebuilt = bound::from_config(&loaded).unwrap();
    assert_eq!(rebuilt.variant_name(), "collapsing_exponential");
    assert_eq!(rebuilt.parameter("tau"), Some(0.4));
}

#[test]
fn test_load_missing_file() {
    let path = env::temp_dir().join("ddm_rs_config_that_does_not_exist.json");
    let err = DependenceConfig::load_json(&path).unwrap_err();
    assert!(matches!(err, DdmError::Io(_)));
}
