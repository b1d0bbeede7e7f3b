//! Integration tests for the dependence contract
//!
//! These tests declare their own families to check that the contract is not
//! tied to bounds.
