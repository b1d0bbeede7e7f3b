//! Integration tests for the bound family

// Behaviour of the built-in variants
mod bound_tests;

// Evaluation over time grids, caching and parallel sweeps
mod sweep_tests;
