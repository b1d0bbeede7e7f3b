//! Integration tests for dependence configuration

mod config_tests;
