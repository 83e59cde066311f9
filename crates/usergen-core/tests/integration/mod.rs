//! Integration tests for usergen-core
//!
//! - generator_runs: loop behaviour against simulated backends
//! - http_registry: the HTTP client against a live mock server
//! - verify_runs: post-run verification
