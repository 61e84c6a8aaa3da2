//! Property-based tests for dispatch and join.
//!
//! Run with: cargo test --test property_tests

pub mod parity;
