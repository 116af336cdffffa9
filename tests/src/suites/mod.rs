//! Test suites

pub mod vectors;
