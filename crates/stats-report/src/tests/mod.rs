//! Test suites for the report crate.
