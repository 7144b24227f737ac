//! Property-based tests

mod skills_proptest;
mod validation_proptest;
