//! `rstest-bdd` behaviour tests for `Outcome`.
//!
//! The step registry in [`steps`] drives a single outcome stored in the
//! scenario state; [`scenarios`] binds the feature file to it.

mod fixtures;
mod scenarios;
mod steps;
