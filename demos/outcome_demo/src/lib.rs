//! Library facade for the `outcome_demo` walkthrough so tests can build and
//! inspect reports without spawning the binary.

pub mod cli;
pub mod error;
pub mod logging;
pub mod report;
