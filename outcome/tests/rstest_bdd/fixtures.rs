//! Shared fixtures for the outcome behaviour scenarios.

use outcome::Outcome;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Scenario state holding the outcome under test between steps.
#[derive(Debug, Default, ScenarioState)]
pub struct OutcomeContext {
    /// Outcome created by a `given` step and updated by `when` steps.
    pub outcome: Slot<Outcome<i64>>,
}

/// Creates an empty context so each scenario starts without an outcome.
#[fixture]
pub fn outcome_context() -> OutcomeContext {
    OutcomeContext::default()
}
