//! Step definitions operating on the outcome stored in [`OutcomeContext`].

use crate::fixtures::OutcomeContext;
use anyhow::{Result, anyhow, ensure};
use outcome::Outcome;
use rstest_bdd_macros::{given, then, when};

fn take_outcome(outcome_context: &OutcomeContext) -> Result<Outcome<i64>> {
    outcome_context
        .outcome
        .take()
        .ok_or_else(|| anyhow!("no outcome has been created"))
}

fn inspect<R>(
    outcome_context: &OutcomeContext,
    read: impl FnOnce(&Outcome<i64>) -> R,
) -> Result<R> {
    outcome_context
        .outcome
        .with_ref(read)
        .ok_or_else(|| anyhow!("no outcome has been created"))
}

#[given("an outcome holding {value:i64}")]
fn ok_outcome(outcome_context: &OutcomeContext, value: i64) {
    outcome_context.outcome.set(Outcome::new(value));
}

#[given("a failed outcome holding {value:i64} with message {message}")]
fn failed_outcome(outcome_context: &OutcomeContext, value: i64, message: String) {
    let text = message.trim_matches('"');
    outcome_context
        .outcome
        .set(Outcome::with_message(value, text));
}

#[when("the message is set to {message}")]
fn set_message(outcome_context: &OutcomeContext, message: String) -> Result<()> {
    let mut outcome = take_outcome(outcome_context)?;
    outcome.set_message(message.trim_matches('"'));
    outcome_context.outcome.set(outcome);
    Ok(())
}

#[when("the message is cleared")]
fn clear_message(outcome_context: &OutcomeContext) -> Result<()> {
    let mut outcome = take_outcome(outcome_context)?;
    outcome.clear_message();
    outcome_context.outcome.set(outcome);
    Ok(())
}

#[when("the outcome is recovered with {fallback:i64}")]
fn recover(outcome_context: &OutcomeContext, fallback: i64) -> Result<()> {
    let outcome = take_outcome(outcome_context)?;
    outcome_context
        .outcome
        .set(outcome.or_else(|_| Outcome::new(fallback)));
    Ok(())
}

#[when("the outcome value is doubled")]
fn double(outcome_context: &OutcomeContext) -> Result<()> {
    let outcome = take_outcome(outcome_context)?;
    outcome_context.outcome.set(outcome.map(|value| value * 2));
    Ok(())
}

#[then("the outcome is ok")]
fn assert_ok(outcome_context: &OutcomeContext) -> Result<()> {
    let (ok, err) = inspect(outcome_context, |outcome| (outcome.is_ok(), outcome.is_err()))?;
    ensure!(ok && !err, "expected an ok outcome");
    Ok(())
}

#[then("the outcome is an error")]
fn assert_err(outcome_context: &OutcomeContext) -> Result<()> {
    let (ok, err) = inspect(outcome_context, |outcome| (outcome.is_ok(), outcome.is_err()))?;
    ensure!(err && !ok, "expected an error outcome");
    Ok(())
}

#[then("the outcome holds {expected:i64}")]
fn assert_value(outcome_context: &OutcomeContext, expected: i64) -> Result<()> {
    let actual = inspect(outcome_context, |outcome| *outcome.data())?;
    ensure!(actual == expected, "outcome holds {actual}; expected {expected}");
    Ok(())
}

#[then("the outcome message is {expected}")]
fn assert_message(outcome_context: &OutcomeContext, expected: String) -> Result<()> {
    let wanted = expected.trim_matches('"');
    let actual = inspect(outcome_context, |outcome| outcome.message().to_owned())?;
    ensure!(
        actual == wanted,
        "outcome message is {actual:?}; expected {wanted:?}"
    );
    Ok(())
}
