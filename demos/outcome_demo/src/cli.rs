//! Command-line configuration for the `outcome_demo` binary.
//!
//! Every option can also come from an `OUTCOME_DEMO_*` environment variable;
//! an explicit flag takes precedence.
use clap::Parser;

use crate::error::ValidationError;

/// Options controlling the walkthrough.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "outcome-demo",
    bin_name = "outcome-demo",
    about = "Walks an outcome through its ok and error states",
    version
)]
pub struct DemoConfig {
    /// Initial value stored in the outcome.
    #[arg(
        long,
        env = "OUTCOME_DEMO_VALUE",
        default_value_t = 1,
        allow_negative_numbers = true
    )]
    pub value: i64,
    /// Initial message; any text starts the outcome in the error state.
    #[arg(long, env = "OUTCOME_DEMO_MESSAGE", default_value = "false")]
    pub message: String,
    /// Value written over the initial one.
    #[arg(
        long,
        env = "OUTCOME_DEMO_REPLACEMENT",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub replacement: i64,
    /// Message written after the value is replaced.
    #[arg(long, env = "OUTCOME_DEMO_REPAIR_MESSAGE", default_value = "True")]
    pub repair_message: String,
    /// Enables debug logging on standard error.
    #[arg(long, short = 'v', env = "OUTCOME_DEMO_VERBOSE")]
    pub verbose: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            value: 1,
            message: String::from("false"),
            replacement: 0,
            repair_message: String::from("True"),
            verbose: false,
        }
    }
}

impl DemoConfig {
    /// Checks option combinations the walkthrough relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BlankRepairMessage`] when the repair message
    /// is empty or whitespace.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.repair_message.trim().is_empty() {
            return Err(ValidationError::BlankRepairMessage);
        }
        Ok(())
    }
}
