use crate::cli::actions::{Action, register};
use crate::registration::SubmitOutcome;
use anyhow::Result;

/// Execute the provided action.
// Single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<SubmitOutcome> {
    match action {
        Action::Register(args) => register::execute(args).await,
    }
}
