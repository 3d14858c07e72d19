pub mod register;

// Internal "interpreter" for `Action`.
mod run;

use crate::registration::SubmitOutcome;

#[derive(Debug)]
pub enum Action {
    Register(register::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action cannot be set up. Registration outcomes,
    /// including failures reported to the user, are returned as `Ok`.
    pub async fn execute(self) -> anyhow::Result<SubmitOutcome> {
        run::execute(self).await
    }
}
