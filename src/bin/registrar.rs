use anyhow::Result;
use registrar::cli;
use std::process::ExitCode;

// Main function
#[tokio::main]
async fn main() -> Result<ExitCode> {
    let action = cli::start()?;

    let outcome = action.execute().await?;

    if outcome.is_registered() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
