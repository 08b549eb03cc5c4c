//! Implementation of the `goinit generate` command.

use std::sync::Arc;

use tracing::{info, instrument};

use goinit_adapters::FileDownloadSink;
use goinit_core::application::{GenerateOutcome, RequestOrchestrator};

use crate::{
    cli::{GenerateArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `goinit generate` command.
///
/// Dispatch sequence:
/// 1. Resolve the output directory (flag, then config)
/// 2. Build the selection from flags + service metadata
/// 3. Run the orchestrator: validate, request, save
/// 4. Print the saved location
#[instrument(skip_all, fields(project_type = %args.selection.project_type))]
pub async fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let download_dir = args
        .output
        .unwrap_or_else(|| config.output.download_dir.clone());

    let client = Arc::new(super::make_client(&config)?);
    let matrix = super::load_matrix(&client, args.selection.offline, &output).await?;
    let mut state = super::build_state(&args.selection, matrix)?;

    let sink = Arc::new(FileDownloadSink::new(download_dir));
    let orchestrator = RequestOrchestrator::new(client, sink);

    output.print(&format!(
        "Generating {} project '{}'...",
        state.selection().project_type.label(),
        state.selection().name
    ))?;

    match orchestrator.generate(&mut state).await? {
        GenerateOutcome::Saved { filename, path } => {
            info!(%filename, path = %path.display(), "archive saved");
            output.success(&format!("Saved {filename} to {}", path.display()))?;

            if !global.quiet {
                output.print("")?;
                output.print("Next steps:")?;
                output.print(&format!("  unzip {filename}"))?;
                output.print(&format!("  cd {}", state.selection().name.trim()))?;
                output.print("  go mod tidy")?;
            }
        }
        // A fresh orchestrator runs exactly one generate; the gate never
        // turns it away.
        GenerateOutcome::AlreadyInFlight | GenerateOutcome::Superseded => {}
    }

    Ok(())
}
