//! `goinit meta` — show what the generator service supports.

use tracing::instrument;

use goinit_core::application::ports::GeneratorApi;
use goinit_core::domain::{CompatibilityMatrix, ProjectType};

use crate::{
    cli::{MetaArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `goinit meta` command.
///
/// Unlike preview/generate this does not fall back to built-in data on
/// failure — the whole point of the command is to inspect the live service.
#[instrument(skip_all)]
pub async fn execute(
    _args: MetaArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let client = super::make_client(&config)?;
    let metadata = client.fetch_metadata().await?;

    if output.format() == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
        return Ok(());
    }

    let matrix = CompatibilityMatrix::from_metadata(&metadata);

    output.header(&format!("Generator service at {}", config.service.base_url))?;
    output.print("")?;

    output.header("Project types:")?;
    for (key, label) in &metadata.supported_project_types {
        output.print(&format!("  {key:<14} {label}"))?;
    }

    output.print("")?;
    output.header("Frameworks:")?;
    for project_type in ProjectType::ALL {
        let frameworks: Vec<String> = matrix
            .frameworks_for(project_type)
            .iter()
            .map(|f| f.to_string())
            .collect();
        output.print(&format!(
            "  {:<14} {}",
            project_type.as_str(),
            frameworks.join(", ")
        ))?;
    }

    output.print("")?;
    output.header("Go versions:")?;
    for version in matrix.versions_for() {
        output.print(&format!("  {}", version.label()))?;
    }

    Ok(())
}
