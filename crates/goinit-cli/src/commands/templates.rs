//! `goinit templates` — inspect the service's template catalog.

use std::str::FromStr;

use tracing::instrument;

use goinit_core::application::ports::TemplateCatalog;
use goinit_core::domain::{CompatibilityMatrix, Framework, ProjectType};

use crate::{
    cli::{OutputFormat, TemplatesCommands, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Dispatch to the correct templates subcommand.
#[instrument(skip_all)]
pub async fn execute(
    cmd: TemplatesCommands,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let client = super::make_client(&config)?;

    match cmd {
        TemplatesCommands::Catalog => {
            let catalog = client.fetch_catalog().await?;

            if output.format() == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&catalog)?);
                return Ok(());
            }

            output.header("Template catalog:")?;
            for (key, label) in &catalog.supported_project_types {
                let frameworks: Vec<&str> = catalog
                    .supported_frameworks
                    .get(key)
                    .map(|m| {
                        m.iter()
                            .filter(|(_, enabled)| **enabled)
                            .map(|(name, _)| name.as_str())
                            .collect()
                    })
                    .unwrap_or_default();
                output.print(&format!("  {key:<14} {label} [{}]", frameworks.join(", ")))?;
            }
        }

        TemplatesCommands::Stats {
            project_type,
            framework,
        } => {
            let project_type = ProjectType::from_str(&project_type)?;
            let framework = match framework {
                Some(f) => Framework::from_str(&f)?,
                None => CompatibilityMatrix::fallback().recommended_for(project_type),
            };

            let stats = client.fetch_stats(project_type, framework).await?;

            if output.format() == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
                return Ok(());
            }

            output.header(&format!("Templates for {project_type} + {framework}:"))?;
            output.print(&format!("  Files:        {}", stats.total_files))?;
            output.print(&format!("  Go files:     {}", stats.go_files))?;
            output.print(&format!("  Config files: {}", stats.config_files))?;
            output.print(&format!("  Total lines:  {}", stats.total_lines))?;
        }
    }

    Ok(())
}
