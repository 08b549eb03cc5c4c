//! Implementation of the `goinit preview` command.

use std::sync::Arc;

use tracing::{debug, instrument};

use goinit_adapters::FileDownloadSink;
use goinit_core::application::{PreviewOutcome, RequestOrchestrator};
use goinit_core::domain::PreviewResult;

use crate::{
    cli::{OutputFormat, PreviewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `goinit preview` command.
#[instrument(skip_all, fields(project_type = %args.selection.project_type))]
pub async fn execute(
    args: PreviewArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let client = Arc::new(super::make_client(&config)?);
    let matrix = super::load_matrix(&client, args.selection.offline, &output).await?;
    let mut state = super::build_state(&args.selection, matrix)?;

    let sink = Arc::new(FileDownloadSink::new(config.output.download_dir.clone()));
    let orchestrator = RequestOrchestrator::new(client, sink);

    let result = match orchestrator.preview(&mut state).await? {
        PreviewOutcome::Applied(result) => result,
        // A fresh orchestrator runs exactly one preview; the gate never
        // turns it away.
        PreviewOutcome::AlreadyInFlight | PreviewOutcome::Superseded => return Ok(()),
    };

    debug!(files = result.count, "preview received");

    if let Some(path) = &args.show {
        let template = result
            .find(path)
            .ok_or_else(|| CliError::FileNotInPreview { path: path.clone() })?;
        // Raw content to stdout so it pipes cleanly.
        print!("{}", template.content);
        return Ok(());
    }

    if output.format() == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    render_file_list(&result, args.filter.as_deref(), &output)?;
    Ok(())
}

fn render_file_list(
    result: &PreviewResult,
    filter: Option<&str>,
    output: &OutputManager,
) -> CliResult<()> {
    let files = match filter {
        Some(needle) => result.filter(needle),
        None => result.templates.iter().collect(),
    };

    if let Some(needle) = filter {
        output.header(&format!(
            "Generated files matching '{needle}' ({} of {}):",
            files.len(),
            result.count
        ))?;
    } else {
        output.header(&format!("Generated files ({}):", result.count))?;
    }

    for template in &files {
        output.print(&format!("  {} ({} lines)", template.path, template.line_count()))?;
    }

    let stats = result.stats();
    output.print("")?;
    output.info(&format!(
        "{} files, {} Go, {} config, {} lines total",
        stats.total_files, stats.go_files, stats.config_files, stats.total_lines
    ))?;

    Ok(())
}
