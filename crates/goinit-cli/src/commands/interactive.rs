//! `goinit interactive` — configure a project through prompts.
//!
//! Walks the same selection fields as the flags on `preview`/`generate`,
//! but validates text input as it is typed and shows a preview summary
//! before the final submit. Submission goes through the
//! [`HotkeyDispatcher`] so the generate action always reads the selection
//! as it stands when the key fires.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use console::{Key, Term};
use dialoguer::{Input, Select, theme::ColorfulTheme};
use tracing::{debug, instrument};

use goinit_adapters::FileDownloadSink;
use goinit_core::application::{
    GenerateOutcome, Hotkey, HotkeyDispatcher, PreviewOutcome, RequestOrchestrator,
};
use goinit_core::domain::{Field, ProjectType, SelectionState, validate_field};

use crate::{
    cli::{InteractiveArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `goinit interactive` command.
#[instrument(skip_all)]
pub async fn execute(
    args: InteractiveArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let download_dir = args
        .output
        .unwrap_or_else(|| config.output.download_dir.clone());

    let client = Arc::new(super::make_client(&config)?);
    let matrix = super::load_matrix(&client, false, &output).await?;
    let mut state = SelectionState::new(matrix);

    let theme = ColorfulTheme::default();
    prompt_selection(&mut state, &theme)?;

    let sink = Arc::new(FileDownloadSink::new(download_dir));
    let orchestrator = RequestOrchestrator::new(client, sink);

    // Preview summary before committing to a download.
    if let PreviewOutcome::Applied(result) = orchestrator.preview(&mut state).await? {
        let stats = result.stats();
        output.print("")?;
        output.info(&format!(
            "This will generate {} files ({} Go, {} config, {} lines)",
            stats.total_files, stats.go_files, stats.config_files, stats.total_lines
        ))?;
    }

    wait_for_submit(&mut state, &output)?;

    match orchestrator.generate(&mut state).await? {
        GenerateOutcome::Saved { filename, path } => {
            output.success(&format!("Saved {filename} to {}", path.display()))?;
        }
        GenerateOutcome::AlreadyInFlight | GenerateOutcome::Superseded => {}
    }

    Ok(())
}

/// Prompt for every selection field in form order.
fn prompt_selection(state: &mut SelectionState, theme: &ColorfulTheme) -> CliResult<()> {
    let type_labels: Vec<&str> = ProjectType::ALL.iter().map(|t| t.label()).collect();
    let idx = Select::with_theme(theme)
        .with_prompt("Project type")
        .items(&type_labels)
        .default(0)
        .interact()
        .map_err(prompt_err)?;
    state.set_project_type(ProjectType::ALL[idx]);

    // Options follow the chosen type; the recommended framework is first.
    let frameworks = state.framework_options();
    let framework_labels: Vec<&str> = frameworks.iter().map(|f| f.label()).collect();
    let idx = Select::with_theme(theme)
        .with_prompt("Framework")
        .items(&framework_labels)
        .default(0)
        .interact()
        .map_err(prompt_err)?;
    state.set_framework(frameworks[idx]);

    let versions = state.matrix().versions_for().to_vec();
    let version_labels: Vec<String> = versions.iter().map(|v| v.label()).collect();
    let idx = Select::with_theme(theme)
        .with_prompt("Go version")
        .items(&version_labels)
        .default(0)
        .interact()
        .map_err(prompt_err)?;
    state.set_go_version(versions[idx].version.clone());

    for field in [Field::ModuleName, Field::Name, Field::Description] {
        let value: String = Input::with_theme(theme)
            .with_prompt(field.label())
            .validate_with(|value: &String| match validate_field(field, value) {
                Some(message) => Err(message),
                None => Ok(()),
            })
            .interact_text()
            .map_err(prompt_err)?;
        match field {
            Field::ModuleName => state.set_module_name(value),
            Field::Name => state.set_name(value),
            Field::Description => state.set_description(value),
        }
    }

    Ok(())
}

/// Block until the submit hotkey fires (or the user cancels with Esc).
///
/// Terminal input cannot carry the primary modifier, so a plain Enter maps
/// to the submit combination.
fn wait_for_submit(state: &mut SelectionState, output: &OutputManager) -> CliResult<()> {
    let hotkey = Hotkey::generate_default();
    let fired = Arc::new(AtomicBool::new(false));

    let mut dispatcher = HotkeyDispatcher::new(state.cell());
    let seen = Arc::clone(&fired);
    dispatcher.bind(hotkey, move |selection| {
        debug!(name = %selection.name, "generate hotkey fired");
        seen.store(true, Ordering::SeqCst);
    });

    output.print("")?;
    output.print(&format!(
        "Press Enter ({}) to generate, Esc to cancel",
        hotkey.display()
    ))?;

    let term = Term::stdout();
    loop {
        match term.read_key()? {
            Key::Enter => {
                if dispatcher.dispatch(&hotkey) && fired.load(Ordering::SeqCst) {
                    break;
                }
            }
            Key::Escape => {
                dispatcher.unbind();
                return Err(CliError::Cancelled);
            }
            _ => {}
        }
    }

    dispatcher.unbind();
    Ok(())
}

fn prompt_err(e: dialoguer::Error) -> CliError {
    CliError::IoError {
        message: "prompt failed".into(),
        source: std::io::Error::other(e),
    }
}
