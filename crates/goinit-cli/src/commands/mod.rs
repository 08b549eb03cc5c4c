//! Command handlers plus the glue shared between them.
//!
//! Each handler translates CLI arguments into core types, drives the
//! orchestrator, and renders results. No business logic lives here.

use std::str::FromStr;

use tracing::warn;

use goinit_adapters::HttpGeneratorClient;
use goinit_core::application::ports::GeneratorApi;
use goinit_core::domain::{CompatibilityMatrix, DomainError, Framework, ProjectType, SelectionState};

use crate::{
    cli::SelectionArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub mod completions;
pub mod config;
pub mod generate;
#[cfg(feature = "interactive")]
pub mod interactive;
pub mod meta;
pub mod preview;
pub mod templates;

/// Build the HTTP client from the resolved configuration.
pub(crate) fn make_client(config: &AppConfig) -> CliResult<HttpGeneratorClient> {
    HttpGeneratorClient::new(config.service.base_url.clone(), config.timeout())
        .map_err(CliError::from)
}

/// Fetch the service's compatibility metadata, falling back to the built-in
/// matrix when `--offline` is set or the service cannot be reached.
///
/// A failed fetch is a warning, not an error: the built-in data is enough
/// to build a selection, and the actual preview/generate call will surface
/// connectivity problems on its own.
pub(crate) async fn load_matrix(
    client: &HttpGeneratorClient,
    offline: bool,
    output: &OutputManager,
) -> CliResult<CompatibilityMatrix> {
    if offline {
        return Ok(CompatibilityMatrix::fallback());
    }
    match client.fetch_metadata().await {
        Ok(meta) => Ok(CompatibilityMatrix::from_metadata(&meta)),
        Err(e) => {
            warn!(error = %e, "metadata fetch failed, using built-in compatibility data");
            output.warning("Could not fetch service metadata; using built-in compatibility data")?;
            Ok(CompatibilityMatrix::fallback())
        }
    }
}

/// Translate selection flags into a [`SelectionState`].
///
/// Unknown type/framework strings and an incompatible type/framework pair
/// fail here with the domain error's suggestions; blank required fields do
/// *not* fail here — the orchestrator reports them all at once when the
/// operation is attempted.
pub(crate) fn build_state(
    args: &SelectionArgs,
    matrix: CompatibilityMatrix,
) -> CliResult<SelectionState> {
    let mut state = SelectionState::new(matrix);

    let project_type = ProjectType::from_str(&args.project_type)?;
    state.set_project_type(project_type);

    if let Some(framework) = &args.framework {
        let framework = Framework::from_str(framework)?;
        // `set_framework` trusts its caller; flag input is checked here so
        // an invalid pair never reaches the service.
        if !state.matrix().is_compatible(project_type, framework) {
            return Err(DomainError::IncompatibleFramework {
                framework,
                project_type,
                valid: state.matrix().frameworks_for(project_type),
            }
            .into());
        }
        state.set_framework(framework);
    }
    if let Some(version) = &args.go_version {
        state.set_go_version(version.clone());
    }

    state.set_module_name(&args.module_name);
    state.set_name(&args.name);
    state.set_description(&args.description);

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection_args() -> SelectionArgs {
        SelectionArgs {
            project_type: "cli-app".into(),
            framework: None,
            go_version: None,
            module_name: "github.com/acme/tool".into(),
            name: "tool".into(),
            description: "ops tool".into(),
            offline: true,
        }
    }

    #[test]
    fn build_state_defaults_framework_to_recommended() {
        let state = build_state(&selection_args(), CompatibilityMatrix::fallback()).unwrap();
        assert_eq!(state.selection().project_type, ProjectType::CliApp);
        assert_eq!(state.selection().framework, Framework::Golly);
        assert!(state.is_submittable());
    }

    #[test]
    fn build_state_rejects_unknown_type() {
        let mut args = selection_args();
        args.project_type = "webapp".into();
        let err = build_state(&args, CompatibilityMatrix::fallback()).unwrap_err();
        assert!(err.to_string().contains("webapp"));
    }

    #[test]
    fn build_state_rejects_incompatible_framework() {
        let mut args = selection_args();
        args.project_type = "microservice".into();
        args.framework = Some("cobra".into());

        let err = build_state(&args, CompatibilityMatrix::fallback()).unwrap_err();
        assert!(err.to_string().contains("cobra"));
        assert!(err.to_string().contains("microservice"));
        // Suggestions name the frameworks that would have been accepted.
        assert!(err.suggestions().iter().any(|s| s.contains("gin")));
    }

    #[test]
    fn build_state_keeps_explicit_framework_and_version() {
        let mut args = selection_args();
        args.framework = Some("urfave".into());
        args.go_version = Some("1.21.7".into());
        let state = build_state(&args, CompatibilityMatrix::fallback()).unwrap();
        assert_eq!(state.selection().framework, Framework::Urfave);
        assert_eq!(state.selection().go_version, "1.21.7");
    }

    #[test]
    fn blank_required_fields_do_not_fail_here() {
        let mut args = selection_args();
        args.module_name = "".into();
        let state = build_state(&args, CompatibilityMatrix::fallback()).unwrap();
        assert!(!state.is_submittable());
    }
}
