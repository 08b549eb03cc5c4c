//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the orchestrator needs from the outside world.
//! The `goinit-adapters` crate provides the production implementations
//! (`HttpGeneratorClient`, `FileDownloadSink`); tests substitute mocks.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Serialize;

use crate::application::error::ApplicationError;
use crate::domain::compatibility::ProjectMetadata;
use crate::domain::preview::{PreviewResult, PreviewStats};
use crate::domain::selection::Selection;
use crate::domain::value_objects::{Framework, ProjectType};

// ── Request bodies ───────────────────────────────────────────────────────────

/// Body of `POST /api/preview`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub project_type: ProjectType,
    pub framework: Framework,
    pub project_name: String,
    pub module_name: String,
    pub description: String,
    pub go_version: String,
}

impl PreviewRequest {
    pub fn from_selection(selection: &Selection) -> Self {
        Self {
            project_type: selection.project_type,
            framework: selection.framework,
            project_name: selection.name.clone(),
            module_name: selection.module_name.clone(),
            description: selection.description.clone(),
            go_version: selection.go_version.clone(),
        }
    }
}

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub project_type: ProjectType,
    pub go_version: String,
    pub framework: Framework,
    pub module_name: String,
    pub name: String,
    pub description: String,
}

impl GenerateRequest {
    pub fn from_selection(selection: &Selection) -> Self {
        Self {
            project_type: selection.project_type,
            go_version: selection.go_version.clone(),
            framework: selection.framework,
            module_name: selection.module_name.clone(),
            name: selection.name.clone(),
            description: selection.description.clone(),
        }
    }
}

// ── Ports ────────────────────────────────────────────────────────────────────

/// Port for the remote generator service's core endpoints.
///
/// Implemented by:
/// - `goinit_adapters::HttpGeneratorClient` (production)
/// - mocks in orchestrator tests
#[async_trait]
pub trait GeneratorApi: Send + Sync {
    /// `GET /api/meta` — the service's compatibility metadata.
    async fn fetch_metadata(&self) -> Result<ProjectMetadata, ApplicationError>;

    /// `POST /api/preview` — render the template list without packaging.
    async fn preview(&self, request: &PreviewRequest) -> Result<PreviewResult, ApplicationError>;

    /// `POST /api/generate` — produce the packaged archive bytes.
    async fn generate(&self, request: &GenerateRequest) -> Result<Vec<u8>, ApplicationError>;
}

/// Port for the peripheral template catalog endpoints.
#[async_trait]
pub trait TemplateCatalog: Send + Sync {
    /// `GET /api/templates` — available types, frameworks, and versions.
    async fn fetch_catalog(&self) -> Result<ProjectMetadata, ApplicationError>;

    /// `GET /api/templates/stats` — counts for one type/framework pair.
    async fn fetch_stats(
        &self,
        project_type: ProjectType,
        framework: Framework,
    ) -> Result<PreviewStats, ApplicationError>;
}

/// Port for exposing a generate artifact to the user as a saved file.
///
/// The implementation owns the scoped-acquisition discipline: any
/// temporary handle it takes while saving must be released on every exit
/// path. Returns the final location of the saved file.
pub trait DownloadSink: Send + Sync {
    fn save(&self, bytes: &[u8], filename: &str) -> Result<PathBuf, ApplicationError>;
}
