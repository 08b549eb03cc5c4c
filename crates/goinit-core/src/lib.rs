//! Goinit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the goinit
//! client: the rules that keep project-type, framework, and Go-version
//! choices mutually consistent, the field validation that gates network
//! calls, and the asynchronous preview/generate/download pipeline.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           goinit-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         RequestOrchestrator             │
//! │   (preview / generate / download)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: GeneratorApi, DownloadSink)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    goinit-adapters (Infrastructure)     │
//! │  (HttpGeneratorClient, FileDownloadSink)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (Selection, CompatibilityMatrix, rules) │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use goinit_core::{
//!     application::RequestOrchestrator,
//!     domain::{CompatibilityMatrix, ProjectType, SelectionState},
//! };
//!
//! // 1. Build the selection from the fallback matrix
//! let mut state = SelectionState::new(CompatibilityMatrix::fallback());
//! state.set_project_type(ProjectType::CliApp);
//! state.set_module_name("github.com/user/project");
//!
//! // 2. Use the orchestrator (with injected adapters)
//! let orchestrator = RequestOrchestrator::new(api, sink);
//! let outcome = orchestrator.generate(&mut state).await?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateOutcome, HotkeyDispatcher, PreviewOutcome, RequestOrchestrator,
        ports::{DownloadSink, GenerateRequest, GeneratorApi, PreviewRequest, TemplateCatalog},
    };
    pub use crate::domain::{
        CompatibilityMatrix, Field, Framework, PreviewResult, ProjectMetadata, ProjectType,
        Selection, SelectionState, Template, ValidationReport,
    };
    pub use crate::error::{GoInitError, GoInitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
