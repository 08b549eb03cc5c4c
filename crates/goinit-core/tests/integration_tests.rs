//! Orchestrator behavior against mocked ports.
//!
//! Exercises the full pipeline: validation gating, in-flight rejection,
//! response application, and download-sink handoff.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use mockall::predicate::eq;
use mockall::{Sequence, mock};
use tokio::sync::Notify;

use goinit_core::application::error::ApplicationError;
use goinit_core::application::ports::{
    DownloadSink, GenerateRequest, GeneratorApi, PreviewRequest,
};
use goinit_core::application::{GenerateOutcome, PreviewOutcome, RequestOrchestrator};
use goinit_core::domain::compatibility::{CompatibilityMatrix, ProjectMetadata};
use goinit_core::domain::preview::{PreviewResult, Template};
use goinit_core::domain::selection::{Field, SelectionState};
use goinit_core::domain::value_objects::{Framework, ProjectType};

mock! {
    Api {}

    #[async_trait]
    impl GeneratorApi for Api {
        async fn fetch_metadata(&self) -> Result<ProjectMetadata, ApplicationError>;
        async fn preview(
            &self,
            request: &PreviewRequest,
        ) -> Result<PreviewResult, ApplicationError>;
        async fn generate(&self, request: &GenerateRequest) -> Result<Vec<u8>, ApplicationError>;
    }
}

mock! {
    Sink {}

    impl DownloadSink for Sink {
        fn save(&self, bytes: &[u8], filename: &str) -> Result<PathBuf, ApplicationError>;
    }
}

fn filled_state() -> SelectionState {
    let mut state = SelectionState::new(CompatibilityMatrix::fallback());
    state.set_project_type(ProjectType::Microservice);
    state.set_module_name("github.com/acme/orders");
    state.set_name("orders");
    state.set_description("order management service");
    state
}

fn sample_preview() -> PreviewResult {
    PreviewResult::from_templates(vec![
        Template {
            path: "cmd/main.go".into(),
            content: "package main\n".into(),
        },
        Template {
            path: "go.mod".into(),
            content: "module github.com/acme/orders\n".into(),
        },
    ])
}

#[tokio::test]
async fn preview_with_blank_fields_makes_no_network_call() {
    let mut api = MockApi::new();
    api.expect_preview().times(0);
    let sink = MockSink::new();

    let orchestrator = RequestOrchestrator::new(Arc::new(api), Arc::new(sink));
    let mut state = SelectionState::new(CompatibilityMatrix::fallback());

    let err = orchestrator.preview(&mut state).await.unwrap_err();
    let ApplicationError::InvalidSelection(report) = err else {
        panic!("expected InvalidSelection, got {err:?}");
    };
    assert_eq!(
        report.get(&Field::ModuleName).map(String::as_str),
        Some("Module Name is required.")
    );
    assert_eq!(report.len(), 3);
}

#[tokio::test]
async fn preview_success_replaces_template_list() {
    let mut api = MockApi::new();
    api.expect_preview()
        .times(1)
        .returning(|_| Ok(sample_preview()));
    let sink = MockSink::new();

    let orchestrator = RequestOrchestrator::new(Arc::new(api), Arc::new(sink));
    let mut state = filled_state();

    let outcome = orchestrator.preview(&mut state).await.unwrap();
    let PreviewOutcome::Applied(result) = outcome else {
        panic!("expected Applied, got {outcome:?}");
    };
    assert_eq!(result.count, 2);
    assert_eq!(orchestrator.templates().len(), 2);
}

#[tokio::test]
async fn preview_failure_preserves_previous_template_list() {
    let mut api = MockApi::new();
    let mut seq = Sequence::new();
    api.expect_preview()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(sample_preview()));
    api.expect_preview()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| {
            Err(ApplicationError::Server {
                status: 500,
                message: "template rendering failed".into(),
            })
        });
    let sink = MockSink::new();

    let orchestrator = RequestOrchestrator::new(Arc::new(api), Arc::new(sink));
    let mut state = filled_state();

    orchestrator.preview(&mut state).await.unwrap();
    let err = orchestrator.preview(&mut state).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Server { status: 500, .. }));
    // The list shown to the user is still the last successful one.
    assert_eq!(orchestrator.templates().len(), 2);
}

#[tokio::test]
async fn generate_saves_archive_under_derived_filename() {
    let mut api = MockApi::new();
    api.expect_generate()
        .times(1)
        .returning(|_| Ok(vec![0x50, 0x4b, 0x03, 0x04]));
    let mut sink = MockSink::new();
    sink.expect_save()
        .with(eq(&[0x50u8, 0x4b, 0x03, 0x04][..]), eq("orders.zip"))
        .times(1)
        .returning(|_, filename| Ok(PathBuf::from(filename)));

    let orchestrator = RequestOrchestrator::new(Arc::new(api), Arc::new(sink));
    let mut state = filled_state();

    let outcome = orchestrator.generate(&mut state).await.unwrap();
    let GenerateOutcome::Saved { filename, path } = outcome else {
        panic!("expected Saved, got {outcome:?}");
    };
    assert_eq!(filename, "orders.zip");
    assert_eq!(path, PathBuf::from("orders.zip"));
}

#[tokio::test]
async fn generate_with_blank_fields_makes_no_network_call() {
    let mut api = MockApi::new();
    api.expect_generate().times(0);
    let mut sink = MockSink::new();
    sink.expect_save().times(0);

    let orchestrator = RequestOrchestrator::new(Arc::new(api), Arc::new(sink));
    let mut state = filled_state();
    state.set_name("   ");

    let err = orchestrator.generate(&mut state).await.unwrap_err();
    let ApplicationError::InvalidSelection(report) = err else {
        panic!("expected InvalidSelection, got {err:?}");
    };
    assert_eq!(
        report.get(&Field::Name).map(String::as_str),
        Some("Name is required.")
    );
}

#[tokio::test]
async fn save_failure_surfaces_as_error() {
    let mut api = MockApi::new();
    api.expect_generate().times(1).returning(|_| Ok(vec![1]));
    let mut sink = MockSink::new();
    sink.expect_save().times(1).returning(|_, filename| {
        Err(ApplicationError::SaveFailed {
            filename: filename.to_string(),
            reason: "permission denied".into(),
        })
    });

    let orchestrator = RequestOrchestrator::new(Arc::new(api), Arc::new(sink));
    let mut state = filled_state();

    let err = orchestrator.generate(&mut state).await.unwrap_err();
    assert!(matches!(err, ApplicationError::SaveFailed { .. }));
}

/// Test double whose `generate` parks until released, so a second call can
/// be issued while the first is genuinely pending.
struct ParkedGenerateApi {
    release: Arc<Notify>,
    generate_calls: Arc<AtomicUsize>,
}

#[async_trait]
impl GeneratorApi for ParkedGenerateApi {
    async fn fetch_metadata(&self) -> Result<ProjectMetadata, ApplicationError> {
        Ok(ProjectMetadata::default())
    }

    async fn preview(&self, _request: &PreviewRequest) -> Result<PreviewResult, ApplicationError> {
        Ok(sample_preview())
    }

    async fn generate(&self, _request: &GenerateRequest) -> Result<Vec<u8>, ApplicationError> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        self.release.notified().await;
        Ok(vec![1])
    }
}

#[tokio::test]
async fn generate_while_one_is_pending_is_ignored() {
    let release = Arc::new(Notify::new());
    let generate_calls = Arc::new(AtomicUsize::new(0));
    let api = Arc::new(ParkedGenerateApi {
        release: Arc::clone(&release),
        generate_calls: Arc::clone(&generate_calls),
    });
    let mut sink = MockSink::new();
    sink.expect_save()
        .times(1)
        .returning(|_, filename| Ok(PathBuf::from(filename)));

    let orchestrator = Arc::new(RequestOrchestrator::new(api, Arc::new(sink)));

    let pending = {
        let orchestrator = Arc::clone(&orchestrator);
        let mut state = filled_state();
        tokio::spawn(async move { orchestrator.generate(&mut state).await })
    };
    // Let the first call reach the parked network await.
    tokio::task::yield_now().await;
    assert_eq!(generate_calls.load(Ordering::SeqCst), 1);

    // A second trigger while one is pending is ignored: no extra network
    // call, no save.
    let mut state = filled_state();
    let outcome = orchestrator.generate(&mut state).await.unwrap();
    assert!(matches!(outcome, GenerateOutcome::AlreadyInFlight));
    assert_eq!(generate_calls.load(Ordering::SeqCst), 1);

    // The pending call completes undisturbed and saves its archive.
    release.notify_one();
    let outcome = pending.await.unwrap().unwrap();
    assert!(matches!(
        outcome,
        GenerateOutcome::Saved { filename, .. } if filename == "orders.zip"
    ));
}

#[tokio::test]
async fn preview_and_generate_gates_are_independent() {
    let mut api = MockApi::new();
    api.expect_preview()
        .times(1)
        .returning(|_| Ok(sample_preview()));
    api.expect_generate().times(1).returning(|_| Ok(vec![1]));
    let mut sink = MockSink::new();
    sink.expect_save()
        .times(1)
        .returning(|_, filename| Ok(PathBuf::from(filename)));

    let orchestrator = RequestOrchestrator::new(Arc::new(api), Arc::new(sink));
    let mut state = filled_state();

    assert!(matches!(
        orchestrator.preview(&mut state).await.unwrap(),
        PreviewOutcome::Applied(_)
    ));
    assert!(matches!(
        orchestrator.generate(&mut state).await.unwrap(),
        GenerateOutcome::Saved { .. }
    ));
}

#[tokio::test]
async fn changing_project_type_resets_incompatible_framework() {
    let mut state = filled_state();
    state.set_framework(Framework::Gin);
    state.set_project_type(ProjectType::CliApp);
    assert_eq!(state.selection().framework, Framework::Golly);

    let mut api = MockApi::new();
    api.expect_preview()
        .times(1)
        .withf(|request| request.framework == Framework::Golly)
        .returning(|_| Ok(sample_preview()));
    let sink = MockSink::new();

    let orchestrator = RequestOrchestrator::new(Arc::new(api), Arc::new(sink));
    orchestrator.preview(&mut state).await.unwrap();
}
