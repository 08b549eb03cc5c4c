//! The selection state machine.
//!
//! [`Selection`] is the full set of user-chosen configuration fields for
//! one scaffold request. It is mutated exclusively through
//! [`SelectionState`]'s transition methods, which enforce the one real
//! invariant — the framework is always a member of the current project
//! type's compatible sequence — and keep the touched/error bookkeeping and
//! the shared [`SelectionCell`] up to date. No transition can fail.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::debug;

use crate::domain::compatibility::CompatibilityMatrix;
use crate::domain::validation::{self, ValidationReport};
use crate::domain::value_objects::{Framework, ProjectType};

// ── Field ────────────────────────────────────────────────────────────────────

/// The three free-text fields subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    ModuleName,
    Name,
    Description,
}

impl Field {
    pub const ALL: [Field; 3] = [Self::ModuleName, Self::Name, Self::Description];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::ModuleName => "Module Name",
            Self::Name => "Name",
            Self::Description => "Description",
        }
    }
}

// ── Selection ────────────────────────────────────────────────────────────────

/// All user-chosen configuration for one scaffold request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub project_type: ProjectType,
    pub framework: Framework,
    pub go_version: String,
    pub module_name: String,
    pub name: String,
    pub description: String,
}

impl Selection {
    pub fn field_value(&self, field: Field) -> &str {
        match field {
            Field::ModuleName => &self.module_name,
            Field::Name => &self.name,
            Field::Description => &self.description,
        }
    }

    /// Suggested archive filename for a generate request: derived from the
    /// project name, `project.zip` when the name is blank.
    pub fn archive_filename(&self) -> String {
        let name = self.name.trim();
        if name.is_empty() {
            "project.zip".to_string()
        } else {
            format!("{name}.zip")
        }
    }
}

// ── SelectionCell ────────────────────────────────────────────────────────────

/// Shared latest-value cell over the current [`Selection`].
///
/// Updated by [`SelectionState`] on every mutation and read by the hotkey
/// dispatcher at invocation time, so a long-lived key binding never acts on
/// a stale snapshot.
#[derive(Debug, Clone)]
pub struct SelectionCell(Arc<Mutex<Selection>>);

impl SelectionCell {
    fn new(selection: Selection) -> Self {
        Self(Arc::new(Mutex::new(selection)))
    }

    /// The selection as of the most recent mutation.
    pub fn get(&self) -> Selection {
        match self.0.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn store(&self, selection: &Selection) {
        match self.0.lock() {
            Ok(mut guard) => *guard = selection.clone(),
            Err(poisoned) => *poisoned.into_inner() = selection.clone(),
        }
    }
}

// ── SelectionState ───────────────────────────────────────────────────────────

/// Owns the current selection plus its touched/error bookkeeping.
///
/// Invariant, re-established by every transition:
/// `framework ∈ matrix.frameworks_for(project_type)`.
#[derive(Debug)]
pub struct SelectionState {
    selection: Selection,
    touched: BTreeSet<Field>,
    errors: BTreeMap<Field, String>,
    matrix: CompatibilityMatrix,
    cell: SelectionCell,
}

impl SelectionState {
    /// Default selection: microservice with the recommended framework and
    /// the newest Go version, all text fields empty.
    pub fn new(matrix: CompatibilityMatrix) -> Self {
        let project_type = ProjectType::Microservice;
        let selection = Selection {
            project_type,
            framework: matrix.recommended_for(project_type),
            go_version: matrix.latest_version().to_string(),
            module_name: String::new(),
            name: String::new(),
            description: String::new(),
        };
        let cell = SelectionCell::new(selection.clone());
        Self {
            selection,
            touched: BTreeSet::new(),
            errors: BTreeMap::new(),
            matrix,
            cell,
        }
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn matrix(&self) -> &CompatibilityMatrix {
        &self.matrix
    }

    /// A handle on the latest-value cell; clones share the same storage.
    pub fn cell(&self) -> SelectionCell {
        self.cell.clone()
    }

    /// The ordered framework sequence for the current project type.
    pub fn framework_options(&self) -> Vec<Framework> {
        self.matrix.frameworks_for(self.selection.project_type)
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// The error to render next to a field: present only once the field has
    /// been touched. Touched-ness never affects submit eligibility.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.touched.contains(&field) {
            self.errors.get(&field).map(String::as_str)
        } else {
            None
        }
    }

    pub fn is_submittable(&self) -> bool {
        validation::validate_selection(&self.selection).is_empty()
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Set the project type, reassigning the framework to the recommended
    /// default when the current one is not compatible with the new type.
    /// Idempotent: repeating the same transition changes nothing further.
    pub fn set_project_type(&mut self, project_type: ProjectType) {
        self.selection.project_type = project_type;
        let options = self.matrix.frameworks_for(project_type);
        if !options.contains(&self.selection.framework) {
            let recommended = self.matrix.recommended_for(project_type);
            debug!(
                project_type = %project_type,
                framework = %recommended,
                "framework incompatible with new project type, reset to recommended"
            );
            self.selection.framework = recommended;
        }
        self.publish();
    }

    /// Set the framework directly. Callers are expected to offer only
    /// compatible values; this transition does not re-check membership.
    pub fn set_framework(&mut self, framework: Framework) {
        self.selection.framework = framework;
        self.publish();
    }

    pub fn set_go_version(&mut self, version: impl Into<String>) {
        self.selection.go_version = version.into();
        self.publish();
    }

    pub fn set_module_name(&mut self, value: impl Into<String>) {
        self.set_text(Field::ModuleName, value.into());
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.set_text(Field::Name, value.into());
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.set_text(Field::Description, value.into());
    }

    /// Validate every text field and mark them all touched, so errors that
    /// were hidden behind untouched fields become visible after a submit
    /// attempt. Returns the full report; empty ⇒ submittable.
    pub fn validate_all(&mut self) -> ValidationReport {
        let report = validation::validate_selection(&self.selection);
        self.touched.extend(Field::ALL);
        self.errors = report.clone();
        report
    }

    // ── Internal ──────────────────────────────────────────────────────────

    /// Text-field mutation: set, mark touched, re-validate that field only.
    fn set_text(&mut self, field: Field, value: String) {
        match field {
            Field::ModuleName => self.selection.module_name = value,
            Field::Name => self.selection.name = value,
            Field::Description => self.selection.description = value,
        }
        self.touched.insert(field);
        match validation::validate_field(field, self.selection.field_value(field)) {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
        self.publish();
    }

    fn publish(&self) {
        self.cell.store(&self.selection);
    }
}
