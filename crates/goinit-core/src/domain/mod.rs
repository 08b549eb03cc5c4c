//! Domain layer: pure selection/compatibility/validation logic.
//!
//! Nothing in this module performs I/O. The compatibility matrix, the
//! selection state machine, and the validator are all deterministic and
//! total; invalid input is representable (an empty module name is a valid
//! `Selection`) and surfaced only through validation, never by rejecting a
//! mutation.

pub mod compatibility;
pub mod error;
pub mod preview;
pub mod selection;
pub mod validation;
pub mod value_objects;

pub use compatibility::{CompatibilityMatrix, ProjectMetadata, VersionOption};
pub use error::DomainError;
pub use preview::{PreviewResult, PreviewStats, Template};
pub use selection::{Field, Selection, SelectionCell, SelectionState};
pub use validation::{ValidationReport, validate_field, validate_selection};
pub use value_objects::{Framework, ProjectType};
