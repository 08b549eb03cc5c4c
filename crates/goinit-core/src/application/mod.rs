//! Application layer: request orchestration over driven ports.

pub mod error;
pub mod gate;
pub mod hotkey;
pub mod orchestrator;
pub mod ports;

pub use error::ApplicationError;
pub use gate::{OperationGate, Ticket};
pub use hotkey::{Hotkey, HotkeyDispatcher, KeyPress, Modifier};
pub use orchestrator::{GenerateOutcome, PreviewOutcome, RequestOrchestrator};
