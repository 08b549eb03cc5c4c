//! Per-operation-kind admission and ordering control.
//!
//! Each request kind (preview, generate) owns one [`OperationGate`] with
//! two independent protections:
//!
//! - an **in-flight flag**: while a call of this kind is pending, a new
//!   call of the same kind is rejected rather than queued, so a double
//!   trigger cannot produce duplicate downloads or previews;
//! - a **monotonic sequence guard**: every outbound call carries a
//!   [`Ticket`]; a response whose ticket is older than the newest already
//!   applied is discarded, so a slow stale response can never overwrite a
//!   newer one. Discards are silent, not errors.
//!
//! The flag makes the stale case unreachable through the normal call path;
//! the guard still stands on its own so response application is safe even
//! if admission policy changes.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Sequence number for one outbound call. Ordered per gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct OperationGate {
    in_flight: AtomicBool,
    issued: AtomicU64,
    applied: AtomicU64,
}

impl OperationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a new call: sets the in-flight flag and issues a ticket, or
    /// returns `None` when a call of this kind is already pending.
    pub fn try_acquire(&self) -> Option<Ticket> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            return None;
        }
        Some(self.issue())
    }

    /// Issue the next sequence ticket without touching the in-flight flag.
    pub fn issue(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Clear the in-flight flag. Must run on every completion path.
    pub fn release(&self) {
        self.in_flight.store(false, Ordering::Release);
    }

    /// Record a response arrival: `true` if this ticket is newer than the
    /// newest applied so far (apply it), `false` if it has been superseded
    /// (discard it).
    pub fn try_apply(&self, ticket: Ticket) -> bool {
        let mut newest = self.applied.load(Ordering::Acquire);
        loop {
            if ticket.0 <= newest {
                return false;
            }
            match self.applied.compare_exchange(
                newest,
                ticket.0,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return true,
                Err(current) => newest = current,
            }
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}
