//! Copy acknowledgment state machine
//!
//! Every copyable item (one question, or the whole card) moves through
//! `Idle → Copied → Idle`. The controller owns the clipboard capability and
//! the per-item state for one rendered view.
//!
//! # Timing
//!
//! Time is an explicit input: callers pass `now` when copying and call
//! [`CopyController::poll`] from their event loop. A successful copy
//! schedules a reset [`ACKNOWLEDGMENT_DURATION`] later; the reset lives in the
//! item's own state, so clearing the state cancels it.
//!
//! # Score changes
//!
//! [`CopyController::reset_all`] wipes every item and bumps an epoch. Copy
//! tickets issued before the reset carry the old epoch, and completing one
//! afterwards changes nothing.

use super::clipboard::{ClipboardError, ClipboardWriter};
use log::{debug, warn};
use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

/// How long an item shows as copied.
pub const ACKNOWLEDGMENT_DURATION: Duration = Duration::from_millis(2000);

// ─────────────────────────────────────────────────────────────────────────────
// Public State Types
// ─────────────────────────────────────────────────────────────────────────────

/// An exportable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyTarget {
    /// A single question, by 0-based index
    Question(usize),
    /// Every question of the card at once
    All,
}

impl fmt::Display for CopyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyTarget::Question(index) => write!(f, "question {}", index + 1),
            CopyTarget::All => write!(f, "all questions"),
        }
    }
}

/// Acknowledgment state shown next to a copy action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyStatus {
    #[default]
    Idle,
    Copied,
}

/// Result of a copy request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Text reached the clipboard; the item now shows as copied
    Copied,
    /// The item is already copied or being written; nothing happened
    Disabled,
    /// The clipboard rejected the write; the item stays idle
    Failed,
    /// The write finished after the score selection changed; ignored
    Stale,
    /// There was no text to copy for this item
    NothingToCopy,
}

/// Handle for a clipboard write in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyTicket {
    target: CopyTarget,
    epoch: u64,
}

impl CopyTicket {
    pub fn target(&self) -> CopyTarget {
        self.target
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemState {
    Writing,
    Copied { reset_at: Instant },
}

// ─────────────────────────────────────────────────────────────────────────────
// Controller
// ─────────────────────────────────────────────────────────────────────────────

/// Performs copies and tracks their acknowledgment per item.
#[derive(Debug)]
pub struct CopyController<C> {
    clipboard: C,
    items: HashMap<CopyTarget, ItemState>,
    epoch: u64,
}

impl<C: ClipboardWriter> CopyController<C> {
    pub fn new(clipboard: C) -> Self {
        Self {
            clipboard,
            items: HashMap::new(),
            epoch: 0,
        }
    }

    /// Current acknowledgment state of `target`.
    pub fn status(&self, target: CopyTarget) -> CopyStatus {
        match self.items.get(&target) {
            Some(ItemState::Copied { .. }) => CopyStatus::Copied,
            Some(ItemState::Writing) | None => CopyStatus::Idle,
        }
    }

    /// Whether a copy of `target` may be triggered right now.
    pub fn is_enabled(&self, target: CopyTarget) -> bool {
        !self.items.contains_key(&target)
    }

    /// Start a copy of `target`.
    ///
    /// Returns `None` while the item is copied or a write for it is still in
    /// flight.
    pub fn begin(&mut self, target: CopyTarget) -> Option<CopyTicket> {
        if !self.is_enabled(target) {
            debug!("Copy of {} ignored: already in progress or copied", target);
            return None;
        }
        self.items.insert(target, ItemState::Writing);
        Some(CopyTicket {
            target,
            epoch: self.epoch,
        })
    }

    /// Apply the result of the clipboard write started by `ticket`.
    pub fn complete(
        &mut self,
        ticket: CopyTicket,
        result: Result<(), ClipboardError>,
        now: Instant,
    ) -> CopyOutcome {
        if ticket.epoch != self.epoch {
            debug!("Discarding stale copy result for {}", ticket.target);
            return CopyOutcome::Stale;
        }

        match result {
            Ok(()) => {
                self.items.insert(
                    ticket.target,
                    ItemState::Copied {
                        reset_at: now + ACKNOWLEDGMENT_DURATION,
                    },
                );
                CopyOutcome::Copied
            }
            Err(err) => {
                warn!("Could not copy {}: {}", ticket.target, err);
                self.items.remove(&ticket.target);
                CopyOutcome::Failed
            }
        }
    }

    /// Write `text` to the clipboard on behalf of `target`.
    pub fn copy(&mut self, target: CopyTarget, text: &str, now: Instant) -> CopyOutcome {
        let Some(ticket) = self.begin(target) else {
            return CopyOutcome::Disabled;
        };
        let result = self.clipboard.write_text(text);
        self.complete(ticket, result, now)
    }

    /// Return every item to idle and cancel all scheduled resets and
    /// in-flight writes. Called when the score selection changes.
    pub fn reset_all(&mut self) {
        self.items.clear();
        self.epoch += 1;
    }

    /// Revert every item whose acknowledgment has expired at `now`.
    ///
    /// Returns the number of items that went back to idle.
    pub fn poll(&mut self, now: Instant) -> usize {
        let before = self.items.len();
        self.items.retain(|_, state| match state {
            ItemState::Copied { reset_at } => *reset_at > now,
            ItemState::Writing => true,
        });
        before - self.items.len()
    }

    /// The earliest pending reset, for scheduling the next [`poll`](Self::poll).
    pub fn next_reset(&self) -> Option<Instant> {
        self.items
            .values()
            .filter_map(|state| match state {
                ItemState::Copied { reset_at } => Some(*reset_at),
                ItemState::Writing => None,
            })
            .min()
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
