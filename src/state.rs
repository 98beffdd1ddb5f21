//! Interaction state machine - which user actions are legal right now.
//!
//! ## State Transitions
//!
//! ```text
//! Idle       -> Displaying   (generate requested)
//! Displaying -> Idle         (reconfigure requested)
//! Idle       -> Masking      (enter-mask requested, maskable algorithm only)
//! Masking    -> Idle         (save-mask requested)
//! Masking    -> Masking      (clear-mask requested, contents reset)
//! ```
//!
//! `Playing` is a terminal state with no inbound transition. It only carries
//! its (empty) status text.

use crate::constants::{STATUS_DISPLAYING, STATUS_IDLE, STATUS_MASKING, STATUS_PLAYING};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionState {
    /// Size/algorithm pickers active, no maze shown or last maze cleared
    #[default]
    Idle,
    /// A generated maze is shown
    Displaying,
    /// Pointer drags edit the mask for the current size
    Masking,
    /// Reserved; nothing transitions here yet
    Playing,
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_displaying(&self) -> bool {
        matches!(self, Self::Displaying)
    }

    pub fn is_masking(&self) -> bool {
        matches!(self, Self::Masking)
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Status line shown for this state
    pub fn status_text(&self) -> &'static str {
        match self {
            Self::Idle => STATUS_IDLE,
            Self::Displaying => STATUS_DISPLAYING,
            Self::Masking => STATUS_MASKING,
            Self::Playing => STATUS_PLAYING,
        }
    }

    // Transitions are unconditional setters; guards live in the dispatch table.

    pub fn idle(&mut self) {
        self.transition(Self::Idle);
    }

    pub fn displaying(&mut self) {
        self.transition(Self::Displaying);
    }

    pub fn masking(&mut self) {
        self.transition(Self::Masking);
    }

    fn transition(&mut self, next: Self) {
        tracing::debug!(from = ?*self, to = ?next, "state transition");
        *self = next;
    }
}
