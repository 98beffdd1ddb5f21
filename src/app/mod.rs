//! Application module - the session model and the shell that drives it.
//!
//! This module is organized into several submodules:
//! - `state` - The `Session` struct, accessors and snapshot
//! - `lifecycle` - Construction of `MazeApp`
//! - `config_handlers` - Size, algorithm, apply-mask and resize
//! - `generation` - Go, refresh and reconfigure
//! - `mask_handlers` - Mask editing and the pointer drag
//! - `routes` - The dispatch table binding events to handlers

mod config_handlers;
mod generation;
mod lifecycle;
mod mask_handlers;
mod routes;
mod state;

pub use routes::default_dispatcher;
pub use state::{Session, SessionSnapshot};

use crate::dispatch::{Dispatch, Dispatcher};
use crate::error::SessionResult;
use crate::events::UiEvent;
use crate::view::View;

/// Owns the session, the dispatcher and the view, and feeds events through.
pub struct MazeApp<V: View> {
    session: Session,
    dispatcher: Dispatcher,
    view: V,
}

impl<V: View> MazeApp<V> {
    /// Route one event. Rejected and unrouted events leave everything untouched.
    pub fn handle(&mut self, event: UiEvent) -> SessionResult<Dispatch> {
        self.dispatcher
            .dispatch(&mut self.session, &event, &mut self.view)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
