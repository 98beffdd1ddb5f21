//! Explicit dispatch table: (event kind, required state) -> handler.
//!
//! Routes are validated once at registration (no duplicate key) and the guard
//! is checked on every dispatch. An event whose route requires a different
//! state is rejected without touching the session or the view.

use crate::app::Session;
use crate::error::{DispatchError, SessionResult};
use crate::events::{EventKind, UiEvent};
use crate::profile_scope;
use crate::state::InteractionState;
use crate::view::View;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// State requirement attached to a route
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateGuard {
    /// Fires in every state
    Any,
    /// Fires only in the given state
    In(InteractionState),
}

impl StateGuard {
    pub fn admits(&self, state: InteractionState) -> bool {
        match self {
            StateGuard::Any => true,
            StateGuard::In(required) => *required == state,
        }
    }
}

pub type Handler = fn(&mut Session, &UiEvent, &mut dyn View) -> SessionResult<()>;

/// Result of dispatching one event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    Handled,
    /// A route exists but not for the current state
    Rejected {
        kind: EventKind,
        state: InteractionState,
    },
    /// No route registered for this event kind at all
    Unrouted,
}

#[derive(Default)]
pub struct Dispatcher {
    routes: HashMap<(EventKind, StateGuard), Handler>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        kind: EventKind,
        guard: StateGuard,
        handler: Handler,
    ) -> Result<(), DispatchError> {
        if self.routes.contains_key(&(kind, guard)) {
            return Err(DispatchError::DuplicateRoute { kind, guard });
        }
        self.routes.insert((kind, guard), handler);
        Ok(())
    }

    pub fn is_routed(&self, kind: EventKind) -> bool {
        self.routes.keys().any(|(k, _)| *k == kind)
    }

    /// Whether `kind` would fire in `state`
    pub fn accepts(&self, kind: EventKind, state: InteractionState) -> bool {
        self.route(kind, state).is_some()
    }

    fn route(&self, kind: EventKind, state: InteractionState) -> Option<Handler> {
        self.routes
            .get(&(kind, StateGuard::In(state)))
            .or_else(|| self.routes.get(&(kind, StateGuard::Any)))
            .copied()
    }

    pub fn dispatch(
        &self,
        session: &mut Session,
        event: &UiEvent,
        view: &mut dyn View,
    ) -> SessionResult<Dispatch> {
        profile_scope!("dispatch", crate::constants::DISPATCH_WARN_MS);

        let kind = event.kind();
        let state = session.state();
        match self.route(kind, state) {
            Some(handler) => {
                handler(session, event, view)?;
                Ok(Dispatch::Handled)
            }
            None if self.is_routed(kind) => {
                tracing::trace!(?kind, ?state, "event rejected in current state");
                Ok(Dispatch::Rejected { kind, state })
            }
            None => {
                tracing::trace!(?kind, "no route for event");
                Ok(Dispatch::Unrouted)
            }
        }
    }
}
