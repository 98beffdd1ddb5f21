//! The route table wiring every UI event to a session handler.
//!
//! Each handler unpacks its payload and calls the matching `Session` method.
//! The dispatcher only calls a handler with the event kind it was registered
//! for, so the `let ... else` arms never fire in practice.

use super::Session;
use crate::dispatch::{Dispatcher, Handler, StateGuard};
use crate::error::{DispatchError, SessionResult};
use crate::events::{EventKind, UiEvent};
use crate::state::InteractionState::{Displaying, Idle, Masking};
use crate::view::View;

fn on_size_selected(
    session: &mut Session,
    event: &UiEvent,
    view: &mut dyn View,
) -> SessionResult<()> {
    let UiEvent::SizeSelected(size) = event else {
        return Ok(());
    };
    session.select_size(*size, view)
}

fn on_algorithm_selected(
    session: &mut Session,
    event: &UiEvent,
    view: &mut dyn View,
) -> SessionResult<()> {
    let UiEvent::AlgorithmSelected(name) = event else {
        return Ok(());
    };
    session.select_algorithm(name, view)
}

fn on_pointer_move(
    session: &mut Session,
    event: &UiEvent,
    view: &mut dyn View,
) -> SessionResult<()> {
    let UiEvent::PointerMove { x, y, button } = *event else {
        return Ok(());
    };
    session.pointer_move(x, y, button, view)
}

fn on_pointer_move_end(
    session: &mut Session,
    _: &UiEvent,
    view: &mut dyn View,
) -> SessionResult<()> {
    session.pointer_move_end(view)
}

fn on_go(session: &mut Session, _: &UiEvent, view: &mut dyn View) -> SessionResult<()> {
    session.go(view)
}

fn on_refresh(session: &mut Session, _: &UiEvent, view: &mut dyn View) -> SessionResult<()> {
    session.refresh(view)
}

fn on_change_config(session: &mut Session, _: &UiEvent, view: &mut dyn View) -> SessionResult<()> {
    session.reconfigure(view)
}

fn on_edit_mask(session: &mut Session, _: &UiEvent, view: &mut dyn View) -> SessionResult<()> {
    session.enter_masking(view)
}

fn on_save_mask(session: &mut Session, _: &UiEvent, view: &mut dyn View) -> SessionResult<()> {
    session.save_mask(view)
}

fn on_clear_mask(session: &mut Session, _: &UiEvent, view: &mut dyn View) -> SessionResult<()> {
    session.clear_mask(view)
}

fn on_apply_mask(session: &mut Session, _: &UiEvent, view: &mut dyn View) -> SessionResult<()> {
    session.toggle_apply_mask(view)
}

fn on_resize(session: &mut Session, _: &UiEvent, view: &mut dyn View) -> SessionResult<()> {
    session.resize(view)
}

const IDLE: StateGuard = StateGuard::In(Idle);
const DISPLAYING: StateGuard = StateGuard::In(Displaying);
const MASKING: StateGuard = StateGuard::In(Masking);

/// (event, guard, handler) for every route the application serves
const ROUTES: [(EventKind, StateGuard, Handler); 12] = [
    // Configuration
    (EventKind::SizeSelected, IDLE, on_size_selected),
    (EventKind::AlgorithmSelected, IDLE, on_algorithm_selected),
    (EventKind::ApplyMaskClicked, IDLE, on_apply_mask),
    (EventKind::GoClicked, IDLE, on_go),
    (EventKind::EditMaskClicked, IDLE, on_edit_mask),
    // Maze on screen
    (EventKind::RefreshClicked, DISPLAYING, on_refresh),
    (EventKind::ChangeConfigClicked, DISPLAYING, on_change_config),
    // Mask editing
    (EventKind::SaveMaskClicked, MASKING, on_save_mask),
    (EventKind::ClearMaskClicked, MASKING, on_clear_mask),
    (EventKind::PointerMove, MASKING, on_pointer_move),
    (EventKind::PointerMoveEnd, MASKING, on_pointer_move_end),
    (EventKind::Resize, StateGuard::Any, on_resize),
];

/// Dispatcher with the full application route table registered.
pub fn default_dispatcher() -> Result<Dispatcher, DispatchError> {
    let mut dispatcher = Dispatcher::new();
    for (kind, guard, handler) in ROUTES {
        dispatcher.register(kind, guard, handler)?;
    }
    Ok(dispatcher)
}
