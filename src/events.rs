//! Typed UI events emitted by a view.

use crate::grid::Coord;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiEvent {
    /// Size picker changed (edge length)
    SizeSelected(usize),
    /// Algorithm picker changed (catalog name)
    AlgorithmSelected(String),
    /// Pointer moved over cell `(x, y)`; `button` is true while held
    PointerMove { x: usize, y: usize, button: bool },
    /// Pointer released / drag finished
    PointerMoveEnd,
    GoClicked,
    RefreshClicked,
    ChangeConfigClicked,
    EditMaskClicked,
    SaveMaskClicked,
    ClearMaskClicked,
    ApplyMaskClicked,
    /// Viewport size changed
    Resize,
}

/// Payload-free discriminant of [`UiEvent`], used as the dispatch key.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    SizeSelected,
    AlgorithmSelected,
    PointerMove,
    PointerMoveEnd,
    GoClicked,
    RefreshClicked,
    ChangeConfigClicked,
    EditMaskClicked,
    SaveMaskClicked,
    ClearMaskClicked,
    ApplyMaskClicked,
    Resize,
}

impl EventKind {
    pub const ALL: [EventKind; 12] = [
        EventKind::SizeSelected,
        EventKind::AlgorithmSelected,
        EventKind::PointerMove,
        EventKind::PointerMoveEnd,
        EventKind::GoClicked,
        EventKind::RefreshClicked,
        EventKind::ChangeConfigClicked,
        EventKind::EditMaskClicked,
        EventKind::SaveMaskClicked,
        EventKind::ClearMaskClicked,
        EventKind::ApplyMaskClicked,
        EventKind::Resize,
    ];
}

impl UiEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            UiEvent::SizeSelected(_) => EventKind::SizeSelected,
            UiEvent::AlgorithmSelected(_) => EventKind::AlgorithmSelected,
            UiEvent::PointerMove { .. } => EventKind::PointerMove,
            UiEvent::PointerMoveEnd => EventKind::PointerMoveEnd,
            UiEvent::GoClicked => EventKind::GoClicked,
            UiEvent::RefreshClicked => EventKind::RefreshClicked,
            UiEvent::ChangeConfigClicked => EventKind::ChangeConfigClicked,
            UiEvent::EditMaskClicked => EventKind::EditMaskClicked,
            UiEvent::SaveMaskClicked => EventKind::SaveMaskClicked,
            UiEvent::ClearMaskClicked => EventKind::ClearMaskClicked,
            UiEvent::ApplyMaskClicked => EventKind::ApplyMaskClicked,
            UiEvent::Resize => EventKind::Resize,
        }
    }

    /// Pointer move with the button held
    pub fn drag_to(coord: Coord) -> Self {
        UiEvent::PointerMove {
            x: coord.x,
            y: coord.y,
            button: true,
        }
    }
}
