//! Interactive maze generator with per-size cell masks.
//!
//! The core is view-agnostic: a [`View`](view::View) implementation emits
//! [`UiEvent`](events::UiEvent)s, [`MazeApp`](app::MazeApp) routes them through
//! an explicit dispatch table and pushes render/affordance commands back.

pub mod affordances;
pub mod algorithms;
pub mod app;
pub mod catalog;
pub mod command;
pub mod constants;
pub mod dispatch;
pub mod editor;
pub mod error;
pub mod events;
pub mod grid;
pub mod mask;
pub mod perf;
pub mod render;
pub mod settings;
pub mod state;
pub mod view;
