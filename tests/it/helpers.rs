//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestAppBuilder` - Builder for a seeded `MazeApp` over a `RecordingView`
//! - `drag()` / `mask_region()` - Pointer drag sequences
//! - `masked()` - Coordinate set literal

use mazemask::app::MazeApp;
use mazemask::dispatch::Dispatch;
use mazemask::events::UiEvent;
use mazemask::grid::Coord;
use mazemask::settings::Settings;
use mazemask::view::RecordingView;
use std::collections::BTreeSet;

pub type TestApp = MazeApp<RecordingView>;

/// Algorithm that honours masks
pub const MASKABLE: &str = "Recursive Backtrack";

/// Algorithm that ignores masks
pub const NON_MASKABLE: &str = "Binary Tree";

// ============================================================================
// TestAppBuilder
// ============================================================================

/// Builder for a deterministic app.
///
/// # Example
/// ```ignore
/// let mut app = TestAppBuilder::new().with_size(10).build();
/// ```
pub struct TestAppBuilder {
    settings: Settings,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            settings: Settings {
                seed: Some(7),
                ..Settings::default()
            },
        }
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.settings.default_size = size;
        self
    }

    pub fn with_algorithm(mut self, name: &str) -> Self {
        self.settings.default_algorithm = name.to_string();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.settings.seed = Some(seed);
        self
    }

    pub fn build(self) -> TestApp {
        MazeApp::new(&self.settings, RecordingView::new()).unwrap()
    }
}

// ============================================================================
// Event helpers
// ============================================================================

/// Send an event that must be routed and handled
pub fn send(app: &mut TestApp, event: UiEvent) {
    assert_eq!(app.handle(event.clone()).unwrap(), Dispatch::Handled, "{event:?}");
}

/// Held-button moves from `from` to `to`, then release
pub fn drag(app: &mut TestApp, from: (usize, usize), to: (usize, usize)) {
    send(app, UiEvent::drag_to(from.into()));
    send(app, UiEvent::drag_to(to.into()));
    send(app, UiEvent::PointerMoveEnd);
}

/// Enter masking, drag one rectangle and save
pub fn mask_region(app: &mut TestApp, from: (usize, usize), to: (usize, usize)) {
    send(app, UiEvent::EditMaskClicked);
    drag(app, from, to);
    send(app, UiEvent::SaveMaskClicked);
}

pub fn masked(coords: &[(usize, usize)]) -> BTreeSet<Coord> {
    coords.iter().map(|&c| Coord::from(c)).collect()
}

/// All coordinates of the inclusive rectangle `from..=to`
pub fn rect(from: (usize, usize), to: (usize, usize)) -> BTreeSet<Coord> {
    let mut set = BTreeSet::new();
    for x in from.0..=to.0 {
        for y in from.1..=to.1 {
            set.insert(Coord::new(x, y));
        }
    }
    set
}
