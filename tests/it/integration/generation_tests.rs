//! Maze generation through the app: every algorithm, masks, reproducibility.

use crate::helpers::{MASKABLE, TestAppBuilder, mask_region, send};
use mazemask::catalog::Catalog;
use mazemask::events::UiEvent;
use mazemask::grid::Coord;
use mazemask::state::InteractionState;

#[test]
fn test_every_algorithm_generates_a_perfect_maze() {
    for algorithm in Catalog::default().algorithms() {
        let mut app = TestAppBuilder::new()
            .with_size(10)
            .with_algorithm(&algorithm.name)
            .build();
        send(&mut app, UiEvent::GoClicked);

        let grid = app.session().grid();
        assert_eq!(grid.link_count(), 99, "{}", algorithm.name);
        assert_eq!(grid.reachable_from(Coord::new(0, 0)).len(), 100, "{}", algorithm.name);
        assert_eq!(app.view().last_render().map(|(g, _)| g), Some(grid));
    }
}

#[test]
fn test_maskable_algorithms_span_every_region() {
    for algorithm in Catalog::default().algorithms().iter().filter(|a| a.maskable) {
        let mut app = TestAppBuilder::new()
            .with_size(10)
            .with_algorithm(&algorithm.name)
            .build();
        // A full column splits the grid in two
        mask_region(&mut app, (4, 0), (4, 9));
        send(&mut app, UiEvent::GoClicked);

        let grid = app.session().grid();
        let regions = grid.components();
        assert_eq!(regions.len(), 2, "{}", algorithm.name);
        assert_eq!(grid.link_count(), 90 - 2, "{}", algorithm.name);
        for region in regions {
            assert_eq!(grid.reachable_from(region[0]).len(), region.len(), "{}", algorithm.name);
        }
    }
}

#[test]
fn test_refresh_keeps_state_and_replaces_maze() {
    let mut app = TestAppBuilder::new().with_size(10).build();
    send(&mut app, UiEvent::GoClicked);
    let first = app.session().grid().clone();

    send(&mut app, UiEvent::RefreshClicked);
    assert_eq!(app.session().state(), InteractionState::Displaying);
    assert_ne!(app.session().grid(), &first);
    assert_eq!(app.session().generation_stats().count(), 2);
}

#[test]
fn test_same_seed_same_maze() {
    let build = || {
        let mut app = TestAppBuilder::new().with_size(15).with_seed(99).build();
        send(&mut app, UiEvent::GoClicked);
        app.session().grid().clone()
    };
    assert_eq!(build(), build());
}

#[test]
fn test_prepare_grid_follows_apply_mask() {
    let mut app = TestAppBuilder::new().with_size(5).with_algorithm(MASKABLE).build();
    mask_region(&mut app, (0, 0), (0, 0));
    assert!(app.session().apply_mask());

    send(&mut app, UiEvent::GoClicked);
    assert!(app.session().grid().is_masked(Coord::new(0, 0)));
    assert_eq!(app.session().grid().link_count(), 23);
}
