//! Mask editing workflows: drags, save/clear, per-size isolation.

use crate::helpers::{NON_MASKABLE, TestAppBuilder, drag, mask_region, masked, rect, send};
use mazemask::events::UiEvent;
use mazemask::grid::Coord;
use mazemask::state::InteractionState;
use mazemask::view::Control;
use std::collections::BTreeSet;

fn saved_mask(app: &crate::helpers::TestApp, size: usize) -> Vec<Coord> {
    app.session()
        .masks()
        .peek(size)
        .map(|m| m.iter().collect())
        .unwrap_or_default()
}

#[test]
fn test_nine_cell_mask_shapes_the_maze() {
    let mut app = TestAppBuilder::new().with_size(10).build();
    mask_region(&mut app, (2, 2), (4, 4));

    let expected = rect((2, 2), (4, 4));
    assert_eq!(saved_mask(&app, 10).len(), 9);
    assert!(saved_mask(&app, 10).iter().all(|c| expected.contains(c)));
    assert!(app.session().apply_mask());
    assert_eq!(app.view().label(Control::EditMask), Some("Edit Mask"));
    assert_eq!(app.view().enabled(Control::ApplyMask), Some(true));
    assert_eq!(app.view().toggle_state(Control::ApplyMask), Some(true));

    send(&mut app, UiEvent::GoClicked);
    let grid = app.session().grid();
    assert_eq!(grid.masked_coords(), expected);
    for coord in &expected {
        assert!(!grid.cell(*coord).unwrap().has_links());
    }
    assert_eq!(grid.reachable_from(Coord::new(0, 0)).len(), 91);
    assert_eq!(grid.link_count(), 90);
}

#[test]
fn test_entering_mask_mode() {
    let mut app = TestAppBuilder::new().with_size(10).build();
    send(&mut app, UiEvent::EditMaskClicked);

    assert_eq!(app.session().state(), InteractionState::Masking);
    assert_eq!(app.view().enabled(Control::SaveMask), Some(true));
    assert_eq!(app.view().enabled(Control::ClearMask), Some(true));
    assert_eq!(app.view().enabled(Control::Go), Some(false));
    assert_eq!(app.view().enabled(Control::ApplyMask), Some(false));
    assert_eq!(app.view().last_render().map(|(_, h)| h), Some(true));
    assert!(app.view().status_text().unwrap().starts_with("Select squares"));
}

#[test]
fn test_single_cell_drag_toggles_one_cell() {
    let mut app = TestAppBuilder::new().with_size(5).build();
    send(&mut app, UiEvent::EditMaskClicked);
    send(&mut app, UiEvent::drag_to(Coord::new(3, 3)));
    assert_eq!(app.session().drag_anchor(), Some(Coord::new(3, 3)));
    send(&mut app, UiEvent::PointerMoveEnd);

    assert_eq!(app.session().grid().masked_coords(), masked(&[(3, 3)]));
    assert_eq!(app.session().drag_anchor(), None);
    assert!(app.session().grid().selected_coords().is_empty());
}

#[test]
fn test_dragging_a_region_twice_restores_it() {
    let mut app = TestAppBuilder::new().with_size(10).build();
    send(&mut app, UiEvent::EditMaskClicked);
    drag(&mut app, (1, 1), (3, 2));
    let once = app.session().grid().masked_coords();
    assert_eq!(once, rect((1, 1), (3, 2)));

    // Reverse corners cover the same rectangle
    drag(&mut app, (3, 2), (1, 1));
    assert!(app.session().grid().masked_coords().is_empty());
}

#[test]
fn test_overlapping_drags_toggle_intersection_back() {
    let mut app = TestAppBuilder::new().with_size(5).build();
    send(&mut app, UiEvent::EditMaskClicked);
    drag(&mut app, (0, 0), (1, 1));
    drag(&mut app, (1, 1), (2, 2));

    assert_eq!(
        app.session().grid().masked_coords(),
        masked(&[(0, 0), (1, 0), (0, 1), (2, 1), (1, 2), (2, 2)])
    );
}

#[test]
fn test_shrinking_drag_only_toggles_final_rectangle() {
    let mut app = TestAppBuilder::new().with_size(5).build();
    send(&mut app, UiEvent::EditMaskClicked);
    send(&mut app, UiEvent::drag_to(Coord::new(0, 0)));
    send(&mut app, UiEvent::drag_to(Coord::new(3, 3)));
    send(&mut app, UiEvent::drag_to(Coord::new(1, 0)));
    send(&mut app, UiEvent::PointerMoveEnd);

    assert_eq!(app.session().grid().masked_coords(), masked(&[(0, 0), (1, 0)]));
}

#[test]
fn test_released_and_out_of_range_moves_are_ignored() {
    let mut app = TestAppBuilder::new().with_size(5).build();
    send(&mut app, UiEvent::EditMaskClicked);
    let before = app.session().snapshot();

    send(&mut app, UiEvent::PointerMove { x: 1, y: 1, button: false });
    send(&mut app, UiEvent::PointerMove { x: 5, y: 0, button: true });
    send(&mut app, UiEvent::PointerMove { x: 0, y: 9, button: true });
    assert_eq!(app.session().snapshot(), before);
}

#[test]
fn test_move_end_without_drag_is_noop() {
    let mut app = TestAppBuilder::new().with_size(5).build();
    send(&mut app, UiEvent::EditMaskClicked);
    send(&mut app, UiEvent::PointerMoveEnd);
    assert!(app.session().grid().masked_coords().is_empty());
}

#[test]
fn test_clear_does_not_touch_saved_mask() {
    let mut app = TestAppBuilder::new().with_size(10).build();
    mask_region(&mut app, (2, 2), (4, 4));

    send(&mut app, UiEvent::EditMaskClicked);
    assert_eq!(app.session().grid().masked_coords(), rect((2, 2), (4, 4)));

    send(&mut app, UiEvent::ClearMaskClicked);
    assert!(app.session().grid().masked_coords().is_empty());
    assert_eq!(app.session().state(), InteractionState::Masking);
    assert_eq!(saved_mask(&app, 10).len(), 9);

    // Saving the cleared grid empties the mask and turns apply-mask off
    send(&mut app, UiEvent::SaveMaskClicked);
    assert!(saved_mask(&app, 10).is_empty());
    assert!(!app.session().apply_mask());
    assert_eq!(app.view().label(Control::EditMask), Some("Create Mask"));
}

#[test]
fn test_save_during_drag_drops_selection() {
    let mut app = TestAppBuilder::new().with_size(5).build();
    send(&mut app, UiEvent::EditMaskClicked);
    send(&mut app, UiEvent::drag_to(Coord::new(0, 0)));
    send(&mut app, UiEvent::drag_to(Coord::new(2, 2)));
    send(&mut app, UiEvent::SaveMaskClicked);

    assert!(saved_mask(&app, 5).is_empty());
    assert_eq!(app.session().drag_anchor(), None);
    assert_eq!(app.session().state(), InteractionState::Idle);
}

#[test]
fn test_masks_are_independent_per_size() {
    let mut app = TestAppBuilder::new().with_size(10).build();
    mask_region(&mut app, (2, 2), (4, 4));

    send(&mut app, UiEvent::SizeSelected(5));
    assert!(!app.session().mask_defined());
    assert_eq!(app.view().label(Control::EditMask), Some("Create Mask"));

    send(&mut app, UiEvent::EditMaskClicked);
    assert!(app.session().grid().masked_coords().is_empty());
    drag(&mut app, (0, 0), (0, 4));
    send(&mut app, UiEvent::SaveMaskClicked);
    assert_eq!(saved_mask(&app, 5).len(), 5);

    send(&mut app, UiEvent::SizeSelected(10));
    let restored: BTreeSet<Coord> = saved_mask(&app, 10).into_iter().collect();
    assert_eq!(restored, rect((2, 2), (4, 4)));
    assert!(app.session().mask_defined());
    assert_eq!(app.session().masks().sizes(), vec![5, 10]);
}

#[test]
fn test_apply_mask_toggle_controls_generation() {
    let mut app = TestAppBuilder::new().with_size(10).build();
    mask_region(&mut app, (0, 0), (1, 1));

    send(&mut app, UiEvent::ApplyMaskClicked);
    assert!(!app.session().apply_mask());
    assert_eq!(app.view().toggle_state(Control::ApplyMask), Some(false));

    send(&mut app, UiEvent::GoClicked);
    assert!(app.session().grid().masked_coords().is_empty());
    assert_eq!(app.session().grid().link_count(), 99);
}

#[test]
fn test_apply_mask_is_inert_for_non_maskable_algorithm() {
    let mut app = TestAppBuilder::new().with_size(10).build();
    mask_region(&mut app, (2, 2), (4, 4));

    send(&mut app, UiEvent::AlgorithmSelected(NON_MASKABLE.into()));
    assert!(app.session().apply_mask());
    assert_eq!(app.view().visible(Control::MaskingPanel), Some(false));
    assert_eq!(app.view().enabled(Control::EditMask), Some(false));

    send(&mut app, UiEvent::GoClicked);
    assert!(app.session().grid().masked_coords().is_empty());
    assert_eq!(app.session().grid().link_count(), 99);
    assert_eq!(saved_mask(&app, 10).len(), 9);
}

#[test]
fn test_edit_mask_ignored_for_non_maskable_algorithm() {
    let mut app = TestAppBuilder::new()
        .with_size(5)
        .with_algorithm(NON_MASKABLE)
        .build();
    let before = app.session().snapshot();
    send(&mut app, UiEvent::EditMaskClicked);
    assert_eq!(app.session().snapshot(), before);
}
