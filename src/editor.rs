//! Mask editor - turns pointer drags into rectangular mask toggles.
//!
//! A drag is a sequence of held-button moves followed by a move-end:
//!
//! ```text
//! move(held) -> anchor set on first move, rectangle anchor..pointer selected
//! move(held) -> selection recomputed from scratch (a shrinking drag un-highlights)
//! move-end   -> every selected cell flips its masked flag, selection and anchor cleared
//! ```
//!
//! Selection is staged as cell metadata on the working grid; nothing reaches
//! the saved mask until the session saves.

use crate::grid::{Coord, Grid};

/// Inclusive axis-aligned cell rectangle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRange {
    pub start: Coord,
    pub end: Coord,
}

impl CellRange {
    /// Rectangle spanned by two corners in any order
    pub fn spanning(a: Coord, b: Coord) -> Self {
        Self {
            start: Coord::new(a.x.min(b.x), a.y.min(b.y)),
            end: Coord::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn contains(&self, coord: Coord) -> bool {
        (self.start.x..=self.end.x).contains(&coord.x)
            && (self.start.y..=self.end.y).contains(&coord.y)
    }

    pub fn cell_count(&self) -> usize {
        (self.end.x - self.start.x + 1) * (self.end.y - self.start.y + 1)
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let Self { start, end } = *self;
        (start.x..=end.x).flat_map(move |x| (start.y..=end.y).map(move |y| Coord::new(x, y)))
    }
}

/// What a pointer move did to the working grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Button not held or pointer outside the grid; nothing changed
    Ignored,
    /// Selection now covers this range
    Selected(CellRange),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MaskEditor {
    drag_anchor: Option<Coord>,
}

impl MaskEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag_anchor(&self) -> Option<Coord> {
        self.drag_anchor
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Handle a pointer move over `pointer` on the working grid.
    pub fn pointer_move(&mut self, grid: &mut Grid, pointer: Coord, button: bool) -> MoveOutcome {
        if !button || !grid.contains(pointer) {
            return MoveOutcome::Ignored;
        }
        let anchor = *self.drag_anchor.get_or_insert(pointer);
        let range = CellRange::spanning(anchor, pointer);
        select_range(grid, range);
        MoveOutcome::Selected(range)
    }

    /// Finish the drag: toggle every selected cell and clear the staging state.
    /// Returns the number of toggled cells.
    pub fn commit(&mut self, grid: &mut Grid) -> usize {
        let mut toggled = 0;
        for cell in grid.cells_mut() {
            if cell.metadata.selected {
                cell.masked = !cell.masked;
                cell.metadata.clear();
                toggled += 1;
            }
        }
        self.drag_anchor = None;
        toggled
    }

    /// Drop any in-progress drag without touching mask flags
    pub fn cancel(&mut self, grid: &mut Grid) {
        grid.clear_metadata();
        self.drag_anchor = None;
    }
}

/// Replace the grid's selection with exactly `range`
pub fn select_range(grid: &mut Grid, range: CellRange) {
    grid.clear_metadata();
    for coord in range.coords() {
        grid.select(coord);
    }
}
