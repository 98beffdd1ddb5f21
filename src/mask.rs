//! Per-size masks and the store that owns them.
//!
//! A [`Mask`] is a sparse set of excluded coordinates scoped to one grid size.
//! Coordinates outside `size x size` are dropped on insert, so a mask can be
//! applied to any grid of its size without bounds surprises.
//!
//! The [`MaskStore`] keeps exactly one mask per size, created empty on first
//! access and never removed. Masks for different sizes never share state.

use crate::grid::{Coord, Grid};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Mask {
    size: usize,
    cells: BTreeSet<Coord>,
}

impl Mask {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: BTreeSet::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn in_bounds(&self, coord: Coord) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    pub fn is_masked(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Add a coordinate. Out-of-range coordinates are ignored (returns false).
    pub fn insert(&mut self, coord: Coord) -> bool {
        self.in_bounds(coord) && self.cells.insert(coord)
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// Replace the mask contents with the grid's masked cells.
    ///
    /// This is the only path by which working-grid mask edits become saved
    /// state. Cells beyond this mask's size are discarded.
    pub fn set_from_grid(&mut self, grid: &Grid) {
        let size = self.size;
        self.cells = grid
            .masked_coords()
            .into_iter()
            .filter(|c| c.x < size && c.y < size)
            .collect();
    }

    /// Mark every saved coordinate as masked on `grid`
    pub fn apply_to(&self, grid: &mut Grid) {
        for coord in &self.cells {
            grid.mask_cell(*coord);
        }
    }
}

/// One mask per grid size, lazily created. Lookup by size is O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MaskStore {
    masks: HashMap<usize, Mask>,
}

impl MaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mask for `size`, created empty if this size was never referenced
    pub fn get(&mut self, size: usize) -> &mut Mask {
        self.masks.entry(size).or_insert_with(|| Mask::new(size))
    }

    /// Read-only lookup that does not create
    pub fn peek(&self, size: usize) -> Option<&Mask> {
        self.masks.get(&size)
    }

    /// True if `size` has a non-empty mask
    pub fn is_defined(&self, size: usize) -> bool {
        self.peek(size).is_some_and(|m| !m.is_empty())
    }

    /// Sizes that have been referenced so far, ascending
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.masks.keys().copied().collect();
        sizes.sort_unstable();
        sizes
    }

    pub fn len(&self) -> usize {
        self.masks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }
}
