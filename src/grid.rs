//! Square maze grid - cells, passages, mask flags and transient selection.
//!
//! The grid is a dense row-major `Vec<Cell>`. Every accessor takes a [`Coord`]
//! and returns `None`/`false` for coordinates outside the grid instead of
//! indexing into them, so pointer input never has to be pre-validated.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};

/// A cell position. `x` grows east, `y` grows south.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Neighbouring coordinate in `dir`, or `None` when it would underflow.
    /// The caller still has to bounds-check against the grid.
    pub fn step(self, dir: Direction) -> Option<Coord> {
        let (dx, dy) = dir.offset();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Coord { x, y })
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// Passage directions. Discriminants are the link bits stored on [`Cell`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    North = 1,
    East = 2,
    South = 4,
    West = 8,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    #[inline]
    pub fn bit(self) -> u8 {
        self as u8
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

/// Transient per-cell state used while a mask drag is in progress.
/// Never persisted; cleared before every selection and after commit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellMetadata {
    pub selected: bool,
}

impl CellMetadata {
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub coord: Coord,
    pub masked: bool,
    /// Bitset of open passages, see [`Direction::bit`]
    links: u8,
    #[serde(skip)]
    pub metadata: CellMetadata,
}

impl Cell {
    fn new(coord: Coord) -> Self {
        Self {
            coord,
            masked: false,
            links: 0,
            metadata: CellMetadata::default(),
        }
    }

    #[inline]
    pub fn is_linked(&self, dir: Direction) -> bool {
        self.links & dir.bit() != 0
    }

    /// True if the cell has at least one open passage
    #[inline]
    pub fn has_links(&self) -> bool {
        self.links != 0
    }

    pub fn link_count(&self) -> u32 {
        self.links.count_ones()
    }

    pub fn mask(&mut self) {
        self.masked = true;
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(Coord { x, y }));
            }
        }
        Self { width, height, cells }
    }

    /// Square grid with edge length `size`
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    #[inline]
    fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| coord.y * self.width + coord.x)
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.index(coord).map(|i| &self.cells[i])
    }

    pub fn cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.index(coord).map(move |i| &mut self.cells[i])
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    // ------------------------------------------------------------------------
    // Mask flags
    // ------------------------------------------------------------------------

    /// Mark a cell as excluded from generation. Returns false if out of range.
    pub fn mask_cell(&mut self, coord: Coord) -> bool {
        match self.cell_mut(coord) {
            Some(cell) => {
                cell.mask();
                true
            }
            None => false,
        }
    }

    /// Flip a cell's masked flag. Returns the new flag, or `None` if out of range.
    pub fn toggle_mask(&mut self, coord: Coord) -> Option<bool> {
        let cell = self.cell_mut(coord)?;
        cell.masked = !cell.masked;
        Some(cell.masked)
    }

    pub fn is_masked(&self, coord: Coord) -> bool {
        self.cell(coord).is_some_and(|c| c.masked)
    }

    pub fn masked_coords(&self) -> BTreeSet<Coord> {
        self.cells.iter().filter(|c| c.masked).map(|c| c.coord).collect()
    }

    pub fn unmasked_coords(&self) -> Vec<Coord> {
        self.cells.iter().filter(|c| !c.masked).map(|c| c.coord).collect()
    }

    // ------------------------------------------------------------------------
    // Selection metadata
    // ------------------------------------------------------------------------

    pub fn select(&mut self, coord: Coord) -> bool {
        match self.cell_mut(coord) {
            Some(cell) => {
                cell.metadata.selected = true;
                true
            }
            None => false,
        }
    }

    pub fn is_selected(&self, coord: Coord) -> bool {
        self.cell(coord).is_some_and(|c| c.metadata.selected)
    }

    pub fn selected_coords(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .filter(|c| c.metadata.selected)
            .map(|c| c.coord)
            .collect()
    }

    pub fn clear_metadata(&mut self) {
        self.cells.iter_mut().for_each(|c| c.metadata.clear());
    }

    // ------------------------------------------------------------------------
    // Passages
    // ------------------------------------------------------------------------

    /// In-range neighbour of `coord` in `dir`
    pub fn neighbour(&self, coord: Coord, dir: Direction) -> Option<Coord> {
        coord.step(dir).filter(|c| self.contains(*c))
    }

    /// Neighbours that are in range and not masked
    pub fn unmasked_neighbours(&self, coord: Coord) -> Vec<(Direction, Coord)> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.neighbour(coord, dir).map(|n| (dir, n)))
            .filter(|(_, n)| !self.is_masked(*n))
            .collect()
    }

    /// Open the wall between `coord` and its neighbour in `dir`.
    ///
    /// Refuses (returns false) when either side is out of range or masked:
    /// masked cells are obstacles and never carry passages.
    pub fn link(&mut self, coord: Coord, dir: Direction) -> bool {
        let Some(other) = self.neighbour(coord, dir) else {
            return false;
        };
        if !self.contains(coord) || self.is_masked(coord) || self.is_masked(other) {
            return false;
        }
        if let Some(cell) = self.cell_mut(coord) {
            cell.links |= dir.bit();
        }
        if let Some(cell) = self.cell_mut(other) {
            cell.links |= dir.opposite().bit();
        }
        true
    }

    /// Link two adjacent cells; false if they are not orthogonal neighbours
    pub fn link_cells(&mut self, a: Coord, b: Coord) -> bool {
        Direction::ALL
            .into_iter()
            .find(|dir| a.step(*dir) == Some(b))
            .is_some_and(|dir| self.link(a, dir))
    }

    pub fn is_linked(&self, coord: Coord, dir: Direction) -> bool {
        self.cell(coord).is_some_and(|c| c.is_linked(dir))
    }

    /// Total number of passages (each counted once)
    pub fn link_count(&self) -> usize {
        self.cells
            .iter()
            .map(|c| {
                let east = usize::from(c.is_linked(Direction::East));
                east + usize::from(c.is_linked(Direction::South))
            })
            .sum()
    }

    /// 4-connected components of unmasked cells, each in BFS discovery order.
    /// Components are ordered by their first cell in row-major order.
    pub fn components(&self) -> Vec<Vec<Coord>> {
        let mut seen = vec![false; self.cells.len()];
        let mut components = Vec::new();

        for start in self.cells.iter().filter(|c| !c.masked).map(|c| c.coord) {
            let Some(start_idx) = self.index(start) else { continue };
            if seen[start_idx] {
                continue;
            }
            seen[start_idx] = true;

            let mut component = Vec::new();
            let mut queue = VecDeque::from([start]);
            while let Some(current) = queue.pop_front() {
                component.push(current);
                for (_, next) in self.unmasked_neighbours(current) {
                    if let Some(idx) = self.index(next) {
                        if !seen[idx] {
                            seen[idx] = true;
                            queue.push_back(next);
                        }
                    }
                }
            }
            components.push(component);
        }
        components
    }

    /// Cells reachable from `start` through open passages (including `start`)
    pub fn reachable_from(&self, start: Coord) -> BTreeSet<Coord> {
        let mut reached = BTreeSet::new();
        if !self.contains(start) {
            return reached;
        }
        let mut queue = VecDeque::from([start]);
        reached.insert(start);
        while let Some(current) = queue.pop_front() {
            for dir in Direction::ALL {
                if !self.is_linked(current, dir) {
                    continue;
                }
                if let Some(next) = self.neighbour(current, dir) {
                    if reached.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }
        reached
    }
}
