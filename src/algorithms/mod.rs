//! Maze generation algorithms.
//!
//! Every algorithm is a total function `generate(grid, rng) -> grid`: it takes a
//! blank grid (optionally with masked cells), carves passages and hands the grid
//! back. Masked cells are obstacles: they are never visited and never linked.
//!
//! ## Maskable vs. non-maskable
//!
//! The maskable algorithms build a spanning tree over every 4-connected
//! component of unmasked cells, so any mask shape still yields a perfect maze
//! per region. Binary Tree and Sidewinder carve with a fixed directional bias;
//! they skip masked cells but can leave regions cut off, so the catalog offers
//! no masking for them.

mod aldous_broder;
mod binary_tree;
mod hunt_and_kill;
mod recursive_backtrack;
mod sidewinder;
mod wilson;

use crate::grid::{Coord, Grid};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Identifies the generation function behind a catalog entry.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlgorithmKind {
    BinaryTree,
    Sidewinder,
    AldousBroder,
    Wilson,
    HuntAndKill,
    RecursiveBacktrack,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 6] = [
        AlgorithmKind::BinaryTree,
        AlgorithmKind::Sidewinder,
        AlgorithmKind::AldousBroder,
        AlgorithmKind::Wilson,
        AlgorithmKind::HuntAndKill,
        AlgorithmKind::RecursiveBacktrack,
    ];

    /// Display name shown in the algorithm picker
    pub fn display_name(self) -> &'static str {
        match self {
            AlgorithmKind::BinaryTree => "Binary Tree",
            AlgorithmKind::Sidewinder => "Sidewinder",
            AlgorithmKind::AldousBroder => "Aldous Broder",
            AlgorithmKind::Wilson => "Wilson",
            AlgorithmKind::HuntAndKill => "Hunt and Kill",
            AlgorithmKind::RecursiveBacktrack => "Recursive Backtrack",
        }
    }

    /// Whether the algorithm produces a perfect maze around arbitrary masks
    pub fn is_maskable(self) -> bool {
        !matches!(self, AlgorithmKind::BinaryTree | AlgorithmKind::Sidewinder)
    }

    pub fn generate<R: Rng + ?Sized>(self, grid: Grid, rng: &mut R) -> Grid {
        match self {
            AlgorithmKind::BinaryTree => binary_tree::generate(grid, rng),
            AlgorithmKind::Sidewinder => sidewinder::generate(grid, rng),
            AlgorithmKind::AldousBroder => aldous_broder::generate(grid, rng),
            AlgorithmKind::Wilson => wilson::generate(grid, rng),
            AlgorithmKind::HuntAndKill => hunt_and_kill::generate(grid, rng),
            AlgorithmKind::RecursiveBacktrack => recursive_backtrack::generate(grid, rng),
        }
    }
}

/// Random unmasked neighbour of `coord`, if any
fn random_neighbour<R: Rng + ?Sized>(grid: &Grid, coord: Coord, rng: &mut R) -> Option<Coord> {
    grid.unmasked_neighbours(coord)
        .choose(rng)
        .map(|(_, n)| *n)
}
