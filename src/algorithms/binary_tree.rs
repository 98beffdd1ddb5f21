//! Binary Tree: every cell carves north or east.

use crate::grid::{Direction, Grid};
use rand::Rng;
use rand::seq::SliceRandom;

pub fn generate<R: Rng + ?Sized>(mut grid: Grid, rng: &mut R) -> Grid {
    let coords = grid.unmasked_coords();
    for coord in coords {
        let candidates: Vec<Direction> = [Direction::North, Direction::East]
            .into_iter()
            .filter(|dir| {
                grid.neighbour(coord, *dir)
                    .is_some_and(|n| !grid.is_masked(n))
            })
            .collect();
        if let Some(dir) = candidates.choose(rng) {
            grid.link(coord, *dir);
        }
    }
    grid
}
