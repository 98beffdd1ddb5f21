//! Recursive backtracker: depth-first carving with an explicit stack.

use crate::grid::{Coord, Grid};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

pub fn generate<R: Rng + ?Sized>(mut grid: Grid, rng: &mut R) -> Grid {
    let mut visited: HashSet<Coord> = HashSet::new();

    for component in grid.components() {
        let Some(&start) = component.choose(rng) else {
            continue;
        };
        visited.insert(start);
        let mut stack = vec![start];

        while let Some(&current) = stack.last() {
            let unvisited: Vec<Coord> = grid
                .unmasked_neighbours(current)
                .into_iter()
                .map(|(_, n)| n)
                .filter(|n| !visited.contains(n))
                .collect();

            match unvisited.choose(rng) {
                Some(&next) => {
                    grid.link_cells(current, next);
                    visited.insert(next);
                    stack.push(next);
                }
                None => {
                    stack.pop();
                }
            }
        }
    }
    grid
}
