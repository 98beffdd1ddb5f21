//! Aldous-Broder: an unbiased random walk that links on first visit.

use super::random_neighbour;
use crate::grid::Grid;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

pub fn generate<R: Rng + ?Sized>(mut grid: Grid, rng: &mut R) -> Grid {
    for component in grid.components() {
        let Some(&start) = component.choose(rng) else {
            continue;
        };
        let mut visited = HashSet::from([start]);
        let mut current = start;

        while visited.len() < component.len() {
            // Walk never leaves the component: neighbours are unmasked and adjacent.
            let Some(next) = random_neighbour(&grid, current, rng) else {
                break;
            };
            if visited.insert(next) {
                grid.link_cells(current, next);
            }
            current = next;
        }
    }
    grid
}
