//! Hunt-and-Kill: random walk until stuck, then hunt for an unvisited cell
//! bordering the visited area.

use crate::grid::{Coord, Grid};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

fn hunt<R: Rng + ?Sized>(
    grid: &Grid,
    visited: &HashSet<Coord>,
    rng: &mut R,
) -> Option<(Coord, Option<Coord>)> {
    let mut fresh_region = None;
    for coord in grid.unmasked_coords() {
        if visited.contains(&coord) {
            continue;
        }
        let visited_neighbours: Vec<Coord> = grid
            .unmasked_neighbours(coord)
            .into_iter()
            .map(|(_, n)| n)
            .filter(|n| visited.contains(n))
            .collect();
        if let Some(anchor) = visited_neighbours.choose(rng) {
            return Some((coord, Some(*anchor)));
        }
        fresh_region.get_or_insert(coord);
    }
    // Nothing borders the visited area: start over in an untouched region.
    fresh_region.map(|coord| (coord, None))
}

pub fn generate<R: Rng + ?Sized>(mut grid: Grid, rng: &mut R) -> Grid {
    let Some(&start) = grid.unmasked_coords().choose(rng) else {
        return grid;
    };
    let mut visited = HashSet::from([start]);
    let mut current = start;

    loop {
        let unvisited: Vec<Coord> = grid
            .unmasked_neighbours(current)
            .into_iter()
            .map(|(_, n)| n)
            .filter(|n| !visited.contains(n))
            .collect();

        if let Some(&next) = unvisited.choose(rng) {
            grid.link_cells(current, next);
            visited.insert(next);
            current = next;
            continue;
        }

        match hunt(&grid, &visited, rng) {
            Some((found, anchor)) => {
                if let Some(anchor) = anchor {
                    grid.link_cells(found, anchor);
                }
                visited.insert(found);
                current = found;
            }
            None => break,
        }
    }
    grid
}
