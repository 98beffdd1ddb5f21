//! Sidewinder: row-by-row runs eastward, each run closed by one passage north.

use crate::grid::{Coord, Direction, Grid};
use rand::Rng;
use rand::seq::SliceRandom;

fn open(grid: &Grid, coord: Coord, dir: Direction) -> bool {
    grid.neighbour(coord, dir).is_some_and(|n| !grid.is_masked(n))
}

pub fn generate<R: Rng + ?Sized>(mut grid: Grid, rng: &mut R) -> Grid {
    for y in 0..grid.height() {
        let mut run: Vec<Coord> = Vec::new();
        for x in 0..grid.width() {
            let coord = Coord::new(x, y);
            if grid.is_masked(coord) {
                run.clear();
                continue;
            }
            run.push(coord);

            let at_east = !open(&grid, coord, Direction::East);
            let at_north = y == 0;
            let close_run = at_east || (!at_north && rng.gen_bool(0.5));

            if close_run {
                let northward: Vec<Coord> = run
                    .iter()
                    .copied()
                    .filter(|c| open(&grid, *c, Direction::North))
                    .collect();
                if let Some(member) = northward.choose(rng) {
                    grid.link(*member, Direction::North);
                }
                run.clear();
            } else {
                grid.link(coord, Direction::East);
            }
        }
    }
    grid
}
