//! Wilson's algorithm: loop-erased random walks into the growing tree.

use super::random_neighbour;
use crate::grid::{Coord, Grid};
use rand::Rng;
use std::collections::HashMap;

/// Coordinate set with O(1) insert, remove and uniform random pick
struct Pool {
    items: Vec<Coord>,
    slots: HashMap<Coord, usize>,
}

impl Pool {
    fn new(items: Vec<Coord>) -> Self {
        let slots = items.iter().enumerate().map(|(i, c)| (*c, i)).collect();
        Self { items, slots }
    }

    fn contains(&self, coord: Coord) -> bool {
        self.slots.contains_key(&coord)
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn remove(&mut self, coord: Coord) {
        let Some(slot) = self.slots.remove(&coord) else {
            return;
        };
        self.items.swap_remove(slot);
        if let Some(moved) = self.items.get(slot) {
            self.slots.insert(*moved, slot);
        }
    }

    fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Coord> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.items[rng.gen_range(0..self.items.len())])
    }
}

pub fn generate<R: Rng + ?Sized>(mut grid: Grid, rng: &mut R) -> Grid {
    for component in grid.components() {
        let mut unvisited = Pool::new(component);
        if let Some(seed) = unvisited.pick(rng) {
            unvisited.remove(seed);
        }

        while !unvisited.is_empty() {
            let Some(start) = unvisited.pick(rng) else {
                break;
            };
            let mut path = vec![start];
            let mut current = start;

            while unvisited.contains(current) {
                let Some(next) = random_neighbour(&grid, current, rng) else {
                    break;
                };
                match path.iter().position(|c| *c == next) {
                    Some(loop_start) => path.truncate(loop_start + 1),
                    None => path.push(next),
                }
                current = next;
            }

            for pair in path.windows(2) {
                grid.link_cells(pair[0], pair[1]);
            }
            for coord in &path {
                unvisited.remove(*coord);
            }
        }
    }
    grid
}
