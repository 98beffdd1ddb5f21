//! Plain-text maze drawing.
//!
//! ```text
//! +---+---+
//! |   |###|
//! +   +---+
//! | *     |
//! +---+---+
//! ```
//!
//! Masked cells are filled with `###`. Selected cells show ` * ` only when the
//! caller asks for the selection highlight (mask editing).

use crate::grid::{Coord, Direction, Grid};

const BODY_OPEN: &str = "   ";
const BODY_MASKED: &str = "###";
const BODY_SELECTED: &str = " * ";
const WALL_H: &str = "---";

pub fn render(grid: &Grid, highlight_selection: bool) -> String {
    let mut out = String::with_capacity((grid.width() * 4 + 2) * (grid.height() * 2 + 1));

    out.push('+');
    for _ in 0..grid.width() {
        out.push_str(WALL_H);
        out.push('+');
    }
    out.push('\n');

    for y in 0..grid.height() {
        let mut body = String::from("|");
        let mut floor = String::from("+");
        for x in 0..grid.width() {
            let coord = Coord::new(x, y);
            let cell_body = if grid.is_masked(coord) {
                BODY_MASKED
            } else if highlight_selection && grid.is_selected(coord) {
                BODY_SELECTED
            } else {
                BODY_OPEN
            };
            body.push_str(cell_body);
            body.push(if grid.is_linked(coord, Direction::East) { ' ' } else { '|' });

            let floor_body = if grid.is_linked(coord, Direction::South) {
                BODY_OPEN
            } else {
                WALL_H
            };
            floor.push_str(floor_body);
            floor.push('+');
        }
        out.push_str(&body);
        out.push('\n');
        out.push_str(&floor);
        out.push('\n');
    }
    out
}
