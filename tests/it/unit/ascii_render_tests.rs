//! Unit tests for the text renderer against generated mazes.

use mazemask::algorithms::AlgorithmKind;
use mazemask::grid::{Coord, Grid};
use mazemask::render::ascii;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_dimensions() {
    let grid = Grid::square(7);
    let text = ascii::render(&grid, false);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2 * 7 + 1);
    assert!(lines.iter().all(|l| l.len() == 4 * 7 + 1));
}

#[test]
fn test_every_passage_is_one_gap() {
    let mut rng = StdRng::seed_from_u64(3);
    let grid = AlgorithmKind::Wilson.generate(Grid::square(6), &mut rng);
    let text = ascii::render(&grid, false);
    let lines: Vec<&str> = text.lines().collect();

    // Odd lines are cell bodies, even lines (after the top border) are floors
    let east_gaps: usize = lines
        .iter()
        .skip(1)
        .step_by(2)
        .map(|body| (1..6).filter(|x| body.as_bytes()[4 * x] == b' ').count())
        .sum();
    let south_gaps: usize = lines
        .iter()
        .skip(2)
        .step_by(2)
        .map(|floor| floor.matches("   +").count())
        .sum();

    assert_eq!(east_gaps + south_gaps, grid.link_count());
    assert_eq!(grid.link_count(), 6 * 6 - 1);
}

#[test]
fn test_masked_cells_render_filled() {
    let mut grid = Grid::square(3);
    grid.mask_cell(Coord::new(1, 1));
    let text = ascii::render(&grid, false);
    assert_eq!(text.matches("###").count(), 1);
    assert_eq!(text.lines().nth(3), Some("|   |###|   |"));
}
