//! Generation handlers - go, refresh, reconfigure.

use super::Session;
use crate::constants::GENERATION_WARN_MS;
use crate::error::SessionResult;
use crate::grid::Grid;
use crate::profile_scope;
use crate::view::View;
use std::time::Instant;

impl Session {
    /// Blank grid for the active size, with the saved mask applied when the
    /// algorithm is maskable and apply-mask is on.
    pub fn prepare_grid(&mut self) -> Grid {
        let mut grid = Grid::square(self.size);
        if self.algorithm.maskable && self.apply_mask {
            self.current_mask().apply_to(&mut grid);
        }
        grid
    }

    /// Build a fresh maze and make it the working grid
    pub(super) fn generate(&mut self, view: &mut dyn View) {
        profile_scope!("generate", GENERATION_WARN_MS);

        let grid = self.prepare_grid();
        let masked = grid.masked_coords().len();
        let started = Instant::now();
        self.grid = self.algorithm.kind.generate(grid, &mut self.rng);
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        self.generation_stats.record(elapsed_ms);

        tracing::info!(
            size = self.size,
            algorithm = %self.algorithm.name,
            masked,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            history = %self.generation_stats,
            "maze generated"
        );
        self.render(view);
    }

    /// Idle -> Displaying
    pub fn go(&mut self, view: &mut dyn View) -> SessionResult<()> {
        self.generate(view);
        self.state.displaying();
        self.refresh_affordances(view);
        Ok(())
    }

    /// New maze with the same configuration; state unchanged
    pub fn refresh(&mut self, view: &mut dyn View) -> SessionResult<()> {
        self.generate(view);
        Ok(())
    }

    /// Displaying -> Idle, with a blank grid
    pub fn reconfigure(&mut self, view: &mut dyn View) -> SessionResult<()> {
        self.reset_grid();
        self.render(view);
        self.state.idle();
        self.refresh_affordances(view);
        Ok(())
    }
}
