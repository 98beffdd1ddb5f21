//! Mask editing handlers - enter, save, clear, and the pointer drag.

use super::Session;
use crate::editor::MoveOutcome;
use crate::error::SessionResult;
use crate::grid::Coord;
use crate::view::View;

impl Session {
    /// Idle -> Masking. The working grid starts from the saved mask.
    /// Ignored for non-maskable algorithms.
    pub fn enter_masking(&mut self, view: &mut dyn View) -> SessionResult<()> {
        if !self.algorithm.maskable {
            tracing::trace!(algorithm = %self.algorithm.name, "masking not offered");
            return Ok(());
        }
        self.state.masking();
        self.refresh_affordances(view);

        self.reset_grid();
        let size = self.size;
        self.masks.get(size).apply_to(&mut self.grid);
        self.render(view);
        Ok(())
    }

    /// Masking -> Idle. Copies the working grid's masked cells into the saved
    /// mask for the active size; apply-mask follows whether the mask is non-empty.
    pub fn save_mask(&mut self, view: &mut dyn View) -> SessionResult<()> {
        self.editor.cancel(&mut self.grid);
        let size = self.size;
        let mask = self.masks.get(size);
        mask.set_from_grid(&self.grid);
        let saved = mask.len();
        tracing::info!(size, cells = saved, "mask saved");

        self.state.idle();
        self.reset_grid();
        self.apply_mask = saved > 0;
        self.render(view);
        self.refresh_affordances(view);
        Ok(())
    }

    /// Reset the working grid to unmasked. The saved mask is untouched until
    /// the next save.
    pub fn clear_mask(&mut self, view: &mut dyn View) -> SessionResult<()> {
        self.reset_grid();
        self.render(view);
        Ok(())
    }

    pub fn pointer_move(
        &mut self,
        x: usize,
        y: usize,
        button: bool,
        view: &mut dyn View,
    ) -> SessionResult<()> {
        match self.editor.pointer_move(&mut self.grid, Coord::new(x, y), button) {
            MoveOutcome::Ignored => {}
            MoveOutcome::Selected(range) => {
                tracing::trace!(?range, "mask selection");
                self.render(view);
            }
        }
        Ok(())
    }

    /// Drag finished: toggle the selected cells on the working grid
    pub fn pointer_move_end(&mut self, view: &mut dyn View) -> SessionResult<()> {
        let toggled = self.editor.commit(&mut self.grid);
        tracing::debug!(toggled, "mask drag committed");
        self.render(view);
        Ok(())
    }
}
