//! Configuration handlers - size, algorithm, apply-mask toggle, viewport resize.

use super::Session;
use super::state::catalog_size;
use crate::catalog::Catalog;
use crate::error::{SessionError, SessionResult};
use crate::view::{Control, View};

impl Session {
    /// Fill the size and algorithm pickers from the catalog and mark the
    /// active selection.
    pub(super) fn populate_pickers(&self, view: &mut dyn View) {
        for &size in self.catalog.sizes() {
            view.add_size_option(size, &Catalog::size_label(size));
        }
        for algorithm in self.catalog.algorithms() {
            view.add_algorithm_option(&algorithm.name);
        }
        view.set_selected_size(self.size);
        view.set_selected_algorithm(&self.algorithm.name);
    }

    /// Switch to a new grid size from the catalog. The new size's mask is
    /// created if needed; masks of other sizes are left untouched.
    pub fn select_size(&mut self, size: usize, view: &mut dyn View) -> SessionResult<()> {
        let size = catalog_size(&self.catalog, size).inspect_err(|e| {
            tracing::error!(size, "{e}");
        })?;
        self.size = size;
        self.masks.get(size);
        self.reset_grid();
        tracing::debug!(size, "maze size selected");
        view.set_selected_size(size);

        self.render(view);
        self.refresh_affordances(view);
        Ok(())
    }

    /// Switch algorithm by catalog name.
    ///
    /// An unknown name is a contract violation: the action is aborted with
    /// [`SessionError::UnknownAlgorithm`] and nothing changes.
    pub fn select_algorithm(&mut self, name: &str, view: &mut dyn View) -> SessionResult<()> {
        let Some(algorithm) = self.catalog.algorithm_by_name(name).cloned() else {
            tracing::error!(name, "algorithm not in catalog");
            return Err(SessionError::UnknownAlgorithm(name.to_string()));
        };
        tracing::debug!(name, maskable = algorithm.maskable, "algorithm selected");
        self.algorithm = algorithm;
        self.reset_grid();
        view.set_selected_algorithm(&self.algorithm.name);

        self.render(view);
        self.refresh_affordances(view);
        Ok(())
    }

    /// Flip the apply-mask flag. Generation ignores it for non-maskable algorithms.
    pub fn toggle_apply_mask(&mut self, view: &mut dyn View) -> SessionResult<()> {
        self.apply_mask = !self.apply_mask;
        view.set_toggle_state(Control::ApplyMask, self.apply_mask);
        Ok(())
    }

    /// Viewport changed: redraw what is there
    pub fn resize(&mut self, view: &mut dyn View) -> SessionResult<()> {
        self.render(view);
        Ok(())
    }
}
