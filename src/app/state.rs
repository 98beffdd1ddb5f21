//! Session state - the single source of truth for the maze being configured,
//! shown or masked.

use crate::affordances::Affordances;
use crate::catalog::{Algorithm, Catalog};
use crate::constants::MAX_GRID_SIZE;
use crate::editor::MaskEditor;
use crate::error::{SessionError, SessionResult};
use crate::grid::{Coord, Grid};
use crate::mask::{Mask, MaskStore};
use crate::perf::TimingStats;
use crate::settings::Settings;
use crate::state::InteractionState;
use crate::view::View;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Session model owned by [`MazeApp`](super::MazeApp).
///
/// `grid` is exclusively owned and replaced wholesale on resize, algorithm
/// change and regeneration; only mask editing mutates it in place.
pub struct Session {
    pub(super) catalog: Catalog,
    pub(super) state: InteractionState,
    pub(super) size: usize,
    pub(super) algorithm: Algorithm,
    pub(super) grid: Grid,
    pub(super) apply_mask: bool,
    pub(super) masks: MaskStore,
    pub(super) editor: MaskEditor,
    pub(super) rng: StdRng,
    pub(super) generation_stats: TimingStats,
}

/// Comparable copy of everything the event handlers may mutate
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub state: InteractionState,
    pub size: usize,
    pub algorithm: String,
    pub apply_mask: bool,
    pub grid: Grid,
    pub masks: MaskStore,
    pub drag_anchor: Option<Coord>,
}

fn validate_size(size: usize) -> SessionResult<usize> {
    if size == 0 || size > MAX_GRID_SIZE {
        return Err(SessionError::InvalidSize(size));
    }
    Ok(size)
}

/// Range check, then membership in the picker's closed size list
pub(crate) fn catalog_size(catalog: &Catalog, size: usize) -> SessionResult<usize> {
    let size = validate_size(size)?;
    if !catalog.sizes().contains(&size) {
        return Err(SessionError::UnknownSize(size));
    }
    Ok(size)
}

impl Session {
    pub fn new(settings: &Settings) -> SessionResult<Self> {
        let catalog = settings.catalog();
        let algorithm = catalog
            .algorithm_by_name(&settings.default_algorithm)
            .cloned()
            .ok_or_else(|| SessionError::UnknownAlgorithm(settings.default_algorithm.clone()))?;
        let size = catalog_size(&catalog, settings.default_size)?;

        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut masks = MaskStore::new();
        masks.get(size);

        Ok(Self {
            catalog,
            state: InteractionState::default(),
            size,
            algorithm,
            grid: Grid::square(size),
            apply_mask: settings.apply_mask,
            masks,
            editor: MaskEditor::new(),
            rng,
            generation_stats: TimingStats::new(),
        })
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn algorithm(&self) -> &Algorithm {
        &self.algorithm
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn apply_mask(&self) -> bool {
        self.apply_mask
    }

    pub fn masks(&self) -> &MaskStore {
        &self.masks
    }

    pub fn drag_anchor(&self) -> Option<Coord> {
        self.editor.drag_anchor()
    }

    pub fn generation_stats(&self) -> &TimingStats {
        &self.generation_stats
    }

    /// Mask for the active size, created if needed
    pub fn current_mask(&mut self) -> &mut Mask {
        self.masks.get(self.size)
    }

    /// True if the active size has a non-empty saved mask
    pub fn mask_defined(&self) -> bool {
        self.masks.is_defined(self.size)
    }

    pub fn affordances(&self) -> Affordances {
        Affordances::compute(
            self.state,
            self.algorithm.maskable,
            self.mask_defined(),
            self.apply_mask,
        )
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state,
            size: self.size,
            algorithm: self.algorithm.name.clone(),
            apply_mask: self.apply_mask,
            grid: self.grid.clone(),
            masks: self.masks.clone(),
            drag_anchor: self.editor.drag_anchor(),
        }
    }

    // ------------------------------------------------------------------------
    // Shared helpers for the handlers
    // ------------------------------------------------------------------------

    /// Replace the working grid with a blank one of the active size
    pub(super) fn reset_grid(&mut self) {
        self.editor = MaskEditor::new();
        self.grid = Grid::square(self.size);
    }

    pub(super) fn render(&self, view: &mut dyn View) {
        view.render_grid(&self.grid, self.state.is_masking());
    }

    pub(super) fn refresh_affordances(&self, view: &mut dyn View) {
        self.affordances().apply(view);
    }
}
