//! Which controls are enabled, visible and toggled for a given state.
//!
//! `Affordances::compute` is a pure function of the interaction state and the
//! session's mask flags, so pushing it to a view any number of times has the
//! same result and never touches model data.

use crate::constants::{LABEL_CREATE_MASK, LABEL_EDIT_MASK};
use crate::state::InteractionState;
use crate::view::{Control, View};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affordances {
    pub maze_config: bool,
    pub go: bool,
    pub refresh: bool,
    pub change_config: bool,
    pub edit_mask: bool,
    pub save_mask: bool,
    pub clear_mask: bool,
    pub apply_mask_enabled: bool,
    pub apply_mask_on: bool,
    pub masking_panel_visible: bool,
    pub edit_mask_label: &'static str,
    pub status_text: &'static str,
}

impl Affordances {
    pub fn compute(
        state: InteractionState,
        maskable: bool,
        mask_defined: bool,
        apply_mask: bool,
    ) -> Self {
        let idle = state.is_idle();
        Self {
            maze_config: idle,
            go: idle,
            refresh: state.is_displaying(),
            change_config: state.is_displaying(),
            edit_mask: idle && maskable,
            save_mask: state.is_masking(),
            clear_mask: state.is_masking(),
            apply_mask_enabled: idle && (mask_defined || !maskable),
            apply_mask_on: apply_mask,
            masking_panel_visible: maskable,
            edit_mask_label: if mask_defined { LABEL_EDIT_MASK } else { LABEL_CREATE_MASK },
            status_text: state.status_text(),
        }
    }

    pub fn apply(&self, view: &mut dyn View) {
        view.set_enabled(Control::MazeConfig, self.maze_config);
        view.set_enabled(Control::Go, self.go);
        view.set_enabled(Control::Refresh, self.refresh);
        view.set_enabled(Control::ChangeConfig, self.change_config);
        view.set_enabled(Control::EditMask, self.edit_mask);
        view.set_enabled(Control::SaveMask, self.save_mask);
        view.set_enabled(Control::ClearMask, self.clear_mask);
        view.set_enabled(Control::ApplyMask, self.apply_mask_enabled);
        view.set_toggle_state(Control::ApplyMask, self.apply_mask_on);
        view.set_visible(Control::MaskingPanel, self.masking_panel_visible);
        view.set_label(Control::EditMask, self.edit_mask_label);
        view.set_status_text(self.status_text);
    }
}
