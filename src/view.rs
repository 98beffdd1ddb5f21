//! The view contract: commands the core sends to whatever draws the UI.
//!
//! Views receive render, affordance and picker commands only; they never read or
//! mutate session state. Input flows the other way as [`UiEvent`]s.
//!
//! [`UiEvent`]: crate::events::UiEvent

use crate::grid::Grid;

/// UI controls whose affordances the core manages
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Control {
    /// Size and algorithm pickers
    MazeConfig,
    Go,
    Refresh,
    ChangeConfig,
    EditMask,
    SaveMask,
    ClearMask,
    ApplyMask,
    /// Container for the mask controls, hidden for non-maskable algorithms
    MaskingPanel,
}

pub trait View {
    /// Draw `grid`. Selected cells get a highlight only when `highlight_selection` is set.
    fn render_grid(&mut self, grid: &Grid, highlight_selection: bool);

    fn set_enabled(&mut self, control: Control, enabled: bool);

    fn set_visible(&mut self, control: Control, visible: bool);

    fn set_status_text(&mut self, text: &str);

    fn set_toggle_state(&mut self, control: Control, on: bool);

    fn set_label(&mut self, control: Control, label: &str);

    // Pickers. Options are pushed once at startup, selection on every change.

    fn add_size_option(&mut self, size: usize, label: &str);

    fn add_algorithm_option(&mut self, name: &str);

    fn set_selected_size(&mut self, size: usize);

    fn set_selected_algorithm(&mut self, name: &str);
}

/// A single command as received by [`RecordingView`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewCommand {
    RenderGrid { grid: Grid, highlight_selection: bool },
    SetEnabled(Control, bool),
    SetVisible(Control, bool),
    SetStatusText(String),
    SetToggleState(Control, bool),
    SetLabel(Control, String),
    AddSizeOption { size: usize, label: String },
    AddAlgorithmOption(String),
    SetSelectedSize(usize),
    SetSelectedAlgorithm(String),
}

/// View that stores every command it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingView {
    commands: Vec<ViewCommand>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[ViewCommand] {
        &self.commands
    }

    pub fn take(&mut self) -> Vec<ViewCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// The most recent render command, if any
    pub fn last_render(&self) -> Option<(&Grid, bool)> {
        self.commands.iter().rev().find_map(|c| match c {
            ViewCommand::RenderGrid {
                grid,
                highlight_selection,
            } => Some((grid, *highlight_selection)),
            _ => None,
        })
    }

    pub fn render_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, ViewCommand::RenderGrid { .. }))
            .count()
    }

    /// Latest enabled flag sent for `control`
    pub fn enabled(&self, control: Control) -> Option<bool> {
        self.commands.iter().rev().find_map(|c| match c {
            ViewCommand::SetEnabled(ctrl, on) if *ctrl == control => Some(*on),
            _ => None,
        })
    }

    pub fn visible(&self, control: Control) -> Option<bool> {
        self.commands.iter().rev().find_map(|c| match c {
            ViewCommand::SetVisible(ctrl, on) if *ctrl == control => Some(*on),
            _ => None,
        })
    }

    pub fn toggle_state(&self, control: Control) -> Option<bool> {
        self.commands.iter().rev().find_map(|c| match c {
            ViewCommand::SetToggleState(ctrl, on) if *ctrl == control => Some(*on),
            _ => None,
        })
    }

    pub fn label(&self, control: Control) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            ViewCommand::SetLabel(ctrl, label) if *ctrl == control => Some(label.as_str()),
            _ => None,
        })
    }

    /// Size picker entries in the order they were added
    pub fn size_options(&self) -> Vec<(usize, &str)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                ViewCommand::AddSizeOption { size, label } => Some((*size, label.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn algorithm_options(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                ViewCommand::AddAlgorithmOption(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn selected_size(&self) -> Option<usize> {
        self.commands.iter().rev().find_map(|c| match c {
            ViewCommand::SetSelectedSize(size) => Some(*size),
            _ => None,
        })
    }

    pub fn selected_algorithm(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            ViewCommand::SetSelectedAlgorithm(name) => Some(name.as_str()),
            _ => None,
        })
    }

    pub fn status_text(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            ViewCommand::SetStatusText(text) => Some(text.as_str()),
            _ => None,
        })
    }
}

impl View for RecordingView {
    fn render_grid(&mut self, grid: &Grid, highlight_selection: bool) {
        self.commands.push(ViewCommand::RenderGrid {
            grid: grid.clone(),
            highlight_selection,
        });
    }

    fn set_enabled(&mut self, control: Control, enabled: bool) {
        self.commands.push(ViewCommand::SetEnabled(control, enabled));
    }

    fn set_visible(&mut self, control: Control, visible: bool) {
        self.commands.push(ViewCommand::SetVisible(control, visible));
    }

    fn set_status_text(&mut self, text: &str) {
        self.commands.push(ViewCommand::SetStatusText(text.to_string()));
    }

    fn set_toggle_state(&mut self, control: Control, on: bool) {
        self.commands.push(ViewCommand::SetToggleState(control, on));
    }

    fn set_label(&mut self, control: Control, label: &str) {
        self.commands.push(ViewCommand::SetLabel(control, label.to_string()));
    }

    fn add_size_option(&mut self, size: usize, label: &str) {
        self.commands.push(ViewCommand::AddSizeOption {
            size,
            label: label.to_string(),
        });
    }

    fn add_algorithm_option(&mut self, name: &str) {
        self.commands.push(ViewCommand::AddAlgorithmOption(name.to_string()));
    }

    fn set_selected_size(&mut self, size: usize) {
        self.commands.push(ViewCommand::SetSelectedSize(size));
    }

    fn set_selected_algorithm(&mut self, name: &str) {
        self.commands.push(ViewCommand::SetSelectedAlgorithm(name.to_string()));
    }
}
