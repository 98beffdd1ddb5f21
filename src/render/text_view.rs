//! Terminal view: prints the maze and control state as plain text.

use super::ascii;
use crate::grid::Grid;
use crate::view::{Control, View};
use std::collections::HashMap;
use std::io::Write;

/// [`View`] that writes to any `Write` sink (stdout in the binary).
///
/// Affordance commands are cached; `controls_summary` lists what is currently
/// enabled so the command line can show available actions.
pub struct TextView<W: Write> {
    out: W,
    enabled: HashMap<Control, bool>,
    visible: HashMap<Control, bool>,
    toggles: HashMap<Control, bool>,
    labels: HashMap<Control, String>,
    status: String,
    size_options: Vec<(usize, String)>,
    algorithm_options: Vec<String>,
    selected_size: Option<usize>,
    selected_algorithm: Option<String>,
}

impl<W: Write> TextView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            enabled: HashMap::new(),
            visible: HashMap::new(),
            toggles: HashMap::new(),
            labels: HashMap::new(),
            status: String::new(),
            size_options: Vec::new(),
            algorithm_options: Vec::new(),
            selected_size: None,
            selected_algorithm: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_enabled(&self, control: Control) -> bool {
        let visible = self.visible.get(&control).copied().unwrap_or(true);
        visible && self.enabled.get(&control).copied().unwrap_or(false)
    }

    /// Command words for the currently enabled controls
    pub fn controls_summary(&self) -> String {
        let entries = [
            (Control::MazeConfig, "size/algorithm"),
            (Control::Go, "go"),
            (Control::Refresh, "refresh"),
            (Control::ChangeConfig, "config"),
            (Control::EditMask, "mask"),
            (Control::SaveMask, "save"),
            (Control::ClearMask, "clear"),
            (Control::ApplyMask, "apply"),
        ];
        let mut words: Vec<&str> = entries
            .iter()
            .filter(|(control, _)| self.is_enabled(*control))
            .map(|(_, word)| *word)
            .collect();
        if self.is_enabled(Control::SaveMask) {
            words.push("drag");
        }
        words.join(", ")
    }

    /// Current picker selection, e.g. `20x20 Recursive Backtrack`
    pub fn selection_summary(&self) -> String {
        let size = self.selected_size.map(|selected| {
            self.size_options
                .iter()
                .find(|(size, _)| *size == selected)
                .map_or_else(|| selected.to_string(), |(_, label)| label.clone())
        });
        [size, self.selected_algorithm.clone()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Picker entries, one line per picker
    pub fn picker_options(&self) -> String {
        let sizes: Vec<&str> = self.size_options.iter().map(|(_, l)| l.as_str()).collect();
        format!(
            "sizes: {}\nalgorithms: {}",
            sizes.join(" "),
            self.algorithm_options.join(", ")
        )
    }

    fn write_block(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> View for TextView<W> {
    fn render_grid(&mut self, grid: &Grid, highlight_selection: bool) {
        let mut text = ascii::render(grid, highlight_selection);
        if let Some(label) = self.labels.get(&Control::EditMask) {
            if self.is_enabled(Control::EditMask) {
                text.push_str(&format!("[{}]\n", label));
            }
        }
        if self.is_enabled(Control::ApplyMask) {
            let on = self.toggles.get(&Control::ApplyMask).copied().unwrap_or(false);
            text.push_str(&format!("apply mask: {}\n", if on { "on" } else { "off" }));
        }
        self.write_block(&text);
    }

    fn set_enabled(&mut self, control: Control, enabled: bool) {
        self.enabled.insert(control, enabled);
    }

    fn set_visible(&mut self, control: Control, visible: bool) {
        // Hiding the panel hides every mask control inside it.
        if control == Control::MaskingPanel {
            for inner in [Control::EditMask, Control::SaveMask, Control::ClearMask] {
                self.visible.insert(inner, visible);
            }
        }
        self.visible.insert(control, visible);
    }

    fn set_status_text(&mut self, text: &str) {
        if self.status != text {
            self.status = text.to_string();
            if !text.is_empty() {
                self.write_block(&format!("{}\n", text));
            }
        }
    }

    fn set_toggle_state(&mut self, control: Control, on: bool) {
        self.toggles.insert(control, on);
    }

    fn set_label(&mut self, control: Control, label: &str) {
        self.labels.insert(control, label.to_string());
    }

    fn add_size_option(&mut self, size: usize, label: &str) {
        self.size_options.push((size, label.to_string()));
    }

    fn add_algorithm_option(&mut self, name: &str) {
        self.algorithm_options.push(name.to_string());
    }

    fn set_selected_size(&mut self, size: usize) {
        self.selected_size = Some(size);
    }

    fn set_selected_algorithm(&mut self, name: &str) {
        self.selected_algorithm = Some(name.to_string());
    }
}
