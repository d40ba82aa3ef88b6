//! Terminal-side state the engine writes into.

use crate::bridge::{RenderBridge, SurfaceSize};
use crate::games::tictactoe::Mark;
use ratatui::layout::Size;
use tracing::trace;

/// Braille dots per terminal column.
const DOTS_PER_COL: f64 = 2.0;
/// Braille dots per terminal row.
const DOTS_PER_ROW: f64 = 4.0;

/// What the terminal shows: cell marks, highlights, status line, and the
/// size of the celebration canvas in braille dots.
#[derive(Debug, Clone, Default)]
pub struct TerminalView {
    cells: [Option<Mark>; 9],
    highlights: [bool; 9],
    status: String,
    surface: SurfaceSize,
}

impl TerminalView {
    /// Creates a blank view sized for a terminal of `size` cells.
    pub fn new(size: Size) -> Self {
        let mut view = Self::default();
        view.resize(size);
        view
    }

    /// Recomputes the celebration surface for a terminal of `size` cells.
    pub fn resize(&mut self, size: Size) {
        self.surface = SurfaceSize::new(
            f64::from(size.width) * DOTS_PER_COL,
            f64::from(size.height) * DOTS_PER_ROW,
        );
    }

    /// Mark shown at `index`.
    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// True if `index` is part of the winning line.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlights.get(index).copied().unwrap_or(false)
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        &self.status
    }
}

impl RenderBridge for TerminalView {
    fn set_cell_text(&mut self, index: usize, mark: Mark) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Some(mark);
        }
    }

    fn clear_cell(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = None;
        }
    }

    fn set_highlight(&mut self, index: usize, on: bool) {
        if let Some(h) = self.highlights.get_mut(index) {
            *h = on;
        }
    }

    fn set_status_message(&mut self, text: &str) {
        trace!(text, "Status");
        self.status = text.to_string();
    }

    fn surface_size(&self) -> SurfaceSize {
        self.surface
    }
}
