//! Seams between the game core and whatever draws it.
//!
//! The engine never renders anything itself. It reports board and status
//! changes through [`RenderBridge`] and the celebration paints itself onto a
//! [`DisplaySurface`].

use crate::celebration::Hue;
use crate::games::tictactoe::Player;
use serde::{Deserialize, Serialize};

/// Width and height of the drawable area, in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceSize {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent; y grows downward.
    pub height: f64,
}

impl SurfaceSize {
    /// Creates a surface size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Host-side view of the board and status line.
pub trait RenderBridge {
    /// Shows `mark` in the cell at `index`.
    fn set_cell_text(&mut self, index: usize, mark: Player);

    /// Blanks the cell at `index`.
    fn clear_cell(&mut self, index: usize);

    /// Turns the winning-cell highlight on or off.
    fn set_highlight(&mut self, index: usize, on: bool);

    /// Replaces the status line.
    fn set_status_message(&mut self, text: &str);

    /// Current size of the celebration surface.
    fn surface_size(&self) -> SurfaceSize;
}

/// Something particles can be painted onto.
pub trait DisplaySurface {
    /// Draws a filled circle centred at (`x`, `y`) with opacity `alpha` in `0.0..=1.0`.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Hue, alpha: f64);
}
