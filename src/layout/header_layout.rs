//! Pixel layout for the column header strip.
//!
//! The header strip sits above the document canvas and must stay
//! seam-aligned with the document's own column gridlines at every zoom
//! level. Widths are therefore computed cumulatively: each cell's width
//! absorbs the rounding error of everything to its left, so the running
//! total of the strip matches the rounded document geometry exactly.

use crate::error::Result;
use crate::types::{ColumnCell, ColumnDescriptor};

/// Border compensation subtracted from each converted column edge.
const BORDER_PX: i64 = 2;

/// Seam width between adjacent header cells.
const SEAM_PX: i64 = 1;

/// Initial cumulative offset: the first cell has no previous column border.
const INITIAL_OFFSET_PX: i64 = -1;

/// Rendered state of the column header strip.
///
/// Owns the ordered cell sequence and a single scroll offset applied as a
/// uniform translation to the whole strip. All mutation goes through the
/// methods here; the rendering host only ever reads `cells()` and
/// `scroll_position()`.
#[derive(Debug, Clone, Default)]
pub struct HeaderLayout {
    cells: Vec<ColumnCell>,
    scroll_x: f64,
}

impl HeaderLayout {
    /// Create an empty strip at scroll position 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered cells, left to right.
    pub fn cells(&self) -> &[ColumnCell] {
        &self.cells
    }

    /// Current scroll offset in pixels (strip origin relative to anchor).
    pub fn scroll_position(&self) -> f64 {
        self.scroll_x
    }

    /// Whether the strip currently has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Drop all rendered cells. Scroll position is unaffected.
    pub fn clear_columns(&mut self) {
        self.cells.clear();
    }

    /// Replace the rendered sequence from backend descriptors.
    ///
    /// `convert` maps a native length to pixels for the current zoom state.
    /// It is opaque to the engine and called exactly once per column.
    ///
    /// Strict: every descriptor is validated before any state changes, so a
    /// bad payload leaves the previously rendered strip intact. A strip
    /// with interior columns missing would misalign every seam after the
    /// gap, which is worse than keeping stale geometry.
    ///
    /// # Errors
    /// Returns [`crate::DocviewError::InvalidInput`] if any descriptor has
    /// a non-finite or negative native size.
    pub fn set_columns<F>(&mut self, columns: &[ColumnDescriptor], convert: F) -> Result<()>
    where
        F: Fn(f64) -> f64,
    {
        for column in columns {
            column.validate()?;
        }

        self.cells.clear();
        self.cells.reserve(columns.len());

        // First cell has no previous column border to share.
        let mut total = INITIAL_OFFSET_PX;
        for column in columns {
            let width = round_px(convert(column.size)) - BORDER_PX - total;
            self.cells.push(ColumnCell {
                size_native: column.size,
                label: column.text.clone(),
                width_px: width,
            });
            total += width + SEAM_PX;
        }
        Ok(())
    }

    /// Recompute pixel widths for the existing cells with a new converter.
    ///
    /// Used when zoom changes but the column set has not: native sizes are
    /// already stored (and validated), only the conversion moved. Runs the
    /// identical cumulative algorithm as [`Self::set_columns`], so calling
    /// either with the same converter yields the same widths.
    pub fn update_columns<F>(&mut self, convert: F)
    where
        F: Fn(f64) -> f64,
    {
        let mut total = INITIAL_OFFSET_PX;
        for cell in &mut self.cells {
            let width = round_px(convert(cell.size_native)) - BORDER_PX - total;
            cell.width_px = width;
            total += width + SEAM_PX;
        }
    }

    /// Set the absolute scroll offset. Column widths are untouched.
    pub fn set_scroll_position(&mut self, position: f64) {
        self.scroll_x = position;
    }

    /// Shift the scroll offset by `delta` pixels.
    ///
    /// Positive `delta` moves the strip left (content scrolled right).
    /// Repeated offsets compose: `offset(a); offset(b)` lands where
    /// `set_scroll_position(start - a - b)` would.
    pub fn offset_scroll_position(&mut self, delta: f64) {
        self.scroll_x -= delta;
    }
}

/// Round a converted pixel length to the integer pixel grid.
#[allow(clippy::cast_possible_truncation)]
fn round_px(value: f64) -> i64 {
    value.round() as i64
}
