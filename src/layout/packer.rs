//! Row-major grid packing
//!
//! Single pass, no backtracking: widgets arrive already sorted by priority
//! and are placed left to right, wrapping to a fresh row when the current
//! one cannot hold the next span. Rows grow without bound; no widget is
//! ever dropped for lack of space.

use super::size::column_span;
use crate::widget::{SizeClass, WidgetDescriptor};

/// A widget with its resolved grid placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWidget {
    /// Catalog identifier
    pub id: String,
    /// Effective size class after responsive adaptation
    pub size: SizeClass,
    /// Columns occupied, 1..=max_columns
    pub col_span: u32,
    /// Row-major address key: `row * max_columns + col`.
    ///
    /// Used by the rendering layer as a CSS order value. The sequence has
    /// gaps and changes with `max_columns` across breakpoints; consumers
    /// compare magnitudes, so it must not be renumbered into a dense
    /// 0..n-1 sequence.
    pub order: u32,
}

impl PlacedWidget {
    /// Row index this placement landed in
    pub fn row(&self, max_columns: u32) -> u32 {
        self.order / max_columns
    }

    /// Column index this placement starts at
    pub fn col(&self, max_columns: u32) -> u32 {
        self.order % max_columns
    }
}

/// Pack priority-ordered widgets into a grid `max_columns` wide.
///
/// `max_columns` comes from a validated layout table and is always >= 1;
/// a zero budget is rejected at configuration-load time, never here.
pub fn pack(widgets: &[(&WidgetDescriptor, SizeClass)], max_columns: u32) -> Vec<PlacedWidget> {
    let mut current_row = 0_u32;
    let mut current_col = 0_u32;

    widgets
        .iter()
        .map(|(widget, adapted)| {
            let span = column_span(*adapted, max_columns);
            if current_col + span > max_columns {
                current_row += 1;
                current_col = 0;
            }
            let order = current_row * max_columns + current_col;
            current_col += span;

            PlacedWidget {
                id: widget.id.clone(),
                size: *adapted,
                col_span: span,
                order,
            }
        })
        .collect()
}
