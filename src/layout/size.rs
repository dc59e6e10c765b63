//! Responsive size adaptation and column span mapping

use super::breakpoint::Breakpoint;
use super::config::LayoutProfile;
use crate::widget::SizeClass;

/// Compute the effective size class for a widget.
///
/// Rules, in precedence order:
/// 1. A profile with compact mode on downgrades every size one step
///    (see [`SizeClass::compacted`]), regardless of breakpoint.
/// 2. Otherwise, on the two narrowest breakpoints, `wide` and `large`
///    shrink to `medium`.
/// 3. Otherwise the declared size stands.
///
/// Total: every size has an image for every (profile, breakpoint) pair.
pub fn adapt_size(size: SizeClass, profile: &LayoutProfile, breakpoint: Breakpoint) -> SizeClass {
    if profile.theme.compact_mode {
        return size.compacted();
    }
    if breakpoint.is_narrow() && matches!(size, SizeClass::Wide | SizeClass::Large) {
        return SizeClass::Medium;
    }
    size
}

/// Columns an adapted size occupies within a budget of `max_columns`.
///
/// `wide` always fills the row; the others clamp to the budget so a size
/// class can never out-span the grid. `max_columns` comes from a validated
/// [`LayoutTable`](super::config::LayoutTable) and is therefore >= 1.
pub fn column_span(size: SizeClass, max_columns: u32) -> u32 {
    match size {
        SizeClass::Small => 1_u32.min(max_columns),
        SizeClass::Medium => 2_u32.min(max_columns),
        SizeClass::Large => 3_u32.min(max_columns),
        SizeClass::Wide => max_columns,
        SizeClass::Tall => 2_u32.min(max_columns),
    }
}
