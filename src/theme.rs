//! Widget background theme resolution
//!
//! Each role category's style family maps to three named intensity slots
//! that the rendering layer uses to pick a widget's background treatment.
//! Purely cosmetic: nothing here affects filtering, ordering, or packing.

use std::fmt;

use crate::layout::config::{LayoutTable, StyleFamily};
use crate::role::RoleCategory;

/// Background intensity a widget is drawn at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleIntensity {
    /// Subtle translucent background for supporting widgets
    Ambient,
    /// Emphasized translucent background for primary widgets
    Focus,
    /// High-contrast treatment for alert-type widgets
    Critical,
    /// Opaque background with hard borders
    Solid,
}

impl StyleIntensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleIntensity::Ambient => "ambient",
            StyleIntensity::Focus => "focus",
            StyleIntensity::Critical => "critical",
            StyleIntensity::Solid => "solid",
        }
    }
}

impl fmt::Display for StyleIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved theme for one role category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetTheme {
    /// Slot for primary widgets
    pub primary: StyleIntensity,
    /// Slot for secondary widgets
    pub secondary: StyleIntensity,
    /// Slot for critical/alert widgets
    pub critical: StyleIntensity,
    pub animations: bool,
    pub compact_mode: bool,
}

/// Resolve the three intensity slots for a category.
///
/// Fixed family map: glass renders everything translucent with a dedicated
/// critical treatment, solid renders everything opaque, mixed keeps glass
/// primaries but solid criticals. Total function, no failure path.
pub fn resolve_theme(category: RoleCategory, table: &LayoutTable) -> WidgetTheme {
    let prefs = &table.profile(category).theme;
    let (primary, secondary, critical) = match prefs.style {
        StyleFamily::Glass => (
            StyleIntensity::Focus,
            StyleIntensity::Ambient,
            StyleIntensity::Critical,
        ),
        StyleFamily::Solid => (
            StyleIntensity::Solid,
            StyleIntensity::Solid,
            StyleIntensity::Solid,
        ),
        StyleFamily::Mixed => (
            StyleIntensity::Focus,
            StyleIntensity::Ambient,
            StyleIntensity::Solid,
        ),
    };
    WidgetTheme {
        primary,
        secondary,
        critical,
        animations: prefs.animations,
        compact_mode: prefs.compact_mode,
    }
}
