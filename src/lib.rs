//! Dash Grid - role-adaptive dashboard widget layout engine
//!
//! Given a widget catalog, a viewer's role context, and the current viewport
//! breakpoint, the engine decides which widgets are visible, in what order,
//! at what size, and at what grid position. It is a pure pipeline (filter,
//! rank, adapt, pack) recomputed on every role or viewport change, with no
//! internal state and no failure path.
//!
//! # Example
//!
//! ```rust
//! use dash_grid::{layout, Breakpoint, RoleContext, WidgetCatalog};
//!
//! let catalog = WidgetCatalog::builtin();
//! let role = RoleContext::new("tenant_admin", ["attendance.read", "analytics.view"]);
//!
//! let placed = layout(catalog.widgets(), &role, Breakpoint::Lg);
//! assert!(!placed.is_empty());
//! assert!(placed.iter().all(|p| p.col_span <= 4));
//! ```

pub mod cache;
pub mod catalog;
pub mod layout;
pub mod role;
pub mod theme;
pub mod widget;

pub use cache::LayoutCache;
pub use catalog::{CatalogError, WidgetCatalog};
pub use layout::{Breakpoint, ConfigError, LayoutTable, PlacedWidget, PriorityTable};
pub use role::{RoleCategory, RoleContext};
pub use theme::{resolve_theme, StyleIntensity, WidgetTheme};
pub use widget::{SizeClass, WidgetDescriptor};

/// Configuration for the layout pipeline: the per-category layout table and
/// the per-category priority ranks
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    table: LayoutTable,
    priorities: PriorityTable,
}

impl EngineConfig {
    /// Create a configuration with the built-in defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the layout table (validate tables built in code first)
    pub fn with_table(mut self, table: LayoutTable) -> Self {
        self.table = table;
        self
    }

    /// Replace the priority table
    pub fn with_priorities(mut self, priorities: PriorityTable) -> Self {
        self.priorities = priorities;
        self
    }

    /// The active layout table
    pub fn table(&self) -> &LayoutTable {
        &self.table
    }

    /// The active priority table
    pub fn priorities(&self) -> &PriorityTable {
        &self.priorities
    }
}

/// Lay out a catalog for one viewer at one breakpoint with default
/// configuration.
///
/// This is the main entry point for the library. Identical inputs always
/// produce an identical placement list; an empty list is a valid layout.
pub fn layout(
    catalog: &[WidgetDescriptor],
    role: &RoleContext,
    breakpoint: Breakpoint,
) -> Vec<PlacedWidget> {
    layout_with_config(catalog, role, breakpoint, &EngineConfig::default())
}

/// Lay out a catalog with custom layout and priority tables
///
/// # Example
///
/// ```rust
/// use dash_grid::{layout_with_config, Breakpoint, EngineConfig, LayoutTable, RoleContext, WidgetCatalog};
///
/// let table = LayoutTable::from_str("[staff]\ncompact_mode = false").unwrap();
/// let config = EngineConfig::new().with_table(table);
///
/// let catalog = WidgetCatalog::builtin();
/// let role = RoleContext::new("staff", ["attendance.read"]);
/// let placed = layout_with_config(catalog.widgets(), &role, Breakpoint::Md, &config);
/// assert!(!placed.is_empty());
/// ```
pub fn layout_with_config(
    catalog: &[WidgetDescriptor],
    role: &RoleContext,
    breakpoint: Breakpoint,
    config: &EngineConfig,
) -> Vec<PlacedWidget> {
    layout::compute(catalog, role, breakpoint, &config.table, &config.priorities)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_role() -> RoleContext {
        RoleContext::new(
            "tenant_admin",
            [
                "students.read",
                "attendance.read",
                "payments.read",
                "analytics.view",
            ],
        )
    }

    #[test]
    fn test_layout_builtin_catalog_for_admin() {
        let catalog = WidgetCatalog::builtin();
        let placed = layout(catalog.widgets(), &admin_role(), Breakpoint::Lg);

        // Admin with full grants sees the whole catalog
        assert_eq!(placed.len(), 6);
        // Ordered by the admin priority table
        let ids: Vec<&str> = placed.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "revenue-analytics",
                "student-overview",
                "critical-alerts",
                "attendance-realtime",
                "quick-actions",
                "ai-insights"
            ]
        );
    }

    #[test]
    fn test_layout_respects_column_budget() {
        let catalog = WidgetCatalog::builtin();
        let table = LayoutTable::default();
        for breakpoint in Breakpoint::ALL {
            let placed = layout(catalog.widgets(), &admin_role(), breakpoint);
            let budget = table.max_columns(RoleCategory::Admin, breakpoint);
            for p in &placed {
                assert!(p.col_span >= 1 && p.col_span <= budget);
            }
        }
    }

    #[test]
    fn test_layout_with_custom_priorities() {
        let catalog = WidgetCatalog::builtin();
        let priorities = PriorityTable::empty().with_rank(RoleCategory::Admin, "ai-insights", 0);
        let config = EngineConfig::new().with_priorities(priorities);

        let placed =
            layout_with_config(catalog.widgets(), &admin_role(), Breakpoint::Lg, &config);
        assert_eq!(placed[0].id, "ai-insights");
    }

    #[test]
    fn test_viewer_sees_nothing_from_builtin_catalog() {
        // No builtin widget admits the viewer category; a valid empty layout
        let catalog = WidgetCatalog::builtin();
        let role = RoleContext::new("readonly_auditor", ["students.read"]);
        let placed = layout(catalog.widgets(), &role, Breakpoint::Lg);
        assert!(placed.is_empty());
    }
}
