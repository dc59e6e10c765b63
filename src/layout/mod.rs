//! Layout pipeline for the role-adaptive dashboard grid
//!
//! This module wires the stages together: visibility filtering, priority
//! ranking, responsive size adaptation, and row-major grid packing. The
//! whole pipeline is a pure function of its inputs; it is recomputed on
//! every role, permission, breakpoint, or catalog change and never holds
//! state between calls.

pub mod breakpoint;
pub mod config;
pub mod error;
pub mod filter;
pub mod packer;
pub mod priority;
pub mod size;

pub use breakpoint::Breakpoint;
pub use config::{ColumnBudget, Flow, GridConfig, LayoutProfile, LayoutTable, StyleFamily, ThemePrefs};
pub use error::ConfigError;
pub use filter::filter_widgets;
pub use packer::{pack, PlacedWidget};
pub use priority::{assign_priorities, PriorityTable, DEFAULT_PRIORITY};
pub use size::{adapt_size, column_span};

use crate::role::RoleContext;
use crate::widget::WidgetDescriptor;

/// Run the full pipeline for one viewer at one breakpoint.
///
/// Referentially transparent: identical inputs produce an identical
/// placement list, including order keys. An empty result (nothing visible)
/// is a valid layout, not an error.
pub fn compute(
    catalog: &[WidgetDescriptor],
    role: &RoleContext,
    breakpoint: Breakpoint,
    table: &LayoutTable,
    priorities: &PriorityTable,
) -> Vec<PlacedWidget> {
    let profile = table.profile(role.category);
    let max_columns = profile.grid.max_columns.get(breakpoint);

    let visible = filter_widgets(catalog, role);
    let ranked = assign_priorities(visible, role.category, priorities);
    let adapted: Vec<(&WidgetDescriptor, _)> = ranked
        .into_iter()
        .map(|(widget, _)| (widget, adapt_size(widget.size, profile, breakpoint)))
        .collect();

    pack(&adapted, max_columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::RoleCategory;
    use crate::widget::SizeClass;

    fn catalog() -> Vec<WidgetDescriptor> {
        vec![
            WidgetDescriptor::new("a", SizeClass::Wide, [RoleCategory::Admin]),
            WidgetDescriptor::new("b", SizeClass::Small, [RoleCategory::Admin]),
            WidgetDescriptor::new("c", SizeClass::Medium, [RoleCategory::Admin]),
        ]
    }

    #[test]
    fn test_pipeline_equal_priorities_keep_catalog_order() {
        let role = RoleContext::new("admin", Vec::<String>::new());
        let placed = compute(
            &catalog(),
            &role,
            Breakpoint::Lg,
            &LayoutTable::default(),
            &PriorityTable::empty(),
        );

        let ids: Vec<&str> = placed.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(placed[0].order, 0);
        assert_eq!(placed[1].order, 4);
        assert_eq!(placed[2].order, 5);
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let role = RoleContext::new("tenant_admin", ["analytics.view"]);
        let table = LayoutTable::default();
        let priorities = PriorityTable::default();

        let first = compute(&catalog(), &role, Breakpoint::Md, &table, &priorities);
        let second = compute(&catalog(), &role, Breakpoint::Md, &table, &priorities);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_visible_set_yields_empty_layout() {
        let role = RoleContext::new("viewer", Vec::<String>::new());
        let placed = compute(
            &catalog(),
            &role,
            Breakpoint::Lg,
            &LayoutTable::default(),
            &PriorityTable::default(),
        );
        assert!(placed.is_empty());
    }
}
