//! End-to-end tests for the layout pipeline
//!
//! Covers the visibility rules, priority ordering, responsive adaptation,
//! and packing invariants over whole-pipeline runs rather than single
//! stages.

use std::collections::HashMap;

use pretty_assertions::assert_eq;

use dash_grid::{
    layout, layout_with_config, Breakpoint, EngineConfig, LayoutTable, PlacedWidget,
    PriorityTable, RoleCategory, RoleContext, SizeClass, WidgetCatalog, WidgetDescriptor,
};

fn shared_catalog() -> Vec<WidgetDescriptor> {
    // Three widgets visible to both admin and staff, no permission gates
    let roles = [RoleCategory::Admin, RoleCategory::Staff];
    vec![
        WidgetDescriptor::new("a", SizeClass::Wide, roles),
        WidgetDescriptor::new("b", SizeClass::Small, roles),
        WidgetDescriptor::new("c", SizeClass::Medium, roles),
    ]
}

fn full_admin() -> RoleContext {
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

fn row_spans(placed: &[PlacedWidget], max_columns: u32) -> HashMap<u32, u32> {
    let mut rows = HashMap::new();
    for p in placed {
        *rows.entry(p.row(max_columns)).or_insert(0) += p.col_span;
    }
    rows
}

#[test]
fn test_wide_fills_row_then_wraps() {
    // Admin at lg has a 4-column budget and no compaction: the wide widget
    // takes the whole first row, the rest continue on the next
    let role = RoleContext::new("admin", Vec::<String>::new());
    let config = EngineConfig::new().with_priorities(PriorityTable::empty());

    let placed = layout_with_config(&shared_catalog(), &role, Breakpoint::Lg, &config);

    let summary: Vec<(&str, u32, u32)> = placed
        .iter()
        .map(|p| (p.id.as_str(), p.col_span, p.order))
        .collect();
    assert_eq!(summary, [("a", 4, 0), ("b", 1, 4), ("c", 2, 5)]);
}

#[test]
fn test_compact_mode_changes_spans_and_rows() {
    // The same catalog under the compact staff profile: the wide widget
    // downgrades one step and no longer fills the whole budget on its own
    let role = RoleContext::new("staff", Vec::<String>::new());
    let config = EngineConfig::new().with_priorities(PriorityTable::empty());

    let placed = layout_with_config(&shared_catalog(), &role, Breakpoint::Lg, &config);

    let summary: Vec<(&str, SizeClass, u32, u32)> = placed
        .iter()
        .map(|p| (p.id.as_str(), p.size, p.col_span, p.order))
        .collect();
    // staff/lg budget is 3; wide -> large spans all 3, small and medium
    // compact to span 1 each on the second row
    assert_eq!(
        summary,
        [
            ("a", SizeClass::Large, 3, 0),
            ("b", SizeClass::Small, 1, 3),
            ("c", SizeClass::Small, 1, 4),
        ]
    );
}

#[test]
fn test_disallowed_category_never_appears() {
    let catalog = vec![WidgetDescriptor::new(
        "admin-only",
        SizeClass::Small,
        [RoleCategory::Admin],
    )];
    let instructor = RoleContext::new("instructor", ["students.read", "analytics.view"]);

    for breakpoint in Breakpoint::ALL {
        assert!(layout(&catalog, &instructor, breakpoint).is_empty());
    }
}

#[test]
fn test_any_of_permission_gate() {
    // Holding one of the two listed permissions is sufficient
    let catalog = vec![WidgetDescriptor::new(
        "revenue",
        SizeClass::Medium,
        [RoleCategory::Admin],
    )
    .with_permissions(["payments.read", "analytics.view"])];

    let holder = RoleContext::new("admin", ["analytics.view"]);
    assert_eq!(layout(&catalog, &holder, Breakpoint::Lg).len(), 1);

    let non_holder = RoleContext::new("admin", ["students.read"]);
    assert!(layout(&catalog, &non_holder, Breakpoint::Lg).is_empty());
}

#[test]
fn test_unrecognized_role_gets_staff_layout() {
    let role = RoleContext::new("night_janitor", Vec::<String>::new());
    assert_eq!(role.category, RoleCategory::Staff);

    let catalog = vec![WidgetDescriptor::new(
        "alerts",
        SizeClass::Wide,
        [RoleCategory::Staff],
    )];
    let placed = layout(&catalog, &role, Breakpoint::Md);

    // Packed under the staff profile: compact mode downgrades wide to
    // large, clamped to the 2-column md budget
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].size, SizeClass::Large);
    assert_eq!(placed[0].col_span, 2);
}

#[test]
fn test_no_row_exceeds_budget_anywhere() {
    let catalog = WidgetCatalog::builtin();
    let table = LayoutTable::default();
    let role = full_admin();

    for breakpoint in Breakpoint::ALL {
        let placed = layout(catalog.widgets(), &role, breakpoint);
        let budget = table.max_columns(role.category, breakpoint);
        for (row, total) in row_spans(&placed, budget) {
            assert!(
                total <= budget,
                "row {row} at {breakpoint} holds {total} of {budget} columns"
            );
        }
    }
}

#[test]
fn test_every_span_within_budget() {
    let catalog = WidgetCatalog::builtin();
    let table = LayoutTable::default();

    for category in RoleCategory::ALL {
        let role = RoleContext::new(
            category.as_str(),
            [
                "students.read",
                "attendance.read",
                "payments.read",
                "analytics.view",
            ],
        );
        for breakpoint in Breakpoint::ALL {
            let budget = table.max_columns(category, breakpoint);
            for p in layout(catalog.widgets(), &role, breakpoint) {
                assert!(p.col_span >= 1);
                assert!(p.col_span <= budget);
            }
        }
    }
}

#[test]
fn test_output_is_subset_of_catalog() {
    let catalog = WidgetCatalog::builtin();
    let role = RoleContext::new("instructor", ["attendance.read"]);

    for p in layout(catalog.widgets(), &role, Breakpoint::Lg) {
        assert!(catalog.contains(&p.id));
    }
}

#[test]
fn test_identical_inputs_identical_output() {
    let catalog = WidgetCatalog::builtin();
    let role = full_admin();
    let config = EngineConfig::new();

    let first = layout_with_config(catalog.widgets(), &role, Breakpoint::Xl, &config);
    let second = layout_with_config(catalog.widgets(), &role, Breakpoint::Xl, &config);
    assert_eq!(first, second);
}

#[test]
fn test_order_keys_strictly_increase() {
    // Placement order follows priority order; address keys never collide
    let catalog = WidgetCatalog::builtin();
    let placed = layout(catalog.widgets(), &full_admin(), Breakpoint::Xxl);

    for pair in placed.windows(2) {
        assert!(pair[0].order < pair[1].order);
    }
}

#[test]
fn test_order_keys_shift_with_breakpoint() {
    // The address key scales with the column budget; consumers must not
    // expect a dense 0..n sequence
    let catalog = WidgetCatalog::builtin();
    let role = full_admin();

    let lg = layout(catalog.widgets(), &role, Breakpoint::Lg);
    let xxl = layout(catalog.widgets(), &role, Breakpoint::Xxl);

    let lg_orders: Vec<u32> = lg.iter().map(|p| p.order).collect();
    let xxl_orders: Vec<u32> = xxl.iter().map(|p| p.order).collect();
    assert_ne!(lg_orders, xxl_orders);
}

#[test]
fn test_priority_tiebreak_keeps_catalog_order() {
    let roles = [RoleCategory::Admin];
    let catalog = vec![
        WidgetDescriptor::new("third", SizeClass::Small, roles),
        WidgetDescriptor::new("first", SizeClass::Small, roles),
        WidgetDescriptor::new("second", SizeClass::Small, roles),
    ];
    let role = RoleContext::new("admin", Vec::<String>::new());
    let config = EngineConfig::new().with_priorities(PriorityTable::empty());

    let placed = layout_with_config(&catalog, &role, Breakpoint::Lg, &config);
    let ids: Vec<&str> = placed.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["third", "first", "second"]);
}

#[test]
fn test_unranked_widget_sinks_to_end() {
    let catalog = {
        let mut c = WidgetCatalog::builtin();
        c.register(WidgetDescriptor::new(
            "announcements",
            SizeClass::Small,
            [RoleCategory::Admin],
        ))
        .expect("unique id");
        c
    };

    let placed = layout(catalog.widgets(), &full_admin(), Breakpoint::Lg);
    assert_eq!(placed.last().map(|p| p.id.as_str()), Some("announcements"));
}
