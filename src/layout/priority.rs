//! Per-category widget priority ranking
//!
//! Each role category sees widgets in its own order: an admin leads with
//! revenue, an instructor with attendance. Ranks live in a static table;
//! widgets without an entry sink to the end with [`DEFAULT_PRIORITY`]
//! instead of erroring.

use std::collections::HashMap;

use crate::role::RoleCategory;
use crate::widget::WidgetDescriptor;

/// Rank assigned to widgets absent from a category's table
pub const DEFAULT_PRIORITY: u32 = 999;

/// Static per-category ranking table. Lower ranks sort first.
#[derive(Debug, Clone)]
pub struct PriorityTable {
    ranks: HashMap<RoleCategory, HashMap<String, u32>>,
}

impl PriorityTable {
    /// Empty table: every widget gets [`DEFAULT_PRIORITY`], catalog order wins
    pub fn empty() -> Self {
        Self {
            ranks: HashMap::new(),
        }
    }

    /// Set one rank, replacing any existing entry
    pub fn with_rank(mut self, category: RoleCategory, id: impl Into<String>, rank: u32) -> Self {
        self.ranks
            .entry(category)
            .or_default()
            .insert(id.into(), rank);
        self
    }

    /// Rank for a widget in a category; absent entries get [`DEFAULT_PRIORITY`]
    pub fn rank(&self, category: RoleCategory, id: &str) -> u32 {
        self.ranks
            .get(&category)
            .and_then(|table| table.get(id))
            .copied()
            .unwrap_or(DEFAULT_PRIORITY)
    }
}

impl Default for PriorityTable {
    /// Built-in ranks for the default catalog: admins lead with business
    /// metrics, instructors with attendance, staff with day-to-day actions,
    /// viewers with read-only summaries
    fn default() -> Self {
        let mut table = Self::empty();
        for (id, rank) in [
            ("revenue-analytics", 1),
            ("student-overview", 2),
            ("critical-alerts", 3),
            ("attendance-realtime", 4),
            ("quick-actions", 5),
            ("ai-insights", 6),
        ] {
            table = table.with_rank(RoleCategory::Admin, id, rank);
        }
        for (id, rank) in [
            ("attendance-realtime", 1),
            ("student-overview", 2),
            ("critical-alerts", 3),
            ("quick-actions", 4),
            ("ai-insights", 5),
            ("revenue-analytics", 6),
        ] {
            table = table.with_rank(RoleCategory::Instructor, id, rank);
        }
        for (id, rank) in [
            ("quick-actions", 1),
            ("critical-alerts", 2),
            ("attendance-realtime", 3),
            ("student-overview", 4),
            ("ai-insights", 5),
            ("revenue-analytics", 6),
        ] {
            table = table.with_rank(RoleCategory::Staff, id, rank);
        }
        for (id, rank) in [
            ("student-overview", 1),
            ("attendance-realtime", 2),
            ("ai-insights", 3),
        ] {
            table = table.with_rank(RoleCategory::Viewer, id, rank);
        }
        table
    }
}

/// Attach ranks and sort ascending.
///
/// The sort is stable: widgets with equal ranks keep their relative catalog
/// order, which is what makes the whole pipeline deterministic for unranked
/// widgets.
pub fn assign_priorities<'a>(
    widgets: Vec<&'a WidgetDescriptor>,
    category: RoleCategory,
    table: &PriorityTable,
) -> Vec<(&'a WidgetDescriptor, u32)> {
    let mut ranked: Vec<(&WidgetDescriptor, u32)> = widgets
        .into_iter()
        .map(|widget| (widget, table.rank(category, &widget.id)))
        .collect();
    ranked.sort_by_key(|(_, rank)| *rank);
    ranked
}
