//! Memoized layout recomputation
//!
//! The pipeline is cheap but the calling layer re-renders far more often
//! than its inputs change. [`LayoutCache`] keys the last computed placement
//! list by role context, breakpoint, and catalog version, and re-returns it
//! while all three are unchanged. A stale entry for an outdated permission
//! set would leak widgets the viewer can no longer see, so the key compares
//! the full role context by value and [`LayoutCache::invalidate`] exists for
//! callers that learn of a permission change out of band.

use crate::catalog::WidgetCatalog;
use crate::layout::{compute, Breakpoint, PlacedWidget};
use crate::role::RoleContext;
use crate::EngineConfig;

#[derive(Debug, Clone, PartialEq)]
struct CacheKey {
    role: RoleContext,
    breakpoint: Breakpoint,
    catalog_version: u64,
}

/// Single-entry memo of the most recent pipeline run
#[derive(Debug, Default)]
pub struct LayoutCache {
    entry: Option<(CacheKey, Vec<PlacedWidget>)>,
}

impl LayoutCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the layout for the given inputs, recomputing only when the
    /// role context, breakpoint, or catalog version changed since the last
    /// call
    pub fn layout(
        &mut self,
        catalog: &WidgetCatalog,
        role: &RoleContext,
        breakpoint: Breakpoint,
        config: &EngineConfig,
    ) -> &[PlacedWidget] {
        let key = CacheKey {
            role: role.clone(),
            breakpoint,
            catalog_version: catalog.version(),
        };

        let stale = match &self.entry {
            Some((cached_key, _)) => *cached_key != key,
            None => true,
        };
        if stale {
            let placed = compute(
                catalog.widgets(),
                role,
                breakpoint,
                config.table(),
                config.priorities(),
            );
            self.entry = Some((key, placed));
        }

        self.entry
            .as_ref()
            .map(|(_, placed)| placed.as_slice())
            .unwrap_or(&[])
    }

    /// Drop the memo; the next call recomputes unconditionally
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Whether a memoized layout is currently held
    pub fn is_primed(&self) -> bool {
        self.entry.is_some()
    }
}
