//! Per-role-category layout configuration
//!
//! Each role category gets a static [`LayoutProfile`]: a grid section (column
//! budget per breakpoint, gutter, packing flow) and theme preferences (style
//! family, animations, compact mode). The built-in defaults can be overridden
//! by a deployment TOML file; overrides are merged over the defaults and the
//! result is validated before the engine ever packs with it.

use std::path::Path;

use serde::Deserialize;

use super::breakpoint::Breakpoint;
use super::error::ConfigError;
use crate::role::RoleCategory;

/// Maximum grid columns available at each breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnBudget {
    pub xs: u32,
    pub sm: u32,
    pub md: u32,
    pub lg: u32,
    pub xl: u32,
    pub xxl: u32,
}

impl ColumnBudget {
    pub const fn new(xs: u32, sm: u32, md: u32, lg: u32, xl: u32, xxl: u32) -> Self {
        Self {
            xs,
            sm,
            md,
            lg,
            xl,
            xxl,
        }
    }

    /// Column count for a breakpoint
    pub fn get(&self, breakpoint: Breakpoint) -> u32 {
        match breakpoint {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
            Breakpoint::Xxl => self.xxl,
        }
    }
}

/// Packing flow direction, passed through to the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Row,
    Column,
    Dense,
}

impl Flow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flow::Row => "row",
            Flow::Column => "column",
            Flow::Dense => "dense",
        }
    }

    fn parse(s: &str) -> Option<Flow> {
        match s {
            "row" => Some(Flow::Row),
            "column" => Some(Flow::Column),
            "dense" => Some(Flow::Dense),
            _ => None,
        }
    }
}

/// Visual style family a category's widgets are drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleFamily {
    Glass,
    Solid,
    Mixed,
}

impl StyleFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleFamily::Glass => "glass",
            StyleFamily::Solid => "solid",
            StyleFamily::Mixed => "mixed",
        }
    }

    fn parse(s: &str) -> Option<StyleFamily> {
        match s {
            "glass" => Some(StyleFamily::Glass),
            "solid" => Some(StyleFamily::Solid),
            "mixed" => Some(StyleFamily::Mixed),
            _ => None,
        }
    }
}

/// Grid parameters for one role category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
    pub max_columns: ColumnBudget,
    /// Gutter between widgets, in pixels
    pub gap: u32,
    pub flow: Flow,
}

/// Theme preferences for one role category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePrefs {
    pub style: StyleFamily,
    pub animations: bool,
    pub compact_mode: bool,
}

/// Complete layout configuration for one role category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutProfile {
    pub grid: GridConfig,
    pub theme: ThemePrefs,
}

/// Static table of layout profiles, one per role category.
///
/// Lookup is total: the table always holds a profile for every category, so
/// no call can miss. Read-only at runtime; construct (and validate) once at
/// startup and pass by reference into the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutTable {
    pub admin: LayoutProfile,
    pub instructor: LayoutProfile,
    pub staff: LayoutProfile,
    pub viewer: LayoutProfile,
}

impl Default for LayoutTable {
    fn default() -> Self {
        Self {
            admin: LayoutProfile {
                grid: GridConfig {
                    max_columns: ColumnBudget::new(1, 2, 3, 4, 6, 8),
                    gap: 24,
                    flow: Flow::Row,
                },
                theme: ThemePrefs {
                    style: StyleFamily::Mixed,
                    animations: true,
                    compact_mode: false,
                },
            },
            instructor: LayoutProfile {
                grid: GridConfig {
                    max_columns: ColumnBudget::new(1, 2, 2, 3, 4, 6),
                    gap: 20,
                    flow: Flow::Row,
                },
                theme: ThemePrefs {
                    style: StyleFamily::Glass,
                    animations: true,
                    compact_mode: false,
                },
            },
            staff: LayoutProfile {
                grid: GridConfig {
                    max_columns: ColumnBudget::new(1, 2, 2, 3, 4, 4),
                    gap: 16,
                    flow: Flow::Row,
                },
                theme: ThemePrefs {
                    style: StyleFamily::Solid,
                    animations: false,
                    compact_mode: true,
                },
            },
            viewer: LayoutProfile {
                grid: GridConfig {
                    max_columns: ColumnBudget::new(1, 2, 2, 2, 3, 3),
                    gap: 12,
                    flow: Flow::Row,
                },
                theme: ThemePrefs {
                    style: StyleFamily::Solid,
                    animations: false,
                    compact_mode: true,
                },
            },
        }
    }
}

impl LayoutTable {
    /// Load the default table with deployment overrides from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load the default table with deployment overrides from a TOML string.
    ///
    /// Every section and key is optional; anything absent keeps its default.
    /// The merged table is validated before it is returned.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let overrides: TomlTable = toml::from_str(content)?;

        let mut table = Self::default();
        apply_overrides(&mut table.admin, overrides.admin, RoleCategory::Admin)?;
        apply_overrides(
            &mut table.instructor,
            overrides.instructor,
            RoleCategory::Instructor,
        )?;
        apply_overrides(&mut table.staff, overrides.staff, RoleCategory::Staff)?;
        apply_overrides(&mut table.viewer, overrides.viewer, RoleCategory::Viewer)?;

        table.validate()?;
        Ok(table)
    }

    /// Profile for a category; total, never misses
    pub fn profile(&self, category: RoleCategory) -> &LayoutProfile {
        match category {
            RoleCategory::Admin => &self.admin,
            RoleCategory::Instructor => &self.instructor,
            RoleCategory::Staff => &self.staff,
            RoleCategory::Viewer => &self.viewer,
        }
    }

    /// Column budget for a category at a breakpoint
    pub fn max_columns(&self, category: RoleCategory, breakpoint: Breakpoint) -> u32 {
        self.profile(category).grid.max_columns.get(breakpoint)
    }

    /// Reject column budgets that would make packing undefined.
    ///
    /// Runs automatically in `from_str`; call it directly on tables built in
    /// code before handing them to the pipeline.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for category in RoleCategory::ALL {
            let budget = &self.profile(category).grid.max_columns;
            for breakpoint in Breakpoint::ALL {
                let value = budget.get(breakpoint);
                if value == 0 {
                    return Err(ConfigError::invalid_columns(category, breakpoint, value));
                }
            }
        }
        Ok(())
    }
}

/// TOML structure for deserializing override files
#[derive(Deserialize, Default)]
struct TomlTable {
    admin: Option<TomlProfile>,
    instructor: Option<TomlProfile>,
    staff: Option<TomlProfile>,
    viewer: Option<TomlProfile>,
}

#[derive(Deserialize)]
struct TomlProfile {
    max_columns: Option<TomlColumns>,
    gap: Option<u32>,
    flow: Option<String>,
    style: Option<String>,
    animations: Option<bool>,
    compact_mode: Option<bool>,
}

#[derive(Deserialize)]
struct TomlColumns {
    xs: Option<u32>,
    sm: Option<u32>,
    md: Option<u32>,
    lg: Option<u32>,
    xl: Option<u32>,
    #[serde(rename = "2xl")]
    xxl: Option<u32>,
}

fn apply_overrides(
    profile: &mut LayoutProfile,
    overrides: Option<TomlProfile>,
    category: RoleCategory,
) -> Result<(), ConfigError> {
    let Some(overrides) = overrides else {
        return Ok(());
    };

    if let Some(columns) = overrides.max_columns {
        let budget = &mut profile.grid.max_columns;
        budget.xs = columns.xs.unwrap_or(budget.xs);
        budget.sm = columns.sm.unwrap_or(budget.sm);
        budget.md = columns.md.unwrap_or(budget.md);
        budget.lg = columns.lg.unwrap_or(budget.lg);
        budget.xl = columns.xl.unwrap_or(budget.xl);
        budget.xxl = columns.xxl.unwrap_or(budget.xxl);
    }
    if let Some(gap) = overrides.gap {
        profile.grid.gap = gap;
    }
    if let Some(flow) = overrides.flow {
        profile.grid.flow =
            Flow::parse(&flow).ok_or_else(|| ConfigError::unknown_flow(category, flow))?;
    }
    if let Some(style) = overrides.style {
        profile.theme.style =
            StyleFamily::parse(&style).ok_or_else(|| ConfigError::unknown_style(category, style))?;
    }
    if let Some(animations) = overrides.animations {
        profile.theme.animations = animations;
    }
    if let Some(compact_mode) = overrides.compact_mode {
        profile.theme.compact_mode = compact_mode;
    }
    Ok(())
}
