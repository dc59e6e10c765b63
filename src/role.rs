//! Role categories and the viewer's role context
//!
//! Raw role names come from the permission subsystem as free-form strings
//! ("tenant_admin", "senior_instructor", ...). The engine reduces them to one
//! of four fixed categories via an ordered substring rule list; everything
//! downstream (layout profiles, priorities, themes) is keyed by category.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// One of the four fixed role categories driving layout and theme selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleCategory {
    Admin,
    Instructor,
    Staff,
    Viewer,
}

/// Ordered inference rules: the first rule whose token list matches wins.
///
/// Order matters: "admin_staff" must resolve to Admin, not Staff. New rules
/// go in precedence position, not at the end.
const CATEGORY_RULES: &[(&[&str], RoleCategory)] = &[
    (&["admin", "manager"], RoleCategory::Admin),
    (&["instructor", "teacher"], RoleCategory::Instructor),
    (&["staff"], RoleCategory::Staff),
    (&["viewer", "readonly"], RoleCategory::Viewer),
];

impl RoleCategory {
    /// All categories, in precedence order
    pub const ALL: [RoleCategory; 4] = [
        RoleCategory::Admin,
        RoleCategory::Instructor,
        RoleCategory::Staff,
        RoleCategory::Viewer,
    ];

    /// Infer a category from a raw role name.
    ///
    /// Case-insensitive substring match against the ordered rule list; the
    /// first matching rule wins. Unrecognized names fall back to `Staff`.
    /// Total: never fails, never allocates beyond the lowercased copy.
    pub fn infer(role_name: &str) -> RoleCategory {
        let name = role_name.to_lowercase();
        for (tokens, category) in CATEGORY_RULES {
            if tokens.iter().any(|token| name.contains(token)) {
                return *category;
            }
        }
        RoleCategory::Staff
    }

    /// Stable lowercase name, also used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleCategory::Admin => "admin",
            RoleCategory::Instructor => "instructor",
            RoleCategory::Staff => "staff",
            RoleCategory::Viewer => "viewer",
        }
    }
}

impl fmt::Display for RoleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleCategory {
    type Err = String;

    /// Strict parse of a category name (configuration files, CLI).
    /// For free-form role names use [`RoleCategory::infer`] instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(RoleCategory::Admin),
            "instructor" => Ok(RoleCategory::Instructor),
            "staff" => Ok(RoleCategory::Staff),
            "viewer" => Ok(RoleCategory::Viewer),
            other => Err(format!("unknown role category '{other}'")),
        }
    }
}

/// Per-viewer role context supplied by the permission subsystem.
///
/// The engine never caches this across calls; every recomputation receives
/// the current value. `PartialEq` is derived so callers can use the whole
/// context as a memo fingerprint (see [`crate::cache::LayoutCache`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleContext {
    /// Raw role name as stored by the permission subsystem
    pub role_name: String,
    /// Category derived from the role name at construction
    pub category: RoleCategory,
    /// Granted permission strings, e.g. "students.read"
    pub permissions: HashSet<String>,
    /// Position in the role hierarchy; carried for the permission
    /// subsystem's benefit, not read by the layout pipeline
    pub hierarchy_level: u8,
}

impl RoleContext {
    /// Build a context from a raw role name and granted permissions,
    /// deriving the category
    pub fn new<I, S>(role_name: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let role_name = role_name.into();
        let category = RoleCategory::infer(&role_name);
        Self {
            role_name,
            category,
            permissions: permissions.into_iter().map(Into::into).collect(),
            hierarchy_level: 1,
        }
    }

    /// Set the hierarchy level reported by the permission subsystem
    pub fn with_hierarchy_level(mut self, level: u8) -> Self {
        self.hierarchy_level = level;
        self
    }

    /// Check a single permission grant
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }
}

impl Default for RoleContext {
    /// Fallback context used when no authenticated profile is available:
    /// plain staff with no permission grants
    fn default() -> Self {
        Self::new("staff", Vec::<String>::new())
    }
}
