//! Widget catalog entries
//!
//! A [`WidgetDescriptor`] is an immutable catalog entry created at
//! application configuration time. The engine reads its size class and
//! visibility gates; title, subtitle, and icon are opaque metadata passed
//! through to the rendering layer.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::role::RoleCategory;

/// Declared widget size class, before responsive adaptation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
    Wide,
    Tall,
}

impl SizeClass {
    /// One-step compaction used when a role profile enables compact mode.
    ///
    /// `Small` is the fixed point: compacting twice equals compacting once.
    pub fn compacted(self) -> SizeClass {
        match self {
            SizeClass::Wide => SizeClass::Large,
            SizeClass::Large => SizeClass::Medium,
            SizeClass::Medium => SizeClass::Small,
            SizeClass::Tall => SizeClass::Medium,
            SizeClass::Small => SizeClass::Small,
        }
    }

    /// Stable lowercase name, also used in catalog files
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
            SizeClass::Wide => "wide",
            SizeClass::Tall => "tall",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(SizeClass::Small),
            "medium" => Ok(SizeClass::Medium),
            "large" => Ok(SizeClass::Large),
            "wide" => Ok(SizeClass::Wide),
            "tall" => Ok(SizeClass::Tall),
            other => Err(format!("unknown size class '{other}'")),
        }
    }
}

/// An immutable dashboard widget catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetDescriptor {
    /// Unique, stable identifier
    pub id: String,
    /// Declared size class; may be adapted down at layout time
    pub size: SizeClass,
    /// Role categories allowed to see this widget
    pub allowed_roles: HashSet<RoleCategory>,
    /// Permission gate: empty means ungated; otherwise the viewer needs
    /// at least one of these grants (any-of, not all-of)
    pub required_permissions: HashSet<String>,
    /// Display title (opaque to the engine)
    pub title: String,
    /// Optional display subtitle
    pub subtitle: Option<String>,
    /// Optional icon token for the rendering layer
    pub icon: Option<String>,
}

impl WidgetDescriptor {
    /// Create a descriptor visible to the given role categories
    pub fn new(
        id: impl Into<String>,
        size: SizeClass,
        allowed_roles: impl IntoIterator<Item = RoleCategory>,
    ) -> Self {
        let id = id.into();
        Self {
            title: id.clone(),
            id,
            size,
            allowed_roles: allowed_roles.into_iter().collect(),
            required_permissions: HashSet::new(),
            subtitle: None,
            icon: None,
        }
    }

    /// Gate this widget behind permissions (any-of match)
    pub fn with_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_permissions = permissions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the display title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the display subtitle
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the icon token
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compaction_one_step() {
        assert_eq!(SizeClass::Wide.compacted(), SizeClass::Large);
        assert_eq!(SizeClass::Large.compacted(), SizeClass::Medium);
        assert_eq!(SizeClass::Medium.compacted(), SizeClass::Small);
        assert_eq!(SizeClass::Tall.compacted(), SizeClass::Medium);
        assert_eq!(SizeClass::Small.compacted(), SizeClass::Small);
    }

    #[test]
    fn test_compaction_reaches_small_fixed_point() {
        for size in [
            SizeClass::Small,
            SizeClass::Medium,
            SizeClass::Large,
            SizeClass::Wide,
            SizeClass::Tall,
        ] {
            let mut current = size;
            for _ in 0..4 {
                current = current.compacted();
            }
            assert_eq!(current, SizeClass::Small);
        }
    }

    #[test]
    fn test_size_class_round_trip() {
        for size in ["small", "medium", "large", "wide", "tall"] {
            let parsed: SizeClass = size.parse().expect("known size class");
            assert_eq!(parsed.as_str(), size);
        }
        assert!("extra-wide".parse::<SizeClass>().is_err());
    }

    #[test]
    fn test_descriptor_builder() {
        let widget = WidgetDescriptor::new(
            "revenue-analytics",
            SizeClass::Medium,
            [RoleCategory::Admin],
        )
        .with_permissions(["payments.read", "analytics.view"])
        .with_title("Revenue analytics")
        .with_subtitle("Live revenue summary")
        .with_icon("chart-bar");

        assert_eq!(widget.id, "revenue-analytics");
        assert!(widget.allowed_roles.contains(&RoleCategory::Admin));
        assert_eq!(widget.required_permissions.len(), 2);
        assert_eq!(widget.subtitle.as_deref(), Some("Live revenue summary"));
    }

    #[test]
    fn test_descriptor_defaults_title_to_id() {
        let widget = WidgetDescriptor::new("quick-actions", SizeClass::Medium, RoleCategory::ALL);
        assert_eq!(widget.title, "quick-actions");
        assert!(widget.required_permissions.is_empty());
    }
}
