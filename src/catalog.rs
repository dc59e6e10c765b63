//! Widget catalog registry
//!
//! The catalog is assembled once at application configuration time, either
//! in code or from a TOML file, and is read-only afterwards. Registration
//! order is significant: it is the tiebreak order for widgets with equal
//! priority, so the catalog preserves it exactly.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::role::RoleCategory;
use crate::widget::{SizeClass, WidgetDescriptor};

/// Errors that can occur when building or loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read a catalog file
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse catalog TOML
    #[error("failed to parse catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two widgets with the same identifier
    #[error("duplicate widget id '{id}'")]
    Duplicate { id: String },

    /// Unrecognized size class in a catalog file
    #[error("widget '{id}': unknown size class '{value}'")]
    UnknownSizeClass { id: String, value: String },

    /// Unrecognized role category in a catalog file
    #[error("widget '{id}': unknown role category '{value}'")]
    UnknownRoleCategory { id: String, value: String },
}

/// Insertion-ordered registry of widget descriptors
#[derive(Debug, Clone, Default)]
pub struct WidgetCatalog {
    widgets: Vec<WidgetDescriptor>,
    ids: HashSet<String>,
    version: u64,
}

impl WidgetCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in academy dashboard catalog: six widgets covering revenue,
    /// alerts, students, attendance, shortcuts, and insights
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        let widgets = [
            WidgetDescriptor::new(
                "revenue-analytics",
                SizeClass::Medium,
                [RoleCategory::Admin],
            )
            .with_permissions(["payments.read", "analytics.view"])
            .with_title("Revenue analytics")
            .with_subtitle("Live revenue summary")
            .with_icon("chart-bar"),
            WidgetDescriptor::new(
                "critical-alerts",
                SizeClass::Small,
                [
                    RoleCategory::Admin,
                    RoleCategory::Instructor,
                    RoleCategory::Staff,
                ],
            )
            .with_title("Critical alerts")
            .with_subtitle("Needs immediate attention")
            .with_icon("exclamation-triangle"),
            WidgetDescriptor::new(
                "student-overview",
                SizeClass::Medium,
                [RoleCategory::Admin, RoleCategory::Instructor],
            )
            .with_permissions(["students.read"])
            .with_title("Student overview")
            .with_subtitle("Enrollment at a glance")
            .with_icon("user-group"),
            WidgetDescriptor::new(
                "attendance-realtime",
                SizeClass::Wide,
                [
                    RoleCategory::Admin,
                    RoleCategory::Instructor,
                    RoleCategory::Staff,
                ],
            )
            .with_permissions(["attendance.read"])
            .with_title("Live attendance")
            .with_subtitle("Today's check-ins by class")
            .with_icon("clock"),
            WidgetDescriptor::new(
                "quick-actions",
                SizeClass::Medium,
                [
                    RoleCategory::Admin,
                    RoleCategory::Instructor,
                    RoleCategory::Staff,
                ],
            )
            .with_title("Quick actions")
            .with_subtitle("Frequent tasks")
            .with_icon("cog"),
            WidgetDescriptor::new(
                "ai-insights",
                SizeClass::Wide,
                [RoleCategory::Admin, RoleCategory::Instructor],
            )
            .with_permissions(["analytics.view"])
            .with_title("AI insights")
            .with_subtitle("Automated analysis")
            .with_icon("sparkles"),
        ];
        for widget in widgets {
            catalog
                .register(widget)
                .expect("builtin catalog ids are unique");
        }
        catalog
    }

    /// Load a catalog from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a catalog from a TOML string with `[[widgets]]` entries
    pub fn from_str(content: &str) -> Result<Self, CatalogError> {
        let parsed: TomlCatalog = toml::from_str(content)?;

        let mut catalog = Self::new();
        for entry in parsed.widgets {
            catalog.register(entry.into_descriptor()?)?;
        }
        Ok(catalog)
    }

    /// Register a descriptor, rejecting duplicate ids
    pub fn register(&mut self, widget: WidgetDescriptor) -> Result<(), CatalogError> {
        if self.ids.contains(&widget.id) {
            return Err(CatalogError::Duplicate {
                id: widget.id.clone(),
            });
        }
        self.ids.insert(widget.id.clone());
        self.widgets.push(widget);
        self.version += 1;
        Ok(())
    }

    /// Get a descriptor by id
    pub fn get(&self, id: &str) -> Option<&WidgetDescriptor> {
        self.widgets.iter().find(|w| w.id == id)
    }

    /// Check whether an id is registered
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Descriptors in registration order
    pub fn widgets(&self) -> &[WidgetDescriptor] {
        &self.widgets
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Monotonic version, bumped on every registration.
    ///
    /// Callers memoizing layout output key it by this value together with
    /// the role context and breakpoint (see [`crate::cache::LayoutCache`]).
    pub fn version(&self) -> u64 {
        self.version
    }
}

/// TOML structure for deserializing catalog files
#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    widgets: Vec<TomlWidget>,
}

#[derive(Deserialize)]
struct TomlWidget {
    id: String,
    size: String,
    roles: Vec<String>,
    #[serde(default)]
    permissions: Vec<String>,
    title: Option<String>,
    subtitle: Option<String>,
    icon: Option<String>,
}

impl TomlWidget {
    fn into_descriptor(self) -> Result<WidgetDescriptor, CatalogError> {
        let size: SizeClass =
            self.size
                .parse()
                .map_err(|_| CatalogError::UnknownSizeClass {
                    id: self.id.clone(),
                    value: self.size.clone(),
                })?;

        let mut roles = Vec::new();
        for role in &self.roles {
            let category: RoleCategory =
                role.parse()
                    .map_err(|_| CatalogError::UnknownRoleCategory {
                        id: self.id.clone(),
                        value: role.clone(),
                    })?;
            roles.push(category);
        }

        let mut widget =
            WidgetDescriptor::new(self.id, size, roles).with_permissions(self.permissions);
        if let Some(title) = self.title {
            widget = widget.with_title(title);
        }
        if let Some(subtitle) = self.subtitle {
            widget = widget.with_subtitle(subtitle);
        }
        if let Some(icon) = self.icon {
            widget = widget.with_icon(icon);
        }
        Ok(widget)
    }
}
