//! Error types for layout configuration loading
//!
//! The layout pipeline itself is infallible: every lookup has a documented
//! default. Errors only arise when configuration is loaded, and they are
//! rejected there so packing never sees a bad column budget.

use thiserror::Error;

use super::breakpoint::Breakpoint;
use crate::role::RoleCategory;

/// Errors that can occur when loading or validating layout configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file
    #[error("failed to read layout config file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse configuration TOML
    #[error("failed to parse layout config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A column budget that would make packing undefined
    #[error("max columns for {category}/{breakpoint} must be at least 1, got {value}")]
    InvalidColumnBudget {
        category: RoleCategory,
        breakpoint: Breakpoint,
        value: u32,
    },

    /// Unrecognized style family name in an override file
    #[error("unknown style family '{value}' for category {category}")]
    UnknownStyleFamily {
        category: RoleCategory,
        value: String,
    },

    /// Unrecognized packing flow name in an override file
    #[error("unknown packing flow '{value}' for category {category}")]
    UnknownFlow {
        category: RoleCategory,
        value: String,
    },
}

impl ConfigError {
    /// Create an invalid column budget error
    pub fn invalid_columns(category: RoleCategory, breakpoint: Breakpoint, value: u32) -> Self {
        Self::InvalidColumnBudget {
            category,
            breakpoint,
            value,
        }
    }

    /// Create an unknown style family error
    pub fn unknown_style(category: RoleCategory, value: impl Into<String>) -> Self {
        Self::UnknownStyleFamily {
            category,
            value: value.into(),
        }
    }

    /// Create an unknown flow error
    pub fn unknown_flow(category: RoleCategory, value: impl Into<String>) -> Self {
        Self::UnknownFlow {
            category,
            value: value.into(),
        }
    }
}
