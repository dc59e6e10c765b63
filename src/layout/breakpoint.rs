//! Viewport breakpoint classes
//!
//! Six ordered width classes supplied by the viewport-detection collaborator.
//! The engine only ever reads the current value; watching for resize events
//! (and debouncing them) is the calling layer's job.

use std::fmt;
use std::str::FromStr;

/// One of six ordered viewport classes, narrowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    /// All breakpoints, narrowest first
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    /// Classify a viewport width in pixels.
    ///
    /// Thresholds: 640, 768, 1024, 1280, 1536.
    pub fn from_width(px: u32) -> Breakpoint {
        match px {
            0..=639 => Breakpoint::Xs,
            640..=767 => Breakpoint::Sm,
            768..=1023 => Breakpoint::Md,
            1024..=1279 => Breakpoint::Lg,
            1280..=1535 => Breakpoint::Xl,
            _ => Breakpoint::Xxl,
        }
    }

    /// True for the two narrowest classes, where oversized widgets are
    /// downgraded even outside compact mode
    pub fn is_narrow(&self) -> bool {
        *self <= Breakpoint::Sm
    }

    /// Stable name, also used in configuration files ("xs" .. "2xl")
    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xs" => Ok(Breakpoint::Xs),
            "sm" => Ok(Breakpoint::Sm),
            "md" => Ok(Breakpoint::Md),
            "lg" => Ok(Breakpoint::Lg),
            "xl" => Ok(Breakpoint::Xl),
            "2xl" | "xxl" => Ok(Breakpoint::Xxl),
            other => Err(format!("unknown breakpoint '{other}'")),
        }
    }
}
