//! The closed set of focus keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Business vertical a visitor has chosen to focus on.
///
/// The set is closed: a value outside it cannot be constructed, so storage
/// can only ever be written with a valid key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FocusKey {
    /// CRM builds and integrations
    Crm,
    /// Golf course tee sheet software
    TeeSheet,
    /// AI, machine learning and automation
    AiMl,
    /// Websites and web applications
    Web,
    /// Overview across every service line
    AllSolutions,
}

impl FocusKey {
    /// All focus keys, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Crm,
        Self::TeeSheet,
        Self::AiMl,
        Self::Web,
        Self::AllSolutions,
    ];

    /// Returns the persisted identifier (e.g. `"tee-sheet"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Crm => "crm",
            Self::TeeSheet => "tee-sheet",
            Self::AiMl => "ai-ml",
            Self::Web => "web",
            Self::AllSolutions => "all-solutions",
        }
    }

    /// Human-readable label for pickers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Crm => "CRM",
            Self::TeeSheet => "Tee Sheet",
            Self::AiMl => "AI & ML",
            Self::Web => "Web",
            Self::AllSolutions => "All Solutions",
        }
    }
}

impl fmt::Display for FocusKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not exactly one of the focus identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown focus '{0}' (expected one of: crm, tee-sheet, ai-ml, web, all-solutions)")]
pub struct UnknownFocusKey(pub String);

impl FromStr for FocusKey {
    type Err = UnknownFocusKey;

    /// Parses an exact identifier; no trimming or case folding, because
    /// anything else read back from storage counts as corrupt.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownFocusKey(s.to_string()))
    }
}
