//! Session modes: three time budgets and three word-count budgets.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionMode {
    #[serde(rename = "30s")]
    Time30,
    #[serde(rename = "60s")]
    Time60,
    #[serde(rename = "120s")]
    Time120,
    #[serde(rename = "30")]
    Words30,
    #[serde(rename = "50")]
    Words50,
    #[serde(rename = "100")]
    Words100,
}

/// What ends a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    Time(Duration),
    Words(u32),
}

impl SessionMode {
    pub const ALL: [SessionMode; 6] = [
        SessionMode::Time30,
        SessionMode::Time60,
        SessionMode::Time120,
        SessionMode::Words30,
        SessionMode::Words50,
        SessionMode::Words100,
    ];

    pub fn budget(self) -> Budget {
        match self {
            Self::Time30 => Budget::Time(Duration::from_secs(30)),
            Self::Time60 => Budget::Time(Duration::from_secs(60)),
            Self::Time120 => Budget::Time(Duration::from_secs(120)),
            Self::Words30 => Budget::Words(30),
            Self::Words50 => Budget::Words(50),
            Self::Words100 => Budget::Words(100),
        }
    }

    pub fn is_time_boxed(self) -> bool {
        matches!(self.budget(), Budget::Time(_))
    }

    /// Identifier used in settings files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Time30 => "30s",
            Self::Time60 => "60s",
            Self::Time120 => "120s",
            Self::Words30 => "30",
            Self::Words50 => "50",
            Self::Words100 => "100",
        }
    }

    /// Label shown in the mode picker and on the result screen.
    pub fn label(self) -> &'static str {
        match self {
            Self::Time30 => "30秒",
            Self::Time60 => "60秒",
            Self::Time120 => "120秒",
            Self::Words30 => "30語",
            Self::Words50 => "50語",
            Self::Words100 => "100語",
        }
    }

    /// Next mode in picker order, wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&m| m == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

impl Default for SessionMode {
    fn default() -> Self {
        Self::Time60
    }
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown session mode {0:?} (expected one of 30s, 60s, 120s, 30, 50, 100)")]
pub struct ParseModeError(pub String);

impl FromStr for SessionMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}
