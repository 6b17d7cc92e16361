//! Dashboard data types.

use serde::{Deserialize, Serialize};

/// Direction of a stat's change since the previous reporting snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// The figure went up.
    Up,
    /// The figure went down.
    Down,
    /// The figure is unchanged.
    Neutral,
}

/// Value carried by a stat card: a plain count or a preformatted figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    /// A record count.
    Count(usize),
    /// A preformatted figure such as `85%`.
    Text(String),
}

impl std::fmt::Display for StatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One summary entry on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatCard {
    /// Display label.
    pub label: String,
    /// Current value.
    pub value: StatValue,
    /// Change annotation shown next to the value.
    pub change: String,
    /// Trend direction for the change annotation.
    pub trend: Trend,
}
