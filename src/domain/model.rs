use crate::utils::error::{MediatorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The built-in colleague variants. Each maps to one `Reaction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColleagueKind {
    Desktop,
    Mobile,
}

impl ColleagueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for ColleagueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColleagueKind {
    type Err = MediatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "mobile" => Ok(Self::Mobile),
            other => Err(MediatorError::construction(format!(
                "unknown colleague kind '{}' (expected desktop or mobile)",
                other
            ))),
        }
    }
}

/// What `add_colleague` does when the same colleague is registered again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationPolicy {
    /// Append again; the colleague then receives each broadcast once per entry.
    #[default]
    #[serde(rename = "allow")]
    AllowDuplicates,
    #[serde(rename = "reject")]
    Reject,
}

/// What a broadcast does when a receiver fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryPolicy {
    /// Attempt every receiver, then report all failures together.
    #[default]
    #[serde(rename = "collect")]
    CollectErrors,
    /// Stop at the first failing receiver.
    #[serde(rename = "fail_fast")]
    FailFast,
}

/// Outcome of a successful broadcast.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeliveryReport {
    pub originator: String,
    pub message: String,
    /// Receiver names in delivery order. A name appears once per registry entry.
    pub delivered: Vec<String>,
    /// Registry entries skipped because they are the originator.
    pub skipped_originator: usize,
    /// Registry entries whose colleague has been dropped.
    pub stale: usize,
}

impl DeliveryReport {
    pub fn new(originator: &str, message: &str) -> Self {
        Self {
            originator: originator.to_string(),
            message: message.to_string(),
            ..Default::default()
        }
    }

    pub fn delivered_count(&self) -> usize {
        self.delivered.len()
    }
}
