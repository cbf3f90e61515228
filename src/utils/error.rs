use serde::Serialize;
use thiserror::Error;

/// A single receiver that failed during a broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryFailure {
    pub colleague: String,
    /// Index of the failing entry in the mediator's registry.
    pub position: usize,
    pub reason: String,
}

#[derive(Error, Debug)]
pub enum MediatorError {
    #[error("Cannot construct colleague: {message}")]
    ConstructionError { message: String },

    #[error("Colleague '{name}' is already registered")]
    DuplicateRegistration { name: String },

    #[error(
        "Broadcast from '{originator}' failed for {} receiver(s) ({delivered} delivered)",
        .failures.len()
    )]
    DeliveryError {
        originator: String,
        delivered: usize,
        failures: Vec<DeliveryFailure>,
    },

    #[error("Receive failed: {reason}")]
    ReceiveError { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MediatorError {
    pub fn construction(message: impl Into<String>) -> Self {
        Self::ConstructionError {
            message: message.into(),
        }
    }

    pub fn receive(reason: impl Into<String>) -> Self {
        Self::ReceiveError {
            reason: reason.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DuplicateRegistration { .. } => ErrorSeverity::Low,
            Self::DeliveryError { .. } | Self::ReceiveError { .. } => ErrorSeverity::Medium,
            Self::ConstructionError { .. }
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::TomlError(_) => ErrorSeverity::High,
            Self::IoError(_) | Self::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ConstructionError { .. } => {
                "Give every colleague a non-empty name and a known kind (desktop, mobile)"
            }
            Self::DuplicateRegistration { .. } => {
                "Register each colleague once, or allow duplicate registration"
            }
            Self::DeliveryError { .. } | Self::ReceiveError { .. } => {
                "Inspect the failing colleagues listed above; other receivers were handled per the delivery policy"
            }
            Self::IoError(_) => "Check that the scenario file exists and is readable",
            Self::SerializationError(_) => "Re-run with --format text",
            Self::TomlError(_) => "Make sure the scenario file is valid TOML",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the scenario configuration and try again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::DeliveryError { failures, .. } => {
                let names: Vec<&str> = failures.iter().map(|f| f.colleague.as_str()).collect();
                format!("Message could not be delivered to: {}", names.join(", "))
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MediatorError>;
