pub mod scenario_config;

use crate::core::{DeliveryPolicy, RegistrationPolicy};
use crate::utils::error::Result;
use scenario_config::ScenarioConfig;
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
pub enum OutputFormat {
    /// Reaction lines on stdout
    #[default]
    Text,
    /// A JSON run summary on stdout
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "mediator-pattern"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Broadcast messages between colleagues through a mediator")
)]
pub struct CliConfig {
    /// TOML scenario file; the built-in desktop/mobile demo runs when omitted
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, value_enum, default_value_t = OutputFormat::Text))]
    pub format: OutputFormat,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON"))]
    pub log_json: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Refuse to register a colleague twice"))]
    pub reject_duplicates: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Stop a broadcast at the first failing receiver"))]
    pub fail_fast: bool,
}

impl CliConfig {
    /// Load the scenario and apply command-line overrides on top of it.
    pub fn scenario(&self) -> Result<ScenarioConfig> {
        let mut scenario = match &self.config {
            Some(path) => ScenarioConfig::from_file(path)?,
            None => ScenarioConfig::default(),
        };

        if self.reject_duplicates {
            scenario.mediator.duplicate_registration = RegistrationPolicy::Reject;
        }
        if self.fail_fast {
            scenario.mediator.delivery_failure = DeliveryPolicy::FailFast;
        }

        Ok(scenario)
    }
}
