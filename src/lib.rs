pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{scenario_config::ScenarioConfig, CliConfig, OutputFormat};
pub use core::{
    scenario::{RunSummary, ScenarioRunner},
    variants::{DesktopReaction, MobileReaction, Output, Transcript},
    ApplicationMediator, Colleague, ColleagueKind, DeliveryPolicy, DeliveryReport, Mediator,
    Reaction, RegistrationPolicy,
};
pub use utils::error::{DeliveryFailure, MediatorError, Result};
