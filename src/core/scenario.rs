use crate::config::scenario_config::ScenarioConfig;
use crate::core::variants::Output;
use crate::core::{ApplicationMediator, Colleague, DeliveryReport};
use crate::utils::error::{MediatorError, Result};
use crate::utils::validation::Validate;
use serde::Serialize;
use std::rc::Rc;

/// Per-send results of a scenario run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub scenario: String,
    pub registry: Vec<String>,
    pub sends: Vec<DeliveryReport>,
    /// Reaction output, when it was captured rather than printed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub output: Vec<String>,
}

impl RunSummary {
    pub fn total_deliveries(&self) -> usize {
        self.sends.iter().map(DeliveryReport::delivered_count).sum()
    }
}

/// Wires a mediator and its colleagues from a `ScenarioConfig`, then plays the
/// configured messages in order.
pub struct ScenarioRunner {
    config: ScenarioConfig,
    output: Output,
}

impl ScenarioRunner {
    pub fn new(config: ScenarioConfig, output: Output) -> Self {
        Self { config, output }
    }

    pub fn run(&self) -> Result<RunSummary> {
        self.config.validate()?;

        let mediator = ApplicationMediator::with_policies(
            self.config.mediator.duplicate_registration,
            self.config.mediator.delivery_failure,
        );

        // Build and register everything before the first send.
        let mut colleagues: Vec<Rc<Colleague>> = Vec::with_capacity(self.config.colleagues.len());
        for spec in &self.config.colleagues {
            let reaction = spec.kind()?.reaction(self.output.clone());
            let colleague = Colleague::new(spec.name.clone(), mediator.clone(), reaction)?;
            for _ in 0..spec.registrations {
                mediator.add_colleague(&colleague)?;
            }
            colleagues.push(colleague);
        }

        tracing::info!(
            "Scenario '{}': {} colleagues, {} registry entries",
            self.config.name,
            colleagues.len(),
            mediator.len()
        );

        let mut summary = RunSummary {
            scenario: self.config.name.clone(),
            registry: mediator.colleague_names(),
            ..Default::default()
        };

        for message in &self.config.messages {
            let sender = colleagues
                .iter()
                .find(|c| c.name() == message.from)
                .ok_or_else(|| MediatorError::ConfigError {
                    message: format!("message sender '{}' is not a declared colleague", message.from),
                })?;

            let report = sender.send(&message.text)?;
            summary.sends.push(report);
        }

        if let Output::Transcript(transcript) = &self.output {
            summary.output = transcript.lines();
        }

        Ok(summary)
    }
}
