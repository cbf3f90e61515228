use clap::Parser;
use mediator_pattern::utils::error::ErrorSeverity;
use mediator_pattern::utils::logger;
use mediator_pattern::{CliConfig, MediatorError, Output, OutputFormat, ScenarioRunner, Transcript};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting mediator-pattern");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let scenario = match config.scenario() {
        Ok(scenario) => scenario,
        Err(e) => exit_with(&e),
    };

    let output = match config.format {
        OutputFormat::Text => Output::Stdout,
        OutputFormat::Json => Output::Transcript(Transcript::default()),
    };

    let runner = ScenarioRunner::new(scenario, output);
    match runner.run() {
        Ok(summary) => {
            tracing::info!(
                "Scenario '{}' finished: {} sends, {} deliveries",
                summary.scenario,
                summary.sends.len(),
                summary.total_deliveries()
            );
            if config.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}

fn exit_with(e: &MediatorError) -> ! {
    tracing::error!("{} (Severity: {:?})", e, e.severity());
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("{}", e.user_friendly_message());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 4,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
