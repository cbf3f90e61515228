use anyhow::Result;
use mediator_pattern::{
    CliConfig, MediatorError, Output, OutputFormat, ScenarioConfig, ScenarioRunner, Transcript,
};
use tempfile::TempDir;

fn write_scenario(dir: &TempDir, name: &str, content: &str) -> Result<String> {
    let path = dir.path().join(name);
    std::fs::write(&path, content)?;
    Ok(path.to_string_lossy().into_owned())
}

fn cli_for(path: Option<String>) -> CliConfig {
    CliConfig {
        config: path,
        format: OutputFormat::Json,
        verbose: false,
        log_json: false,
        reject_duplicates: false,
        fail_fast: false,
    }
}

#[test]
fn test_builtin_demo_prints_both_greetings() -> Result<()> {
    let transcript = Transcript::default();
    let scenario = cli_for(None).scenario()?;

    let summary = ScenarioRunner::new(scenario, Output::Transcript(transcript.clone())).run()?;

    assert_eq!(summary.sends.len(), 2);
    assert_eq!(
        transcript.lines(),
        vec![
            "MobileColleague Received: Hey PC gamers!",
            "Colleague Received: Hey Mobile gamers!",
        ]
    );
    Ok(())
}

#[test]
fn test_duplicate_registration_from_file() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_scenario(
        &dir,
        "dup.toml",
        r#"
name = "dup"

[[colleagues]]
name = "a"
kind = "desktop"
registrations = 2

[[colleagues]]
name = "b"
kind = "mobile"

[[messages]]
from = "b"
text = "dup test"
"#,
    )?;

    let transcript = Transcript::default();
    let scenario = cli_for(Some(path)).scenario()?;
    let summary = ScenarioRunner::new(scenario, Output::Transcript(transcript.clone())).run()?;

    assert_eq!(summary.registry, vec!["a", "a", "b"]);
    assert_eq!(summary.sends[0].delivered, vec!["a", "a"]);
    assert_eq!(
        transcript.lines(),
        vec!["Colleague Received: dup test", "Colleague Received: dup test"]
    );
    Ok(())
}

#[test]
fn test_reject_flag_turns_duplicates_into_errors() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_scenario(
        &dir,
        "dup.toml",
        r#"
name = "dup"

[[colleagues]]
name = "a"
kind = "desktop"
registrations = 2
"#,
    )?;

    let mut cli = cli_for(Some(path));
    cli.reject_duplicates = true;
    let scenario = cli.scenario()?;

    let err = ScenarioRunner::new(scenario, Output::Transcript(Transcript::default()))
        .run()
        .unwrap_err();
    assert!(matches!(err, MediatorError::DuplicateRegistration { .. }));
    Ok(())
}

#[test]
fn test_unregistered_colleague_only_sends() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_scenario(
        &dir,
        "solo.toml",
        r#"
name = "solo"

[[colleagues]]
name = "a"
kind = "desktop"

[[colleagues]]
name = "b"
kind = "mobile"
registrations = 0

[[messages]]
from = "a"
text = "solo"
"#,
    )?;

    let transcript = Transcript::default();
    let scenario = cli_for(Some(path)).scenario()?;
    let summary = ScenarioRunner::new(scenario, Output::Transcript(transcript.clone())).run()?;

    assert_eq!(summary.registry, vec!["a"]);
    assert_eq!(summary.total_deliveries(), 0);
    assert!(transcript.is_empty());
    Ok(())
}

#[test]
fn test_invalid_scenario_fails_before_any_send() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_scenario(
        &dir,
        "bad.toml",
        r#"
name = "bad"

[[colleagues]]
name = "a"
kind = "desktop"

[[messages]]
from = "a"
text = "first"

[[messages]]
from = "nobody"
text = "second"
"#,
    )?;

    let transcript = Transcript::default();
    let scenario = ScenarioConfig::from_file(&path)?;
    let result = ScenarioRunner::new(scenario, Output::Transcript(transcript.clone())).run();

    assert!(matches!(
        result,
        Err(MediatorError::InvalidConfigValueError { ref field, .. }) if field == "messages.from"
    ));
    assert!(transcript.is_empty());
    Ok(())
}

#[test]
fn test_malformed_toml_is_reported() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_scenario(&dir, "broken.toml", "name = [unterminated")?;

    let err = cli_for(Some(path)).scenario().unwrap_err();
    assert!(matches!(err, MediatorError::TomlError(_)));
    Ok(())
}
