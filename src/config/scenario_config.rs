use crate::core::{ColleagueKind, DeliveryPolicy, RegistrationPolicy};
use crate::utils::error::{MediatorError, Result};
use crate::utils::validation::{
    validate_known_name, validate_non_empty_string, validate_range, validate_unique_names, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const MAX_REGISTRATIONS: u32 = 16;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub name: String,
    #[serde(default)]
    pub mediator: MediatorSettings,
    pub colleagues: Vec<ColleagueSpec>,
    #[serde(default)]
    pub messages: Vec<MessageSpec>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediatorSettings {
    #[serde(default)]
    pub duplicate_registration: RegistrationPolicy,
    #[serde(default)]
    pub delivery_failure: DeliveryPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColleagueSpec {
    pub name: String,
    pub kind: String,
    /// How many times to register; 0 builds the colleague without registering it.
    #[serde(default = "default_registrations")]
    pub registrations: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSpec {
    pub from: String,
    pub text: String,
}

fn default_registrations() -> u32 {
    1
}

impl ColleagueSpec {
    pub fn new(name: &str, kind: ColleagueKind) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.as_str().to_string(),
            registrations: default_registrations(),
        }
    }

    pub fn kind(&self) -> Result<ColleagueKind> {
        self.kind.parse()
    }
}

impl MessageSpec {
    pub fn new(from: &str, text: &str) -> Self {
        Self {
            from: from.to_string(),
            text: text.to_string(),
        }
    }
}

impl Default for ScenarioConfig {
    /// The classic demo: a desktop and a mobile colleague greeting each other.
    fn default() -> Self {
        Self {
            name: "demo".to_string(),
            mediator: MediatorSettings::default(),
            colleagues: vec![
                ColleagueSpec::new("desktop", ColleagueKind::Desktop),
                ColleagueSpec::new("mobile", ColleagueKind::Mobile),
            ],
            messages: vec![
                MessageSpec::new("desktop", "Hey PC gamers!"),
                MessageSpec::new("mobile", "Hey Mobile gamers!"),
            ],
        }
    }
}

impl ScenarioConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replace `${VAR}` with the environment value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MediatorError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn colleague_names(&self) -> Vec<&str> {
        self.colleagues.iter().map(|c| c.name.as_str()).collect()
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;

        for colleague in &self.colleagues {
            if colleague.name.trim().is_empty() {
                return Err(MediatorError::construction(
                    "colleague name cannot be empty",
                ));
            }
            colleague.kind()?;
            validate_range(
                "colleagues.registrations",
                colleague.registrations,
                0,
                MAX_REGISTRATIONS,
            )?;
        }

        let names = self.colleague_names();
        validate_unique_names("colleagues.name", names.iter().copied())?;

        for message in &self.messages {
            validate_known_name("messages.from", &message.from, &names)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
name = "basic"

[mediator]
duplicate_registration = "reject"
delivery_failure = "fail_fast"

[[colleagues]]
name = "desktop"
kind = "desktop"

[[colleagues]]
name = "mobile"
kind = "mobile"
registrations = 2

[[messages]]
from = "desktop"
text = "hello"
"#;

    #[test]
    fn test_parse_basic_scenario() {
        let config = ScenarioConfig::from_toml_str(BASIC).unwrap();

        assert_eq!(config.name, "basic");
        assert_eq!(config.mediator.duplicate_registration, RegistrationPolicy::Reject);
        assert_eq!(config.mediator.delivery_failure, DeliveryPolicy::FailFast);
        assert_eq!(config.colleagues[0].registrations, 1);
        assert_eq!(config.colleagues[1].registrations, 2);
        assert_eq!(config.colleagues[1].kind().unwrap(), ColleagueKind::Mobile);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_mediator_section_is_optional() {
        let config = ScenarioConfig::from_toml_str(
            r#"
name = "minimal"

[[colleagues]]
name = "solo"
kind = "desktop"
"#,
        )
        .unwrap();

        assert_eq!(config.mediator.duplicate_registration, RegistrationPolicy::AllowDuplicates);
        assert_eq!(config.mediator.delivery_failure, DeliveryPolicy::CollectErrors);
        assert!(config.messages.is_empty());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MEDIATOR_TEST_GREETING", "hi from env");

        let config = ScenarioConfig::from_toml_str(
            r#"
name = "env"

[[colleagues]]
name = "a"
kind = "desktop"

[[messages]]
from = "a"
text = "${MEDIATOR_TEST_GREETING}"
"#,
        )
        .unwrap();
        assert_eq!(config.messages[0].text, "hi from env");

        std::env::remove_var("MEDIATOR_TEST_GREETING");
    }

    #[test]
    fn test_unset_env_var_is_left_untouched() {
        let out = ScenarioConfig::substitute_env_vars("${MEDIATOR_TEST_SURELY_UNSET}").unwrap();
        assert_eq!(out, "${MEDIATOR_TEST_SURELY_UNSET}");
    }

    #[test]
    fn test_unknown_kind_fails_validation() {
        let mut config = ScenarioConfig::default();
        config.colleagues[0].kind = "tablet".to_string();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, MediatorError::ConstructionError { .. }));
    }

    #[test]
    fn test_unknown_sender_fails_validation() {
        let mut config = ScenarioConfig::default();
        config.messages.push(MessageSpec::new("ghost", "boo"));

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duplicate_names_fail_validation() {
        let mut config = ScenarioConfig::default();
        config.colleagues[1].name = "desktop".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC.as_bytes()).unwrap();

        let config = ScenarioConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.name, "basic");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ScenarioConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, MediatorError::IoError(_)));
    }
}
