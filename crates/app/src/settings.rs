//! Runtime settings.
//!
//! Sources, lowest to highest precedence:
//! 1. `beacon.toml` (or the file named by `BEACON_CONFIG`), optional
//! 2. `BEACON_*` environment variables (`BEACON_OVERRIDES` is comma separated)
//! 3. positional arguments: `[SERVICES] [ENVIRONMENT]`

use std::path::PathBuf;

use beacon_application::InterpolateServicesInput;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Settings of one run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Service descriptor file (JSON or YAML).
    pub services: PathBuf,

    /// Task environment file (JSON or YAML).
    #[serde(default)]
    pub environment: Option<PathBuf>,

    /// Output file. Stdout when absent.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// `KEY=VALUE` assignments applied on top of the environment file.
    #[serde(default)]
    pub overrides: Vec<String>,
}

impl Settings {
    /// Loads settings from the default sources plus positional arguments.
    ///
    /// # Errors
    /// Returns an error if no services file is configured or a source is malformed.
    pub fn load<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let file = std::env::var("BEACON_CONFIG").unwrap_or_else(|_| "beacon".to_string());
        Self::load_from(&file, args)
    }

    /// Loads settings from `file` (extension optional) plus environment and arguments.
    ///
    /// # Errors
    /// Returns an error if no services file is configured or a source is malformed.
    pub fn load_from<I>(file: &str, args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();

        Config::builder()
            .add_source(File::with_name(file).required(false))
            .add_source(
                Environment::with_prefix("BEACON")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("overrides"),
            )
            .set_override_option("services", args.next())?
            .set_override_option("environment", args.next())?
            .build()?
            .try_deserialize()
    }

    /// Turns the settings into use case input.
    #[must_use]
    pub fn into_input(self) -> InterpolateServicesInput {
        InterpolateServicesInput {
            services_path: self.services,
            environment_path: self.environment,
            overrides: self.overrides,
            output_path: self.output,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("beacon.toml");
        std::fs::write(
            &path,
            "services = \"svc.yaml\"\nenvironment = \"env.json\"\noverrides = [\"A=1\"]\n",
        )
        .unwrap();

        let settings = Settings::load_from(path.to_str().unwrap(), Vec::new()).unwrap();

        assert_eq!(
            settings,
            Settings {
                services: "svc.yaml".into(),
                environment: Some("env.json".into()),
                output: None,
                overrides: vec!["A=1".to_string()],
            }
        );
    }

    #[test]
    fn test_arguments_take_precedence() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("beacon.toml");
        std::fs::write(&path, "services = \"svc.yaml\"\noutput = \"out.json\"\n").unwrap();

        let settings = Settings::load_from(
            path.to_str().unwrap(),
            vec!["other.json".to_string(), "env.yml".to_string()],
        )
        .unwrap();

        assert_eq!(settings.services, PathBuf::from("other.json"));
        assert_eq!(settings.environment, Some(PathBuf::from("env.yml")));
        assert_eq!(settings.output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_missing_services_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent");
        assert!(Settings::load_from(missing.to_str().unwrap(), Vec::new()).is_err());
    }

    #[test]
    fn test_into_input() {
        let input = Settings {
            services: "s.json".into(),
            environment: None,
            output: Some("o.json".into()),
            overrides: vec!["X=y".into()],
        }
        .into_input();

        assert_eq!(input.services_path, PathBuf::from("s.json"));
        assert_eq!(input.environment_path, None);
        assert_eq!(input.output_path, Some(PathBuf::from("o.json")));
        assert_eq!(input.overrides, vec!["X=y"]);
    }
}
