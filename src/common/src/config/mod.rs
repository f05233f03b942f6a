use std::path::Path;

use serde::{Deserialize, Serialize};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use linter::OutputFormat;

/// Default configuration file, looked up in the working directory
pub const CONFIG_FILE: &str = "promlint.toml";

/// Prefix for environment overrides, e.g. `PROMLINT__OUTPUT__FORMAT=json`
pub const ENV_PREFIX: &str = "PROMLINT__";

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Report format (text, json)
    pub format: OutputFormat,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Configuration {
    /// Report rendering
    pub output: OutputConfig,
    /// Exit with a failure status when any violation is found
    pub fail_on_violation: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            fail_on_violation: true,
        }
    }
}

impl Configuration {
    fn figment(file: &Path) -> Figment {
        Figment::from(Serialized::defaults(Configuration::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Defaults, then `promlint.toml`, then `PROMLINT__*` environment variables
    pub fn load() -> Result<Self, Box<figment::Error>> {
        Self::load_from_path(Path::new(CONFIG_FILE))
    }

    /// Same layering as [`Configuration::load`] with an explicit file
    pub fn load_from_path(path: &Path) -> Result<Self, Box<figment::Error>> {
        let config = Self::figment(path).extract().map_err(Box::new)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn load() -> figment::Result<Configuration> {
        Configuration::load().map_err(|e| *e)
    }

    #[test]
    fn test_default_configuration() {
        let config = Configuration::default();

        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.fail_on_violation);
    }

    #[test]
    fn test_configless_operation() {
        Jail::expect_with(|_jail| {
            let config = load()?;

            assert_eq!(config.output.format, OutputFormat::Text);
            assert!(config.fail_on_violation);
            Ok(())
        });
    }

    #[test]
    fn test_toml_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                fail_on_violation = false

                [output]
                format = "json"
                "#,
            )?;

            let config = load()?;

            assert_eq!(config.output.format, OutputFormat::Json);
            assert!(!config.fail_on_violation);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_path() {
        Jail::expect_with(|jail| {
            jail.create_file("ci.toml", "fail_on_violation = false")?;

            let config = Configuration::load_from_path(Path::new("ci.toml")).map_err(|e| *e)?;

            assert!(!config.fail_on_violation);
            assert_eq!(config.output.format, OutputFormat::Text);
            Ok(())
        });
    }

    #[test]
    fn test_env_var_override() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, "[output]\nformat = \"text\"")?;
            jail.set_env("PROMLINT__OUTPUT__FORMAT", "json");
            jail.set_env("PROMLINT__FAIL_ON_VIOLATION", "false");

            let config = load()?;

            assert_eq!(config.output.format, OutputFormat::Json);
            assert!(!config.fail_on_violation);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("PROMLINT__OUTPUT__FORMAT", "yaml");

            assert!(load().is_err());
            Ok(())
        });
    }
}
