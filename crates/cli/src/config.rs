// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use clap::ValueEnum;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use polyalg_polynomial::DEFAULT_VARIABLE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix for environment overrides, eg. `POLYALG_PRECISION=3`
pub const ENV_PREFIX: &str = "POLYALG_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Presentation settings for command output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Variable label used when printing polynomials
    pub variable: String,
    /// Fixed number of decimals. Shortest round-trip form when absent.
    pub precision: Option<usize>,
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            variable: DEFAULT_VARIABLE.to_string(),
            precision: None,
            format: OutputFormat::default(),
        }
    }
}

/// Value struct for passing configuration from the cli flags
#[derive(Default, Serialize, Deserialize, Clone, Debug)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

/// Layer the configuration: defaults, then the YAML file if one is given, then
/// `POLYALG_*` environment variables, then command line flags.
pub fn load_config(config_file: Option<PathBuf>, overrides: CliOverrides) -> Result<CliConfig> {
    let mut figment = Figment::from(Serialized::defaults(CliConfig::default()));

    if let Some(path) = config_file {
        if !path.is_file() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            ))
            .context("Configuration file not found");
        }
        figment = figment.merge(Yaml::file(path));
    }

    let config = figment
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(overrides))
        .extract()
        .context("Could not parse configuration")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_jail| {
            let config = load_config(None, CliOverrides::default()).map_err(|e| e.to_string())?;
            assert_eq!(config, CliConfig::default());
            assert_eq!(config.variable, "x");
            assert_eq!(config.format, OutputFormat::Text);
            Ok(())
        });
    }

    #[test]
    fn test_yaml_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "polyalg.yaml",
                r#"
variable: "t"
precision: 4
format: json
"#,
            )?;

            let config = load_config(Some("polyalg.yaml".into()), CliOverrides::default())
                .map_err(|e| e.to_string())?;

            assert_eq!(config.variable, "t");
            assert_eq!(config.precision, Some(4));
            assert_eq!(config.format, OutputFormat::Json);
            Ok(())
        });
    }

    #[test]
    fn test_layering_order() {
        Jail::expect_with(|jail| {
            jail.create_file("polyalg.yaml", "variable: t\nprecision: 4\nformat: json\n")?;
            jail.set_env("POLYALG_PRECISION", "2");
            jail.set_env("POLYALG_VARIABLE", "z");

            let overrides = CliOverrides {
                precision: None,
                format: Some(OutputFormat::Text),
            };
            let config = load_config(Some("polyalg.yaml".into()), overrides)
                .map_err(|e| e.to_string())?;

            assert_eq!(config.variable, "z");
            assert_eq!(config.precision, Some(2));
            assert_eq!(config.format, OutputFormat::Text);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_value() {
        Jail::expect_with(|jail| {
            jail.set_env("POLYALG_FORMAT", "xml");
            let result = load_config(None, CliOverrides::default());
            assert!(result.is_err());
            Ok(())
        });
    }

    #[test]
    fn test_file_not_found() -> Result<()> {
        let Err(err) = load_config(Some("/nope/polyalg.yaml".into()), CliOverrides::default())
        else {
            bail!("error expected");
        };
        let Some(e) = err.downcast_ref::<std::io::Error>() else {
            bail!("io error expected");
        };

        assert_eq!(e.kind(), std::io::ErrorKind::NotFound);

        Ok(())
    }
}
