// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::config::{CliConfig, OutputFormat};
use anyhow::Result;
use polyalg_polynomial::Polynomial;
use serde::Serialize;

/// Render a command result in the configured format. `text` is only called
/// for text output.
pub fn render<T: Serialize + ?Sized>(
    config: &CliConfig,
    json: &T,
    text: impl FnOnce() -> String,
) -> Result<String> {
    match config.format {
        OutputFormat::Text => Ok(text()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(json)?),
    }
}

pub fn format_value(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{value:.p$}"),
        None => format!("{value}"),
    }
}

pub fn format_polynomial(poly: &Polynomial, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{poly:.p$}"),
        None => format!("{poly}"),
    }
}

/// Relabel a parsed polynomial with the configured variable
pub fn labelled(poly: &Polynomial, config: &CliConfig) -> Polynomial {
    poly.clone().with_variable(config.variable.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1.5, None), "1.5");
        assert_eq!(format_value(1.0 / 3.0, Some(3)), "0.333");
    }

    #[test]
    fn test_render_json() {
        let config = CliConfig {
            format: OutputFormat::Json,
            ..CliConfig::default()
        };
        let out = render(&config, &vec![1.0, 2.0], || unreachable!()).unwrap();
        assert_eq!(out, "[\n  1.0,\n  2.0\n]");
    }

    #[test]
    fn test_labelled() {
        let config = CliConfig {
            variable: "t".to_string(),
            ..CliConfig::default()
        };
        let p = labelled(&Polynomial::new([1, 0]), &config);
        assert_eq!(format_polynomial(&p, None), "t");
    }
}
