// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::config::CliConfig;
use crate::output::render;
use anyhow::{Context, Result};
use polyalg_polynomial::Polynomial;
use tracing::info;

pub fn execute(poly: &Polynomial, config: &CliConfig) -> Result<String> {
    info!(degree = poly.degree(), "finding roots");
    let roots = poly
        .roots()
        .with_context(|| format!("Could not solve {poly}"))?;

    render(config, &roots, || match config.precision {
        Some(p) => format!("{roots:.p$}"),
        None => format!("{roots}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_roots_text() {
        let config = CliConfig::default();
        let out = execute(&Polynomial::new([1, -3, 2]), &config).unwrap();
        assert_eq!(out, "[1, 2]");

        let out = execute(&Polynomial::new([1, 0, 0, 0, 0, 0]), &config).unwrap();
        assert_eq!(out, "unsupported");
    }

    #[test]
    fn test_roots_complex_with_precision() {
        let config = CliConfig {
            precision: Some(2),
            ..CliConfig::default()
        };
        let out = execute(&Polynomial::new([1, 0, 4]), &config).unwrap();
        assert_eq!(out, "[0.00 + 2.00i, 0.00 - 2.00i]");
    }

    #[test]
    fn test_roots_json() {
        let config = CliConfig {
            format: OutputFormat::Json,
            ..CliConfig::default()
        };
        let out = execute(&Polynomial::new([2, -3]), &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value, serde_json::json!({ "One": 1.5 }));

        let out = execute(&Polynomial::constant(1.0), &config).unwrap();
        assert_eq!(out, "\"Undefined\"");
    }

    #[test]
    fn test_non_finite_coefficient() {
        let p = Polynomial::new([1.0, f64::INFINITY]);
        assert!(execute(&p, &CliConfig::default()).is_err());
    }
}
