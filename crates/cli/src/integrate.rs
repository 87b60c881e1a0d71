// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::config::CliConfig;
use crate::output::{format_polynomial, format_value, labelled, render};
use anyhow::Result;
use polyalg_polynomial::Polynomial;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
pub struct DefiniteIntegral {
    pub from: f64,
    pub to: f64,
    pub value: f64,
}

/// Antiderivative, or the definite integral when both bounds are given
pub fn execute(poly: &Polynomial, bounds: Option<(f64, f64)>, config: &CliConfig) -> Result<String> {
    match bounds {
        Some((from, to)) => {
            info!(degree = poly.degree(), from, to, "definite integral");
            let result = DefiniteIntegral {
                from,
                to,
                value: poly.definite_integral(from, to),
            };
            render(config, &result, || {
                format!(
                    "integral over [{}, {}] = {}",
                    format_value(from, config.precision),
                    format_value(to, config.precision),
                    format_value(result.value, config.precision)
                )
            })
        }
        None => {
            info!(degree = poly.degree(), "antiderivative");
            let antiderivative = labelled(poly, config).integrate();
            render(config, &antiderivative, || {
                format_polynomial(&antiderivative, config.precision)
            })
        }
    }
}
