// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::config::CliConfig;
use crate::output::{format_value, render};
use anyhow::Result;
use polyalg_polynomial::Polynomial;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
pub struct Evaluation {
    pub x: f64,
    pub value: f64,
}

pub fn execute(poly: &Polynomial, points: &[f64], config: &CliConfig) -> Result<String> {
    info!(degree = poly.degree(), points = points.len(), "evaluating");

    let evaluations: Vec<Evaluation> = points
        .iter()
        .zip(poly.evaluate_many(points))
        .map(|(&x, value)| Evaluation { x, value })
        .collect();

    render(config, &evaluations, || {
        evaluations
            .iter()
            .map(|e| {
                format!(
                    "p({}) = {}",
                    format_value(e.x, config.precision),
                    format_value(e.value, config.precision)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    })
}
