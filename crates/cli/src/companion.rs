// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::config::CliConfig;
use crate::output::{format_value, render};
use anyhow::Result;
use polyalg_polynomial::Polynomial;
use tracing::info;

pub fn execute(poly: &Polynomial, config: &CliConfig) -> Result<String> {
    info!(degree = poly.degree(), "building companion matrix");
    let matrix = poly.companion_matrix()?;

    let rows: Vec<Vec<f64>> = matrix.rows().into_iter().map(|row| row.to_vec()).collect();

    render(config, &rows, || {
        rows.iter()
            .map(|row| {
                row.iter()
                    .map(|v| format_value(*v, config.precision))
                    .collect::<Vec<_>>()
                    .join("\t")
            })
            .collect::<Vec<_>>()
            .join("\n")
    })
}
