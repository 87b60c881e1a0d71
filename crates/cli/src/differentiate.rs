// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::config::CliConfig;
use crate::output::{format_polynomial, labelled, render};
use anyhow::Result;
use polyalg_polynomial::Polynomial;
use tracing::info;

pub fn execute(poly: &Polynomial, order: usize, config: &CliConfig) -> Result<String> {
    info!(degree = poly.degree(), order, "differentiating");
    let derivative = labelled(poly, config).nth_derivative(order);
    render(config, &derivative, || {
        format_polynomial(&derivative, config.precision)
    })
}
