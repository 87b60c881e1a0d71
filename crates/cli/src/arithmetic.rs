// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::config::CliConfig;
use crate::output::{format_polynomial, labelled, render};
use anyhow::Result;
use polyalg_polynomial::{Operand, Polynomial};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
}

pub fn execute(
    op: BinaryOp,
    poly: &Polynomial,
    operand: Operand,
    config: &CliConfig,
) -> Result<String> {
    info!(?op, degree = poly.degree(), "arithmetic");
    let lhs = labelled(poly, config);
    let result = match op {
        BinaryOp::Add => lhs.add(operand),
        BinaryOp::Sub => lhs.subtract(operand),
        BinaryOp::Mul => lhs.multiply(operand),
    };
    render(config, &result, || format_polynomial(&result, config.precision))
}
