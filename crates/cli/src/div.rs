// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::config::CliConfig;
use crate::output::{format_polynomial, labelled, render};
use anyhow::{Context, Result};
use polyalg_polynomial::Polynomial;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
pub struct Division {
    pub quotient: Polynomial,
    pub remainder: Polynomial,
}

pub fn execute(dividend: &Polynomial, divisor: &Polynomial, config: &CliConfig) -> Result<String> {
    info!(
        dividend = dividend.degree(),
        divisor = divisor.degree(),
        "dividing"
    );
    let (quotient, remainder) = labelled(dividend, config)
        .div(divisor)
        .with_context(|| format!("Could not divide by {divisor}"))?;

    let result = Division {
        quotient,
        remainder,
    };
    render(config, &result, || {
        format!(
            "quotient: {}\nremainder: {}",
            format_polynomial(&result.quotient, config.precision),
            format_polynomial(&result.remainder, config.precision)
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division() {
        let p = Polynomial::new([2, 3, -1, 5]);
        let d = Polynomial::new([1, 0, 1]);
        let out = execute(&p, &d, &CliConfig::default()).unwrap();
        assert_eq!(out, "quotient: 2x + 3\nremainder: -3x + 2");
    }

    #[test]
    fn test_division_by_zero() {
        let p = Polynomial::new([1, 1]);
        let err = execute(&p, &Polynomial::zero(), &CliConfig::default()).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "Could not divide by 0: Division by zero polynomial"
        );
    }
}
