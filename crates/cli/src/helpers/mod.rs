// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use polyalg_polynomial::{Operand, Polynomial};

pub mod telemetry;

/// Parse a coefficient list such as `1,-3,2` or `[1, -3, 2]`. A single number
/// is read as a constant polynomial.
pub fn parse_polynomial(s: &str) -> Result<Polynomial> {
    Ok(s.parse::<Operand>()?.promote())
}

/// Parse a scalar or a coefficient list
pub fn parse_operand(s: &str) -> Result<Operand> {
    Ok(s.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_polynomial() {
        let p = parse_polynomial("[1, -3, 2]").unwrap();
        assert_eq!(p.coefficients(), &[1.0, -3.0, 2.0]);

        let c = parse_polynomial("4").unwrap();
        assert_eq!(c.coefficients(), &[4.0]);
    }

    #[test]
    fn test_parse_rejects_junk() {
        let err = parse_polynomial("x^2 + 1").unwrap_err();
        assert!(err.to_string().contains("Incorrect operand type"));
        assert!(parse_operand("one").is_err());
    }
}
