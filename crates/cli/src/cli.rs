// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::PathBuf;

use crate::arithmetic::{self, BinaryOp};
use crate::config::{load_config, CliConfig, CliOverrides, OutputFormat};
use crate::helpers::telemetry::setup_simple_tracing;
use crate::helpers::{parse_operand, parse_polynomial};
use crate::{companion, differentiate, div, eval, integrate, roots};
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use polyalg_polynomial::{Operand, Polynomial};
use tracing::{debug, instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "polyalg")]
#[command(about = "Single-variable polynomial algebra: arithmetic, calculus, evaluation and roots", long_about = None)]
pub struct Cli {
    /// Path to a YAML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `polyalg -vvv` will give you
    /// trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,

    /// Output format, overrides the config file
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Number of decimals to print, overrides the config file
    #[arg(long, global = true)]
    precision: Option<usize>,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    #[instrument(skip_all)]
    pub fn execute(self) -> Result<()> {
        setup_simple_tracing(self.log_level());

        let config = self.load_config()?;
        debug!(?config, "configuration loaded");

        let output = self.command.run(&config)?;
        println!("{output}");

        Ok(())
    }

    pub fn load_config(&self) -> Result<CliConfig> {
        load_config(
            self.config.clone(),
            CliOverrides {
                precision: self.precision,
                format: self.format,
            },
        )
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a polynomial at one or more points
    Eval {
        /// Coefficients, highest power first. Eg. `1,-3,2` for x^2 - 3x + 2
        #[arg(value_parser = parse_polynomial, allow_hyphen_values = true)]
        coeffs: Polynomial,

        /// Points to evaluate at
        #[arg(required = true, allow_negative_numbers = true)]
        points: Vec<f64>,
    },

    /// Differentiate a polynomial
    Derive {
        #[arg(value_parser = parse_polynomial, allow_hyphen_values = true)]
        coeffs: Polynomial,

        /// Order of the derivative
        #[arg(short = 'n', long, default_value_t = 1)]
        order: usize,
    },

    /// Antiderivative, or the definite integral when both bounds are given
    Integrate {
        #[arg(value_parser = parse_polynomial, allow_hyphen_values = true)]
        coeffs: Polynomial,

        /// Lower bound
        #[arg(long, requires = "to", allow_negative_numbers = true)]
        from: Option<f64>,

        /// Upper bound
        #[arg(long, requires = "from", allow_negative_numbers = true)]
        to: Option<f64>,
    },

    /// Add a polynomial or a scalar
    Add {
        #[arg(value_parser = parse_polynomial, allow_hyphen_values = true)]
        coeffs: Polynomial,

        /// A scalar (`2.5`) or a coefficient list (`1,-1`)
        #[arg(value_parser = parse_operand, allow_hyphen_values = true)]
        operand: Operand,
    },

    /// Subtract a polynomial or a scalar
    Sub {
        #[arg(value_parser = parse_polynomial, allow_hyphen_values = true)]
        coeffs: Polynomial,

        #[arg(value_parser = parse_operand, allow_hyphen_values = true)]
        operand: Operand,
    },

    /// Multiply by a polynomial or a scalar
    Mul {
        #[arg(value_parser = parse_polynomial, allow_hyphen_values = true)]
        coeffs: Polynomial,

        #[arg(value_parser = parse_operand, allow_hyphen_values = true)]
        operand: Operand,
    },

    /// Long division, prints quotient and remainder
    Div {
        #[arg(value_parser = parse_polynomial, allow_hyphen_values = true)]
        dividend: Polynomial,

        #[arg(value_parser = parse_polynomial, allow_hyphen_values = true)]
        divisor: Polynomial,
    },

    /// Closed-form roots (degree 4 at most)
    Roots {
        #[arg(value_parser = parse_polynomial, allow_hyphen_values = true)]
        coeffs: Polynomial,
    },

    /// Frobenius companion matrix
    Companion {
        #[arg(value_parser = parse_polynomial, allow_hyphen_values = true)]
        coeffs: Polynomial,
    },
}

impl Commands {
    /// Run the command and return what should be printed
    pub fn run(self, config: &CliConfig) -> Result<String> {
        match self {
            Commands::Eval { coeffs, points } => eval::execute(&coeffs, &points, config),
            Commands::Derive { coeffs, order } => differentiate::execute(&coeffs, order, config),
            Commands::Integrate { coeffs, from, to } => {
                integrate::execute(&coeffs, from.zip(to), config)
            }
            Commands::Add { coeffs, operand } => {
                arithmetic::execute(BinaryOp::Add, &coeffs, operand, config)
            }
            Commands::Sub { coeffs, operand } => {
                arithmetic::execute(BinaryOp::Sub, &coeffs, operand, config)
            }
            Commands::Mul { coeffs, operand } => {
                arithmetic::execute(BinaryOp::Mul, &coeffs, operand, config)
            }
            Commands::Div { dividend, divisor } => div::execute(&dividend, &divisor, config),
            Commands::Roots { coeffs } => roots::execute(&coeffs, config),
            Commands::Companion { coeffs } => companion::execute(&coeffs, config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn run(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let config = CliConfig {
            format: cli.format.unwrap_or_default(),
            precision: cli.precision,
            ..CliConfig::default()
        };
        cli.command.run(&config)
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_level() {
        let cli = Cli::try_parse_from(["polyalg", "roots", "1,-3,2"]).unwrap();
        assert_eq!(cli.log_level(), Level::WARN);

        let cli = Cli::try_parse_from(["polyalg", "-vv", "roots", "1,-3,2"]).unwrap();
        assert_eq!(cli.log_level(), Level::DEBUG);

        let cli = Cli::try_parse_from(["polyalg", "roots", "1,-3,2", "-vvvv"]).unwrap();
        assert_eq!(cli.log_level(), Level::TRACE);

        let cli = Cli::try_parse_from(["polyalg", "-q", "roots", "1,-3,2"]).unwrap();
        assert_eq!(cli.log_level(), Level::ERROR);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["polyalg", "-q", "-v", "roots", "1"]).is_err());
    }

    #[test]
    fn test_negative_leading_coefficient() {
        assert_eq!(run(&["polyalg", "eval", "-1,0,4", "2", "-3"]).unwrap(), "p(2) = 0\np(-3) = -5");
    }

    #[test]
    fn test_commands() {
        assert_eq!(run(&["polyalg", "derive", "1,-8,12,3"]).unwrap(), "3x^2 - 16x + 12");
        assert_eq!(run(&["polyalg", "derive", "1,-8,12,3", "-n", "3"]).unwrap(), "6");
        assert_eq!(run(&["polyalg", "integrate", "[3, -16, 12]"]).unwrap(), "x^3 - 8x^2 + 12x");
        assert_eq!(
            run(&["polyalg", "integrate", "3,0,0", "--from", "-1", "--to", "1"]).unwrap(),
            "integral over [-1, 1] = 2"
        );
        assert_eq!(run(&["polyalg", "mul", "1,0", "[2]"]).unwrap(), "2x");
        assert_eq!(run(&["polyalg", "add", "1,0", "-1"]).unwrap(), "x - 1");
        assert_eq!(run(&["polyalg", "sub", "1,0", "1,0"]).unwrap(), "0");
        assert_eq!(
            run(&["polyalg", "div", "1,5,6", "1,2"]).unwrap(),
            "quotient: x + 3\nremainder: 0"
        );
        assert_eq!(run(&["polyalg", "roots", "1,-3,2"]).unwrap(), "[1, 2]");
        assert_eq!(run(&["polyalg", "companion", "1,-3,2"]).unwrap(), "0\t-2\n1\t3");
    }

    #[test]
    fn test_global_flags() {
        assert_eq!(
            run(&["polyalg", "roots", "1,0,-2", "--precision", "3"]).unwrap(),
            "[-1.414, 1.414]"
        );
        assert_eq!(
            run(&["polyalg", "--format", "json", "roots", "1,-1"]).unwrap(),
            "{\n  \"One\": 1.0\n}"
        );
    }

    #[test]
    fn test_integrate_requires_both_bounds() {
        assert!(Cli::try_parse_from(["polyalg", "integrate", "1,0", "--from", "0"]).is_err());
    }

    #[test]
    fn test_bad_operand_is_rejected_at_parse_time() {
        let err = Cli::try_parse_from(["polyalg", "add", "1,0", "two"]).unwrap_err();
        assert!(err.to_string().contains("Incorrect operand type"));
    }

    #[test]
    fn test_unsupported_degree() {
        assert_eq!(run(&["polyalg", "roots", "1,0,0,0,0,0"]).unwrap(), "unsupported");
    }
}
