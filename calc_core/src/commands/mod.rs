//! # Commands
//!
//! Every user-visible action is a named `Command`. A command parses its own
//! operand tokens, delegates to the `Calculator`, and formats the outcome as a
//! human-readable string.
//!
//! ## Built-in commands
//!
//! | Name | Type | Operands |
//! |------|------|----------|
//! | `add` | [`AddCommand`] | 2 numbers |
//! | `subtract` | [`SubtractCommand`] | 2 numbers |
//! | `multiply` | [`MultiplyCommand`] | 2 numbers |
//! | `divide` | [`DivideCommand`] | 2 numbers |
//! | `history` | [`GetHistoryCommand`] | none |
//! | `clear_history` | [`ClearHistoryCommand`] | none |
//! | `last` | [`GetLastCalculationCommand`] | none |
//!
//! ## Modules
//!
//! - [`arithmetic`] - The four binary arithmetic commands
//! - [`history`] - History inspection and clearing
//! - [`registry`] - Name lookup and dispatch

pub mod arithmetic;
pub mod history;
pub mod registry;

use crate::calculator::Calculator;
use crate::errors::{CalcError, CalcResult};

pub use arithmetic::{AddCommand, DivideCommand, MultiplyCommand, SubtractCommand};
pub use history::{ClearHistoryCommand, GetHistoryCommand, GetLastCalculationCommand};
pub use registry::{CommandRegistry, Dispatcher};

/// A named, invokable unit of work.
///
/// Implementations receive the calculator as context rather than owning it,
/// so one calculator (and its history) serves every registered command.
pub trait Command: Send + Sync {
    /// Run the command against `calculator` with the raw operand tokens.
    fn execute(&self, calculator: &mut Calculator, args: &[&str]) -> CalcResult<String>;

    /// One-line description shown in the command menu
    fn description(&self) -> &str {
        ""
    }
}

/// The default command set, keyed by the names the REPL understands.
pub fn builtin_commands() -> Vec<(&'static str, Box<dyn Command>)> {
    vec![
        ("add", Box::new(AddCommand) as Box<dyn Command>),
        ("subtract", Box::new(SubtractCommand) as Box<dyn Command>),
        ("multiply", Box::new(MultiplyCommand) as Box<dyn Command>),
        ("divide", Box::new(DivideCommand) as Box<dyn Command>),
        ("history", Box::new(GetHistoryCommand) as Box<dyn Command>),
        ("clear_history", Box::new(ClearHistoryCommand) as Box<dyn Command>),
        ("last", Box::new(GetLastCalculationCommand) as Box<dyn Command>),
    ]
}

/// Check that exactly `expected` operands were supplied.
pub fn expect_arity(command: &str, args: &[&str], expected: usize) -> CalcResult<()> {
    if args.len() != expected {
        return Err(CalcError::invalid_argument(
            command,
            format!(
                "expected {} operand{}, got {}",
                expected,
                if expected == 1 { "" } else { "s" },
                args.len()
            ),
        ));
    }
    Ok(())
}

/// Parse one operand token as a float.
pub fn parse_operand(command: &str, token: &str) -> CalcResult<f64> {
    token
        .trim()
        .parse::<f64>()
        .map_err(|_| CalcError::invalid_argument(command, format!("'{}' is not a valid number", token)))
}

/// Parse exactly two numeric operands.
pub fn parse_binary_operands(command: &str, args: &[&str]) -> CalcResult<(f64, f64)> {
    expect_arity(command, args, 2)?;
    Ok((parse_operand(command, args[0])?, parse_operand(command, args[1])?))
}
