//! Binary arithmetic commands.
//!
//! All four share one code path: parse two operands, run the matching
//! `Calculator` operation, and report
//! `The result of {x} {command} {y} is equal to {result}` with the result
//! shown to one decimal place.

use crate::calculation::{format_number, Operation};
use crate::calculator::Calculator;
use crate::commands::{parse_binary_operands, Command};
use crate::errors::CalcResult;

fn execute_binary(operation: Operation, calculator: &mut Calculator, args: &[&str]) -> CalcResult<String> {
    let name = operation.command_name();
    let (x, y) = parse_binary_operands(name, args)?;
    let result = calculator.apply(operation, x, y)?;
    Ok(format_result(name, x, y, result))
}

/// Standard output line for an arithmetic command.
pub fn format_result(command: &str, x: f64, y: f64, result: f64) -> String {
    format!(
        "The result of {} {} {} is equal to {:.1}",
        format_number(x),
        command,
        format_number(y),
        result
    )
}

/// `add <x> <y>`
#[derive(Debug, Clone, Copy, Default)]
pub struct AddCommand;

impl Command for AddCommand {
    fn execute(&self, calculator: &mut Calculator, args: &[&str]) -> CalcResult<String> {
        execute_binary(Operation::Add, calculator, args)
    }

    fn description(&self) -> &str {
        "Add two numbers"
    }
}

/// `subtract <x> <y>`
#[derive(Debug, Clone, Copy, Default)]
pub struct SubtractCommand;

impl Command for SubtractCommand {
    fn execute(&self, calculator: &mut Calculator, args: &[&str]) -> CalcResult<String> {
        execute_binary(Operation::Subtract, calculator, args)
    }

    fn description(&self) -> &str {
        "Subtract the second number from the first"
    }
}

/// `multiply <x> <y>`
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiplyCommand;

impl Command for MultiplyCommand {
    fn execute(&self, calculator: &mut Calculator, args: &[&str]) -> CalcResult<String> {
        execute_binary(Operation::Multiply, calculator, args)
    }

    fn description(&self) -> &str {
        "Multiply two numbers"
    }
}

/// `divide <x> <y>`; fails with `DivisionByZero` when `y` is zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct DivideCommand;

impl Command for DivideCommand {
    fn execute(&self, calculator: &mut Calculator, args: &[&str]) -> CalcResult<String> {
        execute_binary(Operation::Divide, calculator, args)
    }

    fn description(&self) -> &str {
        "Divide the first number by the second"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    #[test]
    fn test_add_output() {
        let mut calc = Calculator::new();
        let out = AddCommand.execute(&mut calc, &["2", "3"]).unwrap();
        assert_eq!(out, "The result of 2.0 add 3.0 is equal to 5.0");
        assert_eq!(calc.history()[0].details(), (Operation::Add, 2.0, 3.0, 5.0));
    }

    #[test]
    fn test_subtract_output() {
        let mut calc = Calculator::new();
        let out = SubtractCommand.execute(&mut calc, &["10", "2.5"]).unwrap();
        assert_eq!(out, "The result of 10.0 subtract 2.5 is equal to 7.5");
    }

    #[test]
    fn test_multiply_output() {
        let mut calc = Calculator::new();
        let out = MultiplyCommand.execute(&mut calc, &["12", "4"]).unwrap();
        assert_eq!(out, "The result of 12.0 multiply 4.0 is equal to 48.0");
    }

    #[test]
    fn test_divide_rounds_for_display_only() {
        let mut calc = Calculator::new();
        let out = DivideCommand.execute(&mut calc, &["10", "3"]).unwrap();
        assert_eq!(out, "The result of 10.0 divide 3.0 is equal to 3.3");
        assert_eq!(calc.result(), 10.0 / 3.0);
    }

    #[test]
    fn test_exponent_operands() {
        let mut calc = Calculator::new();
        let out = AddCommand.execute(&mut calc, &["1e16", "1"]).unwrap();
        assert_eq!(out, "The result of 1e+16 add 1.0 is equal to 10000000000000000.0");

        let out = MultiplyCommand.execute(&mut calc, &["0.00001", "2"]).unwrap();
        assert_eq!(out, "The result of 1e-05 multiply 2.0 is equal to 0.0");
    }

    #[test]
    fn test_divide_by_zero() {
        let mut calc = Calculator::new();
        let err = DivideCommand.execute(&mut calc, &["1", "0"]).unwrap_err();
        assert_eq!(err, CalcError::DivisionByZero);
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_invalid_operand_records_nothing() {
        let mut calc = Calculator::new();
        let err = AddCommand.execute(&mut calc, &["2", "x"]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_wrong_arity() {
        let mut calc = Calculator::new();
        assert!(MultiplyCommand.execute(&mut calc, &[]).is_err());
        assert!(MultiplyCommand.execute(&mut calc, &["1", "2", "3"]).is_err());
    }
}
