//! Plugins bundled with the REPL.
//!
//! These are registered after the built-in commands, filtered by
//! `CALC_PLUGINS` when it is set.

use calc_core::calculation::format_number;
use calc_core::commands::arithmetic::format_result;
use calc_core::commands::{expect_arity, parse_binary_operands, parse_operand, Command};
use calc_core::{CalcResult, Calculator, Plugin};

/// Every plugin shipped with the binary, in load order.
pub fn bundled_plugins() -> Vec<Box<dyn Plugin>> {
    vec![Box::new(SquarePlugin), Box::new(PowerPlugin), Box::new(GreetPlugin)]
}

// ============================================================================
// square
// ============================================================================

/// `square <x>` - multiplies `x` by itself through the calculator, so the
/// result lands in history as `x * x`.
pub struct SquareCommand;

impl Command for SquareCommand {
    fn execute(&self, calculator: &mut Calculator, args: &[&str]) -> CalcResult<String> {
        expect_arity("square", args, 1)?;
        let x = parse_operand("square", args[0])?;
        let result = calculator.multiply(x, x);
        Ok(format!(
            "The result of {} squared is equal to {:.1}",
            format_number(x),
            result
        ))
    }

    fn description(&self) -> &str {
        "Square a number (recorded as a multiplication)"
    }
}

pub struct SquarePlugin;

impl Plugin for SquarePlugin {
    fn name(&self) -> &str {
        "square"
    }

    fn instantiate(&self) -> CalcResult<Box<dyn Command>> {
        Ok(Box::new(SquareCommand))
    }
}

// ============================================================================
// power
// ============================================================================

/// `power <x> <y>` - raises `x` to `y`. Not an engine operation, so it is
/// not recorded in history.
pub struct PowerCommand;

impl Command for PowerCommand {
    fn execute(&self, _calculator: &mut Calculator, args: &[&str]) -> CalcResult<String> {
        let (x, y) = parse_binary_operands("power", args)?;
        Ok(format_result("power", x, y, x.powf(y)))
    }

    fn description(&self) -> &str {
        "Raise the first number to the power of the second (not recorded)"
    }
}

pub struct PowerPlugin;

impl Plugin for PowerPlugin {
    fn name(&self) -> &str {
        "power"
    }

    fn instantiate(&self) -> CalcResult<Box<dyn Command>> {
        Ok(Box::new(PowerCommand))
    }
}

// ============================================================================
// greet
// ============================================================================

/// `greet [name...]`
pub struct GreetCommand;

impl Command for GreetCommand {
    fn execute(&self, _calculator: &mut Calculator, args: &[&str]) -> CalcResult<String> {
        if args.is_empty() {
            Ok("Hello, World!".to_string())
        } else {
            Ok(format!("Hello, {}!", args.join(" ")))
        }
    }

    fn description(&self) -> &str {
        "Say hello"
    }
}

pub struct GreetPlugin;

impl Plugin for GreetPlugin {
    fn name(&self) -> &str {
        "greet"
    }

    fn instantiate(&self) -> CalcResult<Box<dyn Command>> {
        Ok(Box::new(GreetCommand))
    }
}
