//! History commands: list, clear, and show the last calculation.

use crate::calculator::Calculator;
use crate::commands::{expect_arity, Command};
use crate::errors::CalcResult;

/// Shown by `history` and `last` when nothing has been calculated yet
pub const EMPTY_HISTORY: &str = "No calculations in history.";

/// `history` - numbered listing, oldest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetHistoryCommand;

impl Command for GetHistoryCommand {
    fn execute(&self, calculator: &mut Calculator, args: &[&str]) -> CalcResult<String> {
        expect_arity("history", args, 0)?;

        let history = calculator.history();
        if history.is_empty() {
            return Ok(EMPTY_HISTORY.to_string());
        }

        let mut lines = Vec::with_capacity(history.len() + 1);
        lines.push("Calculation history:".to_string());
        for (i, calc) in history.iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, calc));
        }
        Ok(lines.join("\n"))
    }

    fn description(&self) -> &str {
        "Show every calculation performed so far"
    }
}

/// `clear_history`
#[derive(Debug, Clone, Copy, Default)]
pub struct ClearHistoryCommand;

impl Command for ClearHistoryCommand {
    fn execute(&self, calculator: &mut Calculator, args: &[&str]) -> CalcResult<String> {
        expect_arity("clear_history", args, 0)?;
        calculator.clear_history();
        Ok("Calculation history cleared.".to_string())
    }

    fn description(&self) -> &str {
        "Forget all previous calculations"
    }
}

/// `last`
#[derive(Debug, Clone, Copy, Default)]
pub struct GetLastCalculationCommand;

impl Command for GetLastCalculationCommand {
    fn execute(&self, calculator: &mut Calculator, args: &[&str]) -> CalcResult<String> {
        expect_arity("last", args, 0)?;
        Ok(match calculator.last_calculation() {
            Some(calc) => format!("Last calculation: {}", calc),
            None => EMPTY_HISTORY.to_string(),
        })
    }

    fn description(&self) -> &str {
        "Show the most recent calculation"
    }
}
