//! # Calculator Engine
//!
//! Stateful arithmetic facade. Every successful operation updates the running
//! `result` and appends a `Calculation` to the calculator's own `History`.
//! No rounding happens here; presentation is the caller's concern.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculator::Calculator;
//! use calc_core::errors::CalcError;
//!
//! let mut calc = Calculator::new();
//! assert_eq!(calc.add(2.0, 3.0), 5.0);
//! assert_eq!(calc.divide(1.0, 0.0), Err(CalcError::DivisionByZero));
//!
//! // The failed division left no trace
//! assert_eq!(calc.history().len(), 1);
//! assert_eq!(calc.last_calculation().unwrap().to_string(), "2.0 + 3.0 = 5.0");
//! ```

use tracing::debug;

use crate::calculation::{Calculation, Operation};
use crate::errors::{CalcError, CalcResult};
use crate::history::History;

/// Arithmetic engine with an owned calculation history.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    /// Value produced by the last successful operation (0.0 initially)
    result: f64,
    history: History,
}

impl Calculator {
    /// Create a calculator with `result == 0.0` and an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, x: f64, y: f64) -> f64 {
        self.record(Operation::Add, x, y)
    }

    pub fn subtract(&mut self, x: f64, y: f64) -> f64 {
        self.record(Operation::Subtract, x, y)
    }

    pub fn multiply(&mut self, x: f64, y: f64) -> f64 {
        self.record(Operation::Multiply, x, y)
    }

    /// Divide `x` by `y`.
    ///
    /// # Errors
    ///
    /// `CalcError::DivisionByZero` when `y == 0.0` (either sign). Neither the
    /// history nor the running result change in that case.
    pub fn divide(&mut self, x: f64, y: f64) -> CalcResult<f64> {
        if y == 0.0 {
            debug!(x, "rejected division by zero");
            return Err(CalcError::DivisionByZero);
        }
        Ok(self.record(Operation::Divide, x, y))
    }

    /// Perform any of the four operations by value.
    pub fn apply(&mut self, operation: Operation, x: f64, y: f64) -> CalcResult<f64> {
        match operation {
            Operation::Add => Ok(self.add(x, y)),
            Operation::Subtract => Ok(self.subtract(x, y)),
            Operation::Multiply => Ok(self.multiply(x, y)),
            Operation::Divide => self.divide(x, y),
        }
    }

    /// Value produced by the last successful operation
    pub fn result(&self) -> f64 {
        self.result
    }

    /// Full history, oldest first.
    pub fn history(&self) -> &[Calculation] {
        self.history.entries()
    }

    /// Most recent calculation, or `None` if the history is empty.
    pub fn last_calculation(&self) -> Option<&Calculation> {
        self.history.last()
    }

    /// Forget every recorded calculation. Safe to call on an empty history.
    pub fn clear_history(&mut self) {
        debug!(cleared = self.history.len(), "clearing history");
        self.history.clear();
    }

    /// Export the in-memory history as a JSON array.
    pub fn history_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(&self.history)?)
    }

    fn record(&mut self, operation: Operation, x: f64, y: f64) -> f64 {
        let result = operation.apply(x, y);
        self.history.push(Calculation::new(operation, x, y, result));
        self.result = result;
        debug!(op = operation.symbol(), x, y, result, "calculation recorded");
        result
    }
}
