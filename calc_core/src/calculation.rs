//! # Calculation Records
//!
//! A `Calculation` is the immutable record of one completed arithmetic
//! operation. The `Calculator` creates one for every successful operation and
//! stores it in its history.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculation::{Calculation, Operation};
//!
//! let calc = Calculation::new(Operation::Add, 2.0, 3.0, 5.0);
//! assert_eq!(calc.to_string(), "2.0 + 3.0 = 5.0");
//! assert_eq!(calc.details(), (Operation::Add, 2.0, 3.0, 5.0));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Operation
// ============================================================================

/// The four arithmetic operations the engine records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operation {
    /// Infix symbol used when rendering a calculation
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Name of the built-in command that performs this operation
    pub fn command_name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Apply the operation without any checks.
    ///
    /// Division by zero follows IEEE 754 here; the `Calculator` rejects a
    /// zero divisor before it ever gets this far.
    pub fn apply(&self, x: f64, y: f64) -> f64 {
        match self {
            Operation::Add => x + y,
            Operation::Subtract => x - y,
            Operation::Multiply => x * y,
            Operation::Divide => x / y,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// Number formatting
// ============================================================================

/// Render a float in shortest round-trip form, keeping a trailing `.0` on
/// integral values (`2.0`, `0.1`, `-7.25`).
///
/// Magnitudes below `1e-4` or from `1e16` up switch to exponent notation with
/// an explicit sign and at least two exponent digits (`1e+16`, `1e-05`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let rendered = format!("{:?}", value);
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => rendered,
    }
}

// ============================================================================
// Calculation
// ============================================================================

/// One completed arithmetic operation.
///
/// Fields are private so a record cannot change after it enters history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    operation: Operation,
    x: f64,
    y: f64,
    result: f64,
}

impl Calculation {
    /// Create a record. No validation: `result` is stored as given.
    pub fn new(operation: Operation, x: f64, y: f64, result: f64) -> Self {
        Calculation {
            operation,
            x,
            y,
            result,
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn result(&self) -> f64 {
        self.result
    }

    /// The `(operation, x, y, result)` tuple exactly as constructed
    pub fn details(&self) -> (Operation, f64, f64, f64) {
        (self.operation, self.x, self.y, self.result)
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            format_number(self.x),
            self.operation,
            format_number(self.y),
            format_number(self.result)
        )
    }
}
