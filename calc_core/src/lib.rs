//! # calc_core - Command Dispatch & Calculation History Engine
//!
//! `calc_core` is the computational heart of the interactive calculator. It
//! owns arithmetic, the calculation history, and the name-to-command table
//! the REPL dispatches through. It performs no I/O; reading input and
//! printing output belong to the driver (`calc_cli`).
//!
//! ## Design Philosophy
//!
//! - **Owned state**: Each `Calculator` owns its history, nothing is global
//! - **Typed errors**: Failures are `CalcError` values, turned into strings only at the dispatch boundary
//! - **Open command set**: Commands are trait objects; plugins register more at startup
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::Dispatcher;
//!
//! let mut dispatcher = Dispatcher::new();
//! println!("{}", dispatcher.dispatch("multiply", &["6", "7"]));
//! assert_eq!(dispatcher.calculator().result(), 42.0);
//! ```
//!
//! ## Modules
//!
//! - [`calculation`] - Immutable calculation records
//! - [`history`] - Append-only history container
//! - [`calculator`] - Arithmetic engine
//! - [`commands`] - Command trait, built-in commands, registry and dispatcher
//! - [`plugins`] - Startup registration of host-supplied commands
//! - [`errors`] - Structured error types

pub mod calculation;
pub mod calculator;
pub mod commands;
pub mod errors;
pub mod history;
pub mod plugins;

// Re-export commonly used types at crate root for convenience
pub use calculation::{Calculation, Operation};
pub use calculator::Calculator;
pub use commands::{Command, CommandRegistry, Dispatcher};
pub use errors::{CalcError, CalcResult};
pub use history::History;
pub use plugins::{Plugin, PluginLoader, PluginReport};
