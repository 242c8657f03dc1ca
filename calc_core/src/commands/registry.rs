//! # Command Registry & Dispatcher
//!
//! `CommandRegistry` maps case-sensitive names to `Command` trait objects.
//! Registering a name that already exists replaces the old binding, which is
//! how plugins override built-ins.
//!
//! `Dispatcher` pairs a registry with the single `Calculator` every command
//! operates on, and is the only entry point the REPL talks to.
//!
//! ## Usage
//!
//! ```rust
//! use calc_core::commands::Dispatcher;
//!
//! let mut dispatcher = Dispatcher::new();
//! assert_eq!(
//!     dispatcher.dispatch("add", &["2", "3"]),
//!     "The result of 2.0 add 3.0 is equal to 5.0"
//! );
//! assert_eq!(
//!     dispatcher.dispatch("divide", &["1", "0"]),
//!     "An error occurred: Cannot divide by zero"
//! );
//! assert_eq!(dispatcher.dispatch("bogus", &[]), "Unknown command: bogus");
//! ```

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, info, warn};

use crate::calculator::Calculator;
use crate::commands::{builtin_commands, Command};
use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Registry
// ============================================================================

/// Name-to-command lookup table.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in command set.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (name, command) in builtin_commands() {
            registry.register(name, command);
        }
        info!(commands = ?registry.names(), "default commands initialized");
        registry
    }

    /// Bind `name` to `command`, returning the binding it replaced, if any.
    pub fn register(&mut self, name: impl Into<String>, command: Box<dyn Command>) -> Option<Box<dyn Command>> {
        let name = name.into();
        let previous = self.commands.insert(name.clone(), command);
        if previous.is_some() {
            warn!(command = %name, "command overridden");
        } else {
            debug!(command = %name, "command registered");
        }
        previous
    }

    /// Look up a command by exact name.
    pub fn resolve(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|command| command.as_ref())
    }

    /// Registered names in alphabetical order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// `(name, description)` pairs in alphabetical order, for menus.
    pub fn describe(&self) -> Vec<(&str, &str)> {
        self.names()
            .into_iter()
            .filter_map(|name| self.resolve(name).map(|command| (name, command.description())))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.names())
            .finish()
    }
}

// ============================================================================
// Dispatcher
// ============================================================================

/// Resolves command names and runs them against one shared `Calculator`.
#[derive(Debug)]
pub struct Dispatcher {
    registry: CommandRegistry,
    calculator: Calculator,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Dispatcher with the built-in commands and a fresh calculator.
    pub fn new() -> Self {
        Self::with_registry(CommandRegistry::with_builtins())
    }

    /// Dispatcher over a caller-supplied registry.
    pub fn with_registry(registry: CommandRegistry) -> Self {
        Dispatcher {
            registry,
            calculator: Calculator::new(),
        }
    }

    /// Bind `name` to `command` (last write wins).
    pub fn register(&mut self, name: impl Into<String>, command: Box<dyn Command>) -> Option<Box<dyn Command>> {
        self.registry.register(name, command)
    }

    pub fn resolve(&self, name: &str) -> Option<&dyn Command> {
        self.registry.resolve(name)
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Resolve and run a command, keeping the error typed.
    ///
    /// # Errors
    ///
    /// `CalcError::UnknownCommand` if nothing is registered under `name`,
    /// otherwise whatever the command itself returns.
    pub fn execute(&mut self, name: &str, args: &[&str]) -> CalcResult<String> {
        let command = self
            .registry
            .resolve(name)
            .ok_or_else(|| CalcError::unknown_command(name))?;
        debug!(command = name, ?args, "executing command");
        command.execute(&mut self.calculator, args)
    }

    /// Resolve and run a command, always producing a printable string.
    ///
    /// Unknown names yield `Unknown command: {name}`; every other error is
    /// reported as `An error occurred: {message}`.
    pub fn dispatch(&mut self, name: &str, args: &[&str]) -> String {
        match self.execute(name, args) {
            Ok(output) => output,
            Err(err @ CalcError::UnknownCommand { .. }) => {
                debug!(command = name, "unknown command");
                err.to_string()
            }
            Err(err) => {
                if err.is_user_error() {
                    debug!(command = name, code = err.error_code(), "command rejected input");
                } else {
                    warn!(command = name, code = err.error_code(), error = %err, "command failed");
                }
                format!("An error occurred: {}", err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::Operation;
    use crate::commands::{parse_binary_operands, AddCommand};

    /// Plugin-style replacement for `add` that doubles the sum.
    struct DoublingAdd;

    impl Command for DoublingAdd {
        fn execute(&self, calculator: &mut Calculator, args: &[&str]) -> CalcResult<String> {
            let (x, y) = parse_binary_operands("add", args)?;
            let sum = calculator.add(x, y);
            Ok(format!("Doubled: {:.1}", sum * 2.0))
        }
    }

    /// Command that fails for reasons unrelated to the user's input.
    struct Misconfigured;

    impl Command for Misconfigured {
        fn execute(&self, _calculator: &mut Calculator, _args: &[&str]) -> CalcResult<String> {
            Err(CalcError::plugin_load("stats", "backing table missing"))
        }
    }

    #[test]
    fn test_dispatch_add_scenario() {
        let mut dispatcher = Dispatcher::new();
        let out = dispatcher.dispatch("add", &["2", "3"]);
        assert_eq!(out, "The result of 2.0 add 3.0 is equal to 5.0");

        let history = dispatcher.calculator().history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].details(), (Operation::Add, 2.0, 3.0, 5.0));
    }

    #[test]
    fn test_dispatch_divide_by_zero() {
        let mut dispatcher = Dispatcher::new();
        assert_eq!(
            dispatcher.dispatch("divide", &["1", "0"]),
            "An error occurred: Cannot divide by zero"
        );
        assert!(dispatcher.calculator().history().is_empty());
    }

    #[test]
    fn test_dispatch_unknown_command() {
        let mut dispatcher = Dispatcher::new();
        assert_eq!(dispatcher.dispatch("bogus", &[]), "Unknown command: bogus");
        assert_eq!(
            dispatcher.execute("bogus", &[]),
            Err(CalcError::unknown_command("bogus"))
        );
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut dispatcher = Dispatcher::new();
        assert!(dispatcher.resolve("add").is_some());
        assert!(dispatcher.resolve("ADD").is_none());
        assert_eq!(dispatcher.dispatch("Add", &["1", "2"]), "Unknown command: Add");
    }

    #[test]
    fn test_dispatch_invalid_argument() {
        let mut dispatcher = Dispatcher::new();
        assert_eq!(
            dispatcher.dispatch("add", &["2"]),
            "An error occurred: Invalid arguments for 'add': expected 2 operands, got 1"
        );
        assert_eq!(
            dispatcher.dispatch("history", &["extra"]),
            "An error occurred: Invalid arguments for 'history': expected 0 operands, got 1"
        );
    }

    #[test]
    fn test_dispatch_internal_failure_is_still_a_string() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register("stats", Box::new(Misconfigured));

        let err = dispatcher.execute("stats", &[]).unwrap_err();
        assert!(!err.is_user_error());
        assert_eq!(
            dispatcher.dispatch("stats", &[]),
            "An error occurred: Failed to load plugin 'stats': backing table missing"
        );
        assert!(dispatcher.calculator().history().is_empty());
    }

    #[test]
    fn test_plugin_override() {
        let mut dispatcher = Dispatcher::new();
        let previous = dispatcher.register("add", Box::new(DoublingAdd));
        assert!(previous.is_some());

        assert_eq!(dispatcher.dispatch("add", &["2", "3"]), "Doubled: 10.0");
    }

    #[test]
    fn test_register_new_name() {
        let mut registry = CommandRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.register("plus", Box::new(AddCommand)).is_none());
        assert!(registry.resolve("plus").is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_history_flow_through_dispatch() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.dispatch("add", &["1", "2"]);
        dispatcher.dispatch("multiply", &["3", "4"]);

        assert_eq!(
            dispatcher.dispatch("last", &[]),
            "Last calculation: 3.0 * 4.0 = 12.0"
        );
        assert_eq!(
            dispatcher.dispatch("history", &[]),
            "Calculation history:\n1. 1.0 + 2.0 = 3.0\n2. 3.0 * 4.0 = 12.0"
        );

        dispatcher.dispatch("clear_history", &[]);
        assert_eq!(dispatcher.dispatch("last", &[]), "No calculations in history.");
    }

    #[test]
    fn test_describe_sorted() {
        let registry = CommandRegistry::with_builtins();
        let described = registry.describe();
        assert_eq!(described.len(), 7);
        assert_eq!(described[0], ("add", "Add two numbers"));
        assert_eq!(described.last().unwrap().0, "subtract");
    }
}
