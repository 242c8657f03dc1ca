//! # Plugin Loading
//!
//! Plugins are extra commands supplied by the host at startup. The host hands
//! the loader a list of [`Plugin`] values; how the host found them is not this
//! module's concern. Each plugin is instantiated and registered into the
//! dispatcher in order, so a plugin registered under a built-in name replaces
//! the built-in.
//!
//! A plugin that fails to instantiate is logged and skipped. It never stops the
//! remaining plugins from loading, and the built-in commands stay available.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculator::Calculator;
//! use calc_core::commands::{Command, Dispatcher};
//! use calc_core::errors::{CalcError, CalcResult};
//! use calc_core::plugins::{Plugin, PluginLoader};
//!
//! struct Hello;
//!
//! impl Command for Hello {
//!     fn execute(&self, _calculator: &mut Calculator, _args: &[&str]) -> CalcResult<String> {
//!         Ok("hello".to_string())
//!     }
//! }
//!
//! struct HelloPlugin;
//!
//! impl Plugin for HelloPlugin {
//!     fn name(&self) -> &str {
//!         "hello"
//!     }
//!
//!     fn instantiate(&self) -> CalcResult<Box<dyn Command>> {
//!         Ok(Box::new(Hello))
//!     }
//! }
//!
//! let mut dispatcher = Dispatcher::new();
//! let report = PluginLoader::new(vec![Box::new(HelloPlugin)]).load_into(&mut dispatcher);
//!
//! assert_eq!(report.loaded, vec!["hello".to_string()]);
//! assert_eq!(dispatcher.dispatch("hello", &[]), "hello");
//! ```

use std::collections::HashSet;

use serde::Serialize;
use tracing::{info, warn};

use crate::commands::{Command, Dispatcher};
use crate::errors::{CalcError, CalcResult};

/// Source of one additional command.
pub trait Plugin: Send + Sync {
    /// Name the command is registered under
    fn name(&self) -> &str;

    /// Build the command instance.
    ///
    /// # Errors
    ///
    /// Any error; the loader reports it as `CalcError::PluginLoad`.
    fn instantiate(&self) -> CalcResult<Box<dyn Command>>;
}

/// Outcome of a [`PluginLoader::load_into`] run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PluginReport {
    /// Names registered, in load order
    pub loaded: Vec<String>,
    /// Names not in the enabled set
    pub skipped: Vec<String>,
    /// Plugins that failed to instantiate
    pub failed: Vec<CalcError>,
}

impl PluginReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Registers host-supplied plugins into a dispatcher.
pub struct PluginLoader {
    plugins: Vec<Box<dyn Plugin>>,
    enabled: Option<HashSet<String>>,
}

impl PluginLoader {
    /// Loader over every plugin in `plugins`.
    pub fn new(plugins: Vec<Box<dyn Plugin>>) -> Self {
        PluginLoader {
            plugins,
            enabled: None,
        }
    }

    /// Only load plugins whose names appear in `names`.
    pub fn with_enabled<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enabled = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Names of every plugin the loader knows about, enabled or not.
    pub fn available(&self) -> Vec<&str> {
        self.plugins.iter().map(|plugin| plugin.name()).collect()
    }

    fn is_enabled(&self, name: &str) -> bool {
        self.enabled
            .as_ref()
            .map_or(true, |enabled| enabled.contains(name))
    }

    /// Instantiate and register each enabled plugin.
    pub fn load_into(&self, dispatcher: &mut Dispatcher) -> PluginReport {
        let mut report = PluginReport::default();

        for plugin in &self.plugins {
            let name = plugin.name().to_string();

            if !self.is_enabled(&name) {
                info!(plugin = %name, "plugin disabled by configuration");
                report.skipped.push(name);
                continue;
            }

            match plugin.instantiate() {
                Ok(command) => {
                    if dispatcher.register(name.clone(), command).is_some() {
                        info!(plugin = %name, "plugin replaced an existing command");
                    }
                    info!(plugin = %name, "plugin loaded");
                    report.loaded.push(name);
                }
                Err(err) => {
                    let err = match err {
                        CalcError::PluginLoad { .. } => err,
                        other => CalcError::plugin_load(&name, other.to_string()),
                    };
                    warn!(plugin = %name, error = %err, "skipping plugin");
                    report.failed.push(err);
                }
            }
        }

        info!(
            loaded = report.loaded.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "plugins loaded"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Calculator;
    use crate::commands::parse_binary_operands;

    struct DoublingAdd;

    impl Command for DoublingAdd {
        fn execute(&self, calculator: &mut Calculator, args: &[&str]) -> CalcResult<String> {
            let (x, y) = parse_binary_operands("add", args)?;
            let doubled = calculator.multiply(x + y, 2.0);
            Ok(format!("Doubled sum: {:.1}", doubled))
        }
    }

    struct DoublingAddPlugin;

    impl Plugin for DoublingAddPlugin {
        fn name(&self) -> &str {
            "add"
        }

        fn instantiate(&self) -> CalcResult<Box<dyn Command>> {
            Ok(Box::new(DoublingAdd))
        }
    }

    struct BrokenPlugin;

    impl Plugin for BrokenPlugin {
        fn name(&self) -> &str {
            "broken"
        }

        fn instantiate(&self) -> CalcResult<Box<dyn Command>> {
            Err(CalcError::invalid_argument("broken", "missing configuration"))
        }
    }

    struct EchoPlugin;

    struct Echo;

    impl Command for Echo {
        fn execute(&self, _calculator: &mut Calculator, args: &[&str]) -> CalcResult<String> {
            Ok(args.join(" "))
        }
    }

    impl Plugin for EchoPlugin {
        fn name(&self) -> &str {
            "echo"
        }

        fn instantiate(&self) -> CalcResult<Box<dyn Command>> {
            Ok(Box::new(Echo))
        }
    }

    #[test]
    fn test_plugin_overrides_builtin() {
        let mut dispatcher = Dispatcher::new();
        let loader = PluginLoader::new(vec![Box::new(DoublingAddPlugin)]);
        let report = loader.load_into(&mut dispatcher);

        assert_eq!(report.loaded, vec!["add".to_string()]);
        assert_eq!(dispatcher.dispatch("add", &["2", "3"]), "Doubled sum: 10.0");
    }

    #[test]
    fn test_broken_plugin_does_not_block_others() {
        let mut dispatcher = Dispatcher::new();
        let loader = PluginLoader::new(vec![Box::new(BrokenPlugin), Box::new(EchoPlugin)]);
        let report = loader.load_into(&mut dispatcher);

        assert!(report.has_failures());
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].error_code(), "PLUGIN_LOAD_FAILURE");
        assert_eq!(report.loaded, vec!["echo".to_string()]);

        assert_eq!(dispatcher.dispatch("echo", &["hi", "there"]), "hi there");
        assert!(dispatcher.resolve("broken").is_none());
        // Built-ins are still intact
        assert_eq!(
            dispatcher.dispatch("multiply", &["2", "3"]),
            "The result of 2.0 multiply 3.0 is equal to 6.0"
        );
    }

    #[test]
    fn test_enabled_filter() {
        let mut dispatcher = Dispatcher::new();
        let loader = PluginLoader::new(vec![Box::new(DoublingAddPlugin), Box::new(EchoPlugin)])
            .with_enabled(["echo"]);
        let report = loader.load_into(&mut dispatcher);

        assert_eq!(report.loaded, vec!["echo".to_string()]);
        assert_eq!(report.skipped, vec!["add".to_string()]);
        assert_eq!(
            dispatcher.dispatch("add", &["2", "3"]),
            "The result of 2.0 add 3.0 is equal to 5.0"
        );
    }

    #[test]
    fn test_available_lists_all() {
        let loader = PluginLoader::new(vec![Box::new(EchoPlugin), Box::new(BrokenPlugin)])
            .with_enabled(Vec::<String>::new());
        assert_eq!(loader.available(), vec!["echo", "broken"]);
    }

    #[test]
    fn test_empty_loader() {
        let mut dispatcher = Dispatcher::new();
        let report = PluginLoader::new(Vec::new()).load_into(&mut dispatcher);
        assert_eq!(report, PluginReport::default());
        assert_eq!(dispatcher.registry().len(), 7);
    }
}
