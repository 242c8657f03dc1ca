//! # Calculator CLI Application
//!
//! Interactive front end for `calc_core`. Reads commands from stdin, sends
//! them through the dispatcher and prints the results.
//!
//! ## Environment
//!
//! - `ENVIRONMENT` - DEVELOPMENT, TESTING or PRODUCTION (default)
//! - `CALC_LOG` / `RUST_LOG` - tracing filter directive
//! - `CALC_PLUGINS` - comma separated list of bundled plugins to load
//! - `CALC_PROMPT` - input prompt

mod config;
mod plugins;
mod repl;

use std::io;
use std::process;

use calc_core::{Dispatcher, Plugin, PluginLoader};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, ConfigError};
use crate::repl::Repl;

fn init_tracing(config: &AppConfig) -> Result<(), ConfigError> {
    let directive = config.log_directive();
    let filter = EnvFilter::try_new(directive).map_err(|e| ConfigError::InvalidLogFilter {
        directive: directive.to_string(),
        reason: e.to_string(),
    })?;

    // Logs go to stderr so they never interleave with REPL output on stdout
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn build_dispatcher(config: &AppConfig, bundled: Vec<Box<dyn Plugin>>) -> Dispatcher {
    let mut dispatcher = Dispatcher::new();

    let mut loader = PluginLoader::new(bundled);
    info!(available = ?loader.available(), "plugins found");
    if let Some(enabled) = &config.plugins {
        loader = loader.with_enabled(enabled.iter().cloned());
    }

    // Individual failures are already logged by the loader
    let report = loader.load_into(&mut dispatcher);
    match serde_json::to_string(&report) {
        Ok(json) => debug!(report = %json, "plugin report"),
        Err(e) => warn!(error = %e, "could not serialize plugin report"),
    }

    info!(commands = ?dispatcher.registry().names(), "commands ready");
    dispatcher
}

fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = init_tracing(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    info!(environment = %config.environment, "configuration loaded");

    let dispatcher = build_dispatcher(&config, plugins::bundled_plugins());

    println!("Calculator - type 'menu' to list commands, 'exit' to quit.");

    let mut repl = Repl::new(dispatcher, config.prompt.clone());
    let stdin = io::stdin();
    if let Err(e) = repl.run(stdin.lock(), io::stdout()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    info!(
        calculations = repl.dispatcher().calculator().history().len(),
        "session ended"
    );
}
