//! Argument handling and session setup shared by the API commands.

use super::Host;
use super::config::{Config, validate_origin};
use crate::Result;
use crate::api::{HttpTransport, Service};
use crate::reports::generate_json;
use camino::Utf8PathBuf;
use clap::{Args, ValueEnum};
use ohno::{IntoAppError, app_err};
use serde::Serialize;
use std::io::{IsTerminal, Write, stdout};

const LOG_TARGET: &str = "  commands";

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Arguments shared by every command that talks to the API
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// TrueCoach API token
    #[arg(long, value_name = "TOKEN", env = "TRUECOACH_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Path to configuration file (default is `truecoach.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Base URL of the API, overriding the configuration file
    #[arg(long, value_name = "URL")]
    pub origin: Option<String>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,

    /// Print results as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Initialize logger based on log level
///
/// A logger installed earlier in the process is left in place.
pub fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}

/// Everything a command needs to query the API and print the answer
pub struct Session<'a, H: Host> {
    service: Service<HttpTransport>,
    host: &'a mut H,
    use_colors: bool,
    json: bool,
}

impl<'a, H: Host> Session<'a, H> {
    /// Initialize logging, load the configuration, and build the service
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or no token was supplied
    pub fn new(host: &'a mut H, args: &CommonArgs) -> Result<Self> {
        init_logging(args.log_level);

        let mut config = Config::load(args.config.as_deref())?;

        if let Some(origin) = &args.origin {
            validate_origin(origin)?;
            config.origin.clone_from(origin);
        }

        let token = args
            .token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| app_err!("an API token is required, pass --token or set TRUECOACH_TOKEN"))?;

        log::debug!(target: LOG_TARGET, "Using origin {} as {}", config.origin, config.role);

        let transport = HttpTransport::new(token, config.origin, config.request_timeout, &config.role)?;

        let use_colors = !args.json
            && match args.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => stdout().is_terminal(),
            };

        Ok(Self {
            service: Service::with_transport(transport),
            host,
            use_colors,
            json: args.json,
        })
    }

    pub const fn service(&self) -> &Service<HttpTransport> {
        &self.service
    }

    /// Print `value` as JSON, or as text produced by `console` with the session's color choice
    pub fn emit<T, F>(&mut self, value: &T, console: F) -> Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&mut String, bool) -> Result<()>,
    {
        let mut text = String::new();

        if self.json {
            generate_json(value, &mut text)?;
        } else {
            console(&mut text, self.use_colors)?;
        }

        self.host.output().write_all(text.as_bytes()).into_app_err("unable to write output")
    }

    /// Print a line to the host's error stream
    pub fn warn(&mut self, message: &str) {
        let _ = writeln!(self.host.error(), "{message}");
    }
}
