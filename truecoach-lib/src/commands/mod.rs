//! Command-line interface for truecoach
//!
//! Parses arguments with clap and routes each subcommand to a handler that queries the API
//! through [`Service`](crate::api::Service) and renders the result with [`reports`](crate::reports).
//!
//! # Commands
//!
//! - **clients**: list the trainer's clients with their hydrated users
//! - **metrics**: resolve a client's assessment groups, optionally narrowed by fuzzy group
//!   and assessment names
//! - **nutrition-plan** / **nutrition-logs**: show a client's nutrition data
//! - **init**: write the default configuration file
//!
//! All output goes through a [`Host`] so commands run unchanged under test. API commands share
//! `CommonArgs` for credentials and output options, which the `common` module turns into a
//! ready-to-use session.
//!
//! When metric resolution fails part way, the resolved part is still printed before the
//! error is returned.

mod clients;
mod common;
mod config;
mod host;
mod init;
mod metrics;
mod nutrition;
mod run;

#[cfg(debug_assertions)]
pub use config::Config;

pub use clients::{ClientsArgs, list_clients};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use metrics::{MetricsArgs, show_metrics};
pub use nutrition::{NutritionArgs, show_nutrition_logs, show_nutrition_plan};
pub use run::run;
