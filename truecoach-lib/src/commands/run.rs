//! Command dispatch logic for truecoach

use super::{
    ClientsArgs, InitArgs, MetricsArgs, NutritionArgs, init_config, list_clients, show_metrics, show_nutrition_logs, show_nutrition_plan,
};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "truecoach", bin_name = "truecoach", version, author, long_about = None)]
#[command(about = "Query a TrueCoach trainer account from the command line")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the trainer's clients with their user profiles
    Clients(ClientsArgs),
    /// Show a client's assessment groups and latest samples
    Metrics(MetricsArgs),
    /// Show a client's weekly nutrition plan
    NutritionPlan(NutritionArgs),
    /// Show a client's daily nutrition logs
    NutritionLogs(NutritionArgs),
    /// Generate a default configuration file
    Init(InitArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        Command::Clients(clients_args) => list_clients(host, clients_args).await,
        Command::Metrics(metrics_args) => show_metrics(host, metrics_args).await,
        Command::NutritionPlan(nutrition_args) => show_nutrition_plan(host, nutrition_args).await,
        Command::NutritionLogs(nutrition_args) => show_nutrition_logs(host, nutrition_args).await,
        Command::Init(init_args) => init_config(host, init_args),
    }
}
