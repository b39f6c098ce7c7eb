//! Rendering of API results for people and for programs
//!
//! Two generators are provided for every kind of result:
//! - **Console**: aligned plain text, optionally colored with ANSI escapes
//! - **JSON**: pretty-printed machine-readable data
//!
//! Both write into any [`core::fmt::Write`] so callers decide where the text ends up.
//! Collections are rendered in ascending id order regardless of the order the API used.

mod console;
mod json;
mod selection;

pub use console::{
    generate_clients as generate_clients_console, generate_metrics as generate_metrics_console,
    generate_nutrition_logs as generate_nutrition_logs_console, generate_nutrition_plan as generate_nutrition_plan_console,
};
pub use json::generate as generate_json;
pub use selection::{GroupSelection, select_metrics};
