#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Client library for the TrueCoach coaching API
//!
//! The API returns related records as flat, independently decoded collections that refer to
//! each other by id. This library fetches them and reassembles them into a navigable graph.
//!
//! # Module Organization
//!
//! - [`api`]: Transport, response checking, and the typed [`Service`](api::Service)
//! - [`clients`]: Clients, users, and images, joined best-effort
//! - [`metrics`]: Assessment groups, assessments, and samples, joined strictly with unit coercion
//! - [`nutrition`]: Nutrition plans and daily nutrition logs
//! - `commands`: Command-line interface used by the `truecoach` binary
//! - `reports`: Console and JSON rendering

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod api;
pub mod clients;
pub mod metrics;
pub mod nutrition;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

pub use crate::commands::{Host, run};
