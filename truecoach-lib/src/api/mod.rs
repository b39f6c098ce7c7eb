//! Access to the TrueCoach API
//!
//! This module is the thin layer between the network and the hydration engines. It fetches
//! raw payloads, rejects error envelopes and failing statuses, and decodes the known
//! response shapes before handing them to the [`clients`](crate::clients) and
//! [`metrics`](crate::metrics) modules.
//!
//! # Implementation Model
//!
//! - [`Transport`] abstracts "given a path, return a status and a byte payload". The
//!   production implementation is [`HttpTransport`], a `reqwest` client carrying the bearer
//!   token and the `Role` header.
//! - [`Service`] issues one request per call, checks the response, decodes it, and runs the
//!   relevant hydrator. Nothing is cached between calls and only the first page of a
//!   collection is ever read.
//! - [`wire`] holds the serde helpers shared by the response shapes (padded values, date
//!   formats, nullable fields, the pagination block, and the error envelope).

mod service;
mod transport;
pub mod wire;

pub use service::{DEFAULT_ORIGIN, DEFAULT_REQUEST_TIMEOUT, DEFAULT_ROLE, Service};
pub use transport::{HttpTransport, Payload, Transport};
