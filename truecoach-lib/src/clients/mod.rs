//! Clients, their users, and profile images
//!
//! The `/clients` endpoint returns three flat collections side by side. [`ClientsResponse`]
//! decodes them and [`ClientsResponse::hydrate`] joins them into [`Client`] values whose
//! [`User`] (and the user's [`Image`]) are attached.
//!
//! The join is best-effort: a client without a matching user, or a user without a matching
//! image, is a normal state and simply leaves the reference unset.

mod client;
mod clients_response;
mod image;
mod user;

pub use client::{Client, ClientLinks, ClientSettings};
pub use clients_response::ClientsResponse;
pub use image::{Image, ImageParent};
pub use user::User;
