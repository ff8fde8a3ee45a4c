// web_app/api/mod.rs - REST client for the lost-and-found service
//
// This module contains the reqwest client, session-cookie forwarding and
// the process-wide client registry used by the server functions.

#[cfg(feature = "remote")]
pub mod client;

#[cfg(feature = "remote")]
pub mod session;

#[cfg(feature = "remote")]
pub mod shared;

#[cfg(feature = "remote")]
pub use client::{ApiClient, Listing};

#[cfg(feature = "remote")]
pub use session::{Session, SessionReply};
