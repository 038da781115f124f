//! Session client for the Help Center REST API.
//!
//! [`RestClient`] owns the transport and the chain context shared by every
//! resource handle it creates.

mod client;

pub use client::RestClient;
