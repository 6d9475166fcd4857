//! HTTP client module for the Wabot messaging API.
//!
//! This module provides the `WabotClient` for authenticating against the
//! Wabot API and performing template and message operations.
//!
//! The API uses JWT bearer tokens obtained through the client-credential
//! authenticate endpoint, renewable through the refresh endpoint.

pub mod client;
pub mod error;

pub use client::WabotClient;
pub use error::{Error, Result};
