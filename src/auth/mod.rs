//! Authentication support for the Wabot client.
//!
//! This module provides:
//! - `Session`: token state for an authenticated session
//! - `renewal_plan`: the decision of how `ensure_valid` renews a session
//! - `claims::token_expiry`: unverified expiry extraction from access tokens

pub mod claims;
pub mod session;

pub use session::{renewal_plan, RenewalPlan, Session};
