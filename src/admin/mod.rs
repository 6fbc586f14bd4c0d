//! # Admin Module
//!
//! Superadmin configuration: the platform's outgoing email settings and the
//! test-email trigger.

pub mod client;
pub mod models;

#[cfg(test)]
mod tests;

pub use client::AdminClient;
pub use models::{EmailConfig, EmailConfigUpdate};
