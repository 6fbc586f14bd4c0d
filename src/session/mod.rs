//! # Session Module
//!
//! Holds the current user and bearer/refresh tokens, persists them between
//! runs, and fronts every backend call with automatic bearer attachment and
//! a single refresh-then-retry cycle on 401.

pub mod manager;
pub mod models;
pub mod store;

#[cfg(test)]
mod tests;

pub use manager::{RequestOptions, SessionManager};
pub use models::{BasicUser, Session, TokenResponse, User};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
