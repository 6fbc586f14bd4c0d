//! PiarAPP client library
//!
//! A typed client for the PiarAPP club-management REST backend plus the
//! `piar` command-line front end. The interesting parts live in
//! [`session`] (bearer tokens with a single refresh-retry on 401) and
//! [`events::attendance`] (RSVP state kept consistent with the backend's
//! authoritative answers); everything else is typed pass-through plumbing
//! for clubs, members, news, events, facility codes, documentation and
//! admin configuration.

pub mod admin;
pub mod auth;
pub mod cli;
pub mod clubs;
pub mod common;
pub mod documentation;
pub mod events;
pub mod facility;
pub mod news;
pub mod session;

pub use common::{ApiError, Config, Result};
pub use session::SessionManager;
