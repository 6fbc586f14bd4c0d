//! # Clubs Module
//!
//! Club CRUD, the caller's per-club role, and the members screen
//! (listing, invitations, removal, role changes).

pub mod client;
pub mod models;
pub mod validators;


pub use client::ClubsClient;
pub use models::{Club, ClubCreate, ClubUpdate, Member, MemberInvite};
