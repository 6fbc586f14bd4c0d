//! # Auth Module
//!
//! This module handles all authentication-related functionality including:
//! - Registration (direct and from club invitations)
//! - Password and Google OAuth login
//! - Pending invitation management
//! - The current user's profile and preferences

pub mod client;
pub mod models;
pub mod oauth;
pub mod validators;


pub use client::AuthClient;
pub use models::{Invitation, ProfileUpdate, RegisterRequest};
