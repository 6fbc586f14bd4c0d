//! # Facility Module
//!
//! The rotating access code for the club's physical facilities.

pub mod client;
pub mod models;


pub use client::FacilityClient;
pub use models::FacilityPassword;
