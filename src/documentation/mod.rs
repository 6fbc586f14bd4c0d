//! # Documentation Module
//!
//! Each member's regulatory paperwork: liability insurance and pilot license
//! card, with optional file attachments.

pub mod client;
pub mod models;


pub use client::DocumentationClient;
pub use models::{DocumentDownload, Documentation, DocumentationUpdate, FileUpload};
