//! # News Module
//!
//! Club news CRUD plus the comment threads under each item.

pub mod client;
pub mod models;
pub mod validators;


pub use client::NewsClient;
pub use models::{Comment, NewsCreate, NewsItem, NewsUpdate};
