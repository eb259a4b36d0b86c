//! # MindAnchor Common Library
//!
//! Shared code for MindAnchor backend services including:
//! - Error taxonomy (`Error` enum)
//! - Configuration loading and resolution
//! - API request/response types

pub mod api;
pub mod config;
pub mod error;

pub use error::{Error, Result};
