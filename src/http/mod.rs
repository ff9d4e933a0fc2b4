//! HTTP client module for the CMS admin API
//!
//! Provides JSON POST helpers with bearer authentication.

mod client;

pub use client::{require_field, HttpClient, HttpError};
