//! # zenvia-api
//!
//! Async client for the Zenvia v2 messaging REST API.

pub mod zenvia;

pub use zenvia::*;
