//! Core types and trait definitions for the placement API.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The store backend and the HTTP layer both depend on it.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod employer;
pub mod error;
pub mod mood;
pub mod store;

pub use error::{Error, Result};
