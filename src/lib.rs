//! Rickdex library — fetch, filter, and aggregate the character catalog.
//!
//! This library crate exposes the core modules for integration testing.

pub mod api;
pub mod auth;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
