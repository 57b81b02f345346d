//! Reservation pricing and availability engine for cabin rentals.
//!
//! This crate prices multi-night stays from a per-category rate table and
//! checks candidate stays against a cabin's occupied dates. The same
//! implementation backs both the booking preview and the authoritative
//! server path.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod migration;
pub mod models;
