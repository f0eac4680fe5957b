//! Contact Directory Core - Shared types library.
//!
//! This crate provides the domain types used by the directory service:
//! the contact list entry as fetched from the list store, the profile
//! property bag returned by the user profile service, and the enriched
//! contact record the aggregation pipeline produces.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Login identifiers, property bags, contact entries and records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
