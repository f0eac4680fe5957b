//! Contact directory service library.
//!
//! This crate provides the directory service as a library, allowing it to be
//! tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod directory;
pub mod error;
pub mod routes;
pub mod sharepoint;
pub mod state;
