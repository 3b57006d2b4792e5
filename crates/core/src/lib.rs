//! Shopfront Core - Shared types library.
//!
//! This crate provides the domain types used across all Shopfront components:
//! - `client` - API client, local state containers, and orchestration shell
//! - `cli` - Command-line driver for browsing, cart, and checkout
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage.
//! Everything here (de)serializes against the backend's JSON contract: an
//! envelope-wrapped REST API with stringified IDs, float prices, and
//! camelCase order payloads.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, emails, statuses, and the product / cart /
//!   user / order models

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
