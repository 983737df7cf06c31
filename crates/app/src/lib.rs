//! # domus-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **configuration port**: the `ConfigSource` trait adapters
//!   implement (TOML file, in-memory mapping, …)
//! - Bootstrap the capability catalogues from a configuration source
//! - Orchestrate the domain aggregates through `HomeService` without
//!   knowing *where* the configuration came from
//!
//! ## Dependency rule
//! Depends on `domus-domain` only. Never imports adapter crates; adapters
//! depend on *this* crate, not the reverse.

pub mod catalogues;
pub mod config;
pub mod ports;
pub mod services;
