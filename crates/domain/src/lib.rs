//! # domus-domain
//!
//! Pure domain model for the domus smart-home system.
//!
//! ## Responsibilities
//! - Foundational types: measurement values, error conventions
//! - Define **Capabilities** (sensors and actuators, each wrapping one
//!   measurement value and carrying a functionality tag)
//! - Define **Catalogues** (the registry resolving configuration-declared
//!   model names to live capability instances)
//! - Define **Aggregates** (House → Room → Device) with case-insensitive
//!   name uniqueness over their owned children
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! The configuration boundary is expressed as a trait in the `app` crate.

pub mod error;

pub mod capability;
pub mod catalogue;
pub mod device;
pub mod house;
pub mod measurement;
pub mod room;
