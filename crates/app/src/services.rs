//! Application services — use-cases over the domain aggregates.

pub mod home_service;

pub use home_service::HomeService;
