//! Core types and trait definitions for the Stint migration gate.
//!
//! This crate is deliberately free of database dependencies. The storage
//! backend (`stint-store-sqlite`) and the binary depend on it; it depends
//! on nothing heavier than `chrono`.

pub mod employee;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod store;
pub mod validate;
pub mod work_time;

pub use error::MigrationError;
