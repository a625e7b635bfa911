//! # Kinship - Family Graph CLI
//!
//! Application library for the Kinship binary: record store loading,
//! configuration, and CLI dispatch. All I/O lives here; the engine in
//! `kinship-core` stays pure.

pub mod cli;
pub mod config;
pub mod store;
