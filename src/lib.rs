pub mod adapters;
pub mod classify;
pub mod cli;
pub mod config;
pub mod emitter;
pub mod error;
pub mod exit;
pub mod fingerprint;
pub mod registry;
pub mod types;
