// src/cli/mod.rs
//! CLI surface.

pub mod args;
pub mod handlers;

pub use args::Cli;
