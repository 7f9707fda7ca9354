//! CLI argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;
