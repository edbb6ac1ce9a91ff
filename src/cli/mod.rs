//! CLI module for ghl-console - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for the tool catalog,
//! credential testing, and documentation.

pub mod commands;

pub use commands::Cli;
