//! CLI module for the signup portal
//!
//! Subcommands:
//! - `serve`: run the web server (default)

pub mod serve;

use clap::{Parser, Subcommand};

/// Signup Portal - signup form with live password-strength feedback
#[derive(Parser)]
#[command(name = "signup-portal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the web server (default mode)
    Serve(serve::ServeArgs),
}

impl Default for Command {
    fn default() -> Self {
        Self::Serve(serve::ServeArgs::default())
    }
}
