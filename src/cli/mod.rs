//! CLI module for til-draft.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version display
//! - Draft generation with progress output
//! - API key login and logout
//!
//! # Usage
//!
//! ```ignore
//! use til_draft::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args()) {
//!     Ok(CliCommand::Version) => println!("{}", til_draft::cli::version_line()),
//!     Ok(command) => { /* dispatch */ }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

pub mod args;
pub mod auth;
pub mod generate;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, InputArg, USAGE};
pub use auth::{handle_login_command, handle_logout_command, resolve_api_key};
pub use generate::{handle_generate_command, handle_next_day_command, ProgressPrinter};
pub use version::{version_line, VERSION};

/// Exit code after Ctrl-C, matching the shell convention for SIGINT.
pub const EXIT_CANCELLED: i32 = 130;

/// Exit code for failures.
pub const EXIT_FAILURE: i32 = 1;
