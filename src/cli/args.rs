//! Command-line argument parsing for til-draft.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ValidationError;
use crate::models::DraftSource;

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: til-draft <COMMAND>

Commands:
  generate --text <TEXT>    Generate a draft from notes
  generate --url <URL>      Generate a draft from a web page
  generate --file <PATH>    Generate a draft from a .md, .markdown, .txt or .mdx file
  next-day                  Print the next unused day number
  login                     Store the API key
  logout                    Remove the stored API key

Options:
  -h, --help                Print help
  -V, --version             Print version

Environment:
  TIL_API_URL               Service URL (default http://localhost:8000)
  TIL_API_KEY               API key, overrides the stored one
  TIL_CONNECT_TIMEOUT_SECS  Connection timeout in seconds (default 10)
  RUST_LOG                  Log filter (default til_draft=info)";

/// Input selected with `generate`.
#[derive(Debug, Clone, PartialEq)]
pub enum InputArg {
    Text(String),
    Url(String),
    File(PathBuf),
}

impl InputArg {
    /// Build the generation source. Files are read from disk here.
    pub fn into_source(self) -> Result<DraftSource, ValidationError> {
        let source = match self {
            InputArg::Text(text) => DraftSource::text(text),
            InputArg::Url(url) => DraftSource::url(url),
            InputArg::File(path) => DraftSource::from_path(&path)?,
        };
        source.validate()?;
        Ok(source)
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Stream a new draft
    Generate(InputArg),
    /// Print the next day number
    NextDay,
    /// Prompt for and store the API key
    Login,
    /// Remove the stored API key
    Logout,
    /// Show version information
    Version,
    /// Show usage
    Help,
}

/// Argument errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("{0} requires a value")]
    MissingValue(String),
    #[error("generate needs one of --text, --url or --file")]
    MissingInput,
    #[error("only one of --text, --url or --file may be given")]
    ConflictingInputs,
}

/// Parse command-line arguments and return the appropriate command.
///
/// `--version` and `--help` win wherever they appear. With no arguments the
/// usage is shown.
///
/// # Examples
///
/// ```
/// use til_draft::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["til-draft".to_string(), "next-day".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::NextDay));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let args: Vec<String> = args.skip(1).collect();

    for arg in &args {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            _ => {}
        }
    }

    let mut rest = args.into_iter();
    let Some(command) = rest.next() else {
        return Ok(CliCommand::Help);
    };

    let parsed = match command.as_str() {
        "generate" => return parse_generate(rest),
        "next-day" => CliCommand::NextDay,
        "login" => CliCommand::Login,
        "logout" => CliCommand::Logout,
        "help" => CliCommand::Help,
        _ => return Err(ArgsError::UnknownCommand(command)),
    };

    match rest.next() {
        Some(extra) => Err(ArgsError::UnexpectedArgument(extra)),
        None => Ok(parsed),
    }
}

fn parse_generate(mut args: impl Iterator<Item = String>) -> Result<CliCommand, ArgsError> {
    let mut input: Option<InputArg> = None;

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        let build: fn(String) -> InputArg = match flag.as_str() {
            "--text" | "-t" => InputArg::Text,
            "--url" | "-u" => InputArg::Url,
            "--file" | "-f" => |path| InputArg::File(PathBuf::from(path)),
            _ => return Err(ArgsError::UnexpectedArgument(arg)),
        };

        let value = match inline {
            Some(value) => value,
            None => args.next().ok_or_else(|| ArgsError::MissingValue(flag.clone()))?,
        };

        if input.is_some() {
            return Err(ArgsError::ConflictingInputs);
        }
        input = Some(build(value));
    }

    input.map(CliCommand::Generate).ok_or(ArgsError::MissingInput)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, ArgsError> {
        let args: Vec<String> = std::iter::once("til-draft")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        parse_args(args.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["generate", "-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_parse_help() {
        assert_eq!(parse(&[]), Ok(CliCommand::Help));
        assert_eq!(parse(&["-h"]), Ok(CliCommand::Help));
        assert_eq!(parse(&["help"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_generate_inputs() {
        assert_eq!(
            parse(&["generate", "--text", "learned about lifetimes"]),
            Ok(CliCommand::Generate(InputArg::Text(
                "learned about lifetimes".to_string()
            )))
        );
        assert_eq!(
            parse(&["generate", "--url=https://example.com/post"]),
            Ok(CliCommand::Generate(InputArg::Url(
                "https://example.com/post".to_string()
            )))
        );
        assert_eq!(
            parse(&["generate", "-f", "notes.md"]),
            Ok(CliCommand::Generate(InputArg::File(PathBuf::from("notes.md"))))
        );
    }

    #[test]
    fn test_parse_generate_errors() {
        assert_eq!(parse(&["generate"]), Err(ArgsError::MissingInput));
        assert_eq!(
            parse(&["generate", "--text"]),
            Err(ArgsError::MissingValue("--text".to_string()))
        );
        assert_eq!(
            parse(&["generate", "--text", "a", "--url", "b"]),
            Err(ArgsError::ConflictingInputs)
        );
        assert_eq!(
            parse(&["generate", "--bogus"]),
            Err(ArgsError::UnexpectedArgument("--bogus".to_string()))
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse(&["next-day"]), Ok(CliCommand::NextDay));
        assert_eq!(parse(&["login"]), Ok(CliCommand::Login));
        assert_eq!(parse(&["logout"]), Ok(CliCommand::Logout));
        assert_eq!(
            parse(&["logout", "now"]),
            Err(ArgsError::UnexpectedArgument("now".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse(&["publish"]),
            Err(ArgsError::UnknownCommand("publish".to_string()))
        );
    }

    #[test]
    fn test_into_source() {
        assert_eq!(
            InputArg::Text("notes".to_string()).into_source(),
            Ok(DraftSource::text("notes"))
        );
        assert!(matches!(
            InputArg::Url("  ".to_string()).into_source(),
            Err(ValidationError::EmptyInput { .. })
        ));
        assert!(matches!(
            InputArg::File(PathBuf::from("image.png")).into_source(),
            Err(ValidationError::UnsupportedFileType { .. })
        ));
    }
}
