use thiserror::Error;

/// The error type.
///
/// Each variant carries the command-line token (or argument name) that
/// triggered the failure, so callers can match on the kind and the
/// offender rather than scraping a message.
///
/// The `Display` rendering of each variant is the exact diagnostic line
/// that [crate::Args::parse_and_report] prints, keeping "detect the
/// failure" and "format the failure" as separate steps.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// User specified a token that matches no registered argument.
    #[error("Error: Unrecognized argument {0}")]
    UnrecognizedArgument(String),

    /// A required value argument was the last token on the command line,
    /// so there was nothing left to consume as its value.
    #[error("Error: Missing value for argument {0}")]
    MissingValue(String),

    /// An argument marked as required was never seen during the scan.
    #[error("Error: Missing required argument {0}")]
    MissingRequiredArgument(String),
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
