/// Errors raised while parsing arguments or rendering usage text.
use std::io;

use thiserror::Error;

/// Failure of a single [`OptionRegistry::parse`](super::OptionRegistry::parse) call.
///
/// `E` is the error type of the caller's [`OptionHandler`](super::OptionHandler);
/// handler failures are carried unchanged in [`ParseError::Handler`].
#[derive(Debug, Error)]
pub enum ParseError<E> {
    /// An option-shaped token has no registry entry.
    #[error(
        "Unknown option: {option}{}",
        .suggestion.as_deref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default()
    )]
    UnknownOption {
        /// The rejected token, verbatim.
        option: String,
        /// Closest registered name, if any looked plausible.
        suggestion: Option<String>,
    },

    /// An argument-taking option was the last token.
    #[error("Option {option} requires an argument")]
    MissingArgumentValue {
        /// The option that is missing its value.
        option: String,
    },

    /// The handler itself rejected an option.
    #[error("{0}")]
    Handler(E),
}

impl<E> ParseError<E> {
    /// The option token the failure is attributed to, if the parser raised it.
    #[must_use]
    pub fn option(&self) -> Option<&str> {
        match self {
            Self::UnknownOption { option, .. } | Self::MissingArgumentValue { option } => {
                Some(option)
            }
            Self::Handler(_) => None,
        }
    }

    /// Unwrap the handler error, if this is one.
    #[must_use]
    pub fn into_handler_error(self) -> Option<E> {
        match self {
            Self::Handler(err) => Some(err),
            _ => None,
        }
    }
}

/// Failure while rendering usage text.
#[derive(Debug, Error)]
pub enum UsageError {
    /// A composed display token does not fit the precomputed column.
    ///
    /// Only reachable if the registry's width bookkeeping is wrong.
    #[error("Usage field '{token}' is wider than the {width}-column option field")]
    FieldOverflow {
        /// The composed token (`name` or `name <label>`).
        token: String,
        /// The column width it had to fit in.
        width: usize,
    },

    /// The output stream rejected a write.
    #[error("Failed to write usage text: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;

    #[test]
    fn test_unknown_option_message() {
        let err: ParseError<Infallible> = ParseError::UnknownOption {
            option: "-z".to_owned(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "Unknown option: -z");
        assert_eq!(err.option(), Some("-z"));
    }

    #[test]
    fn test_unknown_option_message_with_suggestion() {
        let err: ParseError<Infallible> = ParseError::UnknownOption {
            option: "-vrebose".to_owned(),
            suggestion: Some("-verbose".to_owned()),
        };
        assert_eq!(
            err.to_string(),
            "Unknown option: -vrebose (did you mean '-verbose'?)"
        );
    }

    #[test]
    fn test_missing_argument_message() {
        let err: ParseError<Infallible> = ParseError::MissingArgumentValue {
            option: "-o".to_owned(),
        };
        assert_eq!(err.to_string(), "Option -o requires an argument");
    }

    #[test]
    fn test_handler_error_is_passed_through() {
        let err = ParseError::Handler("bad level".to_owned());
        assert_eq!(err.to_string(), "bad level");
        assert_eq!(err.option(), None);
        assert_eq!(err.into_handler_error().as_deref(), Some("bad level"));
    }
}
