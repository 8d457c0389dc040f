/// Shared serializable output types for all commands.
///
/// These types are what gets written to stdout, either as JSON or rendered
/// as a table. They are decoupled from the library's registry types.
use serde::{Deserialize, Serialize};

use crate::commands::CommandError;

/// One registered option, as listed by `optline list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionOutput {
    /// Position in display order (0-based).
    pub index: usize,
    /// Option name including the marker.
    pub name: String,
    /// Argument label, or null for flags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument: Option<String>,
    /// Help text.
    pub description: String,
    /// Width of the rendered `name <label>` token.
    pub width: usize,
}

/// A single handler call made by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventOutput {
    /// Option that matched.
    pub option: String,
    /// Value consumed with it, or null for flags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Result of `optline parse`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseOutput {
    /// Number of tokens the parser consumed.
    pub consumed: usize,
    /// Handler calls in dispatch order.
    pub events: Vec<EventOutput>,
    /// Tokens left for the caller (from the first non-option token on).
    pub remaining: Vec<String>,
}

/// Severity of a `check` finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

/// One finding reported by `optline check`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindingOutput {
    pub severity: Severity,
    /// Option the finding is about.
    pub option: String,
    /// Human-readable explanation.
    pub message: String,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Closest registered option, for unknown-option errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ErrorOutput {
    /// Construct from a `CommandError`.
    #[must_use]
    pub fn from_command_error(err: &CommandError) -> Self {
        use optline::ParseError;

        let (code, suggestion) = match err {
            CommandError::Table(_) => ("invalid_table", None),
            CommandError::Parse(ParseError::UnknownOption { suggestion, .. }) => {
                ("unknown_option", suggestion.clone())
            }
            CommandError::Parse(ParseError::MissingArgumentValue { .. }) => {
                ("missing_argument_value", None)
            }
            CommandError::Parse(ParseError::Handler(_)) => ("handler_failed", None),
            CommandError::Usage(_) => ("usage_render_failed", None),
            CommandError::CheckFailed { .. } => ("check_failed", None),
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
                suggestion,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use optline::ParseError;

    use super::*;

    #[test]
    fn test_unknown_option_envelope() {
        let err = CommandError::Parse(ParseError::UnknownOption {
            option: "-verb".to_owned(),
            suggestion: Some("-verbose".to_owned()),
        });
        let out = ErrorOutput::from_command_error(&err);
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"]["code"], "unknown_option");
        assert_eq!(json["error"]["suggestion"], "-verbose");
    }

    #[test]
    fn test_flag_event_omits_value() {
        let event = EventOutput {
            option: "-x".to_owned(),
            value: None,
        };
        assert_eq!(serde_json::to_string(&event).unwrap(), r#"{"option":"-x"}"#);
    }
}
