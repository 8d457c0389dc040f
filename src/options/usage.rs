/// Two-column usage text: option token padded to a shared column, then the
/// description.
use std::fmt::Write as _;
use std::io;

use super::errors::UsageError;
use super::registry::{OptionRegistry, display_width};

/// Indent written before every usage line.
const INDENT: &str = "  ";

impl OptionRegistry {
    /// Write one line per registered option to `out`.
    ///
    /// Each line is two spaces, the option token padded to `max_width + 1`
    /// columns, the description and a newline. `out` is neither flushed nor
    /// closed.
    ///
    /// # Errors
    ///
    /// [`UsageError::Io`] if a write fails, [`UsageError::FieldOverflow`] if a
    /// token does not fit its column.
    pub fn render_usage<W: io::Write + ?Sized>(&self, out: &mut W) -> Result<(), UsageError> {
        let width = self.max_width() + 1;
        let mut line = String::new();
        for spec in self.iter() {
            line.clear();
            line.push_str(INDENT);
            push_field(&mut line, &spec.display_token(), width)?;
            line.push_str(spec.description);
            line.push('\n');
            out.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    /// Render the usage text into a `String`.
    ///
    /// # Errors
    ///
    /// [`UsageError::FieldOverflow`] if a token does not fit its column.
    pub fn usage_string(&self) -> Result<String, UsageError> {
        let mut buf = Vec::new();
        self.render_usage(&mut buf)?;
        // Only `&str` pieces were written.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Append `token` left-aligned in a field of `width` columns.
fn push_field(line: &mut String, token: &str, width: usize) -> Result<(), UsageError> {
    if display_width(token) > width {
        return Err(UsageError::FieldOverflow {
            token: token.to_owned(),
            width,
        });
    }
    let _ = write!(line, "{token:<width$}");
    Ok(())
}
