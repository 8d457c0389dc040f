/// `check` command: validate an option table without registering it.
use std::collections::HashMap;
use std::path::Path;

use crate::cli::OutputCtx;
use crate::cli::output::write_findings;
use crate::commands::CommandError;
use crate::table::{self, TableEntry};
use crate::types::{FindingOutput, Severity};

/// Run `optline check`.
///
/// Writes every finding, then fails if any of them is an error.
///
/// # Errors
///
/// Returns `CommandError::Table` if the file cannot be read, and
/// `CommandError::CheckFailed` when error-level findings exist.
pub fn run(table: Option<&Path>, ctx: &OutputCtx) -> Result<(), CommandError> {
    let _t_load = ctx.timer("read_table");
    let entries = table::read_entries(table)?;
    drop(_t_load);

    let findings = check_entries(&entries);
    write_findings(&findings, ctx);

    let errors = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();
    if errors > 0 {
        return Err(CommandError::CheckFailed { errors });
    }
    Ok(())
}

fn check_entries(entries: &[TableEntry]) -> Vec<FindingOutput> {
    let mut findings = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (index, entry) in entries.iter().enumerate() {
        if let Some(reason) = entry.problem() {
            findings.push(FindingOutput {
                severity: Severity::Error,
                option: entry.name.clone(),
                message: reason,
            });
        }
        if entry.description.trim().is_empty() {
            findings.push(FindingOutput {
                severity: Severity::Warning,
                option: entry.name.clone(),
                message: "description is empty".to_owned(),
            });
        }
        if let Some(previous) = seen.insert(entry.name.as_str(), index) {
            findings.push(FindingOutput {
                severity: Severity::Warning,
                option: entry.name.clone(),
                message: format!(
                    "also registered at entry {previous}; usage lists it twice and the last entry wins"
                ),
            });
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, argument: Option<&str>, description: &str) -> TableEntry {
        TableEntry {
            name: name.to_owned(),
            argument: argument.map(str::to_owned),
            description: description.to_owned(),
        }
    }

    #[test]
    fn test_clean_table() {
        let findings = check_entries(&[
            entry("-x", None, "disable X"),
            entry("-o", Some("file"), "output file"),
        ]);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_duplicate_is_warning() {
        let findings = check_entries(&[entry("-x", None, "one"), entry("-x", None, "two")]);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert!(findings[0].message.contains("entry 0"));
    }

    #[test]
    fn test_missing_marker_is_error() {
        let findings = check_entries(&[entry("verbose", None, "chatty")]);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
    }

    #[test]
    fn test_empty_description_is_warning() {
        let findings = check_entries(&[entry("-q", None, "  ")]);
        assert_eq!(findings[0].severity, Severity::Warning);
    }
}
