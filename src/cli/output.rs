/// Output formatting: JSON, table, plain modes. TTY detection.
use std::io::{IsTerminal, Write};

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::types::{ErrorOutput, FindingOutput, OptionOutput, ParseOutput, Severity};

/// Resolve the effective output format, handling `--json` flag and TTY auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if fmt == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        fmt
    }
}

/// Output context passed to all commands.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
    /// When true, print phase timings to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool, debug: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
            debug,
        }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }

    fn is_json(&self) -> bool {
        matches!(
            self.format,
            OutputFormat::Json | OutputFormat::Compact | OutputFormat::Ndjson
        )
    }
}

// --- Usage text ---

#[derive(Serialize)]
struct UsageOutput<'a> {
    width: usize,
    usage: &'a str,
}

/// Write rendered usage text. JSON formats wrap it in `{"width", "usage"}`.
pub fn write_usage(text: &str, width: usize, ctx: &OutputCtx) {
    let wrapped = UsageOutput { width, usage: text };
    match ctx.format {
        OutputFormat::Json => print_json(&wrapped),
        OutputFormat::Compact | OutputFormat::Ndjson => print_compact_json(&wrapped),
        _ => print!("{text}"),
    }
}

// --- Option list ---

/// Write the registered options in display order.
pub fn write_options(options: &[OptionOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(options),
        OutputFormat::Compact => print_compact_json(options),
        OutputFormat::Ndjson => print_ndjson(options),
        OutputFormat::Plain => {
            for opt in options {
                println!("{}", opt.name);
            }
        }
        OutputFormat::Table | OutputFormat::Auto => write_options_table(options, ctx),
    }
}

fn write_options_table(options: &[OptionOutput], ctx: &OutputCtx) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["#", "OPTION", "ARGUMENT", "WIDTH", "DESCRIPTION"]);
    }
    for opt in options {
        table.add_row([
            opt.index.to_string().as_str(),
            opt.name.as_str(),
            opt.argument.as_deref().unwrap_or(""),
            &opt.width.to_string(),
            opt.description.as_str(),
        ]);
    }
    println!("{table}");
}

// --- Parse result ---

/// Write the outcome of a trial parse.
pub fn write_parse(result: &ParseOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(result),
        OutputFormat::Compact => print_compact_json(result),
        OutputFormat::Ndjson => print_ndjson(&result.events),
        OutputFormat::Plain => {
            for event in &result.events {
                match &event.value {
                    Some(value) => println!("{} {value}", event.option),
                    None => println!("{}", event.option),
                }
            }
        }
        OutputFormat::Table | OutputFormat::Auto => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            if !ctx.no_header {
                table.set_header(["OPTION", "VALUE"]);
            }
            for event in &result.events {
                table.add_row([event.option.as_str(), event.value.as_deref().unwrap_or("")]);
            }
            println!("{table}");
            println!("consumed: {}", result.consumed);
            if !result.remaining.is_empty() {
                println!("remaining: {}", result.remaining.join(" "));
            }
        }
    }
}

// --- Check findings ---

/// Write `check` findings.
pub fn write_findings(findings: &[FindingOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(findings),
        OutputFormat::Compact => print_compact_json(findings),
        OutputFormat::Ndjson => print_ndjson(findings),
        OutputFormat::Plain => {
            for f in findings {
                println!("{}: {}: {}", severity_label(f.severity), f.option, f.message);
            }
        }
        OutputFormat::Table | OutputFormat::Auto => {
            if findings.is_empty() {
                println!("No problems found.");
                return;
            }
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            if !ctx.no_header {
                table.set_header(["SEVERITY", "OPTION", "MESSAGE"]);
            }
            for f in findings {
                table.add_row([severity_label(f.severity), f.option.as_str(), f.message.as_str()]);
            }
            println!("{table}");
        }
    }
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Warning => "warning",
        Severity::Error => "error",
    }
}

// --- Warnings ---

/// Write non-fatal warnings to stderr.
///
/// Skipped in JSON formats so stderr only ever carries the error envelope.
pub fn write_warnings(warnings: &[String], ctx: &OutputCtx) {
    if ctx.is_json() {
        return;
    }
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    for w in warnings {
        let _ = writeln!(out, "warning: {w}");
    }
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, ctx: &OutputCtx) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    if ctx.is_json() {
        let s = serde_json::to_string_pretty(err).unwrap_or_default();
        let _ = writeln!(out, "{s}");
    } else {
        let _ = writeln!(out, "Error: {}", err.error.message);
    }
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_compact_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_ndjson<T: Serialize>(values: &[T]) {
    for v in values {
        match serde_json::to_string(v) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("JSON serialization error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag_wins() {
        assert_eq!(resolve_format(OutputFormat::Table, true), OutputFormat::Json);
    }

    #[test]
    fn test_explicit_format_kept() {
        assert_eq!(
            resolve_format(OutputFormat::Plain, false),
            OutputFormat::Plain
        );
    }

    #[test]
    fn test_ndjson_counts_as_json() {
        let ctx = OutputCtx::new(OutputFormat::Ndjson, false, false, false);
        assert!(ctx.is_json());
        let ctx = OutputCtx::new(OutputFormat::Plain, false, false, false);
        assert!(!ctx.is_json());
    }
}
