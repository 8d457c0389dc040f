//! End-to-end behavior of the registry, parser and usage formatter.
use std::convert::Infallible;

use optline::{OptionHandler, OptionRegistry, ParseError, handler_fn};

#[derive(Debug, Default)]
struct Calls(Vec<(String, Option<String>)>);

impl OptionHandler for Calls {
    type Error = Infallible;

    fn handle_flag(&mut self, option: &str) -> Result<(), Infallible> {
        self.0.push((option.to_owned(), None));
        Ok(())
    }

    fn handle_value(&mut self, option: &str, value: &str) -> Result<(), Infallible> {
        self.0.push((option.to_owned(), Some(value.to_owned())));
        Ok(())
    }
}

fn flag(name: &str) -> (String, Option<String>) {
    (name.to_owned(), None)
}

fn value(name: &str, v: &str) -> (String, Option<String>) {
    (name.to_owned(), Some(v.to_owned()))
}

fn x_and_o() -> OptionRegistry {
    let mut registry = OptionRegistry::new();
    registry.register_flag("-x", "disable X");
    registry.register_value_option("-o", "file", "output file");
    registry
}

#[test]
fn scenario_flag_then_value_then_positional() {
    let mut calls = Calls::default();
    let consumed = x_and_o()
        .parse(&["-x", "-o", "out.txt", "rest"], &mut calls)
        .unwrap();
    assert_eq!(consumed, 3);
    assert_eq!(calls.0, [flag("-x"), value("-o", "out.txt")]);
}

#[test]
fn scenario_unregistered_option() {
    let registry = OptionRegistry::new();
    let mut calls = Calls::default();
    let err = registry.parse(&["-z"], &mut calls).unwrap_err();
    match err {
        ParseError::UnknownOption { option, suggestion } => {
            assert_eq!(option, "-z");
            assert_eq!(suggestion, None);
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(calls.0.is_empty());
}

#[test]
fn scenario_value_option_without_value() {
    let mut registry = OptionRegistry::new();
    registry.register_value_option("-o", "file", "desc");
    let mut calls = Calls::default();
    let err = registry.parse(&["-o"], &mut calls).unwrap_err();
    assert!(matches!(err, ParseError::MissingArgumentValue { ref option } if option == "-o"));
    assert!(calls.0.is_empty());
}

#[test]
fn scenario_usage_columns_align() {
    let text = x_and_o().usage_string().unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("  -x "));
    assert!(lines[1].starts_with("  -o <file> "));
    assert_eq!(lines[0].find("disable X"), lines[1].find("output file"));
}

#[test]
fn full_consumption_dispatches_once_per_option_in_order() {
    let mut registry = x_and_o();
    registry.register_flag("-v", "verbose");
    let tokens = ["-v", "-o", "a", "-x", "-o", "b", "-v"];
    let mut calls = Calls::default();
    assert_eq!(registry.parse(&tokens, &mut calls).unwrap(), tokens.len());
    assert_eq!(
        calls.0,
        [
            flag("-v"),
            value("-o", "a"),
            flag("-x"),
            value("-o", "b"),
            flag("-v"),
        ]
    );
}

#[test]
fn unknown_option_in_the_middle_keeps_earlier_effects() {
    let mut calls = Calls::default();
    let err = x_and_o()
        .parse(&["-x", "-o", "f", "-nope", "-x"], &mut calls)
        .unwrap_err();
    assert_eq!(err.option(), Some("-nope"));
    assert_eq!(calls.0, [flag("-x"), value("-o", "f")]);
}

#[test]
fn unknown_option_carries_suggestion() {
    let mut registry = OptionRegistry::new();
    registry.register_flag("-verbose", "chatty");
    registry.register_flag("-quiet", "silent");
    let mut calls = Calls::default();
    let err = registry.parse(&["-verb"], &mut calls).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown option: -verb (did you mean '-verbose'?)"
    );
}

#[test]
fn positional_stop_is_not_a_failure() {
    let mut calls = Calls::default();
    let consumed = x_and_o()
        .parse(&["-x", "input.txt", "-unregistered"], &mut calls)
        .unwrap();
    assert_eq!(consumed, 1);
    assert_eq!(calls.0, [flag("-x")]);
}

#[test]
fn handler_errors_propagate_unchanged() {
    let mut levels = Vec::new();
    let mut handler = handler_fn(
        |option: &str| -> anyhow::Result<()> { anyhow::bail!("{option} is not supported") },
        |_option: &str, v: &str| {
            levels.push(v.parse::<u8>()?);
            Ok(())
        },
    );
    let mut registry = OptionRegistry::new();
    registry.register_value_option("-level", "n", "level");
    registry.register_flag("-legacy", "old mode");

    let err = registry
        .parse(&["-level", "3", "-level", "high", "-level", "4"], &mut handler)
        .unwrap_err();
    let inner = err.into_handler_error().unwrap();
    assert!(inner.downcast_ref::<std::num::ParseIntError>().is_some());

    let err = registry.parse(&["-legacy"], &mut handler).unwrap_err();
    assert_eq!(err.to_string(), "-legacy is not supported");

    drop(handler);
    assert_eq!(levels, [3]);
}

#[test]
fn max_width_tracks_widest_registration() {
    let mut registry = OptionRegistry::new();
    registry.register_flag("-a", "a");
    assert_eq!(registry.max_width(), 2);
    registry.register_value_option("-b", "label", "b");
    assert_eq!(registry.max_width(), 10);
    registry.register_flag("-cccccccccccc", "c");
    assert_eq!(registry.max_width(), 13);

    let text = registry.usage_string().unwrap();
    for line in text.lines() {
        // Description always starts right after the padded field.
        assert_eq!(line.chars().nth(2 + registry.max_width()), Some(' '));
        assert_ne!(line.chars().nth(2 + registry.max_width() + 1), Some(' '));
    }
}
