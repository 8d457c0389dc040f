#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! optline — a registry of command-line options, a left-to-right scanner that
//! dispatches caller-supplied handlers, and an aligned usage formatter.
//!
//! ```
//! use optline::{OptionRegistry, handler_fn};
//!
//! let mut registry = OptionRegistry::new();
//! registry.register_flag("-x", "disable X");
//! registry.register_value_option("-o", "file", "output file");
//!
//! let mut seen = Vec::new();
//! let consumed = registry
//!     .parse(
//!         &["-x", "-o", "out.txt", "rest"],
//!         &mut handler_fn(
//!             |name: &str| -> Result<(), std::convert::Infallible> {
//!                 seen.push(name.to_owned());
//!                 Ok(())
//!             },
//!             |_name: &str, _value: &str| Ok(()),
//!         ),
//!     )
//!     .unwrap();
//! assert_eq!(consumed, 3);
//! assert_eq!(seen, ["-x"]);
//! ```

pub mod options;

pub use options::{
    FnHandler, MARKER, OptionHandler, OptionRegistry, OptionSpec, ParseError, UsageError,
    handler_fn,
};
