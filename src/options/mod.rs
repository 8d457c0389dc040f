/// Option domain layer: registry, parser, usage rendering, suggestions.
pub mod errors;
pub mod parser;
pub mod registry;
pub mod suggest;
pub mod usage;

pub use errors::{ParseError, UsageError};
pub use parser::{FnHandler, OptionHandler, handler_fn};
pub use registry::{MARKER, OptionRegistry, OptionSpec};
