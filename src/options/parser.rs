/// Left-to-right argument scanner that dispatches to a caller-supplied handler.
use std::marker::PhantomData;

use super::errors::ParseError;
use super::registry::{MARKER, OptionRegistry};
use super::suggest::closest_name;

/// Receives matched options from [`OptionRegistry::parse`].
///
/// Either method may fail; the error is returned from `parse` as
/// [`ParseError::Handler`] and scanning stops at that token.
pub trait OptionHandler {
    /// Error type raised by the handler.
    type Error;

    /// Called for a matched option that takes no argument.
    ///
    /// # Errors
    ///
    /// Any error the caller wants to abort parsing with.
    fn handle_flag(&mut self, option: &str) -> Result<(), Self::Error>;

    /// Called for a matched option together with the token that follows it.
    ///
    /// # Errors
    ///
    /// Any error the caller wants to abort parsing with.
    fn handle_value(&mut self, option: &str, value: &str) -> Result<(), Self::Error>;
}

impl<H: OptionHandler + ?Sized> OptionHandler for &mut H {
    type Error = H::Error;

    fn handle_flag(&mut self, option: &str) -> Result<(), Self::Error> {
        (**self).handle_flag(option)
    }

    fn handle_value(&mut self, option: &str, value: &str) -> Result<(), Self::Error> {
        (**self).handle_value(option, value)
    }
}

/// An [`OptionHandler`] built from two closures. See [`handler_fn`].
pub struct FnHandler<F, V, E> {
    on_flag: F,
    on_value: V,
    _error: PhantomData<fn() -> E>,
}

/// Build a handler from an `on_flag` and an `on_value` closure.
#[must_use]
pub fn handler_fn<F, V, E>(on_flag: F, on_value: V) -> FnHandler<F, V, E>
where
    F: FnMut(&str) -> Result<(), E>,
    V: FnMut(&str, &str) -> Result<(), E>,
{
    FnHandler {
        on_flag,
        on_value,
        _error: PhantomData,
    }
}

impl<F, V, E> OptionHandler for FnHandler<F, V, E>
where
    F: FnMut(&str) -> Result<(), E>,
    V: FnMut(&str, &str) -> Result<(), E>,
{
    type Error = E;

    fn handle_flag(&mut self, option: &str) -> Result<(), E> {
        (self.on_flag)(option)
    }

    fn handle_value(&mut self, option: &str, value: &str) -> Result<(), E> {
        (self.on_value)(option, value)
    }
}

impl OptionRegistry {
    /// Scan `args` from the left, dispatching each registered option to `handler`.
    ///
    /// Scanning stops at the first token that does not start with `-` or at the
    /// end of input, and returns the number of tokens consumed. Everything from
    /// that index on is left for the caller. Handler calls made before a failure
    /// are not undone.
    ///
    /// # Errors
    ///
    /// - [`ParseError::UnknownOption`] for an unregistered `-`-prefixed token.
    /// - [`ParseError::MissingArgumentValue`] when a value option is the last token.
    /// - [`ParseError::Handler`] when the handler fails.
    pub fn parse<S, H>(&self, args: &[S], handler: &mut H) -> Result<usize, ParseError<H::Error>>
    where
        S: AsRef<str>,
        H: OptionHandler + ?Sized,
    {
        let mut i = 0;
        while let Some(token) = args.get(i) {
            let option = token.as_ref();
            if !option.starts_with(MARKER) {
                break;
            }

            if !self.contains(option) {
                return Err(ParseError::UnknownOption {
                    option: option.to_owned(),
                    suggestion: closest_name(self.names(), option).map(str::to_owned),
                });
            }

            if self.requires_argument(option) {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| ParseError::MissingArgumentValue {
                        option: option.to_owned(),
                    })?;
                handler
                    .handle_value(option, value.as_ref())
                    .map_err(ParseError::Handler)?;
                i += 2;
            } else {
                handler.handle_flag(option).map_err(ParseError::Handler)?;
                i += 1;
            }
        }
        Ok(i)
    }
}
