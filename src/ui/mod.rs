//! UI abstractions shared by the dialog widget and its embedding host.
//!
//! - [`Component`] - Reusable, interactive UI building blocks
//! - [`Handled`] - Result of handling an input event

mod component;

pub use component::Component;

/// Result type alias for UI operations.
pub type Result<T> = std::result::Result<T, color_eyre::Report>;

/// Result of handling an input event.
///
/// This enum represents the three possible outcomes of handling an input:
/// - `Ignored` - The handler didn't recognize or handle this input
/// - `Consumed` - The input was handled but produced no event
/// - `Event(E)` - The input was handled and produced an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled<E> {
    /// Input was not handled, parent should process it.
    Ignored,
    /// Input was consumed but produced no event.
    Consumed,
    /// Input was consumed and produced an event.
    Event(E),
}

impl<E> Handled<E> {
    /// Returns true if the input was consumed (not ignored).
    pub fn is_consumed(&self) -> bool {
        !matches!(self, Handled::Ignored)
    }

    /// Returns the event if present.
    pub fn event(self) -> Option<E> {
        match self {
            Handled::Event(e) => Some(e),
            _ => None,
        }
    }
}

impl<E> From<E> for Handled<E> {
    fn from(event: E) -> Self {
        Handled::Event(event)
    }
}

/// Extension trait for processing `Result<Handled<E>>` in event handlers.
pub trait HandledResultExt<E> {
    /// Process the result, returning whether it was consumed and any event.
    ///
    /// Errors are treated as consumed (returns `(true, None)`).
    fn process(self) -> (bool, Option<E>);
}

impl<E> HandledResultExt<E> for Result<Handled<E>> {
    fn process(self) -> (bool, Option<E>) {
        match self {
            Ok(Handled::Event(e)) => (true, Some(e)),
            Ok(Handled::Consumed) => (true, None),
            Ok(Handled::Ignored) => (false, None),
            Err(_) => (true, None), // Treat errors as consumed
        }
    }
}
