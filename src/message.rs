//! Lazily rendered display text for test results.
//!
//! Formatting a failure explanation is wasted work when the test passes, so
//! results carry [`Message`]s instead of strings: zero-argument, repeatable
//! producers of display text. A message captures everything it needs by value
//! when it is constructed, and renders only when somebody actually reads it.

use std::fmt;
use std::sync::Arc;

/// A deferred piece of display text.
///
/// Rendering is pure: calling [`render`](Message::render) twice returns the
/// same text, because the closure variant captures its inputs by value at
/// construction time. Cloning a message is cheap (the lazy variant is
/// reference counted).
///
/// # Example
///
/// ```rust
/// use veracity::Message;
///
/// let expensive = vec![1, 2, 3];
/// let msg = Message::lazy(move || format!("got {:?}", expensive));
/// assert_eq!(msg.render(), "got [1, 2, 3]");
/// assert_eq!(msg.render(), "got [1, 2, 3]");
/// ```
#[derive(Clone)]
pub struct Message(Inner);

#[derive(Clone)]
enum Inner {
    Fixed(String),
    Lazy(Arc<dyn Fn() -> String>),
}

impl Message {
    /// A message that is already a plain string.
    pub fn fixed(text: impl Into<String>) -> Self {
        Message(Inner::Fixed(text.into()))
    }

    /// A message rendered on demand by the given closure.
    ///
    /// The closure must be a pure function of values it owns; move cloned
    /// values in rather than borrowing, so later mutation of the sources
    /// cannot change the rendered text.
    pub fn lazy(render: impl Fn() -> String + 'static) -> Self {
        Message(Inner::Lazy(Arc::new(render)))
    }

    /// Produce the display text.
    pub fn render(&self) -> String {
        match &self.0 {
            Inner::Fixed(text) => text.clone(),
            Inner::Lazy(render) => render(),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Message").field(&self.render()).finish()
    }
}

/// Build a [`Message`] from a format string, deferring the formatting.
///
/// With no trailing arguments this is a fixed message. With arguments, the
/// named values are moved into the closure, so bind clones first when
/// formatting borrowed data.
///
/// # Example
///
/// ```rust
/// use veracity::message;
///
/// let count = 3;
/// let msg = message!("expected {} items", count);
/// assert_eq!(msg.render(), "expected 3 items");
/// ```
#[macro_export]
macro_rules! message {
    ($fmt:literal) => {
        $crate::Message::fixed($fmt)
    };
    ($fmt:literal, $($arg:expr),+ $(,)?) => {
        $crate::Message::lazy(move || format!($fmt, $($arg),+))
    };
}

/// Best-effort description of an arbitrary value, used for default failure
/// text when a leaf assertion has nothing better to say.
pub fn describe<T: fmt::Debug + ?Sized>(value: &T) -> String {
    format!("{value:?}")
}

/// Indent every line of `text` by one tab, for nesting inside a larger
/// explanation.
pub fn indent(text: &str) -> String {
    format!("\t{}", text.replace('\n', "\n\t"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn fixed_message_renders_its_text() {
        assert_eq!(Message::fixed("is empty").render(), "is empty");
    }

    #[test]
    fn lazy_message_renders_only_on_demand() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);
        let msg = Message::lazy(move || {
            counter.set(counter.get() + 1);
            "rendered".to_string()
        });

        assert_eq!(calls.get(), 0);
        assert_eq!(msg.render(), "rendered");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn rendering_twice_returns_the_same_text() {
        let value = vec!["a", "b"];
        let msg = Message::lazy(move || format!("saw {value:?}"));
        assert_eq!(msg.render(), msg.render());
    }

    #[test]
    fn message_macro_captures_by_value() {
        let mut source = String::from("original");
        let captured = source.clone();
        let msg = message!("value was {:?}", captured);
        source.push_str(" mutated");
        assert_eq!(msg.render(), "value was \"original\"");
    }

    #[test]
    fn indent_prefixes_every_line() {
        assert_eq!(indent("a\nb"), "\ta\n\tb");
    }

    #[test]
    fn describe_uses_debug_form() {
        assert_eq!(describe(&Some(5)), "Some(5)");
        assert_eq!(describe("text"), "\"text\"");
    }
}
