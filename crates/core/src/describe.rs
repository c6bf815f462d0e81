//! Textual descriptions.
//!
//! Anything that can describe itself in a sentence implements
//! [`TextRepresentable`]. Types that have a richer rendering (a board drawn
//! with symbols, say) override [`TextRepresentable::pretty_textual_description`];
//! everyone else gets the plain description for free.

/// A value that can be rendered as human-readable text.
pub trait TextRepresentable {
    /// One-line description.
    fn textual_description(&self) -> String;

    /// Longer, decorated description. Defaults to the one-line form.
    fn pretty_textual_description(&self) -> String {
        self.textual_description()
    }
}

impl<T: TextRepresentable + ?Sized> TextRepresentable for &T {
    fn textual_description(&self) -> String {
        (**self).textual_description()
    }

    fn pretty_textual_description(&self) -> String {
        (**self).pretty_textual_description()
    }
}

impl<T: TextRepresentable + ?Sized> TextRepresentable for Box<T> {
    fn textual_description(&self) -> String {
        (**self).textual_description()
    }

    fn pretty_textual_description(&self) -> String {
        (**self).pretty_textual_description()
    }
}

impl<T: TextRepresentable> TextRepresentable for [T] {
    fn textual_description(&self) -> String {
        describe_all(self)
    }
}

impl<T: TextRepresentable> TextRepresentable for Vec<T> {
    fn textual_description(&self) -> String {
        describe_all(self)
    }
}

/// Render a list as `[first, second, ...]`.
pub fn describe_all<T: TextRepresentable>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(|i| i.textual_description()).collect();
    format!("[{}]", parts.join(", "))
}
