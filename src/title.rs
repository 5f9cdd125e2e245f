//! Link and navigation titles.

use std::fmt;
use std::sync::Arc;

/// An opaque displayable title.
///
/// Either fixed text or a deferred value that is formatted only when
/// displayed, such as a translation catalogue message. The tree never
/// inspects titles; stringification happens at the consumer's edge.
#[derive(Clone)]
pub enum Title {
    /// Fixed text
    Text(String),
    /// Formatted on demand through its `Display` impl
    Lazy(Arc<dyn fmt::Display + Send + Sync>),
}

impl Title {
    /// Wraps a value whose `Display` impl runs only at render time.
    /// Cloning the resulting title shares the value instead of copying it.
    pub fn lazy<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Title::Lazy(Arc::new(value))
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Title::Text(text) => f.write_str(text),
            Title::Lazy(value) => write!(f, "{value}"),
        }
    }
}

impl fmt::Debug for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Title::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Title::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

impl From<&str> for Title {
    fn from(value: &str) -> Self {
        Title::Text(value.to_string())
    }
}

impl From<String> for Title {
    fn from(value: String) -> Self {
        Title::Text(value)
    }
}
