//! Public API of `creole`.
//!
//! This crate turns [Creole][] wiki markup into HTML. It exposes primarily
//! [`to_html()`][].
//!
//! *   [`to_html()`][]:
//!     turn wiki markup into HTML
//! *   [`to_html_with_options()`][]:
//!     like `to_html` but lets you hook into how links are rendered
//!
//! The pipeline is a single pass over the input: a tokenizer classifies
//! ranges of the input into semantic tokens (resolving, from context, things
//! like `*` meaning bold or a list marker), and a renderer consumes them
//! while keeping the output well nested even for markup that overlaps,
//! crosses lines, or never closes.
//!
//! [Creole]: http://www.wikicreole.org

#![no_std]

extern crate alloc;

mod construct;
pub mod message;
mod state;
mod to_html;
mod token;
mod tokenizer;
mod util;

mod configuration;

pub use configuration::{LinkFormatter, Options};

#[doc(hidden)]
// Do not use: exported for token-level testing, may change.
pub use token::{Name, Token};

#[doc(hidden)]
// Do not use: exported for token-level testing, may change.
pub use tokenizer::Tokenizer;

use alloc::string::String;

/// Turn wiki markup into HTML.
///
/// ## Examples
///
/// ```
/// use creole::to_html;
///
/// assert_eq!(to_html("= Hello, world! ="), "<h1> Hello, world! </h1>");
/// assert_eq!(
///     to_html("**hello**, //world//"),
///     "<strong>hello</strong>, <em>world</em>"
/// );
/// ```
#[must_use]
#[allow(clippy::missing_panics_doc)]
pub fn to_html(value: &str) -> String {
    to_html_with_options(value, &Options::default()).unwrap()
}

/// Turn wiki markup into HTML, with configuration.
///
/// ## Errors
///
/// `to_html_with_options()` never errors today: the grammar is total and
/// malformed markup degrades to text, so feel free to `unwrap()`. The error
/// surface is reserved for the `Error` token kind (future resource limits
/// and extensions), which a renderer treats as halt-and-report.
///
/// ## Examples
///
/// ```
/// use creole::{to_html_with_options, Options};
/// # fn main() -> Result<(), creole::message::Message> {
///
/// let result = to_html_with_options(
///     "see http://example.com, or [[Start]]",
///     &Options {
///         free_link_formatter: Some(Box::new(|href, text| {
///             format!("<a rel=\"nofollow\" href=\"{}\">{}</a>", href, text)
///         })),
///         ..Options::default()
///     },
/// )?;
///
/// assert_eq!(
///     result,
///     "<p>see <a rel=\"nofollow\" href=\"http://example.com\">http://example.com</a>, or <a href=\"Start\">Start</a></p>"
/// );
/// # Ok(())
/// # }
/// ```
pub fn to_html_with_options(value: &str, options: &Options) -> Result<String, message::Message> {
    to_html::compile(value, options)
}
