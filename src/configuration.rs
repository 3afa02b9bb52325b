//! Configuration.

use alloc::{boxed::Box, string::String};
use core::fmt;

/// A hook rendering one link: called with `(href, text)`, its return value
/// is written into the output verbatim.
pub type LinkFormatter = Box<dyn Fn(&str, &str) -> String>;

/// Configuration that describes how links are turned into HTML.
///
/// Both hooks are optional; without them, links render as plain
/// `<a href="…">…</a>`. Consumers typically use the wiki-link hook to route
/// `[[PageName]]` to their own page URLs.
///
/// ## Examples
///
/// ```
/// use creole::{to_html_with_options, Options};
/// # fn main() -> Result<(), creole::message::Message> {
///
/// let options = Options {
///     wiki_link_formatter: Some(Box::new(|href, text| {
///         format!("<a href=\"/wiki/{}\">{}</a>", href, text)
///     })),
///     ..Options::default()
/// };
///
/// assert_eq!(
///     to_html_with_options("[[Home|go home]]", &options)?,
///     "<a href=\"/wiki/Home\">go home</a>"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct Options {
    /// Replaces the default `<a>` rendering of bare `http://…` URLs found in
    /// running text. Called with the URL as both href and text.
    pub free_link_formatter: Option<LinkFormatter>,
    /// Replaces the default `<a>` rendering of `[[…]]` links. With no `|` in
    /// the span, href and text are both the whole inner literal.
    pub wiki_link_formatter: Option<LinkFormatter>,
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field(
                "free_link_formatter",
                &self.free_link_formatter.as_ref().map(|_| "Fn"),
            )
            .field(
                "wiki_link_formatter",
                &self.wiki_link_formatter.as_ref().map(|_| "Fn"),
            )
            .finish()
    }
}
