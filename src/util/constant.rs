//! Constants of the Creole delimiter grammar.

/// Highest heading rank: `======` maps to `<h6>`.
///
/// A longer run at a line start is not a heading and reads as plain text.
pub const HEADING_RANK_MAX: usize = 6;

/// The horizontal rule marker, exactly four hyphens.
pub const HORIZONTAL_RULE: &str = "----";

/// Protocol recognized for free links in running text.
pub const FREE_LINK_PROTOCOL: &str = "http://";

/// Punctuation trimmed (one byte, once) from the tail of a free link, so
/// `http://example.com, and` links without the comma.
pub const FREE_LINK_TRAILING_PUNCTUATION: &[u8] = b",.?!:;\"'";

/// Number of line endings after which an open list is abandoned: a blank
/// line ends the list, and later markers start a fresh one at depth one.
pub const LIST_BREAK_LIMIT: usize = 2;
