//! Character escape.
//!
//! ## Grammar
//!
//! ```bnf
//! character_escape ::= '~' delimiter_start
//! ```
//!
//! A tilde protects exactly one code point, and only when that code point
//! could start a delimiter (including another tilde). The tilde itself is
//! dropped from the output; the protected code point is written through
//! verbatim:
//!
//! ```creole
//! > | ~[[not a link
//!     ^-
//! ```
//!
//! A tilde before anything else is plain text.
//!
//! ## Tokens
//!
//! * [`Escape`][Name::Escape]
//! * [`EscapeText`][Name::EscapeText]

use crate::state::{Name as StateName, State};
use crate::token::Name;
use crate::tokenizer::Tokenizer;
use crate::util::constant::HORIZONTAL_RULE;

/// At a `~` that protects a delimiter.
///
/// ```creole
/// > | ~**plain asterisks
///     ^
/// ```
pub fn start(tokenizer: &mut Tokenizer) -> State {
    tokenizer.next();
    tokenizer.emit(Name::Escape);

    if tokenizer.next().is_some() {
        tokenizer.emit(Name::EscapeText);
    }

    State::Next(StateName::Text)
}

/// Whether `rest` (the input right after a tilde) starts with something that
/// could open a delimiter.
///
/// Free links are not in the set: protecting only their first code point
/// would leave `ttp://` behind for the scan to misread.
pub(crate) fn can_escape(rest: &str) -> bool {
    rest.starts_with("//")
        || rest.starts_with("\\\\")
        || rest.starts_with('\n')
        || rest.starts_with('\r')
        || rest.starts_with('=')
        || rest.starts_with("[[")
        || rest.starts_with("{{")
        || rest.starts_with('*')
        || rest.starts_with('#')
        || rest.starts_with('|')
        || rest.starts_with(HORIZONTAL_RULE)
        || rest.starts_with('~')
}
