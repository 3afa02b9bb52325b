//! Free links: bare URLs in running text.
//!
//! ## Grammar
//!
//! ```bnf
//! free_link ::= 'http://' *non_whitespace
//! ```
//!
//! The run extends to the next whitespace. Sentence punctuation straight
//! after a URL is almost never part of it, so one trailing byte from
//! `,.?!:;"'` is given back to the text:
//!
//! ```creole
//! > | see http://example.com/a?b, twice
//!         ^^^^^^^^^^^^^^^^^^^^^
//! ```
//!
//! ## Tokens
//!
//! * [`FreeLink`][Name::FreeLink]

use crate::state::{Name as StateName, State};
use crate::token::Name;
use crate::tokenizer::Tokenizer;
use crate::util::constant::FREE_LINK_TRAILING_PUNCTUATION;

/// At `http://`.
///
/// ```creole
/// > | http://example.com
///     ^
/// ```
pub fn start(tokenizer: &mut Tokenizer) -> State {
    let rest = tokenizer.rest();
    let mut end = rest
        .find(|char| matches!(char, ' ' | '\t' | '\n' | '\r'))
        .unwrap_or(rest.len());

    if end > 0 && FREE_LINK_TRAILING_PUNCTUATION.contains(&rest.as_bytes()[end - 1]) {
        end -= 1;
    }

    tokenizer.pos += end;
    tokenizer.emit(Name::FreeLink);
    State::Next(StateName::Text)
}
