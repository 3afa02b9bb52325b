//! Images.
//!
//! ## Grammar
//!
//! ```bnf
//! ; Restriction: the closer must come before the next line ending.
//! image ::= '{{' source ['|' alt] '}}'
//! ```
//!
//! Same shape as a [link][crate::construct::link], different delimiters. The
//! dispatch tries `{{{` (no-wiki) first, so three braces never get here.
//!
//! ## Tokens
//!
//! * [`Image`][Name::Image]

use crate::construct::link::explicit_close;
use crate::state::{Name as StateName, State};
use crate::token::Name;
use crate::tokenizer::Tokenizer;

/// At `{{`.
///
/// ```creole
/// > | {{flower.jpg|a flower}}
///     ^
/// ```
pub fn start(tokenizer: &mut Tokenizer) -> State {
    if let Some(close) = explicit_close(tokenizer.rest(), "}}") {
        tokenizer.flush_text();
        tokenizer.pos += close + 2;
        tokenizer.emit(Name::Image);
    } else {
        tokenizer.next();
    }

    State::Next(StateName::Text)
}
