//! Forced line break.
//!
//! ## Grammar
//!
//! ```bnf
//! wiki_line_break ::= '\\'
//! ```
//!
//! Renders as `<br />` wherever it occurs; an ordinary line ending in the
//! source does not break the output line, this does.
//!
//! ## Tokens
//!
//! * [`WikiLineBreak`][Name::WikiLineBreak]

use crate::state::{Name as StateName, State};
use crate::token::Name;
use crate::tokenizer::Tokenizer;

/// At `\\`.
///
/// ```creole
/// > | first\\second
///          ^^
/// ```
pub fn start(tokenizer: &mut Tokenizer) -> State {
    tokenizer.pos += 2;
    tokenizer.emit(Name::WikiLineBreak);
    State::Next(StateName::Text)
}
