//! No-wiki: verbatim spans.
//!
//! ## Grammar
//!
//! ```bnf
//! no_wiki ::= '{{{' *code '}}}'
//! ```
//!
//! Unlike every other span this one may cross lines, and its content is
//! never tokenized: the next `}}}` ends it, whatever sits in between.
//!
//! ```creole
//! > | {{{ ** not bold ** }}}
//!     ^^^----------------^^^
//! ```
//!
//! A span that never closes runs to the end of input; no closer token is
//! emitted then, and the renderer's final cleanup closes the `<pre>`.
//!
//! ## Tokens
//!
//! * [`NoWikiOpen`][Name::NoWikiOpen]
//! * [`NoWikiText`][Name::NoWikiText]
//! * [`NoWikiClose`][Name::NoWikiClose]

use crate::state::{Name as StateName, State};
use crate::token::Name;
use crate::tokenizer::Tokenizer;

/// At `{{{`.
///
/// ```creole
/// > | {{{ raw }}}
///     ^
/// ```
pub fn start(tokenizer: &mut Tokenizer) -> State {
    tokenizer.pos += 3;
    tokenizer.emit(Name::NoWikiOpen);

    match tokenizer.rest().find("}}}") {
        Some(close) => {
            if close > 0 {
                tokenizer.pos += close;
                tokenizer.emit(Name::NoWikiText);
            }
            tokenizer.pos += 3;
            tokenizer.emit(Name::NoWikiClose);
        }
        None => {
            if !tokenizer.rest().is_empty() {
                tokenizer.pos = tokenizer.input.len();
                tokenizer.emit(Name::NoWikiText);
            }
        }
    }

    State::Next(StateName::Text)
}
