//! Horizontal rule.
//!
//! ## Grammar
//!
//! ```bnf
//! ; Restriction: nothing but whitespace before and after it on its line.
//! horizontal_rule ::= '----'
//! ```
//!
//! The rule must own its line. With text anywhere on the same line the
//! hyphens are ordinary text:
//!
//! ```creole
//! > | wiki wiki ----
//!               ^ text
//! ```
//!
//! Note the predicates run before the pending text is flushed, so the check
//! looks at the raw line, not at emitted tokens.
//!
//! ## Tokens
//!
//! * [`HorizontalRule`][Name::HorizontalRule]

use crate::state::{Name as StateName, State};
use crate::token::Name;
use crate::tokenizer::Tokenizer;
use crate::util::constant::HORIZONTAL_RULE;

/// At `----`.
///
/// ```creole
/// > | ----
///     ^
/// ```
pub fn start(tokenizer: &mut Tokenizer) -> State {
    let after = tokenizer.pos + HORIZONTAL_RULE.len();

    if tokenizer.followed_by_whitespace(after) && tokenizer.preceded_by_whitespace(tokenizer.pos) {
        tokenizer.flush_text();
        tokenizer.pos = after;
        tokenizer.emit(Name::HorizontalRule);
    } else {
        tokenizer.next();
    }

    State::Next(StateName::Text)
}
