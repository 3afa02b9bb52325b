//! Line endings and space runs.
//!
//! A line ending is one token, with `\r\n` taken as a pair so Windows input
//! does not produce phantom paragraph boundaries. Line endings also carry
//! two bookkeeping duties: an open table row never survives one, and after
//! two of them with no list marker in between the open list is abandoned.
//!
//! A space run is a maximal run of spaces and tabs, recognized when it is at
//! least two characters or contains a tab; a lone space between words stays
//! inside text. Space runs exist so the line-start predicates can sit right
//! after them, and their literal is carried through to the output untouched.

use crate::state::{Name as StateName, State};
use crate::token::Name;
use crate::tokenizer::Tokenizer;
use crate::util::constant::LIST_BREAK_LIMIT;

/// At a line ending.
///
/// ```creole
/// > | one
///        ^
///   | two
/// ```
pub fn newline(tokenizer: &mut Tokenizer) -> State {
    if tokenizer.rest().starts_with("\r\n") {
        tokenizer.pos += 2;
    } else {
        tokenizer.pos += 1;
    }

    tokenizer.emit(Name::NewLine);
    tokenizer.in_table_row = false;
    tokenizer.break_count += 1;

    if tokenizer.break_count >= LIST_BREAK_LIMIT {
        tokenizer.list_depth = 0;
    }

    State::Next(StateName::Text)
}

/// At a space run.
///
/// ```creole
/// > |    # indented marker
///     ^^^
/// ```
pub fn space_run(tokenizer: &mut Tokenizer) -> State {
    while matches!(tokenizer.peek(), Some(' ' | '\t')) {
        tokenizer.next();
    }

    tokenizer.emit(Name::SpaceRun);
    State::Next(StateName::Text)
}
