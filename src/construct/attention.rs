//! Attention: bold and italics.
//!
//! ## Grammar
//!
//! ```bnf
//! italics ::= '//'
//! bold ::= '**'
//! ```
//!
//! Both markers toggle: the renderer decides whether an occurrence opens or
//! closes, and rebalances markers closed out of order.
//!
//! Italics are unambiguous. Asterisks are not: a run at the start of a line
//! with a space after it is list territory (see
//! [`list_item`][crate::construct::list_item]), and only a run that fits no
//! list reads as bold. A run of the wrong length in list position reads as
//! one bold marker followed by literal asterisks:
//!
//! ```creole
//! > | *** three out of the blue
//!     ^^-
//! ```
//!
//! ## Tokens
//!
//! * [`Bold`][Name::Bold]
//! * [`Italics`][Name::Italics]

use crate::construct::list_item;
use crate::state::{Name as StateName, State};
use crate::token::Name;
use crate::tokenizer::Tokenizer;

/// At `//`.
///
/// ```creole
/// > | hello-//blah//-world
///           ^^
/// ```
pub fn italics(tokenizer: &mut Tokenizer) -> State {
    tokenizer.pos += 2;
    tokenizer.emit(Name::Italics);
    State::Next(StateName::Text)
}

/// At a `*` run.
///
/// ```creole
/// > | hello-**blah**-world
///           ^^
/// > | * a list item
///     ^
/// ```
pub fn asterisk(tokenizer: &mut Tokenizer) -> State {
    let run_start = tokenizer.pos;
    let mut count = 0;

    while tokenizer.peek() == Some('*') {
        count += 1;
        tokenizer.next();
    }

    let spaced = matches!(tokenizer.peek(), Some(' ' | '\t'));

    if spaced && tokenizer.preceded_by_whitespace(run_start) {
        if !list_item::marker(
            tokenizer,
            count,
            Name::UnorderedListIncrease,
            Name::UnorderedListItem,
            Name::UnorderedListSameAsLast,
            Name::UnorderedListDecrease,
        ) {
            // A run in list position that fits no list: the first two
            // asterisks read as bold, the rest re-scan as text.
            tokenizer.pos = run_start + 2;
            tokenizer.emit(Name::Bold);
        }
    } else if count == 2 {
        tokenizer.emit(Name::Bold);
    }
    // Any other run stays in the accumulator and folds into text.

    State::Next(StateName::Text)
}
