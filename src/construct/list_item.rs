//! List items, unordered and ordered.
//!
//! ## Grammar
//!
//! ```bnf
//! ; Restriction: the run must sit at a line start (only whitespace before
//! ; it on its line) and be followed by a space or tab.
//! unordered_item ::= 1*'*'
//! ordered_item ::= 1*'#'
//! ```
//!
//! The run length is read against the currently open depth: one deeper opens
//! a nested list, the same depth is the next item, shallower closes a level.
//! Depth changes move one level per marker. A blank line abandons the open
//! list: after two line endings without a marker the depth resets and the
//! next marker starts over at depth one.
//!
//! Asterisk runs that fit no list fall back to bold (see
//! [`attention`][crate::construct::attention]); pound runs fold into text.
//!
//! ## Tokens
//!
//! * [`UnorderedListIncrease`][Name::UnorderedListIncrease],
//!   [`UnorderedListItem`][Name::UnorderedListItem],
//!   [`UnorderedListSameAsLast`][Name::UnorderedListSameAsLast],
//!   [`UnorderedListDecrease`][Name::UnorderedListDecrease]
//! * [`OrderedListIncrease`][Name::OrderedListIncrease],
//!   [`OrderedListItem`][Name::OrderedListItem],
//!   [`OrderedListSameAsLast`][Name::OrderedListSameAsLast],
//!   [`OrderedListDecrease`][Name::OrderedListDecrease]

use crate::state::{Name as StateName, State};
use crate::token::Name;
use crate::tokenizer::Tokenizer;

/// At a `#` run.
///
/// ```creole
/// > | # one
///     ^
/// ```
pub fn pound(tokenizer: &mut Tokenizer) -> State {
    let run_start = tokenizer.pos;
    let mut count = 0;

    while tokenizer.peek() == Some('#') {
        count += 1;
        tokenizer.next();
    }

    let spaced = matches!(tokenizer.peek(), Some(' ' | '\t'));

    if spaced && tokenizer.preceded_by_whitespace(run_start) {
        // A pound run that fits no list has no bold fallback: it is text.
        let _ = marker(
            tokenizer,
            count,
            Name::OrderedListIncrease,
            Name::OrderedListItem,
            Name::OrderedListSameAsLast,
            Name::OrderedListDecrease,
        );
    }

    State::Next(StateName::Text)
}

/// Resolve a marker run of `count` characters against the open depth.
///
/// Emits the matching tokens of the given family and returns whether the run
/// was taken as a list marker. The consumed run becomes the literal of the
/// emitted marker; the item marker paired with an increase is synthetic.
pub(crate) fn marker(
    tokenizer: &mut Tokenizer,
    count: usize,
    increase: Name,
    item: Name,
    same_as_last: Name,
    decrease: Name,
) -> bool {
    if count == tokenizer.list_depth + 1 {
        tokenizer.emit(increase);
        tokenizer.emit(item);
        tokenizer.list_depth += 1;
        tokenizer.break_count = 0;
        true
    } else if count == tokenizer.list_depth {
        tokenizer.emit(same_as_last);
        tokenizer.break_count = 0;
        true
    } else if count < tokenizer.list_depth {
        tokenizer.emit(decrease);
        tokenizer.list_depth -= 1;
        tokenizer.break_count = 0;
        true
    } else {
        false
    }
}
