//! Headings.
//!
//! ## Grammar
//!
//! ```bnf
//! ; Restriction: an opener sits at a line start (only whitespace before it
//! ; on its line); a closer is followed by only whitespace on its line.
//! heading_open ::= 1*6'='
//! heading_close ::= 1*'='
//! ```
//!
//! The same character opens and closes, so position decides. A run at a line
//! start opens a heading of its rank, even when whitespace follows:
//!
//! ```creole
//! > | == title ==
//!     ^^       --
//! ```
//!
//! A run that is not at a line start but has nothing after it on the line is
//! a close run. Anything else, and any line-start run longer than six, folds
//! into text.
//!
//! ## Tokens
//!
//! * [`Heading1`][Name::Heading1] … [`Heading6`][Name::Heading6]
//! * [`HeadingCloseRun`][Name::HeadingCloseRun]

use crate::state::{Name as StateName, State};
use crate::token::{Name, HEADINGS};
use crate::tokenizer::Tokenizer;
use crate::util::constant::HEADING_RANK_MAX;

/// At a `=` run.
///
/// ```creole
/// > | == title ==
///     ^
/// ```
pub fn start(tokenizer: &mut Tokenizer) -> State {
    let run_start = tokenizer.pos;
    let preceded = tokenizer.preceded_by_whitespace(run_start);
    let mut rank = 0;

    while tokenizer.peek() == Some('=') {
        rank += 1;
        tokenizer.next();
    }

    if preceded && rank <= HEADING_RANK_MAX {
        tokenizer.emit(HEADINGS[rank - 1]);
    } else if !preceded && tokenizer.followed_by_whitespace(tokenizer.pos) {
        tokenizer.emit(Name::HeadingCloseRun);
    }
    // An over-long or mid-text run stays in the accumulator.

    State::Next(StateName::Text)
}
