//! Tables.
//!
//! ## Grammar
//!
//! ```bnf
//! ; Restriction: a row opens at a line start (only whitespace before the
//! ; pipe on its line).
//! row ::= cell_marker *(content cell_marker) [row_end]
//! cell_marker ::= '|' | '|='
//! ; Restriction: only whitespace after it on its line.
//! row_end ::= '|'
//! ```
//!
//! A pipe at a line start opens a row; inside a row, every pipe either
//! starts the next cell (`|=` a header cell) or, when nothing but whitespace
//! follows it on the line, ends the row. A row without an explicit end is
//! closed at the line ending by the renderer. A pipe in running text with no
//! row open is plain text.
//!
//! ```creole
//! > | |=name|=size|
//!     ^^----^^----^
//! ```
//!
//! ## Tokens
//!
//! * [`TableRowStart`][Name::TableRowStart]
//! * [`TableRowEnd`][Name::TableRowEnd]
//! * [`TableItem`][Name::TableItem]
//! * [`TableHeaderItem`][Name::TableHeaderItem]

use crate::state::{Name as StateName, State};
use crate::token::Name;
use crate::tokenizer::Tokenizer;

/// At a `|` that means something in a row.
///
/// ```creole
/// > | |one|two|
///     ^   ^   ^
/// ```
pub fn cell(tokenizer: &mut Tokenizer) -> State {
    tokenizer.flush_text();

    if tokenizer.in_table_row && tokenizer.followed_by_whitespace(tokenizer.pos + 1) {
        tokenizer.next();
        tokenizer.emit(Name::TableRowEnd);
        tokenizer.in_table_row = false;
    } else {
        if !tokenizer.in_table_row {
            // Synthetic: the row start carries position only.
            tokenizer.emit(Name::TableRowStart);
            tokenizer.in_table_row = true;
        }

        tokenizer.next();

        if tokenizer.peek() == Some('=') {
            tokenizer.next();
            tokenizer.emit(Name::TableHeaderItem);
        } else {
            tokenizer.emit(Name::TableItem);
        }
    }

    State::Next(StateName::Text)
}
