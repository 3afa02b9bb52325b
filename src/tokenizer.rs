//! A tokenizer glues states from the state machine together.
//!
//! It owns the cursors over the input, the small queue of pending tokens,
//! and the context the ambiguity rules need: the open list depth, the line
//! endings seen since the last list marker, and whether a table row is open.
//!
//! It is driven by pull: each [`next_token`][Tokenizer::next_token] call runs
//! the machine just far enough to produce one token. There is no I/O and no
//! failure; input the grammar gives no meaning to comes back as text.

use crate::state::{call, Name as StateName, State};
use crate::token::{Name, Token};
use crate::util::char::{followed_by_whitespace, preceded_by_whitespace};
use alloc::collections::VecDeque;

/// A tokenizer itself.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    /// Input under scan.
    pub(crate) input: &'a str,
    /// Start of the pending (not yet emitted) literal.
    pub(crate) start: usize,
    /// Current byte position. `start <= pos <= input.len()` always holds.
    pub(crate) pos: usize,
    /// Currently open list nesting depth.
    pub(crate) list_depth: usize,
    /// Line endings emitted since the last list marker.
    pub(crate) break_count: usize,
    /// Whether a table row is open on the current line.
    pub(crate) in_table_row: bool,
    /// Current state.
    state: State,
    /// Tokens scanned but not yet pulled.
    queue: VecDeque<Token<'a>>,
}

impl<'a> Tokenizer<'a> {
    /// Create a new tokenizer over `input`.
    pub fn new(input: &'a str) -> Tokenizer<'a> {
        Tokenizer {
            input,
            start: 0,
            pos: 0,
            list_depth: 0,
            break_count: 0,
            in_table_row: false,
            state: State::Next(StateName::Text),
            queue: VecDeque::new(),
        }
    }

    /// Return the next token, running the state machine as far as needed.
    ///
    /// After the [`Eof`][Name::Eof] token has been returned, every further
    /// call returns another `Eof`.
    pub fn next_token(&mut self) -> Token<'a> {
        loop {
            if let Some(token) = self.queue.pop_front() {
                return token;
            }

            match self.state {
                State::Next(name) => self.state = call(self, name),
                State::Done => {
                    return Token {
                        name: Name::Eof,
                        offset: self.input.len(),
                        literal: "",
                    }
                }
            }
        }
    }

    /// The input from the current position onward.
    pub(crate) fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Consume one code point, if any.
    pub(crate) fn next(&mut self) -> Option<char> {
        let char = self.rest().chars().next()?;
        self.pos += char.len_utf8();
        Some(char)
    }

    /// The next code point, without consuming it.
    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Emit everything from `start` up to the current position as `name`.
    ///
    /// An emission with nothing consumed yields an empty literal; that is how
    /// the synthetic markers (list item, row start) carry position only.
    pub(crate) fn emit(&mut self, name: Name) {
        #[cfg(feature = "log")]
        log::debug!("emit: `{:?}` at {}", name, self.start);

        self.queue.push_back(Token {
            name,
            offset: self.start,
            literal: &self.input[self.start..self.pos],
        });
        self.start = self.pos;
    }

    /// Emit the pending literal, if any, as [`Text`][Name::Text].
    pub(crate) fn flush_text(&mut self) {
        if self.pos > self.start {
            self.emit(Name::Text);
        }
    }

    /// Whether only spaces and tabs sit between `at` and the nearest earlier
    /// line ending or the start of input.
    pub(crate) fn preceded_by_whitespace(&self, at: usize) -> bool {
        preceded_by_whitespace(self.input.as_bytes(), at)
    }

    /// Whether only spaces and tabs sit between `at` and the nearest later
    /// line ending or the end of input.
    pub(crate) fn followed_by_whitespace(&self, at: usize) -> bool {
        followed_by_whitespace(self.input.as_bytes(), at)
    }
}
