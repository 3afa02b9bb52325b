//! The default state: plain text, watching for delimiters.
//!
//! At every position the delimiter prefixes are tried in a fixed priority
//! order; the first match wins. `{{{` must be tried before `{{`, and a pipe
//! only counts when a row is open or the line so far is blank. Whatever
//! matches nothing is consumed one code point at a time into the pending
//! text accumulator, which is flushed as a single [`Text`][Name::Text] token
//! before any other token is emitted.

use crate::construct::character_escape;
use crate::state::{Name as StateName, State};
use crate::token::Name;
use crate::tokenizer::Tokenizer;
use crate::util::constant::{FREE_LINK_PROTOCOL, HORIZONTAL_RULE};

/// In text.
///
/// ```creole
/// > | some **bold** text
///     ^^^^^
/// ```
pub fn start(tokenizer: &mut Tokenizer) -> State {
    loop {
        let rest = tokenizer.rest();

        if rest.starts_with('~') && character_escape::can_escape(&rest[1..]) {
            tokenizer.flush_text();
            return State::Next(StateName::CharacterEscape);
        }

        if rest.starts_with("//") {
            tokenizer.flush_text();
            return State::Next(StateName::Italics);
        }

        if rest.starts_with("\\\\") {
            tokenizer.flush_text();
            return State::Next(StateName::WikiLineBreak);
        }

        if rest.starts_with('\n') || rest.starts_with('\r') {
            tokenizer.flush_text();
            return State::Next(StateName::NewLine);
        }

        if rest.starts_with('=') {
            tokenizer.flush_text();
            return State::Next(StateName::Heading);
        }

        // Not flushed here: the span states flush themselves once the span
        // turns out to be closed on this line.
        if rest.starts_with("[[") {
            return State::Next(StateName::Link);
        }

        if rest.starts_with("{{{") {
            tokenizer.flush_text();
            return State::Next(StateName::NoWiki);
        }

        if rest.starts_with("{{") {
            return State::Next(StateName::Image);
        }

        if rest.starts_with(FREE_LINK_PROTOCOL) {
            tokenizer.flush_text();
            return State::Next(StateName::FreeLink);
        }

        if rest.starts_with('*') {
            tokenizer.flush_text();
            return State::Next(StateName::Asterisk);
        }

        if rest.starts_with('#') {
            tokenizer.flush_text();
            return State::Next(StateName::Pound);
        }

        if rest.starts_with('|')
            && (tokenizer.in_table_row || tokenizer.preceded_by_whitespace(tokenizer.pos))
        {
            return State::Next(StateName::TableCell);
        }

        if rest.starts_with(HORIZONTAL_RULE) {
            return State::Next(StateName::HorizontalRule);
        }

        if rest.starts_with("  ") || rest.starts_with(" \t") || rest.starts_with('\t') {
            tokenizer.flush_text();
            return State::Next(StateName::SpaceRun);
        }

        if tokenizer.next().is_none() {
            break;
        }
    }

    tokenizer.flush_text();
    tokenizer.emit(Name::Eof);
    State::Done
}
