//! States of the state machine.

use crate::construct;
use crate::tokenizer::Tokenizer;

/// Result of a state.
///
/// Each state function returns where the machine goes next. A name plus one
/// dispatch function gives the same control flow as storing a function
/// pointer, without the function pointer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum State {
    /// Move to [`Name`][] next.
    Next(Name),
    /// The input is exhausted and `Eof` has been emitted.
    Done,
}

/// Names of states to move to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Name {
    /// Default state: accumulate plain text, watch for delimiter prefixes.
    Text,
    /// At a `~` that protects a delimiter.
    CharacterEscape,
    /// At `//`.
    Italics,
    /// At a `*` run: bold or unordered list marker.
    Asterisk,
    /// At a `#` run: ordered list marker.
    Pound,
    /// At `\\`.
    WikiLineBreak,
    /// At a line ending.
    NewLine,
    /// At a space/tab run.
    SpaceRun,
    /// At a `=` run: heading open or close.
    Heading,
    /// At `----`.
    HorizontalRule,
    /// At `[[`.
    Link,
    /// At `{{`.
    Image,
    /// At `{{{`.
    NoWiki,
    /// At `http://`.
    FreeLink,
    /// At a `|` that means something in a table row.
    TableCell,
}

/// Call the corresponding state function.
pub fn call(tokenizer: &mut Tokenizer, name: Name) -> State {
    match name {
        Name::Text => construct::text::start(tokenizer),
        Name::CharacterEscape => construct::character_escape::start(tokenizer),
        Name::Italics => construct::attention::italics(tokenizer),
        Name::Asterisk => construct::attention::asterisk(tokenizer),
        Name::Pound => construct::list_item::pound(tokenizer),
        Name::WikiLineBreak => construct::line_break::start(tokenizer),
        Name::NewLine => construct::whitespace::newline(tokenizer),
        Name::SpaceRun => construct::whitespace::space_run(tokenizer),
        Name::Heading => construct::heading::start(tokenizer),
        Name::HorizontalRule => construct::horizontal_rule::start(tokenizer),
        Name::Link => construct::link::start(tokenizer),
        Name::Image => construct::image::start(tokenizer),
        Name::NoWiki => construct::no_wiki::start(tokenizer),
        Name::FreeLink => construct::free_link::start(tokenizer),
        Name::TableCell => construct::table::cell(tokenizer),
    }
}
