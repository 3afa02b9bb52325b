//! Turn a token stream into a string of HTML.
//!
//! The renderer pulls tokens from the tokenizer one at a time and drives an
//! open-element stack. Two bookkeeping devices do the heavy lifting:
//!
//! * the **stack** of open kinds, so every `<x>` written gets its `</x>` in
//!   reverse order, whatever the input does;
//! * the **pre-closed multiset**: when a marker closes spans out of order
//!   (`**//x**//`), everything popped past the target is recorded here, and
//!   the stray markers that arrive later are absorbed silently instead of
//!   reopening.
//!
//! Structural closures (list markers, table cells and rows, the full close
//! at a blank line or end of input) pop and write close tags without
//! touching the multiset: a span force-closed by a block boundary may open
//! again normally afterwards.

use crate::configuration::Options;
use crate::message::Message;
use crate::token::{Name, Token, HEADINGS};
use crate::tokenizer::Tokenizer;
use alloc::{
    boxed::Box,
    format,
    string::{String, ToString},
    vec::Vec,
};

/// Context used to render tokens.
#[derive(Debug)]
struct CompileContext<'a> {
    /// Configuration.
    options: &'a Options,
    /// Open-element stack: kinds whose open tag has been written and whose
    /// close tag is still owed.
    stack: Vec<Name>,
    /// Kinds closed early to rebalance a misordered span; their next
    /// occurrence is absorbed.
    pre_closed: Vec<Name>,
    /// Tokens consumed so far, in order. Paragraph starts and double-newline
    /// boundaries are decided from the tail of this history.
    items: Vec<Token<'a>>,
    /// Output.
    buf: String,
}

/// Turn wiki markup into HTML.
pub fn compile(value: &str, options: &Options) -> Result<String, Message> {
    let mut tokenizer = Tokenizer::new(value);
    let mut context = CompileContext {
        options,
        stack: Vec::new(),
        pre_closed: Vec::new(),
        items: Vec::new(),
        buf: String::new(),
    };

    loop {
        let token = tokenizer.next_token();

        #[cfg(feature = "log")]
        log::trace!("handle: `{:?}`", token.name);

        match token.name {
            Name::Eof => break,
            Name::Error => {
                return Err(Message {
                    reason: if token.literal.is_empty() {
                        "unexpected error token".to_string()
                    } else {
                        token.literal.to_string()
                    },
                    offset: Some(token.offset),
                    source: Box::new("creole".to_string()),
                    rule_id: Box::new("error-token".to_string()),
                })
            }
            _ => {
                context.handle(&token);
                context.items.push(token);
            }
        }
    }

    context.close_all();
    Ok(context.buf)
}

impl<'a> CompileContext<'a> {
    /// Handle one token.
    fn handle(&mut self, token: &Token<'a>) {
        // Line endings render nothing themselves; their only immediate duty
        // is ending a table row that has no explicit `|` end.
        if token.name == Name::NewLine {
            if self.is_open(Name::TableRow) {
                self.close_including(Name::TableRow);
            }
            return;
        }

        if token.name == Name::SpaceRun {
            self.push(token.literal);
            return;
        }

        // The first token after a blank line sees everything still open from
        // the block before it closed here, paragraph included.
        if self.follows_double_break() {
            self.close_all();
        }

        match token.name {
            Name::Text => {
                if self.opens_paragraph() {
                    self.open(Name::Text);
                }
                self.push(token.literal);
            }
            Name::Bold
            | Name::Italics
            | Name::Heading1
            | Name::Heading2
            | Name::Heading3
            | Name::Heading4
            | Name::Heading5
            | Name::Heading6 => self.attention(token.name),
            Name::HeadingCloseRun => self.heading_close_run(token),
            Name::HorizontalRule => self.push("<hr>"),
            Name::WikiLineBreak => self.push("<br />"),
            Name::UnorderedListIncrease
            | Name::OrderedListIncrease
            | Name::UnorderedListItem
            | Name::OrderedListItem => self.open(token.name),
            Name::UnorderedListSameAsLast | Name::OrderedListSameAsLast => {
                self.list_same_as_last(token.name);
            }
            Name::UnorderedListDecrease => {
                self.list_decrease(token.name, Name::UnorderedListIncrease);
            }
            Name::OrderedListDecrease => {
                self.list_decrease(token.name, Name::OrderedListIncrease);
            }
            Name::Link => self.link(token),
            Name::FreeLink => self.free_link(token),
            Name::Image => self.image(token),
            Name::NoWikiOpen => self.open(Name::NoWikiOpen),
            Name::NoWikiText | Name::EscapeText => self.push(token.literal),
            Name::NoWikiClose => {
                if self.is_open(Name::NoWikiOpen) {
                    self.close_including(Name::NoWikiOpen);
                }
            }
            Name::TableRowStart => {
                if !self.is_open(Name::Table) {
                    self.open(Name::Table);
                }
                self.open(Name::TableRow);
            }
            Name::TableRowEnd => {
                self.close_cell();
                if self.is_open(Name::TableRow) {
                    self.close_including(Name::TableRow);
                }
            }
            Name::TableItem | Name::TableHeaderItem => {
                self.close_cell();
                self.open(token.name);
            }
            // The escape marker itself renders nothing.
            Name::Escape => {}
            Name::Eof | Name::Error | Name::NewLine | Name::SpaceRun | Name::Table
            | Name::TableRow => {
                unreachable!("handled before dispatch or never emitted")
            }
        }
    }

    /// Add a str to the output.
    fn push(&mut self, value: &str) {
        self.buf.push_str(value);
    }

    /// Whether `name` is currently on the open-element stack.
    fn is_open(&self, name: Name) -> bool {
        self.stack.contains(&name)
    }

    /// Write the open tag for `name` and push it.
    fn open(&mut self, name: Name) {
        let (open, _) = name.tags().expect("open called with a tagless kind");
        self.buf.push_str(open);
        self.stack.push(name);
    }

    /// Structurally close everything up to and including `name`.
    ///
    /// Caller checks `is_open` first.
    fn close_including(&mut self, name: Name) {
        while let Some(popped) = self.stack.pop() {
            if let Some((_, close)) = popped.tags() {
                self.buf.push_str(close);
            }
            if popped == name {
                break;
            }
        }
    }

    /// Close the whole stack, and forget rebalancing state with it.
    fn close_all(&mut self) {
        while let Some(popped) = self.stack.pop() {
            if let Some((_, close)) = popped.tags() {
                self.buf.push_str(close);
            }
        }
        self.pre_closed.clear();
    }

    /// Close spans out of order: pop to and including `name`, writing close
    /// tags; everything popped past the target is recorded as pre-closed so
    /// its stray later marker is absorbed.
    fn close_others(&mut self, name: Name) {
        while let Some(popped) = self.stack.pop() {
            if let Some((_, close)) = popped.tags() {
                self.buf.push_str(close);
            }
            if popped == name {
                break;
            }
            self.pre_closed.push(popped);
        }
    }

    /// Take one pre-closed entry for `name`, if any.
    fn absorb_pre_closed(&mut self, name: Name) -> bool {
        if let Some(index) = self.pre_closed.iter().position(|it| *it == name) {
            self.pre_closed.swap_remove(index);
            true
        } else {
            false
        }
    }

    /// An inline span marker: absorb, open, or close-others.
    fn attention(&mut self, name: Name) {
        // A marker whose span was already force-closed is swallowed.
        if self.absorb_pre_closed(name) {
            return;
        }

        if self.is_open(name) {
            self.close_others(name);
        } else {
            self.open(name);
        }
    }

    /// A trailing `=` run: close whichever heading is open. With no heading
    /// open the run is ordinary text.
    fn heading_close_run(&mut self, token: &Token<'a>) {
        let mut closed = false;

        for name in HEADINGS {
            if self.is_open(name) {
                self.close_others(name);
                closed = true;
            }
        }

        if !closed {
            self.push(token.literal);
        }
    }

    /// Next item at the same depth: close the innermost open item, open a
    /// fresh one.
    fn list_same_as_last(&mut self, name: Name) {
        if self.stack.iter().any(|it| it.is_list_item()) {
            loop {
                match self.stack.pop() {
                    Some(popped) => {
                        if let Some((_, close)) = popped.tags() {
                            self.buf.push_str(close);
                        }
                        if popped.is_list_item() {
                            break;
                        }
                    }
                    None => break,
                }
            }
        }

        self.open(name);
    }

    /// An item one level up: close the innermost list of this family and its
    /// enclosing item, then open a fresh item.
    fn list_decrease(&mut self, name: Name, increase: Name) {
        if self.is_open(increase) {
            self.close_including(increase);

            if self.stack.last().map_or(false, |it| it.is_list_item()) {
                let popped = self.stack.pop().expect("just checked");
                if let Some((_, close)) = popped.tags() {
                    self.buf.push_str(close);
                }
            }
        }

        self.open(name);
    }

    /// Close the open cell of a row, of either kind.
    fn close_cell(&mut self) {
        if self.is_open(Name::TableItem) {
            self.close_including(Name::TableItem);
        } else if self.is_open(Name::TableHeaderItem) {
            self.close_including(Name::TableHeaderItem);
        }
    }

    /// A `[[…]]` span.
    fn link(&mut self, token: &Token<'a>) {
        let inner = &token.literal[2..token.literal.len() - 2];
        let (href, text) = match inner.find('|') {
            Some(index) => (&inner[..index], &inner[index + 1..]),
            None => (inner, inner),
        };

        if let Some(formatter) = &self.options.wiki_link_formatter {
            let formatted = formatter(href, text);
            self.push(&formatted);
        } else {
            let formatted = format!("<a href=\"{}\">{}</a>", href, text);
            self.push(&formatted);
        }
    }

    /// A bare URL.
    fn free_link(&mut self, token: &Token<'a>) {
        let url = token.literal;

        if let Some(formatter) = &self.options.free_link_formatter {
            let formatted = formatter(url, url);
            self.push(&formatted);
        } else {
            let formatted = format!("<a href=\"{}\">{}</a>", url, url);
            self.push(&formatted);
        }
    }

    /// A `{{…}}` span.
    fn image(&mut self, token: &Token<'a>) {
        let inner = &token.literal[2..token.literal.len() - 2];
        let (src, alt) = match inner.find('|') {
            Some(index) => (&inner[..index], &inner[index + 1..]),
            None => (inner, ""),
        };

        let formatted = format!("<img src=\"{}\" alt=\"{}\" />", src, alt);
        self.push(&formatted);
    }

    /// Whether the consumed history ends in a double-newline boundary: two
    /// or more line endings, space runs in between allowed.
    fn follows_double_break(&self) -> bool {
        self.trailing_newlines() >= 2
    }

    /// Whether a text token here is the first non-whitespace content since
    /// the start of input or since the last double-newline boundary.
    fn opens_paragraph(&self) -> bool {
        for item in self.items.iter().rev() {
            match item.name {
                Name::NewLine | Name::SpaceRun => {}
                _ => return self.follows_double_break(),
            }
        }

        true
    }

    /// Line endings at the tail of the history, ignoring space runs.
    fn trailing_newlines(&self) -> usize {
        let mut count = 0;

        for item in self.items.iter().rev() {
            match item.name {
                Name::NewLine => count += 1,
                Name::SpaceRun => {}
                _ => break,
            }
        }

        count
    }
}
