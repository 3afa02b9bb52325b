//! Constructs found in wiki markup.
//!
//! Each module owns the state functions for one construct. They all share
//! the same shape: `fn(&mut Tokenizer) -> State`, entered from the
//! [`text`][] dispatch when its delimiter prefix matches, emitting zero or
//! more tokens and handing control back.
//!
//! There is no backtracking: a construct that turns out not to apply leaves
//! the characters it looked at in the text accumulator, and the scan moves
//! on. That is all the tolerance the grammar needs, since every malformed
//! construct in Creole degrades to plain text.
//!
//! The constructs are:
//!
//! * [attention][] (bold, italics)
//! * [character escape][character_escape]
//! * [free link][free_link]
//! * [heading][]
//! * [horizontal rule][horizontal_rule]
//! * [image][]
//! * [line break][line_break]
//! * [link][]
//! * [list item][list_item]
//! * [no-wiki][no_wiki]
//! * [table][]
//! * [whitespace][] (line endings, space runs)
//!
//! [attention]: attention
//! [character_escape]: character_escape
//! [free_link]: free_link
//! [heading]: heading
//! [horizontal_rule]: horizontal_rule
//! [image]: image
//! [line_break]: line_break
//! [link]: link
//! [list_item]: list_item
//! [no_wiki]: no_wiki
//! [table]: table
//! [text]: text
//! [whitespace]: whitespace

pub mod attention;
pub mod character_escape;
pub mod free_link;
pub mod heading;
pub mod horizontal_rule;
pub mod image;
pub mod line_break;
pub mod link;
pub mod list_item;
pub mod no_wiki;
pub mod table;
pub mod text;
pub mod whitespace;
