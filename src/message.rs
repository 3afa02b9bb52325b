//! Deal with error messages.

use alloc::{boxed::Box, string::String};
use core::fmt;

/// Something went wrong.
///
/// The Creole grammar is total: malformed markup degrades to text, and no
/// rule currently produces an [`Error`][crate::Name::Error] token. This type
/// is the halt-and-report surface reserved for when one shows up anyway
/// (future resource limits, extensions).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Message {
    /// Reason for message.
    pub reason: String,
    /// Byte offset into the input, if known.
    pub offset: Option<usize>,
    /// Namespace of message.
    pub source: Box<String>,
    /// Category of message.
    pub rule_id: Box<String>,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(offset) = self.offset {
            write!(f, "{}: ", offset)?;
        }

        write!(f, "{} ({}:{})", self.reason, self.source, self.rule_id)
    }
}
