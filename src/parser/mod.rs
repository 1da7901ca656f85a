use std::collections::HashMap;

use thiserror::Error;

pub mod parser;

/// Bidirectional pairing between each `[` and its matching `]`, keyed by
/// instruction position. Lookups are O(1) in both directions.
///
/// The map is only valid for the exact program it was resolved against;
/// any stage that rewrites the program shifts positions and must resolve
/// a fresh map.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BraceMap {
    close_by_open: HashMap<usize, usize>,
    open_by_close: HashMap<usize, usize>,
}

impl BraceMap {
    pub(crate) fn pair(&mut self, open: usize, close: usize) {
        self.close_by_open.insert(open, close);
        self.open_by_close.insert(close, open);
    }

    /// Position of the `]` matching the `[` at `open`.
    pub fn close_of(&self, open: usize) -> Option<usize> {
        self.close_by_open.get(&open).copied()
    }

    /// Position of the `[` matching the `]` at `close`.
    pub fn open_of(&self, close: usize) -> Option<usize> {
        self.open_by_close.get(&close).copied()
    }

    pub fn len(&self) -> usize {
        self.close_by_open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.close_by_open.is_empty()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("mismatched brackets: {opens} `[` against {closes} `]`")]
    MismatchedBrackets { opens: usize, closes: usize },
}
