use std::collections::VecDeque;
use std::io::{self, Read};

/// One-byte-at-a-time input for the `,` instruction.
///
/// `None` means the source is exhausted; the interpreter stores the
/// no-input sentinel (zero) for it instead of blocking forever.
pub trait ByteSource {
    fn next_byte(&mut self) -> Option<u8>;
}

/// Reads single bytes from stdin.
pub struct Interactive;

impl ByteSource for Interactive {
    fn next_byte(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        match io::stdin().read(&mut byte) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(byte[0]),
        }
    }
}

/// Serves bytes gathered before the run started, then reports
/// exhaustion; a drained buffer never falls back to the terminal.
pub struct Preloaded {
    buffer: VecDeque<u8>,
}

impl Preloaded {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            buffer: VecDeque::from(bytes),
        }
    }
}

impl ByteSource for Preloaded {
    fn next_byte(&mut self) -> Option<u8> {
        self.buffer.pop_front()
    }
}

/// Never yields a byte; `,` always stores the no-input sentinel.
pub struct NoInput;

impl ByteSource for NoInput {
    fn next_byte(&mut self) -> Option<u8> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn preloaded_drains_in_order_then_reports_exhaustion() {
        let mut source = Preloaded::new(vec![1, 2, 3]);
        assert_eq!(source.next_byte(), Some(1));
        assert_eq!(source.next_byte(), Some(2));
        assert_eq!(source.next_byte(), Some(3));
        assert_eq!(source.next_byte(), None);
        assert_eq!(source.next_byte(), None);
    }

    #[test]
    fn no_input_is_always_exhausted() {
        let mut source = NoInput;
        assert_eq!(source.next_byte(), None);
    }
}
