//! Character sources feeding the lexer.
//!
//! The lexer only ever asks for "the next character, or none remaining".
//! There is no seeking and no buffering contract beyond that.

use std::io::{ErrorKind, Read};

pub trait CharSource {
    /// Reads one character, returning `None` once the input is exhausted.
    fn next_char(&mut self) -> Option<char>;
}

impl<I: Iterator<Item = char>> CharSource for I {
    fn next_char(&mut self) -> Option<char> {
        self.next()
    }
}

/// Decodes UTF-8 from any `Read` one character at a time.
///
/// Read errors and invalid byte sequences end the stream; the lexer has no
/// channel for I/O failures and treats them as end of input.
pub struct ReaderSource<R: Read> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        ReaderSource { reader }
    }

    fn read_byte(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return None,
                Ok(_) => return Some(byte[0]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracing::debug!("character source read failed: {}", e);
                    return None;
                }
            }
        }
    }
}

impl<R: Read> CharSource for ReaderSource<R> {
    fn next_char(&mut self) -> Option<char> {
        let first = self.read_byte()?;

        let width = match first {
            0x00..=0x7F => return Some(first as char),
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => return None,
        };

        let mut buffer = [first, 0, 0, 0];
        for slot in buffer.iter_mut().take(width).skip(1) {
            *slot = self.read_byte()?;
        }

        std::str::from_utf8(&buffer[..width])
            .ok()
            .and_then(|s| s.chars().next())
    }
}
