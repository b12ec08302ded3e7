use std::rc::Rc;

use crate::{Position, MK_TOKEN};

use super::{
    source::CharSource,
    tokens::{Token, TokenKind},
};

const COMMENT_MARKER: char = '#';

/// Pull-based lexer. Each call to `next_token` reads just enough characters
/// from the source to produce one token.
pub struct Lexer<S: CharSource> {
    source: S,
    /// One character of look-ahead. Starts as a space so the first call skips
    /// leading whitespace; `None` once the source is exhausted.
    current: Option<char>,
    /// Number of characters pulled from the source so far
    read: u32,
    /// Offset of the first character of the most recent token
    token_start: u32,
    emitted_eof: bool,
    file: Rc<String>,
}

impl<S: CharSource> Lexer<S> {
    pub fn new(source: S, file: Option<String>) -> Lexer<S> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            current: Some(' '),
            read: 0,
            token_start: 0,
            emitted_eof: false,
            file: file_name,
        }
    }

    /// Produces the next token.
    ///
    /// The first exhausted read yields an `EOF` token; every call after that
    /// returns `None`, so callers can tell the logical end of the program
    /// apart from the true end of the stream.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            while self.current.is_some_and(char::is_whitespace) {
                self.advance();
            }

            self.token_start = self.offset();

            let Some(ch) = self.current else {
                if self.emitted_eof {
                    return None;
                }
                self.emitted_eof = true;
                tracing::trace!("lexer reached end of input at {}", self.token_start);
                return Some(MK_TOKEN!(TokenKind::EOF));
            };

            if ch.is_alphabetic() {
                return Some(self.lex_word());
            }

            if ch.is_ascii_digit() || ch == '.' {
                return Some(self.lex_number());
            }

            if ch == COMMENT_MARKER {
                self.skip_comment();
                continue;
            }

            // Always step past an unclaimed character so malformed input
            // cannot stall the lexer.
            self.advance();
            tracing::trace!("unknown character {:?} at {}", ch, self.token_start);
            return Some(MK_TOKEN!(TokenKind::Unknown, Some(ch.to_string())));
        }
    }

    /// Position of the most recently produced token.
    pub fn position(&self) -> Position {
        Position(self.token_start, Rc::clone(&self.file))
    }

    fn advance(&mut self) {
        self.current = self.source.next_char();
        if self.current.is_some() {
            self.read += 1;
        }
    }

    fn offset(&self) -> u32 {
        if self.current.is_some() {
            self.read.saturating_sub(1)
        } else {
            self.read
        }
    }

    fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let mut buffer = String::new();
        while let Some(ch) = self.current.filter(|c| predicate(*c)) {
            buffer.push(ch);
            self.advance();
        }
        buffer
    }

    fn lex_word(&mut self) -> Token {
        let word = self.take_while(char::is_alphanumeric);
        let kind = TokenKind::from_word(&word);

        tracing::trace!("word {:?} classified as {}", word, kind);

        if kind.carries_value() {
            MK_TOKEN!(kind, Some(word))
        } else {
            MK_TOKEN!(kind)
        }
    }

    fn lex_number(&mut self) -> Token {
        let lexeme = self.take_while(|c| c.is_ascii_digit() || c == '.');
        let text = number_text(&lexeme);

        tracing::trace!("number {:?} read as {:?}", lexeme, text);
        MK_TOKEN!(TokenKind::Number, Some(text))
    }

    fn skip_comment(&mut self) {
        while self.current.is_some_and(|c| c != '\n' && c != '\r') {
            self.advance();
        }
    }
}

impl<S: CharSource> Iterator for Lexer<S> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// The numeric text a run of digits and dots stands for. Never fails.
///
/// Keeps the longest prefix that is a valid number (`1.2.3` is `1.2`), or
/// `0` when there is none (a lone `.`). A bare leading or trailing dot gets
/// its zero back (`.5` is `0.5`, `7.` is `7.0`), so the text always reads as
/// an integer or fixed-point literal, however large.
pub fn number_text(lexeme: &str) -> String {
    let accepted = (1..=lexeme.len())
        .rev()
        .map(|end| &lexeme[..end])
        .find(|prefix| prefix.parse::<f64>().is_ok());

    let Some(accepted) = accepted else {
        return String::from("0");
    };

    let mut text = String::with_capacity(accepted.len() + 2);
    if accepted.starts_with('.') {
        text.push('0');
    }
    text.push_str(accepted);
    if accepted.ends_with('.') {
        text.push('0');
    }
    text
}

/// Value of a run of digits and dots, following `number_text`.
pub fn parse_number_lexeme(lexeme: &str) -> f64 {
    number_text(lexeme).parse().unwrap_or(0.0)
}

/// Lexes a whole string, including the trailing `EOF` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source.chars(), None).collect()
}
