use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        // Commands
        map.insert("def", TokenKind::Def);
        map.insert("extern", TokenKind::Extern);
        map.insert("lambda", TokenKind::Lambda);

        // Control flow
        map.insert("return", TokenKind::Return);
        map.insert("yield", TokenKind::Yield);
        map.insert("try", TokenKind::Try);
        map.insert("except", TokenKind::Except);
        map.insert("finally", TokenKind::Finally);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("elif", TokenKind::Elif);
        map.insert("for", TokenKind::For);
        map.insert("while", TokenKind::While);
        map.insert("in", TokenKind::In);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map.insert("pass", TokenKind::Pass);
        map.insert("raise", TokenKind::Raise);
        map.insert("assert", TokenKind::Assert);
        map.insert("with", TokenKind::With);
        map.insert("await", TokenKind::Await);
        map.insert("async", TokenKind::Async);

        // Scoping and modules
        map.insert("import", TokenKind::Import);
        map.insert("from", TokenKind::From);
        map.insert("as", TokenKind::As);
        map.insert("global", TokenKind::Global);
        map.insert("nonlocal", TokenKind::Nonlocal);
        map.insert("del", TokenKind::Del);

        // Word operators
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("not", TokenKind::Not);
        map.insert("is", TokenKind::Is);

        // Declarations
        map.insert("class", TokenKind::Class);
        map.insert("struct", TokenKind::Struct);
        map.insert("type", TokenKind::Type);

        // Builtin types
        map.insert("int", TokenKind::Int);
        map.insert("float", TokenKind::Float);
        map.insert("double", TokenKind::Double);
        map.insert("number", TokenKind::NumberType);
        map.insert("str", TokenKind::Str);
        map.insert("bool", TokenKind::Bool);
        map.insert("bytes", TokenKind::Bytes);
        map.insert("bytearray", TokenKind::ByteArray);
        map.insert("list", TokenKind::List);
        map.insert("set", TokenKind::Set);
        map.insert("dict", TokenKind::Dict);
        map.insert("tuple", TokenKind::Tuple);
        map.insert("Optional", TokenKind::Optional);
        map.insert("None", TokenKind::None);

        // Literals spelled as words
        map.insert("True", TokenKind::Boolean);
        map.insert("False", TokenKind::Boolean);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,
    /// A single character no other rule claims, carried as the token value.
    /// Punctuation and operators reach the parser this way.
    Unknown,

    // Literals
    Number,
    String,
    Boolean,

    // Commands
    Def,
    Extern,
    Lambda,

    // Control flow
    Return,
    Yield,
    Try,
    Except,
    Finally,
    If,
    Else,
    Elif,
    For,
    While,
    In,
    Break,
    Continue,
    Pass,
    Raise,
    Assert,
    With,
    Await,
    Async,

    // Scoping and modules
    Import,
    From,
    As,
    Global,
    Nonlocal,
    Del,

    // Word operators
    And,
    Or,
    Not,
    Is,

    // Declarations
    Class,
    Struct,
    Type,

    // Builtin types
    Int,
    Float,
    Double,
    NumberType,
    Str,
    Bool,
    Bytes,
    ByteArray,
    List,
    Set,
    Dict,
    Tuple,
    Optional,
    None,
}

impl TokenKind {
    /// Classifies a spelled word. Anything missing from the reserved table is an identifier.
    pub fn from_word(word: &str) -> TokenKind {
        RESERVED_LOOKUP
            .get(word)
            .copied()
            .unwrap_or(TokenKind::Identifier)
    }

    /// Whether tokens of this kind carry their spelling as a value.
    pub fn carries_value(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::Unknown
                | TokenKind::Number
                | TokenKind::String
                | TokenKind::Boolean
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<String>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} ({})", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl Token {
    pub fn value_str(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    /// True when this is the single-character token `ch`, e.g. `(` or `+`.
    pub fn is_char(&self, ch: char) -> bool {
        self.kind == TokenKind::Unknown && self.value_str().chars().eq(std::iter::once(ch))
    }

    /// The operator character of an `Unknown` token, if it carries exactly one.
    pub fn as_char(&self) -> Option<char> {
        if self.kind != TokenKind::Unknown {
            return None;
        }

        let mut chars = self.value_str().chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }
}
