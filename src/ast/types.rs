use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;

/// Builtin data types a variable, parameter or function result can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataType {
    #[default]
    None,
    Bool,
    Int,
    Float,
    Str,
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DataType::None => "NONE",
            DataType::Bool => "BOOL",
            DataType::Int => "INT",
            DataType::Float => "FLOAT",
            DataType::Str => "STR",
        };
        write!(f, "{}", name)
    }
}

/// What kind of literal or name an atom's raw text spells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AtomType {
    #[default]
    Unknown,
    Int,
    Float,
    String,
    Identifier,
}

impl Display for AtomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AtomType::Unknown => "UNKNOWN",
            AtomType::Int => "INT",
            AtomType::Float => "FLOAT",
            AtomType::String => "STRING",
            AtomType::Identifier => "IDENTIFIER",
        };
        write!(f, "{}", name)
    }
}

lazy_static! {
    static ref INT_PATTERN: Regex = Regex::new(r"^-?(0x[0-9a-fA-F]+|[0-9]+)$").unwrap();
    static ref FLOAT_PATTERN: Regex = Regex::new(r"^-?[0-9]+\.[0-9]+$").unwrap();
    static ref STRING_PATTERN: Regex = Regex::new(r#"(?s)^(".*"|'.*')$"#).unwrap();
    static ref IDENTIFIER_PATTERN: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();

    /// Classification rules in priority order. The first match wins.
    static ref ATOM_RULES: [(&'static Regex, AtomType); 4] = [
        (&*INT_PATTERN, AtomType::Int),
        (&*FLOAT_PATTERN, AtomType::Float),
        (&*STRING_PATTERN, AtomType::String),
        (&*IDENTIFIER_PATTERN, AtomType::Identifier),
    ];
}

impl AtomType {
    /// Classifies a raw lexeme. Text matching no rule stays `Unknown`; this
    /// is deliberately not an error.
    pub fn classify(lexeme: &str) -> AtomType {
        ATOM_RULES
            .iter()
            .find(|(pattern, _)| pattern.is_match(lexeme))
            .map(|(_, atom_type)| *atom_type)
            .unwrap_or(AtomType::Unknown)
    }
}
