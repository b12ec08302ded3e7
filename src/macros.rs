//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_ATOM!` - Creates an Atom node from its raw lexeme

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's optional string value
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Identifier, Some("foo".to_string()));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr) => {
        Token {
            kind: $kind,
            value: None,
        }
    };
    ($kind:expr, $value:expr) => {
        Token {
            kind: $kind,
            value: $value,
        }
    };
}

/// Creates an `Atom` node, classifying the lexeme on the way in.
///
/// ```ignore
/// let node = MK_ATOM!("42");
/// ```
#[macro_export]
macro_rules! MK_ATOM {
    ($lexeme:expr) => {{
        let mut atom = $crate::ast::expressions::Atom::default();
        atom.set_name($lexeme);
        $crate::ast::ast::Node::Atom(atom)
    }};
}
