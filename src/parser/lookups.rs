use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::lexer::tokens::Token;

/// Precedence of anything that is not a binary operator. It is below every
/// minimum the climbing loop asks for, so such tokens never bind.
pub const NO_PRECEDENCE: i32 = -1;

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Relational = 10,
    Additive = 20,
    Multiplicative = 40,
}

lazy_static! {
    pub static ref BINARY_OPERATORS: HashMap<char, BindingPower> = {
        let mut map = HashMap::new();
        // Relational
        map.insert('<', BindingPower::Relational);
        map.insert('>', BindingPower::Relational);

        // Additive and multiplicative
        map.insert('+', BindingPower::Additive);
        map.insert('-', BindingPower::Additive);
        map.insert('*', BindingPower::Multiplicative);
        map.insert('/', BindingPower::Multiplicative);
        map
    };
}

pub fn operator_precedence(operator: char) -> i32 {
    BINARY_OPERATORS
        .get(&operator)
        .map(|bp| *bp as i32)
        .unwrap_or(NO_PRECEDENCE)
}

/// Precedence of a token in operator position. Missing tokens and tokens
/// that are not single characters never bind.
pub fn token_precedence(token: Option<&Token>) -> i32 {
    token
        .and_then(Token::as_char)
        .map(operator_precedence)
        .unwrap_or(NO_PRECEDENCE)
}
