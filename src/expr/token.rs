//! Equation tokens.
//!
//! An equation is a whitespace-separated sequence of operand tokens
//! (`x,y,z`) and operator tokens (`+ - * /`), strictly alternating and
//! starting and ending with an operand.

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::algebra::Triple;
use crate::expr::CalcError;

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Operator table: symbol and precedence rank.
pub const OPERATORS: [(Operator, char, u8); 4] = [
    (Operator::Add, '+', 1),
    (Operator::Subtract, '-', 1),
    (Operator::Multiply, '*', 2),
    (Operator::Divide, '/', 2),
];

impl Operator {
    /// All operators, in table order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Precedence rank: `*` and `/` bind tighter than `+` and `-`.
    #[inline]
    pub const fn precedence(self) -> u8 {
        OPERATORS[self as usize].2
    }

    /// The operator's source symbol.
    #[inline]
    pub const fn symbol(self) -> char {
        OPERATORS[self as usize].1
    }

    /// Look up an operator by its symbol.
    pub fn from_symbol(s: &str) -> Option<Operator> {
        let mut chars = s.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        OPERATORS.iter().find(|(_, sym, _)| *sym == c).map(|(op, _, _)| *op)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single equation token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Token {
    Operand(Triple),
    Operator(Operator),
}

impl Token {
    /// Classify and parse one token.
    ///
    /// Anything that looks like a number (contains a comma or parses as a
    /// real) is held to the `x,y,z` grammar; everything else that is not
    /// one of the four operators is an unknown operator.
    pub fn parse(s: &str) -> Result<Token, CalcError> {
        if let Some(op) = Operator::from_symbol(s) {
            return Ok(Token::Operator(op));
        }

        if s.contains(',') || s.parse::<f64>().is_ok() {
            return s.parse::<Triple>()
                .map(Token::Operand)
                .map_err(|source| CalcError::MalformedOperand {
                    token: s.to_string(),
                    source,
                });
        }

        Err(CalcError::UnknownOperator(s.to_string()))
    }

    #[inline]
    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operand(t) => write!(f, "{}", t),
            Token::Operator(op) => write!(f, "{}", op),
        }
    }
}

/// Split an equation on whitespace and parse every token.
pub fn tokenize(equation: &str) -> Result<Vec<Token>, CalcError> {
    let tokens = equation
        .split_whitespace()
        .map(Token::parse)
        .collect::<Result<Vec<_>, _>>()?;

    if tokens.is_empty() {
        return Err(CalcError::EmptyEquation);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::TripleParseError;

    #[test]
    fn test_precedence_table() {
        assert_eq!(Operator::Add.precedence(), 1);
        assert_eq!(Operator::Subtract.precedence(), 1);
        assert_eq!(Operator::Multiply.precedence(), 2);
        assert_eq!(Operator::Divide.precedence(), 2);
    }

    #[test]
    fn test_symbols_roundtrip() {
        for op in Operator::ALL {
            let sym = op.symbol().to_string();
            assert_eq!(Operator::from_symbol(&sym), Some(op));
        }
        assert_eq!(Operator::from_symbol("^"), None);
        assert_eq!(Operator::from_symbol("++"), None);
        assert_eq!(Operator::from_symbol(""), None);
    }

    #[test]
    fn test_tokenize_equation() {
        let tokens = tokenize("1,0,-1 + 0,0,0 / 1,1,0").unwrap();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0], Token::Operand(Triple::new(1.0, 0.0, -1.0)));
        assert_eq!(tokens[1], Token::Operator(Operator::Add));
        assert_eq!(tokens[3], Token::Operator(Operator::Divide));
    }

    #[test]
    fn test_tokenize_extra_whitespace() {
        let tokens = tokenize("  1,2,3 \t*  4,5,6\n").unwrap();
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_negative_operand_is_not_minus() {
        assert_eq!(
            Token::parse("-1,0,0").unwrap(),
            Token::Operand(Triple::new(-1.0, 0.0, 0.0))
        );
        assert_eq!(Token::parse("-").unwrap(), Token::Operator(Operator::Subtract));
    }

    #[test]
    fn test_malformed_operand() {
        match Token::parse("1,2") {
            Err(CalcError::MalformedOperand { token, source }) => {
                assert_eq!(token, "1,2");
                assert_eq!(source, TripleParseError::WrongArity { found: 2 });
            }
            other => panic!("unexpected: {:?}", other),
        }
        // A bare number is an operand attempt, not an operator
        assert!(matches!(Token::parse("5"), Err(CalcError::MalformedOperand { .. })));
        assert!(matches!(Token::parse("a,b,c"), Err(CalcError::MalformedOperand { .. })));
    }

    #[test]
    fn test_unknown_operator() {
        assert_eq!(Token::parse("^"), Err(CalcError::UnknownOperator("^".into())));
        assert_eq!(Token::parse("x"), Err(CalcError::UnknownOperator("x".into())));
    }

    #[test]
    fn test_empty_equation() {
        assert_eq!(tokenize(""), Err(CalcError::EmptyEquation));
        assert_eq!(tokenize("   "), Err(CalcError::EmptyEquation));
    }
}
