//! Infix to postfix conversion.
//!
//! Shunting-yard without brackets: operands go straight to the output,
//! an operator first flushes every stacked operator of equal or higher
//! precedence, so operators within one tier apply left to right.

use crate::expr::{tokenize, CalcError, Operator, Token};

/// Reorder an infix token sequence into postfix order.
///
/// Assumes a well-formed sequence; a malformed one is passed through and
/// rejected later by the evaluator.
pub fn to_postfix(tokens: &[Token]) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Operator> = Vec::new();

    for &token in tokens {
        match token {
            Token::Operand(_) => output.push(token),
            Token::Operator(op) => {
                while let Some(&top) = ops.last() {
                    if top.precedence() >= op.precedence() {
                        output.push(Token::Operator(top));
                        ops.pop();
                    } else {
                        break;
                    }
                }
                ops.push(op);
            }
        }
    }

    while let Some(op) = ops.pop() {
        output.push(Token::Operator(op));
    }

    output
}

/// Tokenize an infix equation string and convert it to postfix.
pub fn infix_to_postfix(equation: &str) -> Result<Vec<Token>, CalcError> {
    let tokens = tokenize(equation)?;
    Ok(to_postfix(&tokens))
}

/// Render a postfix sequence as token strings.
pub fn postfix_strings(postfix: &[Token]) -> Vec<String> {
    postfix.iter().map(|t| t.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(eq: &str) -> Vec<String> {
        postfix_strings(&infix_to_postfix(eq).unwrap())
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        assert_eq!(
            convert("1,0,0 + 2,0,0 * 3,0,0"),
            vec!["1,0,0", "2,0,0", "3,0,0", "*", "+"]
        );
    }

    #[test]
    fn test_left_to_right_within_tier() {
        assert_eq!(
            convert("1,0,0 - 2,0,0 + 3,0,0"),
            vec!["1,0,0", "2,0,0", "-", "3,0,0", "+"]
        );
        assert_eq!(
            convert("8,0,0 / 2,0,0 * 2,0,0"),
            vec!["8,0,0", "2,0,0", "/", "2,0,0", "*"]
        );
    }

    #[test]
    fn test_mixed_precedence() {
        assert_eq!(
            convert("1,0,0 * 2,0,0 - 3,0,0 / 4,0,0"),
            vec!["1,0,0", "2,0,0", "*", "3,0,0", "4,0,0", "/", "-"]
        );
    }

    #[test]
    fn test_single_operand() {
        assert_eq!(convert("5,-1,2"), vec!["5,-1,2"]);
    }

    #[test]
    fn test_errors_surface() {
        assert_eq!(infix_to_postfix(""), Err(CalcError::EmptyEquation));
        assert!(infix_to_postfix("1,0,0 % 2,0,0").is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::algebra::Triple;
    use proptest::prelude::*;

    fn equation() -> impl Strategy<Value = Vec<Token>> {
        (1usize..20).prop_flat_map(|n| {
            (
                proptest::collection::vec(-5i32..5, n + 1),
                proptest::collection::vec(0usize..4, n),
            )
        }).prop_map(|(operands, ops)| {
            let mut tokens = Vec::new();
            for (i, v) in operands.iter().enumerate() {
                if i > 0 {
                    tokens.push(Token::Operator(Operator::ALL[ops[i - 1]]));
                }
                tokens.push(Token::Operand(Triple::new(*v as f64, 0.0, 0.0)));
            }
            tokens
        })
    }

    proptest! {
        #[test]
        fn postfix_keeps_every_token(tokens in equation()) {
            let postfix = to_postfix(&tokens);
            prop_assert_eq!(postfix.len(), tokens.len());
            prop_assert_eq!(
                postfix.iter().filter(|t| t.is_operator()).count(),
                tokens.iter().filter(|t| t.is_operator()).count()
            );
        }

        #[test]
        fn postfix_keeps_operand_order(tokens in equation()) {
            let operands = |ts: &[Token]| -> Vec<Token> {
                ts.iter().filter(|t| !t.is_operator()).copied().collect()
            };
            prop_assert_eq!(operands(to_postfix(&tokens).as_slice()), operands(tokens.as_slice()));
        }
    }
}
