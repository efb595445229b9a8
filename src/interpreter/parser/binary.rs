use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, stream::TokenStream, unary::parse_unary},
    },
};

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `||`. This is the lowest-precedence
/// binary level.
///
/// Grammar: `logical_or := logical_and ("||" logical_and)*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the operand.
///
/// # Returns
/// A binary expression tree with `BinaryOperator::Or` nodes.
pub fn parse_logical_or(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens, parse_logical_and, |op| op == BinaryOperator::Or)
}

/// Parses logical AND expressions.
///
/// Handles left-associative chains of `&&`. Precedence is higher than OR.
///
/// Grammar: `logical_and := relational ("&&" relational)*`
pub fn parse_logical_and(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens, parse_relational, |op| op == BinaryOperator::And)
}

/// Parses relational and equality operators.
///
/// Accepts `<`, `>`, `<=`, `>=`, `==` and `!=`. At most one comparison is
/// consumed, so `a < b < c` leaves the second `<` for the caller to reject.
///
/// Grammar: `relational := additive (("<" | ">" | "<=" | ">=" | "==" | "!=")
/// additive)?`
pub fn parse_relational(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let left = parse_additive(tokens)?;

    if let Some(token) = tokens.peek()
       && let Some(op) = token_to_binary_operator(token)
       && is_relational_op(op)
    {
        tokens.next_token();
        let right = parse_additive(tokens)?;
        return Ok(Expr::binary(left, op, right));
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses multiplication-level expressions: `*`, `/` and `%`.
///
/// Grammar: `multiplicative := unary (("*" | "/" | "%") unary)*`
pub fn parse_multiplicative(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens, parse_unary, |op| {
        matches!(op,
                 BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
    })
}

/// Shared loop for the left-associative levels.
///
/// Parses one operand with `operand`, then keeps folding `left op right` for
/// as long as the next token maps to an operator accepted by `accepts`.
fn parse_left_associative(tokens: &mut TokenStream<'_>,
                          operand: fn(&mut TokenStream<'_>) -> ParseResult<Expr>,
                          accepts: fn(BinaryOperator) -> bool)
                          -> ParseResult<Expr> {
    let mut left = operand(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && accepts(op)
        {
            tokens.next_token();
            let right = operand(tokens)?;
            left = Expr::binary(left, op, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token spells a binary operator, otherwise
/// `None`. Note that `-` maps to subtraction; the unary parser handles
/// negation on its own.
///
/// # Example
/// ```
/// use cinder::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::AndAnd => Some(BinaryOperator::And),
        Token::PipePipe => Some(BinaryOperator::Or),
        _ => None,
    }
}

const fn is_relational_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::Greater
             | BinaryOperator::LessEqual
             | BinaryOperator::GreaterEqual
             | BinaryOperator::Equal
             | BinaryOperator::NotEqual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::BinaryOperator::{Add, And, Div, Less, Mod, Mul, Or, Sub},
        interpreter::lexer::tokenize,
    };

    fn parse_all(source: &str) -> (Expr, bool) {
        let lexed = tokenize(source).unwrap();
        let mut tokens = TokenStream::new(&lexed);
        let expr = parse_logical_or(&mut tokens).unwrap();
        (expr, tokens.is_at_end())
    }

    fn var(name: &str) -> Expr {
        Expr::variable(name)
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let (expr, done) = parse_all("a + b * c % d");
        assert!(done);
        assert_eq!(expr,
                   Expr::binary(var("a"),
                                Add,
                                Expr::binary(Expr::binary(var("b"), Mul, var("c")), Mod, var("d"))));
    }

    #[test]
    fn same_level_operators_associate_left() {
        let (expr, _) = parse_all("10 - 4 - 3");
        assert_eq!(expr,
                   Expr::binary(Expr::binary(Expr::literal(10), Sub, Expr::literal(4)),
                                Sub,
                                Expr::literal(3)));

        let (expr, _) = parse_all("a / b / c");
        assert_eq!(expr,
                   Expr::binary(Expr::binary(var("a"), Div, var("b")), Div, var("c")));
    }

    #[test]
    fn logic_levels_nest_below_comparison() {
        let (expr, done) = parse_all("a < 1 || b && c");
        assert!(done);
        assert_eq!(expr,
                   Expr::binary(Expr::binary(var("a"), Less, Expr::literal(1)),
                                Or,
                                Expr::binary(var("b"), And, var("c"))));
    }

    #[test]
    fn comparisons_do_not_chain() {
        let (expr, done) = parse_all("a < b < c");
        assert!(!done);
        assert_eq!(expr, Expr::binary(var("a"), Less, var("b")));
    }

    #[test]
    fn dangling_operator_reports_missing_operand() {
        let lexed = tokenize("5 + * 3").unwrap();
        let mut tokens = TokenStream::new(&lexed);
        let err = parse_logical_or(&mut tokens).unwrap_err();
        assert_eq!(err.position().offset, 4);
    }
}
