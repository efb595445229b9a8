use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            stream::TokenStream,
            utils::{choice, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a unary expression.
///
/// At most one prefix operator (`++`, `--`, `!` or `-`) may precede the
/// primary, and at most one postfix operator (`++` or `--`) may follow it.
/// Prefix operators do not nest: `!!x` and `- -x` are rejected, while
/// `-(-x)` is fine.
///
/// Grammar:
/// ```text
///     unary := ("++" | "--" | "!" | "-")? primary ("++" | "--")?
/// ```
///
/// # Parameters
/// - `tokens`: Token stream positioned at the operand.
///
/// # Returns
/// An [`Expr::UnaryOp`] when an operator is present, otherwise the primary.
///
/// # Errors
/// [`ParseError::ConflictingUnary`] when both a prefix and a postfix operator
/// are present, for example `++x++`.
pub(crate) fn parse_unary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let prefix = tokens.peek().and_then(prefix_operator);
    if prefix.is_some() {
        tokens.next_token();
    }

    let primary = parse_primary(tokens)?;

    let postfix_position = tokens.position();
    let postfix = tokens.peek().and_then(postfix_operator);

    match (prefix, postfix) {
        (Some(_), Some(_)) => Err(ParseError::ConflictingUnary { position: postfix_position }),
        (Some(op), None) => Ok(Expr::UnaryOp { op,
                                               expr: Box::new(primary),
                                               prefix: true }),
        (None, Some(op)) => {
            tokens.next_token();
            Ok(Expr::UnaryOp { op,
                               expr: Box::new(primary),
                               prefix: false })
        },
        (None, None) => Ok(primary),
    }
}

const fn prefix_operator(token: &Token) -> Option<UnaryOperator> {
    match token {
        Token::PlusPlus => Some(UnaryOperator::Increment),
        Token::MinusMinus => Some(UnaryOperator::Decrement),
        Token::Bang => Some(UnaryOperator::Not),
        Token::Minus => Some(UnaryOperator::Negate),
        _ => None,
    }
}

const fn postfix_operator(token: &Token) -> Option<UnaryOperator> {
    match token {
        Token::PlusPlus => Some(UnaryOperator::Increment),
        Token::MinusMinus => Some(UnaryOperator::Decrement),
        _ => None,
    }
}

/// Parses a primary (atomic) expression.
///
/// Alternatives are tried in order, so `f(x)` is read as a call before the
/// bare identifier `f` is considered.
///
/// Grammar: `primary := call | literal | "(" expression ")" | identifier`
pub(crate) fn parse_primary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    choice(tokens,
           &[parse_call, parse_literal, parse_parenthesized, parse_variable])
}

/// Parses a function call such as `factorial(n - 1)`.
///
/// Grammar: `call := identifier "(" (expression ("," expression)*)? ")"`
fn parse_call(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let name = parse_identifier(tokens)?;
    tokens.expect(&Token::LParen, "'('")?;
    let args = parse_comma_separated(tokens, parse_expression, &Token::RParen, "')'")?;
    Ok(Expr::FunctionCall { name, args })
}

fn parse_literal(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let value = match tokens.peek() {
        Some(Token::Integer(n)) => LiteralValue::Integer(*n),
        Some(Token::Real(r)) => LiteralValue::Real(*r),
        Some(Token::Bool(b)) => LiteralValue::Bool(*b),
        Some(Token::Str(s)) => LiteralValue::Str(s.clone()),
        _ => return Err(tokens.unexpected(&["literal"])),
    };
    tokens.next_token();
    Ok(Expr::Literal { value })
}

fn parse_parenthesized(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    tokens.expect(&Token::LParen, "'('")?;
    let expr = parse_expression(tokens)?;
    tokens.expect(&Token::RParen, "')'")?;
    Ok(expr)
}

fn parse_variable(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_identifier(tokens).map(Expr::variable)
}
