use crate::{
    ast::Block,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement, stream::TokenStream},
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until the
/// matching closing `}` is consumed.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// The statements of the block in source order.
///
/// # Errors
/// Fails if the opening brace is missing, a statement does not parse, or the
/// input ends before the closing brace.
pub fn parse_block(tokens: &mut TokenStream<'_>) -> ParseResult<Block> {
    tokens.expect(&Token::LBrace, "'{'")?;

    let mut statements = Vec::new();
    while !tokens.eat(&Token::RBrace) {
        if tokens.is_at_end() {
            return Err(tokens.unexpected(&["'}'"]));
        }
        statements.push(parse_statement(tokens)?);
    }

    Ok(Block { statements })
}
