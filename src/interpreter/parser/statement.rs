use crate::{
    ast::{Expr, Statement, VarDecl},
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            stream::TokenStream,
            utils::{choice, optional, parse_identifier, parse_type},
        },
    },
};

/// Parses a single statement.
///
/// The statement kinds are tried in order and the first one that parses
/// wins. Declarations come before expression statements so that `int x;` is
/// never mistaken for an expression.
///
/// Grammar:
/// ```text
///     statement := vardecl | block | if | while | for | return | print
///                | exprstmt
/// ```
///
/// # Errors
/// Returns the furthest failure among all statement kinds.
pub fn parse_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    choice(tokens,
           &[parse_var_decl_statement,
             parse_block_statement,
             parse_if,
             parse_while,
             parse_for,
             parse_return,
             parse_print,
             parse_expression_statement])
}

/// Parses a variable declaration with an optional initializer.
///
/// Grammar: `vardecl := type identifier ("=" expression)? ";"`
fn parse_var_decl(tokens: &mut TokenStream<'_>) -> ParseResult<VarDecl> {
    let ty = parse_type(tokens)?;
    let name = parse_identifier(tokens)?;
    let init = if tokens.eat(&Token::Equals) {
        Some(parse_expression(tokens)?)
    } else {
        None
    };
    if init.is_some() {
        tokens.expect(&Token::Semicolon, "';'")?;
    } else if !tokens.eat(&Token::Semicolon) {
        return Err(tokens.unexpected(&["'='", "';'"]));
    }

    Ok(VarDecl { ty, name, init })
}

fn parse_var_decl_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    parse_var_decl(tokens).map(Statement::VarDecl)
}

fn parse_block_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    parse_block(tokens).map(Statement::Block)
}

/// Parses a conditional. A dangling `else` binds to the nearest `if`.
///
/// Grammar: `if := "if" "(" expression ")" statement ("else" statement)?`
fn parse_if(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    tokens.expect(&Token::If, "'if'")?;
    let condition = parse_parenthesized_expr(tokens)?;
    let then_branch = Box::new(parse_statement(tokens)?);
    let else_branch = if tokens.eat(&Token::Else) {
        Some(Box::new(parse_statement(tokens)?))
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch })
}

/// Grammar: `while := "while" "(" expression ")" statement`
fn parse_while(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    tokens.expect(&Token::While, "'while'")?;
    let condition = parse_parenthesized_expr(tokens)?;
    let body = Box::new(parse_statement(tokens)?);

    Ok(Statement::While { condition, body })
}

/// Parses a C-style `for` loop.
///
/// The initializer is a full declaration or expression statement and so
/// supplies its own `;`. The condition and the increment are both required.
///
/// Grammar:
/// `for := "for" "(" (vardecl | exprstmt) expression ";" expression ")"
/// statement`
fn parse_for(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    tokens.expect(&Token::For, "'for'")?;
    tokens.expect(&Token::LParen, "'('")?;
    let init = choice(tokens,
                      &[parse_var_decl_statement, parse_expression_statement])?;
    let condition = parse_expression(tokens)?;
    tokens.expect(&Token::Semicolon, "';'")?;
    let increment = parse_expression(tokens)?;
    tokens.expect(&Token::RParen, "')'")?;
    let body = Box::new(parse_statement(tokens)?);

    Ok(Statement::For { init: Some(Box::new(init)),
                        condition,
                        increment: Some(increment),
                        body })
}

/// Grammar: `return := "return" expression? ";"`
fn parse_return(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    tokens.expect(&Token::Return, "'return'")?;
    let value = optional(tokens, parse_expression);
    tokens.expect(&Token::Semicolon, "';'")?;

    Ok(Statement::Return { value })
}

/// Grammar: `print := "print" "(" expression ")" ";"`
fn parse_print(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    tokens.expect(&Token::Print, "'print'")?;
    let expr = parse_parenthesized_expr(tokens)?;
    tokens.expect(&Token::Semicolon, "';'")?;

    Ok(Statement::Print { expr })
}

/// Grammar: `exprstmt := expression ";"`
fn parse_expression_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    let expr = parse_expression(tokens)?;
    tokens.expect(&Token::Semicolon, "';'")?;

    Ok(Statement::Expression { expr })
}

/// Parses a parenthesized expression: `"(" expression ")"`.
fn parse_parenthesized_expr(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    tokens.expect(&Token::LParen, "'('")?;
    let expr = parse_expression(tokens)?;
    tokens.expect(&Token::RParen, "')'")?;
    Ok(expr)
}
