use tracing::debug;

use crate::{
    ast::{Expr, Function, Program, VarDecl},
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::{
            binary::parse_logical_or,
            block::parse_block,
            stream::TokenStream,
            utils::{choice, parse_comma_separated, parse_identifier, parse_type},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete source text into a [`Program`].
///
/// # Errors
/// Returns the [`ParseError`] that got furthest into the source when no
/// grammar alternative matches, including input left over after the last
/// function.
///
/// # Example
/// ```
/// use cinder::interpreter::parser::core::parse;
///
/// let program = parse("int main() { return 0; }").unwrap();
/// assert_eq!(program.functions[0].name, "main");
/// assert!(program.global_vars.is_empty());
///
/// assert!(parse("int main() { return 0 }").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Program> {
    let lexed = tokenize(source)?;
    let mut tokens = TokenStream::new(&lexed);

    match parse_program(&mut tokens) {
        Ok(program) => {
            debug!(functions = program.functions.len(),
                   tokens = lexed.tokens.len(),
                   "parsed program");
            Ok(program)
        },
        Err(error) => {
            let error = tokens.deepest(error);
            debug!(%error, "parsing failed");
            Err(error)
        },
    }
}

/// Parses a sequence of function definitions up to the end of input.
///
/// Grammar: `program := function*`
///
/// Global variables are not part of the grammar, so `global_vars` stays
/// empty.
pub fn parse_program(tokens: &mut TokenStream<'_>) -> ParseResult<Program> {
    let mut functions = Vec::new();

    while !tokens.is_at_end() {
        functions.push(parse_function(tokens)?);
    }

    Ok(Program { functions,
                 global_vars: Vec::new() })
}

/// Parses a function definition.
///
/// Grammar:
/// `function := type ident "(" (type ident ("," type ident)*)? ")" block`
///
/// # Errors
/// Fails when the return type, the name, the parameter parentheses or a
/// balanced body is missing.
pub fn parse_function(tokens: &mut TokenStream<'_>) -> ParseResult<Function> {
    let return_type = parse_type(tokens)?;
    let name = parse_identifier(tokens)?;
    tokens.expect(&Token::LParen, "'('")?;
    let params = parse_comma_separated(tokens, parse_parameter, &Token::RParen, "')'")?;
    let body = parse_block(tokens)?;

    Ok(Function { return_type,
                  name,
                  params,
                  body })
}

fn parse_parameter(tokens: &mut TokenStream<'_>) -> ParseResult<VarDecl> {
    let ty = parse_type(tokens)?;
    let name = parse_identifier(tokens)?;
    Ok(VarDecl { ty, name, init: None })
}

/// Parses a full expression.
///
/// An assignment is tried first; if no `=` follows the leading identifier the
/// parser rewinds and reads a logical-or expression instead, which sits at
/// the top of the precedence hierarchy.
///
/// Grammar: `expression := assignment | logical_or`
pub fn parse_expression(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    choice(tokens, &[parse_assignment, parse_logical_or])
}

/// Parses `identifier "=" expression`. Assignment is right-associative.
fn parse_assignment(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let var = parse_identifier(tokens)?;
    tokens.expect(&Token::Equals, "'='")?;
    let expr = parse_expression(tokens)?;

    Ok(Expr::Assignment { var,
                          expr: Box::new(expr) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOperator, Block, Statement, TypeName};

    fn expression(source: &str) -> Expr {
        let lexed = tokenize(source).unwrap();
        let mut tokens = TokenStream::new(&lexed);
        let expr = parse_expression(&mut tokens).unwrap();
        assert!(tokens.is_at_end(), "trailing input in {source:?}");
        expr
    }

    #[test]
    fn assignment_is_tried_before_logical_or() {
        assert_eq!(expression("x = y = 3"),
                   Expr::Assignment { var:  "x".into(),
                                      expr: Box::new(Expr::Assignment { var:  "y".into(),
                                                                        expr:
                                                                            Box::new(Expr::literal(3)), }), });
        assert_eq!(expression("x == 3"),
                   Expr::binary(Expr::variable("x"), BinaryOperator::Equal, Expr::literal(3)));
    }

    #[test]
    fn functions_keep_parameters_in_order() {
        let program = parse("int add(int a, float b) { return a + b; } void noop() {}").unwrap();

        assert_eq!(program.functions.len(), 2);
        let add = &program.functions[0];
        assert_eq!(add.return_type, TypeName::Int);
        assert_eq!(add.params,
                   vec![VarDecl { ty:   TypeName::Int,
                                  name: "a".into(),
                                  init: None, },
                        VarDecl { ty:   TypeName::Float,
                                  name: "b".into(),
                                  init: None, }]);
        assert_eq!(program.functions[1].body, Block::default());
    }

    #[test]
    fn empty_source_is_an_empty_program() {
        assert_eq!(parse("  // nothing here\n").unwrap(), Program::default());
    }

    #[test]
    fn missing_semicolon_is_reported_at_the_closing_brace() {
        let err = parse("int main() { return 0 }").unwrap_err();
        assert_eq!(err.position().column, 23);
        assert!(err.expected().contains(&"';'".to_string()), "{err}");
    }

    #[test]
    fn missing_return_type_is_rejected() {
        let err = parse("main() { return 0; }").unwrap_err();
        assert_eq!(err.position().offset, 0);
        assert_eq!(err.expected(), ["type name"]);
    }

    #[test]
    fn unbalanced_parenthesis_is_rejected() {
        let source = "int main() { if (x > 5 { return 1; } }";
        let err = parse(source).unwrap_err();
        assert_eq!(err.position().offset, source.find("{ return").unwrap());
        assert!(err.expected().contains(&"')'".to_string()), "{err}");
    }

    #[test]
    fn deep_failure_inside_assignment_wins_over_fallback() {
        let source = "int main() { x = 5 + ; }";
        let err = parse(source).unwrap_err();
        assert_eq!(err.position().offset, source.find(';').unwrap());
    }

    #[test]
    fn trailing_input_after_functions_is_rejected() {
        let source = "int main() { return 0; } 42";
        let err = parse(source).unwrap_err();
        assert_eq!(err.position().offset, source.find("42").unwrap());
    }

    #[test]
    fn missing_parameter_name_is_rejected() {
        assert!(parse("int f(int) { return 0; }").is_err());
    }

    #[test]
    fn body_must_be_a_block() {
        assert!(matches!(parse("int main() return 0;"),
                         Err(ParseError::UnexpectedToken { .. })));
        assert!(matches!(parse("int main() {"),
                         Err(ParseError::UnexpectedEndOfInput { .. })));
        let program = parse("int main() { { } }").unwrap();
        assert_eq!(program.functions[0].body.statements,
                   vec![Statement::Block(Block::default())]);
    }
}
