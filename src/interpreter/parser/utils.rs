use crate::{
    ast::TypeName,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, stream::TokenStream},
    },
};

/// A grammar rule that can be tried as one alternative of a [`choice`].
pub(in crate::interpreter::parser) type Rule<T> = for<'s> fn(&mut TokenStream<'s>) -> ParseResult<T>;

/// Tries each alternative in order and returns the first that succeeds.
///
/// Before every attempt the stream is snapshotted; a failed alternative is
/// rewound so the next one starts from the same token. When all alternatives
/// fail, their errors are merged so the one that got furthest wins.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the construct.
/// - `alternatives`: Rules to try, highest priority first.
///
/// # Returns
/// The result of the first successful alternative.
///
/// # Errors
/// The furthest failure among all alternatives.
pub(in crate::interpreter::parser) fn choice<T>(tokens: &mut TokenStream<'_>,
                                                alternatives: &[Rule<T>])
                                                -> ParseResult<T> {
    let mut failure = None;

    for alternative in alternatives {
        let mut attempt = tokens.clone();
        match alternative(&mut attempt) {
            Ok(value) => {
                if let Some(error) = failure {
                    tokens.record(error);
                }
                *tokens = attempt;
                return Ok(value);
            },
            Err(error) => {
                failure = Some(match failure {
                                   Some(previous) => error.furthest(previous),
                                   None => error,
                               });
            },
        }
    }

    Err(failure.unwrap_or_else(|| tokens.unexpected(&[])))
}

/// Tries a rule and rewinds the stream if it fails.
///
/// The failure is remembered so that a later, shallower error does not hide
/// it.
pub(in crate::interpreter::parser) fn optional<T>(tokens: &mut TokenStream<'_>,
                                                  rule: Rule<T>)
                                                  -> Option<T> {
    let mut attempt = tokens.clone();
    match rule(&mut attempt) {
        Ok(value) => {
            *tokens = attempt;
            Some(value)
        },
        Err(error) => {
            tokens.record(error);
            None
        },
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by parameter lists and function argument lists.
/// It repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, an unexpected token is
/// encountered, or the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<T>(tokens: &mut TokenStream<'_>,
                                                               parse_item: Rule<T>,
                                                               closing: &Token,
                                                               closing_name: &str)
                                                               -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    if tokens.eat(closing) {
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        if tokens.eat(&Token::Comma) {
            continue;
        }
        if tokens.eat(closing) {
            break;
        }
        return Err(tokens.unexpected(&["','", closing_name]));
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the
/// input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier(tokens: &mut TokenStream<'_>)
                                                       -> ParseResult<String> {
    match tokens.peek() {
        Some(Token::Identifier(name)) => {
            tokens.next_token();
            Ok(name.clone())
        },
        _ => Err(tokens.unexpected(&["identifier"])),
    }
}

/// Parses one of the type names `int`, `float`, `char`, `bool` or `void`.
///
/// # Errors
/// Returns a `ParseError` if the next token is not a type name.
pub(in crate::interpreter::parser) fn parse_type(tokens: &mut TokenStream<'_>)
                                                 -> ParseResult<TypeName> {
    match tokens.peek() {
        Some(Token::Type(ty)) => {
            tokens.next_token();
            Ok(*ty)
        },
        _ => Err(tokens.unexpected(&["type name"])),
    }
}
