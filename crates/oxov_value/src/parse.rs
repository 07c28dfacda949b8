//! Parsing of property text into argument token streams.
use cssparser::{ParseError, Parser, ParserInput, Token as CssToken};

use crate::token::{Argument, ArgumentList, Token, TokenKind};

/// Splits a property value into comma-separated arguments of raw tokens.
///
/// Only top-level commas split; the contents of functions and blocks are
/// kept within the enclosing token, whose text spans through the matching
/// closing bracket (or to the end of the value when unclosed). Leading and
/// trailing whitespace is sliced off each argument. Comments are kept as
/// their own tokens.
///
/// Any input produces an argument list; the empty string produces a single
/// empty argument.
///
/// # Example
///
/// ```
/// use oxov_value::token::TokenKind;
///
/// let value = oxov_value::parse("steps(2, start) 1s");
/// assert_eq!(value.len(), 1);
/// assert_eq!(value[0][0].kind, TokenKind::Function);
/// assert_eq!(value[0][0].text, "steps(2, start)");
/// ```
pub fn parse(value: &str) -> ArgumentList<'_> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let mut arguments = ArgumentList::new();
    let mut argument = Argument::new();

    loop {
        let start = parser.position();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(..) => break,
        };
        if token == CssToken::Comma {
            push_argument(&mut arguments, std::mem::take(&mut argument));
            continue;
        }
        let kind = match token {
            CssToken::WhiteSpace(..) => TokenKind::Space,
            CssToken::Ident(..)
            | CssToken::Number { .. }
            | CssToken::Percentage { .. }
            | CssToken::Dimension { .. } => TokenKind::Word,
            CssToken::Function(..) => {
                consume_block(&mut parser);
                TokenKind::Function
            }
            CssToken::ParenthesisBlock
            | CssToken::SquareBracketBlock
            | CssToken::CurlyBracketBlock => {
                consume_block(&mut parser);
                TokenKind::Other
            }
            _ => TokenKind::Other,
        };
        argument.push(Token {
            kind,
            text: parser.slice_from(start),
        });
    }

    push_argument(&mut arguments, argument);
    arguments
}

fn push_argument<'i>(arguments: &mut ArgumentList<'i>, mut argument: Argument<'i>) {
    if argument
        .first()
        .is_some_and(|token| token.kind == TokenKind::Space)
    {
        argument.remove(0);
    }
    if argument
        .last()
        .is_some_and(|token| token.kind == TokenKind::Space)
    {
        argument.pop();
    }
    arguments.push(argument);
}

fn consume_block<'i>(parser: &mut Parser<'i, '_>) {
    let _ = parser.parse_nested_block(|input| -> Result<(), ParseError<'i, ()>> {
        while input.next_including_whitespace_and_comments().is_ok() {}
        Ok(())
    });
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::parse;
    use crate::token::TokenKind;

    fn kinds(value: &str) -> Vec<Vec<(TokenKind, String)>> {
        parse(value)
            .iter()
            .map(|argument| {
                argument
                    .iter()
                    .map(|token| (token.kind, token.text.to_string()))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn arguments() {
        assert_eq!(
            kinds("fade 2s, bounce 1s"),
            [
                vec![
                    (TokenKind::Word, "fade".to_string()),
                    (TokenKind::Space, " ".to_string()),
                    (TokenKind::Word, "2s".to_string()),
                ],
                vec![
                    (TokenKind::Word, "bounce".to_string()),
                    (TokenKind::Space, " ".to_string()),
                    (TokenKind::Word, "1s".to_string()),
                ],
            ]
        );
    }

    #[test]
    fn functions_split_nowhere() {
        let value = parse("cubic-bezier(0.1, 0.2, 0.3, 0.4) 1s");
        assert_eq!(value.len(), 1);
        assert_eq!(value[0][0].kind, TokenKind::Function);
        assert_eq!(value[0][0].text, "cubic-bezier(0.1, 0.2, 0.3, 0.4)");
        assert_eq!(value[0][0].value(), "cubic-bezier");
    }

    #[test]
    fn unclosed_function_spans_to_the_end() {
        let value = parse("steps(2");
        assert_eq!(value.len(), 1);
        assert_eq!(value[0][0].kind, TokenKind::Function);
        assert_eq!(value[0][0].text, "steps(2");
    }

    #[test]
    fn whitespace_collapses_into_single_tokens() {
        assert_eq!(
            kinds("fade\t \n2s"),
            [vec![
                (TokenKind::Word, "fade".to_string()),
                (TokenKind::Space, "\t \n".to_string()),
                (TokenKind::Word, "2s".to_string()),
            ]]
        );
    }

    #[test]
    fn comments_are_their_own_tokens() {
        assert_eq!(
            kinds("fade/* quick */2s"),
            [vec![
                (TokenKind::Word, "fade".to_string()),
                (TokenKind::Other, "/* quick */".to_string()),
                (TokenKind::Word, "2s".to_string()),
            ]]
        );
    }

    #[test]
    fn degenerate_values() {
        assert_eq!(kinds(""), [Vec::new()]);
        assert_eq!(
            kinds("fade,"),
            [vec![(TokenKind::Word, "fade".to_string())], Vec::new()]
        );
        assert_eq!(kinds(","), [Vec::new(), Vec::new()]);
    }
}
