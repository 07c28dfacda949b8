//! The token model for raw CSS values.
use smallvec::SmallVec;

/// The syntactic category of a raw value token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An identifier, number, percentage, or dimension
    Word,
    /// A function call, including its arguments
    Function,
    /// A run of whitespace
    Space,
    /// Any other primitive, such as a string, comment, or delimiter
    Other,
}

/// A raw value token, borrowing the text it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'i> {
    /// The syntactic category of the token
    pub kind: TokenKind,
    /// The source text of the token, with its original casing
    pub text: &'i str,
}

/// One comma-separated argument of a shorthand value.
pub type Argument<'i> = Vec<Token<'i>>;

/// A shorthand property value, as a list of comma-separated arguments.
pub type ArgumentList<'i> = SmallVec<[Argument<'i>; 1]>;

impl Token<'static> {
    /// A synthetic single-space token.
    pub const SPACE: Self = Token {
        kind: TokenKind::Space,
        text: " ",
    };
}

impl<'i> Token<'i> {
    /// Returns the text a token is matched by.
    ///
    /// For function tokens this is the function name rather than the whole
    /// call.
    pub fn value(&self) -> &'i str {
        match self.kind {
            TokenKind::Function => match self.text.find('(') {
                Some(index) => &self.text[..index],
                None => self.text,
            },
            _ => self.text,
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{Token, TokenKind};

    #[test]
    fn function_value() {
        let token = Token {
            kind: TokenKind::Function,
            text: "steps(2, start)",
        };
        assert_eq!(token.value(), "steps");

        let token = Token {
            kind: TokenKind::Word,
            text: "ease-in",
        };
        assert_eq!(token.value(), "ease-in");
    }

    #[test]
    fn space() {
        assert_eq!(Token::SPACE.kind, TokenKind::Space);
        assert_eq!(Token::SPACE.text, " ");
    }
}
