//! Serialisation of argument token streams back into property text.
use std::fmt;

use crate::token::ArgumentList;

/// Writes a value's arguments, comma-separated, into `dest`.
///
/// Tokens are re-emitted as their source text, so whatever spacing an
/// argument carries is preserved.
///
/// # Errors
/// Fails only when writing into `dest` fails.
pub fn to_css<W: fmt::Write>(value: &ArgumentList, dest: &mut W) -> fmt::Result {
    for (index, argument) in value.iter().enumerate() {
        if index != 0 {
            dest.write_str(", ")?;
        }
        for token in argument {
            dest.write_str(token.text)?;
        }
    }
    Ok(())
}

/// Serialises a value into a new string.
pub fn to_css_string(value: &ArgumentList) -> String {
    let mut output = String::new();
    let _ = to_css(value, &mut output);
    output
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::to_css_string;
    use crate::parse;

    #[test]
    fn source_text_is_preserved() {
        let value = parse("fade 2s,BOUNCE  1s");
        assert_eq!(to_css_string(&value), "fade 2s, BOUNCE  1s");
    }

    #[test]
    fn empty_value() {
        assert_eq!(to_css_string(&parse("")), "");
    }
}
