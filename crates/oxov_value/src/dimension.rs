//! Numeric quantities within value tokens.
use regex::Regex;

/// A numeric quantity split into its number and unit parts.
///
/// Both parts keep their source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension<'i> {
    /// The numeric part, including any sign and exponent
    pub number: &'i str,
    /// The unit part, possibly empty
    pub unit: &'i str,
}

/// Splits a value into its number and unit, if it is led by a CSS number.
///
/// # Example
///
/// ```
/// let quantity = oxov_value::dimension::dimension("1.5e2ms").unwrap();
/// assert_eq!(quantity.number, "1.5e2");
/// assert_eq!(quantity.unit, "ms");
/// assert!(oxov_value::dimension::dimension("infinite").is_none());
/// ```
pub fn dimension(value: &str) -> Option<Dimension<'_>> {
    let captures = DIMENSION.captures(value)?;
    Some(Dimension {
        number: captures.get(1).map_or("", |capture| capture.as_str()),
        unit: captures.get(2).map_or("", |capture| capture.as_str()),
    })
}

lazy_static! {
    static ref DIMENSION: Regex =
        Regex::new(r"^([-+]?\d*\.?\d+(?:[eE][-+]?\d+)?)(%|[a-zA-Z]*)$").unwrap();
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{dimension, Dimension};

    #[test]
    fn quantities() {
        assert_eq!(
            dimension("2s"),
            Some(Dimension {
                number: "2",
                unit: "s"
            })
        );
        assert_eq!(
            dimension(".5ms"),
            Some(Dimension {
                number: ".5",
                unit: "ms"
            })
        );
        assert_eq!(
            dimension("-200MS"),
            Some(Dimension {
                number: "-200",
                unit: "MS"
            })
        );
        assert_eq!(
            dimension("3"),
            Some(Dimension {
                number: "3",
                unit: ""
            })
        );
        assert_eq!(
            dimension("50%"),
            Some(Dimension {
                number: "50",
                unit: "%"
            })
        );
    }

    #[test]
    fn not_quantities() {
        assert_eq!(dimension("infinite"), None);
        assert_eq!(dimension(""), None);
        assert_eq!(dimension("s2"), None);
        assert_eq!(dimension("2 s"), None);
        assert_eq!(dimension("--5"), None);
    }
}
