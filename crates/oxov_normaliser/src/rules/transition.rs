//! Canonical ordering for `transition` shorthand values.
use std::collections::BTreeSet;

use oxov_value::dimension::dimension;
use oxov_value::token::{ArgumentList, TokenKind};

use crate::utils::slots::{reorder, Condition};

// transition: [ none | <single-transition-property> ] || <time>
//     || <easing-function> || <time>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Property,
    Duration,
    TimingFunction,
    Delay,
}

const ORDER: [Slot; 4] = [
    Slot::Property,
    Slot::Duration,
    Slot::TimingFunction,
    Slot::Delay,
];

// As for animation, the first `<time>` value stays the duration and the
// second becomes the delay.
const CONDITIONS: [Condition<Slot>; 3] = [
    Condition {
        slot: Slot::Duration,
        predicate: is_time,
    },
    Condition {
        slot: Slot::TimingFunction,
        predicate: is_timing_function,
    },
    Condition {
        slot: Slot::Delay,
        predicate: is_time,
    },
];

/// Reorders each transition of a parsed `transition` value into the
/// canonical sub-property order.
///
/// Values which fit no sub-property, or whose sub-property is already
/// claimed, are kept in source order as the transitioned property.
pub fn normalize<'i>(value: &ArgumentList<'i>) -> ArgumentList<'i> {
    value
        .iter()
        .map(|argument| reorder(argument, &CONDITIONS, &ORDER, Slot::Property))
        .collect()
}

fn is_timing_function(value: &str, kind: TokenKind) -> bool {
    (kind == TokenKind::Function && FUNCTIONS.contains(value)) || KEYWORDS.contains(value)
}

fn is_time(value: &str, _: TokenKind) -> bool {
    dimension(value).is_some_and(|quantity| TIME_UNITS.contains(quantity.unit))
}

lazy_static! {
    static ref FUNCTIONS: BTreeSet<&'static str> = BTreeSet::from(["steps", "cubic-bezier"]);
    static ref KEYWORDS: BTreeSet<&'static str> = BTreeSet::from([
        "ease",
        "ease-in",
        "ease-in-out",
        "ease-out",
        "linear",
        "step-end",
        "step-start",
    ]);
    static ref TIME_UNITS: BTreeSet<&'static str> = BTreeSet::from(["ms", "s"]);
}

#[test]
fn transition() -> anyhow::Result<()> {
    use crate::test_declaration;

    insta::assert_snapshot!(
        test_declaration("{}", "transition", "ease opacity 2s")?,
        @"opacity 2s ease"
    );
    insta::assert_snapshot!(
        test_declaration("{}", "transition", "500ms linear color")?,
        @"color 500ms linear"
    );

    // the first time value is the duration, the second the delay
    insta::assert_snapshot!(
        test_declaration("{}", "transition", "1s ease-in-out 2s all")?,
        @"all 1s ease-in-out 2s"
    );

    // timing functions are recognised by function name
    insta::assert_snapshot!(
        test_declaration("{}", "transition", "cubic-bezier(0.4, 0, 0.2, 1) width 150ms, height 150ms")?,
        @"width 150ms cubic-bezier(0.4, 0, 0.2, 1), height 150ms"
    );

    // a third time value falls through to the transitioned property
    insta::assert_snapshot!(test_declaration("{}", "transition", "1s 2s 3s")?, @"3s 1s 2s");

    Ok(())
}
