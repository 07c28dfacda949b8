//! Canonical ordering for `animation` shorthand values.
use std::collections::BTreeSet;

use oxov_value::dimension::dimension;
use oxov_value::token::{ArgumentList, TokenKind};

use crate::utils::slots::{reorder, Condition};

// animation: [ none | <keyframes-name> ] || <time> || <easing-function> || <time>
//     || <single-animation-iteration-count> || <single-animation-direction>
//     || <single-animation-fill-mode> || <single-animation-play-state>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Name,
    Duration,
    TimingFunction,
    Delay,
    IterationCount,
    Direction,
    FillMode,
    PlayState,
}

const ORDER: [Slot; 8] = [
    Slot::Name,
    Slot::Duration,
    Slot::TimingFunction,
    Slot::Delay,
    Slot::IterationCount,
    Slot::Direction,
    Slot::FillMode,
    Slot::PlayState,
];

// Duration is listed before delay, so the first `<time>` value stays the
// duration and the second becomes the delay.
const CONDITIONS: [Condition<Slot>; 7] = [
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
    Condition {
        slot: Slot::IterationCount,
        predicate: is_iteration_count,
    },
    Condition {
        slot: Slot::Direction,
        predicate: is_direction,
    },
    Condition {
        slot: Slot::FillMode,
        predicate: is_fill_mode,
    },
    Condition {
        slot: Slot::PlayState,
        predicate: is_play_state,
    },
];

/// Reorders each animation of a parsed `animation` value into the canonical
/// sub-property order.
///
/// Values which fit no sub-property, or whose sub-property is already
/// claimed, are kept in source order as the animation name. Note that a
/// lone `none` claims the fill-mode slot, not the name.
pub fn normalize<'i>(value: &ArgumentList<'i>) -> ArgumentList<'i> {
    value
        .iter()
        .map(|argument| reorder(argument, &CONDITIONS, &ORDER, Slot::Name))
        .collect()
}

fn is_timing_function(value: &str, kind: TokenKind) -> bool {
    (kind == TokenKind::Function && FUNCTIONS.contains(value)) || KEYWORDS.contains(value)
}

fn is_time(value: &str, _: TokenKind) -> bool {
    dimension(value).is_some_and(|quantity| TIME_UNITS.contains(quantity.unit))
}

fn is_iteration_count(value: &str, _: TokenKind) -> bool {
    value == "infinite" || dimension(value).is_some_and(|quantity| quantity.unit.is_empty())
}

fn is_direction(value: &str, _: TokenKind) -> bool {
    DIRECTIONS.contains(value)
}

fn is_fill_mode(value: &str, _: TokenKind) -> bool {
    FILL_MODES.contains(value)
}

fn is_play_state(value: &str, _: TokenKind) -> bool {
    PLAY_STATES.contains(value)
}

lazy_static! {
    static ref FUNCTIONS: BTreeSet<&'static str> =
        BTreeSet::from(["steps", "cubic-bezier", "frames"]);
    static ref KEYWORDS: BTreeSet<&'static str> = BTreeSet::from([
        "ease",
        "ease-in",
        "ease-in-out",
        "ease-out",
        "linear",
        "step-end",
        "step-start",
    ]);
    static ref DIRECTIONS: BTreeSet<&'static str> =
        BTreeSet::from(["normal", "reverse", "alternate", "alternate-reverse"]);
    static ref FILL_MODES: BTreeSet<&'static str> =
        BTreeSet::from(["none", "forwards", "backwards", "both"]);
    static ref PLAY_STATES: BTreeSet<&'static str> = BTreeSet::from(["running", "paused"]);
    static ref TIME_UNITS: BTreeSet<&'static str> = BTreeSet::from(["ms", "s"]);
}

#[test]
fn animation() -> anyhow::Result<()> {
    use crate::test_declaration;

    // an already-canonical value comes back byte for byte
    insta::assert_snapshot!(
        test_declaration("{}", "animation", "fade 2s ease-in 1s infinite alternate both paused")?,
        @"fade 2s ease-in 1s infinite alternate both paused"
    );

    // the first time value is the duration, the second the delay
    insta::assert_snapshot!(test_declaration("{}", "animation", "2s 1s")?, @"2s 1s");

    // a third time value falls through to the animation name
    insta::assert_snapshot!(test_declaration("{}", "animation", "1s 2s 3s")?, @"3s 1s 2s");

    // timing functions are recognised by function name
    insta::assert_snapshot!(test_declaration("{}", "animation", "steps(2) 1s")?, @"1s steps(2)");
    insta::assert_snapshot!(
        test_declaration("{}", "animation", "1s cubic-bezier(0.1, 0.2, 0.3, 0.4) slide-in 0.5s")?,
        @"slide-in 1s cubic-bezier(0.1, 0.2, 0.3, 0.4) 0.5s"
    );

    // each animation of a list is reordered on its own
    insta::assert_snapshot!(
        test_declaration("{}", "animation", "ease 2s, 3s linear")?,
        @"2s ease, 3s linear"
    );

    // matching is case-insensitive but the source casing is kept
    insta::assert_snapshot!(test_declaration("{}", "animation", "EASE 2S")?, @"2S EASE");

    // `none` is taken as a fill mode before it is taken as a name
    insta::assert_snapshot!(test_declaration("{}", "animation", "none 2s")?, @"2s none");
    insta::assert_snapshot!(test_declaration("{}", "animation", "none none 2s")?, @"none 2s none");

    // iteration counts are bare numbers or `infinite`
    insta::assert_snapshot!(
        test_declaration("{}", "animation", "infinite 2s linear")?,
        @"2s linear infinite"
    );
    insta::assert_snapshot!(test_declaration("{}", "animation", "3 1s ease")?, @"1s ease 3");

    // unknown values accumulate as the name, keeping their order
    insta::assert_snapshot!(
        test_declaration("{}", "animation", "1s in fade out")?,
        @"in fade out 1s"
    );

    // whitespace is collapsed to single spaces
    insta::assert_snapshot!(
        test_declaration("{}", "animation", "  fade   2s\tease ")?,
        @"fade 2s ease"
    );

    // malformed values are still reordered, never rejected
    insta::assert_snapshot!(test_declaration("{}", "animation", "")?, @"");
    insta::assert_snapshot!(test_declaration("{}", "animation", "2fast 4s")?, @"2fast 4s");

    Ok(())
}

#[test]
fn animation_argument_order() -> anyhow::Result<()> {
    use itertools::Itertools;
    use pretty_assertions::assert_eq;

    use crate::test_declaration;

    // every grammar-legal ordering of one animation's values canonicalises
    // to the same text
    let values = ["fade", "2s", "ease-in", "infinite", "alternate", "both", "paused"];
    for permutation in values.iter().permutations(values.len()) {
        let input = permutation.into_iter().join(" ");
        assert_eq!(
            test_declaration("{}", "animation", &input)?,
            "fade 2s ease-in infinite alternate both paused",
            "for input: {input}",
        );
    }
    Ok(())
}
