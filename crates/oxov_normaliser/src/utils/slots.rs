//! Slot-based reordering of whitespace-separated values.
use oxov_value::token::{Argument, Token, TokenKind};

/// Tests whether a case-folded value belongs to a slot's sub-property.
pub(crate) type Predicate = fn(&str, TokenKind) -> bool;

/// Pairs a slot with the predicate which claims tokens for it.
pub(crate) struct Condition<S> {
    pub slot: S,
    pub predicate: Predicate,
}

/// Assigns each of an argument's tokens to the first of `conditions` whose
/// predicate matches and whose slot is still empty, then re-emits the tokens
/// slot by slot in the order given by `order`.
///
/// Tokens claimed by no condition accumulate in the `fallback` slot, keeping
/// their relative order. A slot claimed once is never overwritten; a later
/// token matching the same predicate falls through to the next condition, or
/// to the fallback. Whitespace between tokens is dropped and re-inserted as
/// single spaces between the re-emitted tokens.
pub(crate) fn reorder<'i, S: Copy + PartialEq>(
    argument: &Argument<'i>,
    conditions: &[Condition<S>],
    order: &[S],
    fallback: S,
) -> Argument<'i> {
    let mut slots: Vec<Argument<'i>> = vec![Argument::new(); order.len()];
    let position = |slot: S| order.iter().position(|entry| *entry == slot);

    for token in argument {
        if token.kind == TokenKind::Space {
            continue;
        }
        // Matching is ASCII case-insensitive; the original token is what
        // gets kept.
        let value = token.value().to_ascii_lowercase();
        let slot = conditions
            .iter()
            .find_map(|condition| {
                let index = position(condition.slot)?;
                ((condition.predicate)(&value, token.kind) && slots[index].is_empty())
                    .then_some(index)
            })
            .or_else(|| position(fallback));
        if let Some(index) = slot {
            slots[index].push(*token);
        }
    }

    let mut ordered = Argument::new();
    for slot in slots {
        for token in slot {
            if !ordered.is_empty() {
                ordered.push(Token::SPACE);
            }
            ordered.push(token);
        }
    }
    ordered
}
