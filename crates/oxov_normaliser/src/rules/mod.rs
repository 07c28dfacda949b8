//! Rules for reordering the values of shorthand properties.
pub mod animation;
pub mod transition;

use oxov_value::serialize;
use oxov_value::token::{ArgumentList, TokenKind};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::utils::vendor;

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
/// Normalises the order of values within shorthand declarations so that
/// equivalent declarations serialise to identical text.
pub struct OrderedValues {
    /// Whether `animation` declarations are reordered. Defaults to `true`.
    pub animation: Option<bool>,
    /// Whether `transition` declarations are reordered. Defaults to `true`.
    pub transition: Option<bool>,
}

enum Rule {
    Animation,
    Transition,
}

impl OrderedValues {
    /// Creates the job from a JSON configuration.
    ///
    /// # Errors
    /// Fails when the configuration does not deserialise.
    pub fn from_configuration(value: serde_json::Value) -> Result<Self, Error> {
        serde_json::from_value(value).map_err(Error::Configuration)
    }

    /// Normalises the value of one declaration.
    ///
    /// Properties are matched case-insensitively and through vendor
    /// prefixes. Returns `None` when the property has no rule, its rule is
    /// disabled, or the value cannot be reordered safely; the declaration
    /// should then be left untouched.
    pub fn declaration(&self, property: &str, value: &str) -> Option<String> {
        let property = property.to_ascii_lowercase();
        let rule = match vendor::unprefixed(&property) {
            "animation" if self.animation.unwrap_or(DEFAULT_ANIMATION) => Rule::Animation,
            "transition" if self.transition.unwrap_or(DEFAULT_TRANSITION) => Rule::Transition,
            _ => return None,
        };
        let parsed = oxov_value::parse(value);
        if should_abort(&parsed) {
            log::debug!("OrderedValues::declaration: leaving unsafe value untouched: {value}");
            return None;
        }
        let ordered = match rule {
            Rule::Animation => animation::normalize(&parsed),
            Rule::Transition => transition::normalize(&parsed),
        };
        Some(serialize::to_css_string(&ordered))
    }
}

/// Checks for values which cannot be reordered safely: `var()` and `env()`
/// arguments may stand for any sub-property, comments are anchored to their
/// neighbours, and `!important` is not a value at all.
fn should_abort(value: &ArgumentList) -> bool {
    value.iter().flatten().any(|token| match token.kind {
        TokenKind::Function => {
            // Nested arguments stay within the function's raw text, so a
            // substring scan covers them. Over-matching only leaves the
            // declaration untouched.
            let text = token.text.to_ascii_lowercase();
            text.contains("var(") || text.contains("env(")
        }
        TokenKind::Other => token.text.starts_with("/*") || token.text == "!",
        _ => false,
    })
}

static DEFAULT_ANIMATION: bool = true;
static DEFAULT_TRANSITION: bool = true;
