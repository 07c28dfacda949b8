/*!
Raw CSS value token streams for the OXOV normaliser.

A property value is split into comma-separated arguments of [`token::Token`]s
which borrow their text from the source string. Function calls and blocks are
kept whole within a single token, so reordering tokens can never tear a value
apart. Serialising an argument list re-emits the tokens' source text.

# Example

```
let value = oxov_value::parse("EASE 2s, steps(2) 1s");
assert_eq!(value.len(), 2);
assert_eq!(oxov_value::serialize::to_css_string(&value), "EASE 2s, steps(2) 1s");
```
*/

#[macro_use]
extern crate lazy_static;

pub mod dimension;
pub mod parse;
pub mod serialize;
pub mod token;

pub use crate::parse::parse;
