/*!
The OXOV normaliser canonicalises the order of values within CSS shorthand
declarations.

Shorthands such as `animation` accept their sub-values in almost any order,
so equal declarations can be written many ways. The normaliser classifies
each value into its longhand sub-property and re-emits the declaration in a
fixed canonical order, which makes equal declarations byte-identical and
safe to deduplicate or merge downstream.

# Example

```
use oxov_normaliser::OrderedValues;

let job = OrderedValues::default();
let normalised = job.declaration("animation", "ease-out 2s fade");
assert_eq!(normalised.as_deref(), Some("fade 2s ease-out"));
```
*/

#[macro_use]
extern crate lazy_static;

mod error;
mod rules;
mod utils;

pub use crate::error::Error;
pub use crate::rules::{animation, transition, OrderedValues};

#[cfg(test)]
#[ctor::ctor]
fn init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[cfg(test)]
pub(crate) fn test_declaration(config: &str, property: &str, value: &str) -> anyhow::Result<String> {
    let job = OrderedValues::from_configuration(serde_json::from_str(config)?)?;
    job.declaration(property, value)
        .ok_or_else(|| anyhow::anyhow!("the declaration was left untouched"))
}
