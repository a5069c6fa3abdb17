//! `$NAME` / `${NAME}` expansion for dotenv values.
//!
//! - `${NAME}` and `$NAME` expand to the variable's value
//! - `$$` renders as a literal `$`
//! - Undefined variables expand to the empty string

use super::EnvMap;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static REFERENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\$|\$\{([A-Za-z_][A-Za-z0-9_]*)\}|\$([A-Za-z_][A-Za-z0-9_]*)")
        .expect("Invalid variable reference regex")
});

/// Expand references in `value`, looking names up in `parsed` before `base`.
pub(super) fn expand(value: &str, parsed: &EnvMap, base: &EnvMap) -> String {
    REFERENCE_REGEX
        .replace_all(value, |caps: &Captures<'_>| {
            let Some(name) = caps.get(1).or_else(|| caps.get(2)) else {
                return "$".to_string();
            };
            parsed
                .get(name.as_str())
                .or_else(|| base.get(name.as_str()))
                .cloned()
                .unwrap_or_default()
        })
        .into_owned()
}
