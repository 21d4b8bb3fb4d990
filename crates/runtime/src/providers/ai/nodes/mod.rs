//! Leaf registries for data-driven trees.
//!
//! Tree files name leaves in kebab-case (`target-in-range`, `use-skill`).
//! Each name parses into a [`ConditionKind`] or [`ActionKind`]; names that do
//! not parse fail closed.
//!
//! Parameters are plain strings. A parameter that is present but does not
//! parse makes the leaf fail rather than silently using the default.

pub mod actions;
pub mod conditions;

use std::str::FromStr;

use behavior_tree::Params;

pub use actions::ActionKind;
pub use conditions::ConditionKind;

/// Reads `key`, falling back to `default` when absent. `None` if malformed.
pub(crate) fn param_or<T: FromStr>(params: &Params, key: &str, default: T) -> Option<T> {
    match params.get(key) {
        Some(raw) => raw.trim().parse().ok(),
        None => Some(default),
    }
}

/// Reads an optional parameter. `Err` if present but malformed.
pub(crate) fn param_opt<T: FromStr>(params: &Params, key: &str) -> Result<Option<T>, T::Err> {
    params.get(key).map(|raw| raw.trim().parse()).transpose()
}
