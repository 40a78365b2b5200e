//! Picking test cases out of a registry.
//!
//! Every selector walks the registry from the start and keeps registration
//! order.

use crate::{Registry, TestDescriptor};

pub fn all(registry: &Registry) -> impl Iterator<Item = &TestDescriptor> {
    registry.iter()
}

/// The case shown as number `index` in the menu, counting from 1.
pub fn by_index(registry: &Registry, index: i64) -> Option<&TestDescriptor> {
    let index = usize::try_from(index).ok()?.checked_sub(1)?;
    registry.iter().nth(index)
}

/// Cases whose name contains the text between the quotes of `quoted`.
pub fn by_name<'a>(
    registry: &'a Registry,
    quoted: &'a str,
) -> impl Iterator<Item = &'a TestDescriptor> + 'a {
    let filter = strip_quotes(quoted);
    registry.iter().filter(move |case| case.name.contains(filter))
}

/// Cases whose description contains `filter` as is.
///
/// The bracket of a `[tag]` command is part of the filter: `[net]` matches
/// `[net][slow]` but not a bare `net`.
pub fn by_tag<'a>(
    registry: &'a Registry,
    filter: &'a str,
) -> impl Iterator<Item = &'a TestDescriptor> + 'a {
    registry.iter().filter(move |case| case.desc.contains(filter))
}

/// Drop the first and last character of a quoted token.
///
/// The last character is dropped whether or not it is a quote, so `"ab`
/// becomes `a`. A token of one character becomes empty.
pub fn strip_quotes(token: &str) -> &str {
    let mut chars = token.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
