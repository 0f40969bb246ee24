//! Helpers for Display impls.

use std::fmt::{self, Display};

/// Write `items` on one row, separated by `" | "`.
pub(crate) fn write_row<T: Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    let Some((first, rest)) = items.split_first() else {
        return Ok(());
    };
    write!(f, "{first}")?;
    for item in rest {
        write!(f, " | {item}")?;
    }
    Ok(())
}
