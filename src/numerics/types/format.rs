// src/numerics/types/format.rs
// Human-readable rendering of matrix elements for debug output.

use core::fmt::{self, Write};

/// Whole values closer than this to an integer print without a fraction.
const INTEGER_SNAP: f32 = 1e-6;

/// Writes `value` the short way: `1` instead of `1.0`, `0` for `-0.0`, and
/// the shortest round-trip form for everything else.
pub(crate) fn write_nice(out: &mut impl Write, value: f32) -> fmt::Result {
    let rounded = value.round();
    if (value - rounded).abs() < INTEGER_SNAP && rounded.abs() < i64::MAX as f32 {
        write!(out, "{}", rounded as i64)
    } else {
        write!(out, "{}", value)
    }
}

/// Renders all values as `[v0, v1, ...]`.
pub(crate) fn write_values(out: &mut impl Write, values: &[f32]) -> fmt::Result {
    out.write_char('[')?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_nice(out, *value)?;
    }
    out.write_char(']')
}
