//! Values, the entries of a row.
//!
//! Each coordinate of a row takes a value from a bounded integer domain `0..=dmax`, where `dmax` is fixed per coordinate by the [headline](crate::db::headline) of a run.
//!
//! A type alias is used to allow the representation to be easily revised, e.g. to `u16` for dense matrices.

/// An entry of a row, drawn from the bounded domain of its coordinate.
pub type Value = u32;
