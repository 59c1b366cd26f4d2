//! Physical units used when placing things on a page.
//!
//! PDF user space is measured in points (1/72 of an inch). Label parameters such as
//! the indent are expressed by the user in inches, so both are provided along with
//! lossless conversions between them.
//!
//! ```
//! use address_label::{In, Pt};
//!
//! let indent: Pt = In(3.0).into();
//! assert_eq!(indent, Pt(216.0));
//! ```

use derive_more::{Add, AddAssign, Deref, Display, Div, From, Mul, MulAssign, Sub, SubAssign, Sum};

/// Number of points in one inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// A length in typographic points (1/72 in)
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Div,
    Deref,
    From,
    Sum,
    Display,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

/// A length in inches
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Mul, Div, Deref, From, Display,
)]
#[display("{_0}in")]
pub struct In(pub f32);

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(value.0 * POINTS_PER_INCH)
    }
}

impl From<Pt> for In {
    fn from(value: Pt) -> Self {
        In(value.0 / POINTS_PER_INCH)
    }
}

impl From<Pt> for f32 {
    fn from(value: Pt) -> Self {
        value.0
    }
}
