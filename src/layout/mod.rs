//! The label layout calculator.
//!
//! Every output medium (the on-screen preview, the PDF, the printable HTML page) places
//! the label's text using the same rules, computed here once:
//!
//! - the return address sits in the top-left corner, `30 × size` points in from both edges,
//!   set in 12 pt type with 2 pt between lines
//! - the destination address is set in 16 pt bold type with 4 pt between lines, left
//!   justified at the indent and vertically centred on the page as a block
//! - every font size and the margin scale with the size multiplier; the indent does not
//!
//! A [`Medium`](crate::layout::Medium) describes the target's size, how many of its native
//! units make up a point, and which way its vertical axis runs.
//!
//! # Example
//!
//! ```
//! use address_label::layout::{layout_label, LineRole, Medium};
//! use address_label::{In, LayoutParameters};
//!
//! let params = LayoutParameters::new(1.0, In(3.0));
//! let lines = layout_label(
//!     &["Line1", "Line2", "Line3"],
//!     &["123 Main St", "Springfield, IL 62701"],
//!     &params,
//!     &Medium::pdf(),
//! );
//!
//! let to: Vec<_> = lines.iter().filter(|l| l.role == LineRole::Destination).collect();
//! assert_eq!(to[0].x, 216.0);
//! assert_eq!(to[0].y - to[1].y, 20.0);
//! ```

mod label;
mod medium;
mod metrics;

pub use label::*;
pub use medium::*;
pub use metrics::*;
