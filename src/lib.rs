//! Printable mailing labels: a fixed return address plus a typed destination address,
//! with an adjustable size and indent.
//!
//! One layout calculator ([`layout::layout_label`]) places every line, and three outputs
//! consume it: an on-screen [`Preview`], a PDF ([`save_pdf`]), and a browser-printable
//! HTML page ([`print_label`]). A [`LabelSession`] ties them to a hosting UI.
//!
//! ```
//! use address_label::{render_pdf, DestinationAddress, LayoutParameters, ReturnAddress};
//!
//! let to = DestinationAddress::parse("123 Main St\nSpringfield, IL 62701");
//! let pdf = render_pdf(&ReturnAddress::default(), &to, &LayoutParameters::default())
//!     .expect("can render label");
//! assert!(pdf.starts_with(b"%PDF-"));
//! ```

mod address;
pub use address::*;

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod export;
pub use export::*;

/// The label layout calculator shared by every output
pub mod layout;

/// The page size labels are printed on
pub mod pagesize;

mod params;
pub use params::*;

mod preview;
pub use preview::*;

mod print;
pub use print::*;

mod rect;
pub use rect::*;

mod session;
pub use session::*;

mod units;
pub use units::*;

#[cfg(feature = "pdf")]
mod content;

#[cfg(feature = "pdf")]
mod document;
#[cfg(feature = "pdf")]
pub use document::*;

#[cfg(feature = "pdf")]
mod font;
#[cfg(feature = "pdf")]
pub use font::*;

#[cfg(feature = "pdf")]
mod info;
#[cfg(feature = "pdf")]
pub use info::*;

#[cfg(feature = "pdf")]
mod page;
#[cfg(feature = "pdf")]
pub use page::*;

#[cfg(feature = "pdf")]
pub(crate) mod refs;

/// Re-export PDF-writer functionality, mostly for inspecting generated documents
#[cfg(feature = "pdf")]
pub use pdf_writer;
