//! The page size labels are printed on: US Letter in landscape orientation.
//!
//! ```
//! use address_label::pagesize::LABEL_PAGE;
//! use address_label::Pt;
//!
//! assert_eq!(LABEL_PAGE, (Pt(792.0), Pt(612.0)));
//! ```

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

/// US Letter, 11 × 8.5 inches, landscape. Every label medium is derived from it.
pub const LABEL_PAGE: PageSize = (Pt(11.0 * 72.0), Pt(8.5 * 72.0));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_page_is_landscape_letter() {
        let (width, height) = LABEL_PAGE;
        assert!(width > height);
        assert_eq!(In::from(width), In(11.0));
        assert_eq!(In::from(height), In(8.5));
    }
}
