//! Saving a label as a PDF.
//!
//! The label is placed on a single landscape US Letter page using the shared layout,
//! with the return address in Helvetica and the destination in Helvetica-Bold. The whole
//! document is rendered in memory before the output file is touched, so a failure never
//! leaves a half-written label behind.

use crate::address::{DestinationAddress, ReturnAddress};
use crate::error::LabelError;
use crate::params::LayoutParameters;
use std::path::Path;

/// Whether this build can write PDFs at all
pub const fn pdf_available() -> bool {
    cfg!(feature = "pdf")
}

/// The error reported when this build cannot write PDFs
pub fn pdf_unavailable() -> LabelError {
    LabelError::MissingCapability {
        capability: "PDF",
        hint: "Rebuild address-label with the `pdf` feature enabled: cargo build --features pdf",
    }
}

/// Render a label to PDF bytes
pub fn render_pdf(
    from: &ReturnAddress,
    to: &DestinationAddress,
    params: &LayoutParameters,
) -> Result<Vec<u8>, LabelError> {
    if to.is_empty() {
        return Err(LabelError::EmptyInput);
    }
    imp::render(from, to, params)
}

/// Render a label and save it at `path`
///
/// The destination is checked before anything else happens: an empty address fails with
/// [`LabelError::EmptyInput`] and no file is created.
pub fn save_pdf<P: AsRef<Path>>(
    path: P,
    from: &ReturnAddress,
    to: &DestinationAddress,
    params: &LayoutParameters,
) -> Result<(), LabelError> {
    let path = path.as_ref();
    let bytes = render_pdf(from, to, params)?;
    std::fs::write(path, bytes).map_err(|e| LabelError::write(path, e))?;
    log::info!("saved label to {}", path.display());
    Ok(())
}

#[cfg(feature = "pdf")]
mod imp {
    use super::*;
    use crate::colours;
    use crate::font::Font;
    use crate::info::Info;
    use crate::layout::{layout_label, Medium, Weight};
    use crate::page::{Page, SpanFont, SpanLayout};
    use crate::pagesize::LABEL_PAGE;
    use crate::units::Pt;
    use crate::Document;

    pub(super) fn render(
        from: &ReturnAddress,
        to: &DestinationAddress,
        params: &LayoutParameters,
    ) -> Result<Vec<u8>, LabelError> {
        let mut doc = Document::default();
        let regular = doc.add_font(Font::for_weight(Weight::Regular));
        let bold = doc.add_font(Font::for_weight(Weight::Bold));

        let mut info = Info::new();
        info.title("Address Label");
        if let Some(first) = to.lines().first() {
            info.subject(first);
        }
        doc.set_info(info);

        let mut page = Page::new(LABEL_PAGE);
        for line in layout_label(from.lines(), to.lines(), params, &Medium::pdf()) {
            let id = match line.weight {
                Weight::Regular => regular,
                Weight::Bold => bold,
            };
            page.add_span(SpanLayout {
                text: line.text,
                font: SpanFont {
                    id,
                    size: Pt(line.font_size),
                },
                colour: colours::BLACK,
                coords: (Pt(line.x), Pt(line.y)),
            });
        }
        doc.add_page(page);

        log::debug!(
            "rendering PDF label with {} destination lines at size {}",
            to.len(),
            params.size_multiplier
        );
        Ok(doc.to_bytes()?)
    }
}

#[cfg(not(feature = "pdf"))]
mod imp {
    use super::*;

    pub(super) fn render(
        _from: &ReturnAddress,
        _to: &DestinationAddress,
        _params: &LayoutParameters,
    ) -> Result<Vec<u8>, LabelError> {
        Err(pdf_unavailable())
    }
}
