use crate::pagesize::{PageSize, LABEL_PAGE};
use crate::units::{In, POINTS_PER_INCH};

/// How much smaller than the printed page the on-screen preview is drawn
pub const PREVIEW_SCALE: f32 = 0.6;

/// Where a medium's coordinate origin lies, and therefore which way y grows
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Origin {
    /// y grows downward from the top edge; lines are placed by their top edge
    TopLeft,
    /// y grows upward from the bottom edge; lines are placed by their baseline
    BottomLeft,
}

/// A drawing target, measured in its own native unit (pixels, points, ...)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Medium {
    /// Width in native units
    pub width: f32,
    /// Height in native units
    pub height: f32,
    /// Native units per typographic point
    pub scale: f32,
    /// Which corner coordinates are measured from
    pub origin: Origin,
}

impl Medium {
    /// Describe a medium showing `page` at `scale` native units per point
    pub fn new(page: PageSize, scale: f32, origin: Origin) -> Medium {
        Medium {
            width: *page.0 * scale,
            height: *page.1 * scale,
            scale,
            origin,
        }
    }

    /// A landscape US Letter PDF page, in points with the origin at the bottom-left
    pub fn pdf() -> Medium {
        Medium::new(LABEL_PAGE, 1.0, Origin::BottomLeft)
    }

    /// The on-screen preview: the label page shrunk by `scale`, in pixels with the origin
    /// at the top-left
    pub fn preview(scale: f32) -> Medium {
        Medium::new(LABEL_PAGE, scale, Origin::TopLeft)
    }

    /// A page laid out in points but measured from the top, the way a browser lays out an
    /// HTML page
    pub fn html() -> Medium {
        Medium::new(LABEL_PAGE, 1.0, Origin::TopLeft)
    }

    pub fn units_per_inch(&self) -> f32 {
        POINTS_PER_INCH * self.scale
    }

    /// Convert a length in inches to native units
    pub fn inches(&self, length: In) -> f32 {
        length.0 * self.units_per_inch()
    }
}
