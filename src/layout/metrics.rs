use super::Medium;
use crate::params::LayoutParameters;
use crate::units::Pt;

/// Size of the return address type at a 1.0 size multiplier
pub const RETURN_FONT_SIZE: Pt = Pt(12.0);
/// Size of the destination address type at a 1.0 size multiplier
pub const DESTINATION_FONT_SIZE: Pt = Pt(16.0);
/// Distance of the return address from the top and left page edges at a 1.0 size multiplier
pub const MARGIN: Pt = Pt(30.0);
/// Extra space between return address lines
pub const RETURN_LINE_GAP: Pt = Pt(2.0);
/// Extra space between destination address lines
pub const DESTINATION_LINE_GAP: Pt = Pt(4.0);

/// The sizes a label is built from, resolved for one medium and one set of parameters.
/// All values are in the medium's native unit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LabelMetrics {
    pub return_font_size: f32,
    pub destination_font_size: f32,
    pub margin: f32,
    /// Distance from one return address line to the next
    pub return_advance: f32,
    /// Distance from one destination address line to the next
    pub destination_advance: f32,
    /// Left edge of the destination block
    pub indent: f32,
}

impl LabelMetrics {
    pub fn new(params: &LayoutParameters, medium: &Medium) -> LabelMetrics {
        let size = params.size_multiplier;
        let scaled = |pt: Pt| *pt * medium.scale * size;

        let return_font_size = scaled(RETURN_FONT_SIZE);
        let destination_font_size = scaled(DESTINATION_FONT_SIZE);

        LabelMetrics {
            return_font_size,
            destination_font_size,
            margin: scaled(MARGIN),
            return_advance: return_font_size + *RETURN_LINE_GAP * medium.scale,
            destination_advance: destination_font_size + *DESTINATION_LINE_GAP * medium.scale,
            // the indent is a physical distance from the page edge, so it ignores the size
            indent: medium.inches(params.indent),
        }
    }

    /// Total height of a destination block of `lines` lines
    pub fn destination_block_height(&self, lines: usize) -> f32 {
        lines as f32 * self.destination_advance
    }
}
