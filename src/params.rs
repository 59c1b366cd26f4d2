use crate::units::In;
use std::ops::RangeInclusive;

/// Range of the size multiplier the size control allows
pub const SIZE_RANGE: RangeInclusive<f32> = 0.5..=3.0;
/// Range of the indent, in inches, the indent control allows
pub const INDENT_RANGE: RangeInclusive<f32> = 0.5..=6.0;

pub const DEFAULT_SIZE: f32 = 1.0;
pub const DEFAULT_INDENT: In = In(3.0);

/// A snapshot of the user-adjustable layout settings. A new snapshot is taken every time
/// the label is rendered; the layout code never sees the controls themselves.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayoutParameters {
    /// Scales every font size and margin uniformly
    pub size_multiplier: f32,
    /// Horizontal offset of the destination block from the left edge of the page
    pub indent: In,
}

impl Default for LayoutParameters {
    fn default() -> Self {
        LayoutParameters {
            size_multiplier: DEFAULT_SIZE,
            indent: DEFAULT_INDENT,
        }
    }
}

impl LayoutParameters {
    /// Take the values as-is. Layout accepts any value; out-of-range ones simply produce
    /// tiny, huge, or off-page text.
    pub fn new(size_multiplier: f32, indent: In) -> LayoutParameters {
        LayoutParameters {
            size_multiplier,
            indent,
        }
    }

    /// Force both values into the ranges the controls allow
    ///
    /// ```
    /// use address_label::{In, LayoutParameters};
    ///
    /// let params = LayoutParameters::clamped(9.0, In(-1.0));
    /// assert_eq!(params, LayoutParameters::new(3.0, In(0.5)));
    /// ```
    pub fn clamped(size_multiplier: f32, indent: In) -> LayoutParameters {
        LayoutParameters {
            size_multiplier: clamp_to(size_multiplier, &SIZE_RANGE),
            indent: In(clamp_to(indent.0, &INDENT_RANGE)),
        }
    }

    /// The size as the size control displays it, e.g. `1.5x`
    pub fn size_label(&self) -> String {
        format!("{:.1}x", self.size_multiplier)
    }

    /// The indent as the indent control displays it, e.g. `3.0"`
    pub fn indent_label(&self) -> String {
        format!("{:.1}\"", self.indent.0)
    }
}

pub(crate) fn clamp_to(value: f32, range: &RangeInclusive<f32>) -> f32 {
    if !value.is_finite() || value <= 0.0 {
        return *range.start();
    }
    value.clamp(*range.start(), *range.end())
}
