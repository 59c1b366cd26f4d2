use super::{LabelMetrics, Medium, Origin};
use crate::address::non_blank_lines;
use crate::params::LayoutParameters;

/// Weight of the typeface a line is set in
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Weight {
    Regular,
    Bold,
}

/// Which part of the label a line belongs to
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineRole {
    Return,
    Destination,
    Placeholder,
}

/// A single line of label text and where it goes. `x` is always the left edge of the line;
/// `y` is the top edge on [`Origin::TopLeft`] media and the baseline on
/// [`Origin::BottomLeft`] media.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    pub weight: Weight,
    pub role: LineRole,
}

/// Place the return and destination addresses on `medium`.
///
/// Destination lines are trimmed and blank ones skipped, so callers may pass raw lines. An
/// empty destination yields only the return address block. This never fails: values
/// outside the usual parameter ranges just produce tiny, huge, or off-page text.
pub fn layout_label<R, D>(
    return_lines: &[R],
    destination_lines: &[D],
    params: &LayoutParameters,
    medium: &Medium,
) -> Vec<PositionedLine>
where
    R: AsRef<str>,
    D: AsRef<str>,
{
    let metrics = LabelMetrics::new(params, medium);
    let destination: Vec<String> = non_blank_lines(destination_lines).collect();

    let mut lines: Vec<PositionedLine> =
        Vec::with_capacity(return_lines.len() + destination.len());

    let mut top = metrics.margin;
    for line in return_lines {
        lines.push(PositionedLine {
            text: line.as_ref().to_string(),
            x: metrics.margin,
            y: to_medium_y(medium, top, metrics.return_font_size),
            font_size: metrics.return_font_size,
            weight: Weight::Regular,
            role: LineRole::Return,
        });
        top += metrics.return_advance;
    }

    // centre the block as a whole so its middle sits on the page's middle
    let block = metrics.destination_block_height(destination.len());
    let mut top = (medium.height - block) / 2.0;
    for text in destination {
        lines.push(PositionedLine {
            text,
            x: metrics.indent,
            y: to_medium_y(medium, top, metrics.destination_font_size),
            font_size: metrics.destination_font_size,
            weight: Weight::Bold,
            role: LineRole::Destination,
        });
        top += metrics.destination_advance;
    }

    log::trace!(
        "laid out {} lines at size {} on a {}x{} medium",
        lines.len(),
        params.size_multiplier,
        medium.width,
        medium.height
    );

    lines
}

/// Convert the distance from the top of the medium to a line's top edge into the medium's
/// own y coordinate for that line
pub(crate) fn to_medium_y(medium: &Medium, top: f32, font_size: f32) -> f32 {
    match medium.origin {
        Origin::TopLeft => top,
        Origin::BottomLeft => medium.height - top - font_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PREVIEW_SCALE;
    use crate::units::In;

    const FROM: [&str; 3] = ["Line1", "Line2", "Line3"];
    const TO: [&str; 2] = ["123 Main St", "Springfield, IL 62701"];

    fn destination(lines: &[PositionedLine]) -> Vec<&PositionedLine> {
        lines
            .iter()
            .filter(|l| l.role == LineRole::Destination)
            .collect()
    }

    #[test]
    fn pdf_scenario() {
        let params = LayoutParameters::new(1.0, In(3.0));
        let medium = Medium::pdf();
        let lines = layout_label(&FROM, &TO, &params, &medium);
        let to = destination(&lines);

        assert_eq!(to.len(), 2);
        assert!(to.iter().all(|l| l.x == 216.0));
        assert!(to.iter().all(|l| l.weight == Weight::Bold && l.font_size == 16.0));
        assert_eq!(to[0].y, 310.0);
        assert_eq!(to[1].y, 290.0);

        // the block's top edge sits at (height + block) / 2 measured from the bottom
        assert_eq!(to[0].y + to[0].font_size, (612.0 + 40.0) / 2.0);
    }

    #[test]
    fn return_block_runs_down_from_the_corner() {
        let lines = layout_label(&FROM, &TO, &LayoutParameters::default(), &Medium::html());
        let from: Vec<_> = lines.iter().filter(|l| l.role == LineRole::Return).collect();
        assert_eq!(from.len(), 3);
        assert_eq!((from[0].x, from[0].y), (30.0, 30.0));
        assert_eq!(from[1].y, 44.0);
        assert_eq!(from[2].y, 58.0);
        assert_eq!(from[0].text, "Line1");
        assert!(from.iter().all(|l| l.weight == Weight::Regular));
    }

    #[test]
    fn return_block_on_pdf_uses_baselines() {
        let lines = layout_label(&FROM, &TO, &LayoutParameters::default(), &Medium::pdf());
        assert_eq!(lines[0].y, 612.0 - 30.0 - 12.0);
        assert_eq!(lines[0].y - lines[1].y, 14.0);
    }

    #[test]
    fn destination_block_is_centred_for_any_line_count() {
        let params = LayoutParameters::default();
        for medium in [Medium::html(), Medium::preview(PREVIEW_SCALE)] {
            for n in 1..=8 {
                let to: Vec<String> = (0..n).map(|i| format!("line {i}")).collect();
                let lines = layout_label(&FROM, &to, &params, &medium);
                let to = destination(&lines);
                let metrics = LabelMetrics::new(&params, &medium);

                let top = to[0].y;
                let bottom = top + metrics.destination_block_height(n);
                assert!(((top + bottom) / 2.0 - medium.height / 2.0).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn blank_lines_never_emit() {
        let params = LayoutParameters::default();
        let with_blank = layout_label(&FROM, &["a", "", "   ", "b"], &params, &Medium::pdf());
        let without = layout_label(&FROM, &["a", "b"], &params, &Medium::pdf());
        assert_eq!(with_blank, without);
    }

    #[test]
    fn empty_destination_emits_only_return_block() {
        let none: [&str; 0] = [];
        let lines = layout_label(&FROM, &none, &LayoutParameters::default(), &Medium::pdf());
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.role == LineRole::Return));
    }

    #[test]
    fn doubling_size_doubles_fonts_and_margin_but_not_indent() {
        let medium = Medium::html();
        let one = layout_label(&FROM, &TO, &LayoutParameters::new(1.0, In(3.0)), &medium);
        let two = layout_label(&FROM, &TO, &LayoutParameters::new(2.0, In(3.0)), &medium);

        for (a, b) in one.iter().zip(two.iter()) {
            assert_eq!(b.font_size, a.font_size * 2.0);
        }
        assert_eq!(two[0].x, one[0].x * 2.0);
        assert_eq!(two[0].y, one[0].y * 2.0);
        assert_eq!(destination(&two)[0].x, destination(&one)[0].x);
    }

    #[test]
    fn extreme_values_do_not_panic() {
        for size in [0.0, -1.0, 100.0, f32::NAN] {
            let params = LayoutParameters::new(size, In(50.0));
            let lines = layout_label(&FROM, &TO, &params, &Medium::pdf());
            assert_eq!(lines.len(), 5);
        }
    }
}
