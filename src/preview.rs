//! The on-screen label preview.
//!
//! The preview is a shrunken landscape US Letter page. Every render clears the drawing
//! surface and redraws it from scratch: the page border, the return address, and either
//! the destination address or a muted placeholder when there is none yet. Hosting UIs
//! implement [`Surface`] to turn the resulting [`DrawCommand`]s into real drawing calls.

use crate::address::{DestinationAddress, ReturnAddress};
use crate::colour::{colours, Colour};
use crate::layout::{layout_label, LabelMetrics, LineRole, Medium, PositionedLine, Weight};
use crate::params::LayoutParameters;

/// Shown in place of the destination address until the user types one
pub const PLACEHOLDER: &str = "Enter destination address above";

/// Distance of the page border from the surface edges, in pixels
pub const BORDER_INSET: f32 = 5.0;
/// Line width of the page border, in pixels
pub const BORDER_WIDTH: f32 = 2.0;

/// A single drawing operation on a preview surface, in pixels from the top-left corner
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// An unfilled rectangle between two corners
    Rectangle {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        outline: Colour,
        width: f32,
    },
    /// Text whose top-left corner sits at (x, y)
    Text {
        text: String,
        x: f32,
        y: f32,
        font_size: f32,
        weight: Weight,
        colour: Colour,
    },
}

/// Something the preview can be drawn on, usually a scrollable canvas widget
pub trait Surface {
    /// Remove everything previously drawn
    fn clear(&mut self);
    /// Size the scrollable area
    fn set_scroll_region(&mut self, width: f32, height: f32);
    fn draw(&mut self, command: DrawCommand);
}

/// A surface that only remembers what was drawn on it, for tests and for hosts that
/// replay commands into their own toolkit
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingSurface {
    pub scroll_region: Option<(f32, f32)>,
    pub commands: Vec<DrawCommand>,
    /// How many times the surface has been cleared
    pub clears: usize,
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn set_scroll_region(&mut self, width: f32, height: f32) {
        self.scroll_region = Some((width, height));
    }

    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

impl RecordingSurface {
    /// The text commands drawn so far
    pub fn texts(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text { .. }))
    }
}

/// Draws label previews at a fixed scale
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Preview {
    medium: Medium,
}

impl Preview {
    pub fn new(scale: f32) -> Preview {
        Preview {
            medium: Medium::preview(scale),
        }
    }

    pub fn medium(&self) -> &Medium {
        &self.medium
    }

    /// Every drawing operation for one full redraw, in drawing order
    pub fn commands(
        &self,
        from: &ReturnAddress,
        to: &DestinationAddress,
        params: &LayoutParameters,
    ) -> Vec<DrawCommand> {
        let mut lines = layout_label(from.lines(), to.lines(), params, &self.medium);
        if to.is_empty() {
            lines.push(placeholder_line(params, &self.medium));
        }

        let mut commands = Vec::with_capacity(lines.len() + 1);
        commands.push(DrawCommand::Rectangle {
            x1: BORDER_INSET,
            y1: BORDER_INSET,
            x2: self.medium.width - BORDER_INSET,
            y2: self.medium.height - BORDER_INSET,
            outline: colours::LIGHT_GREY,
            width: BORDER_WIDTH,
        });
        commands.extend(lines.into_iter().map(|line| {
            let colour = match line.role {
                LineRole::Placeholder => colours::LIGHT_GREY,
                _ => colours::BLACK,
            };
            DrawCommand::Text {
                text: line.text,
                x: line.x,
                y: line.y,
                font_size: line.font_size,
                weight: line.weight,
                colour,
            }
        }));
        commands
    }

    /// Clear `surface` and draw the whole preview on it
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        from: &ReturnAddress,
        to: &DestinationAddress,
        params: &LayoutParameters,
    ) {
        surface.clear();
        surface.set_scroll_region(self.medium.width, self.medium.height);
        for command in self.commands(from, to, params) {
            surface.draw(command);
        }
        log::debug!(
            "redrew preview: {} destination lines, size {}, indent {}",
            to.len(),
            params.size_multiplier,
            params.indent
        );
    }
}

/// The muted hint drawn where the destination block would start, halfway down the page
pub fn placeholder_line(params: &LayoutParameters, medium: &Medium) -> PositionedLine {
    let metrics = LabelMetrics::new(params, medium);
    PositionedLine {
        text: PLACEHOLDER.to_string(),
        x: metrics.indent,
        y: medium.height / 2.0,
        font_size: metrics.destination_font_size,
        weight: Weight::Bold,
        role: LineRole::Placeholder,
    }
}
