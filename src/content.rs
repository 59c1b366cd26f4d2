//! Content stream rendering for pages.

use crate::colour::Colour;
use crate::font::Font;
use crate::page::{SpanFont, SpanLayout};
use id_arena::Arena;
use std::io::Write;

/// Renders text spans to a PDF content stream.
///
/// Font and colour operators are only emitted when they change from one span to the
/// next, and each span is drawn as a hex string in the font's encoding.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_spans(
    spans: &[SpanLayout],
    fonts: &Arena<Font>,
) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();

    let Some(first) = spans.first() else {
        return Ok(content);
    };

    write!(&mut content, "q\n")?;

    let mut current_font: SpanFont = first.font;
    let mut current_colour: Colour = first.colour;
    write_font(&mut content, current_font)?;
    write_colour(&mut content, current_colour)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write_font(&mut content, current_font)?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            write_colour(&mut content, current_colour)?;
        }

        write!(&mut content, "BT\n")?;
        write!(&mut content, "{} {} Td\n", *span.coords.0, *span.coords.1)?;
        write!(&mut content, "<")?;
        for byte in fonts[current_font.id].encode(&span.text) {
            write!(&mut content, "{byte:02x}")?;
        }
        write!(&mut content, "> Tj\n")?;
        write!(&mut content, "ET\n")?;
    }

    write!(&mut content, "Q\n")?;
    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn write_font(content: &mut Vec<u8>, font: SpanFont) -> Result<(), std::io::Error> {
    write!(content, "/F{} {} Tf\n", font.id.index(), *font.size)
}

#[allow(clippy::write_with_newline)]
fn write_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}
