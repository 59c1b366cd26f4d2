use crate::{
    layout::Weight,
    refs::{ObjectReferences, RefType},
};
use encoding_rs::WINDOWS_1252;
use id_arena::Id;
use pdf_writer::{Name, Pdf};

/// The standard PDF fonts a label uses. Every conforming viewer ships these, so nothing
/// is embedded and the generated files stay tiny.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    /// The PostScript name the font is referenced by
    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
        }
    }
}

/// A font registered with a [`Document`](crate::Document).
///
/// Fonts are stored "globally" within the document and referred to by their
/// [`Id`](id_arena::Id), so any page can use any font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    pub standard: StandardFont,
}

impl Font {
    pub fn new(standard: StandardFont) -> Font {
        Font { standard }
    }

    /// The sans-serif font matching a layout weight
    pub fn for_weight(weight: Weight) -> Font {
        match weight {
            Weight::Regular => Font::new(StandardFont::Helvetica),
            Weight::Bold => Font::new(StandardFont::HelveticaBold),
        }
    }

    /// Encode text with the font's WinAnsiEncoding. Characters the encoding cannot
    /// represent are replaced with `?`.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(text.len());
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            // C0 and C1 controls have no glyph in the standard fonts
            if ch.is_control() {
                bytes.push(b'?');
                continue;
            }
            let (encoded, _, unmappable) = WINDOWS_1252.encode(ch.encode_utf8(&mut buf));
            if unmappable {
                bytes.push(b'?');
            } else {
                bytes.extend_from_slice(&encoded);
            }
        }
        bytes
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_id = refs.gen(RefType::Font(id.index()));

        let mut font = writer.type1_font(font_id);
        font.base_font(Name(self.standard.base_font().as_bytes()));
        font.encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_map_to_helvetica() {
        assert_eq!(Font::for_weight(Weight::Regular).standard.base_font(), "Helvetica");
        assert_eq!(Font::for_weight(Weight::Bold).standard.base_font(), "Helvetica-Bold");
    }

    #[test]
    fn ascii_and_latin1_encode_directly() {
        let font = Font::new(StandardFont::Helvetica);
        assert_eq!(font.encode("Main St"), b"Main St");
        assert_eq!(font.encode("Zürich"), vec![b'Z', 0xfc, b'r', b'i', b'c', b'h']);
    }

    #[test]
    fn windows_1252_extras_and_fallback() {
        let font = Font::new(StandardFont::Helvetica);
        assert_eq!(font.encode("€–"), vec![0x80, 0x96]);
        assert_eq!(font.encode("東\t"), b"??");
        assert_eq!(font.encode("a\u{81}b"), b"a?b");
        assert_eq!(font.encode("Łódź"), b"?\xf3d?");
    }
}
