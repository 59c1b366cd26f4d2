/// A colour, expressed in the RGB or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// The colour as a CSS `#rrggbb` hex string
    pub fn to_css(&self) -> String {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        match *self {
            Colour::RGB { r, g, b } => format!("#{:02x}{:02x}{:02x}", byte(r), byte(g), byte(b)),
            Colour::Grey { g } => {
                let g = byte(g);
                format!("#{g:02x}{g:02x}{g:02x}")
            }
        }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    /// Used for the preview's page border and placeholder text
    pub const LIGHT_GREY: Colour = Colour::Grey { g: 0.827 };
    /// Background of the on-screen hint on the printable page
    pub const PALE_GREY: Colour = Colour::Grey { g: 0.941 };
}
