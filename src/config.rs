use crate::address::ReturnAddress;
use crate::layout::PREVIEW_SCALE;
use crate::params::LayoutParameters;
use std::path::PathBuf;

/// Everything a [`LabelSession`](crate::LabelSession) needs to know up front. Nothing
/// here is read from or written to disk; hosts build it in code.
///
/// ```
/// use address_label::{LabelConfig, ReturnAddress};
///
/// let mut config = LabelConfig::default();
/// config
///     .return_address(ReturnAddress::new(["Jane Doe", "1 Elm St", "Boston, MA 02101"]))
///     .preview_scale(0.5);
/// assert_eq!(config.return_address.lines()[0], "Jane Doe");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LabelConfig {
    /// Printed in the top-left corner of every label
    pub return_address: ReturnAddress,
    /// Pixels per point of the on-screen preview
    pub preview_scale: f32,
    /// Where the printable page is written before it is opened in the browser
    pub print_dir: PathBuf,
    /// Slider positions when the session starts
    pub initial: LayoutParameters,
}

impl Default for LabelConfig {
    fn default() -> Self {
        LabelConfig {
            return_address: ReturnAddress::default(),
            preview_scale: PREVIEW_SCALE,
            print_dir: PathBuf::from("."),
            initial: LayoutParameters::default(),
        }
    }
}

impl LabelConfig {
    pub fn return_address(&mut self, return_address: ReturnAddress) -> &mut Self {
        self.return_address = return_address;
        self
    }

    pub fn preview_scale(&mut self, scale: f32) -> &mut Self {
        self.preview_scale = scale;
        self
    }

    pub fn print_dir<P: Into<PathBuf>>(&mut self, dir: P) -> &mut Self {
        self.print_dir = dir.into();
        self
    }

    pub fn initial(&mut self, params: LayoutParameters) -> &mut Self {
        self.initial = params;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::In;

    #[test]
    fn defaults() {
        let config = LabelConfig::default();
        assert_eq!(config.preview_scale, 0.6);
        assert_eq!(config.print_dir, PathBuf::from("."));
        assert_eq!(config.initial, LayoutParameters::new(1.0, In(3.0)));
    }

    #[test]
    fn setters_chain() {
        let mut config = LabelConfig::default();
        config
            .print_dir("/tmp/labels")
            .initial(LayoutParameters::new(2.0, In(1.0)));
        assert_eq!(config.print_dir, PathBuf::from("/tmp/labels"));
        assert_eq!(config.initial.size_multiplier, 2.0);
    }
}
