//! The state behind the label maker's window.
//!
//! A [`LabelSession`] owns everything the user can change (the typed address and the two
//! slider positions) and turns user actions into renders and exports. The hosting UI
//! stays in charge of the event loop: it forwards input, calls [`LabelSession::on_idle`]
//! whenever the loop goes idle, and implements [`Prompter`] for dialogs and message boxes.
//!
//! Nothing here returns an error. Every failure is logged and shown to the user through
//! the prompter, and the session carries on.

use crate::address::DestinationAddress;
use crate::config::LabelConfig;
use crate::error::LabelError;
use crate::export::{self, pdf_available};
use crate::params::{clamp_to, LayoutParameters, INDENT_RANGE, SIZE_RANGE};
use crate::preview::{Preview, Surface};
use crate::print::{print_label, Browser};
use crate::units::In;
use std::path::PathBuf;

/// Shown after the printable page has been opened
pub const PRINT_INSTRUCTIONS: &str = "Label opened in browser. Use Ctrl+P to print.\n\
     Make sure to select 'More settings' and choose appropriate paper size.";

/// Dialogs and message boxes, provided by the hosting UI
pub trait Prompter {
    /// Ask where to save a PDF. `None` means the user cancelled.
    fn ask_save_path(&mut self) -> Option<PathBuf>;
    fn info(&mut self, title: &str, message: &str);
    fn warning(&mut self, title: &str, message: &str);
    fn error(&mut self, title: &str, message: &str);
}

/// One label-maker window: the typed address, the size and indent sliders, and the
/// preview they drive
pub struct LabelSession {
    config: LabelConfig,
    preview: Preview,
    address_text: String,
    size: f32,
    indent: f32,
    redraw_pending: bool,
}

impl LabelSession {
    pub fn new(config: LabelConfig) -> LabelSession {
        let preview = Preview::new(config.preview_scale);
        let initial =
            LayoutParameters::clamped(config.initial.size_multiplier, config.initial.indent);
        LabelSession {
            config,
            preview,
            address_text: String::new(),
            size: initial.size_multiplier,
            indent: initial.indent.0,
            // the first idle tick draws the initial preview
            redraw_pending: true,
        }
    }

    pub fn config(&self) -> &LabelConfig {
        &self.config
    }

    pub fn address_text(&self) -> &str {
        &self.address_text
    }

    /// Replace the typed address. The preview is redrawn on the next idle tick, so a burst
    /// of keystrokes causes a single redraw.
    pub fn set_address_text<S: Into<String>>(&mut self, text: S) {
        self.address_text = text.into();
        self.redraw_pending = true;
    }

    pub fn redraw_pending(&self) -> bool {
        self.redraw_pending
    }

    /// Perform the pending redraw, if any. Returns whether the surface was redrawn.
    pub fn on_idle<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if !self.redraw_pending {
            return false;
        }
        self.redraw(surface);
        true
    }

    /// Move the size slider and redraw straight away
    pub fn set_size<S: Surface + ?Sized>(&mut self, size: f32, surface: &mut S) {
        self.size = clamp_to(size, &SIZE_RANGE);
        self.redraw(surface);
    }

    /// Move the indent slider and redraw straight away
    pub fn set_indent<S: Surface + ?Sized>(&mut self, indent: In, surface: &mut S) {
        self.indent = clamp_to(indent.0, &INDENT_RANGE);
        self.redraw(surface);
    }

    /// A snapshot of the current slider positions
    pub fn parameters(&self) -> LayoutParameters {
        LayoutParameters::new(self.size, In(self.indent))
    }

    pub fn destination(&self) -> DestinationAddress {
        DestinationAddress::parse(&self.address_text)
    }

    pub fn size_label(&self) -> String {
        self.parameters().size_label()
    }

    pub fn indent_label(&self) -> String {
        self.parameters().indent_label()
    }

    /// Redraw the whole preview now
    pub fn redraw<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.preview.render(
            surface,
            &self.config.return_address,
            &self.destination(),
            &self.parameters(),
        );
        self.redraw_pending = false;
    }

    /// Empty the address and redraw
    pub fn clear<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.address_text.clear();
        self.redraw(surface);
    }

    /// Ask for a file name and save the label there as a PDF. Returns the saved path.
    pub fn save_pdf<P: Prompter + ?Sized>(&mut self, prompter: &mut P) -> Option<PathBuf> {
        if !pdf_available() {
            report(prompter, "Failed to save PDF", &export::pdf_unavailable());
            return None;
        }

        let to = self.destination();
        if to.is_empty() {
            report(prompter, "Failed to save PDF", &LabelError::EmptyInput);
            return None;
        }

        let Some(path) = prompter.ask_save_path() else {
            log::debug!("save cancelled");
            return None;
        };
        let path = with_pdf_extension(path);

        match export::save_pdf(&path, &self.config.return_address, &to, &self.parameters()) {
            Ok(()) => {
                prompter.info("Success", &format!("Label saved as {}", path.display()));
                Some(path)
            }
            Err(e) => {
                report(prompter, "Failed to save PDF", &e);
                None
            }
        }
    }

    /// Write the printable page and open it in `browser`. Returns the page's path.
    pub fn print<P, B>(&mut self, prompter: &mut P, browser: &mut B) -> Option<PathBuf>
    where
        P: Prompter + ?Sized,
        B: Browser + ?Sized,
    {
        let result = print_label(
            &self.config.print_dir,
            browser,
            &self.config.return_address,
            &self.destination(),
            &self.parameters(),
        );
        match result {
            Ok(path) => {
                prompter.info("Print", PRINT_INSTRUCTIONS);
                Some(path)
            }
            Err(e) => {
                report(prompter, "Failed to create print file", &e);
                None
            }
        }
    }
}

/// Save dialogs may hand back a bare name; labels always get a `.pdf` extension
fn with_pdf_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension("pdf")
    }
}

fn report<P: Prompter + ?Sized>(prompter: &mut P, context: &str, err: &LabelError) {
    if err.is_warning() {
        log::warn!("{context}: {err}");
        prompter.warning("Warning", &err.to_string());
    } else {
        log::error!("{context}: {err}");
        prompter.error("Error", &format!("{context}: {err}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::{DrawCommand, RecordingSurface, PLACEHOLDER};

    #[derive(Default)]
    struct ScriptedPrompter {
        save_path: Option<PathBuf>,
        asked: usize,
        messages: Vec<(&'static str, String)>,
    }

    impl Prompter for ScriptedPrompter {
        fn ask_save_path(&mut self) -> Option<PathBuf> {
            self.asked += 1;
            self.save_path.clone()
        }

        fn info(&mut self, _title: &str, message: &str) {
            self.messages.push(("info", message.to_string()));
        }

        fn warning(&mut self, _title: &str, message: &str) {
            self.messages.push(("warning", message.to_string()));
        }

        fn error(&mut self, _title: &str, message: &str) {
            self.messages.push(("error", message.to_string()));
        }
    }

    fn has_placeholder(surface: &RecordingSurface) -> bool {
        surface
            .texts()
            .any(|c| matches!(c, DrawCommand::Text { text, .. } if text == PLACEHOLDER))
    }

    #[test]
    fn typing_is_coalesced_until_idle() {
        let mut session = LabelSession::new(LabelConfig::default());
        let mut surface = RecordingSurface::default();
        assert!(session.on_idle(&mut surface));
        assert!(!session.on_idle(&mut surface));

        for text in ["1", "12", "123", "123 Main St"] {
            session.set_address_text(text);
        }
        assert_eq!(surface.clears, 1);
        assert!(session.on_idle(&mut surface));
        assert_eq!(surface.clears, 2);
        assert!(!has_placeholder(&surface));
    }

    #[test]
    fn sliders_clamp_and_redraw_immediately() {
        let mut session = LabelSession::new(LabelConfig::default());
        let mut surface = RecordingSurface::default();

        session.set_size(5.0, &mut surface);
        session.set_indent(In(0.1), &mut surface);
        assert_eq!(surface.clears, 2);
        assert_eq!(session.size_label(), "3.0x");
        assert_eq!(session.indent_label(), "0.5\"");
    }

    #[test]
    fn clear_empties_text_and_shows_placeholder() {
        let mut session = LabelSession::new(LabelConfig::default());
        let mut surface = RecordingSurface::default();
        session.set_address_text("Somewhere");
        session.on_idle(&mut surface);
        session.clear(&mut surface);

        assert_eq!(session.address_text(), "");
        assert!(has_placeholder(&surface));
    }

    #[test]
    fn saving_without_destination_only_warns() {
        let mut session = LabelSession::new(LabelConfig::default());
        let mut prompter = ScriptedPrompter {
            save_path: Some(std::env::temp_dir().join("never-written.pdf")),
            ..Default::default()
        };
        session.set_address_text("\n   \n");

        assert_eq!(session.save_pdf(&mut prompter), None);
        assert_eq!(prompter.asked, 0);
        if pdf_available() {
            assert_eq!(prompter.messages.len(), 1);
            assert_eq!(prompter.messages[0].0, "warning");
        }
    }

    #[test]
    fn cancelled_dialog_does_nothing() {
        let mut session = LabelSession::new(LabelConfig::default());
        let mut prompter = ScriptedPrompter::default();
        session.set_address_text("Somewhere");

        assert_eq!(session.save_pdf(&mut prompter), None);
        if pdf_available() {
            assert_eq!(prompter.asked, 1);
            assert!(prompter.messages.is_empty());
        }
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn saving_reports_the_path() {
        let dir = std::env::temp_dir()
            .join(format!("address-label-session-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let mut session = LabelSession::new(LabelConfig::default());
        let mut prompter = ScriptedPrompter {
            save_path: Some(dir.join("label")),
            ..Default::default()
        };
        session.set_address_text("123 Main St\nSpringfield, IL 62701");

        let saved = session.save_pdf(&mut prompter).unwrap();
        assert_eq!(saved, dir.join("label.pdf"));
        assert!(saved.exists());
        assert_eq!(prompter.messages[0].0, "info");
        assert!(prompter.messages[0].1.contains("label.pdf"));
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn save_failures_become_error_messages() {
        let mut session = LabelSession::new(LabelConfig::default());
        let mut prompter = ScriptedPrompter {
            save_path: Some(
                std::env::temp_dir()
                    .join("address-label-nowhere")
                    .join("x")
                    .join("label.pdf"),
            ),
            ..Default::default()
        };
        session.set_address_text("Somewhere");

        assert_eq!(session.save_pdf(&mut prompter), None);
        assert_eq!(prompter.messages[0].0, "error");
        assert!(prompter.messages[0].1.starts_with("Failed to save PDF"));
    }

    #[cfg(not(feature = "pdf"))]
    #[test]
    fn missing_pdf_support_is_an_error_message() {
        let mut session = LabelSession::new(LabelConfig::default());
        let mut prompter = ScriptedPrompter::default();
        session.set_address_text("Somewhere");

        assert_eq!(session.save_pdf(&mut prompter), None);
        assert_eq!(prompter.asked, 0);
        assert_eq!(prompter.messages[0].0, "error");
        assert!(prompter.messages[0].1.contains("pdf"));
    }

    #[test]
    fn print_failures_never_escape() {
        struct BrokenBrowser;
        impl Browser for BrokenBrowser {
            fn open(&mut self, _url: &str) -> Result<(), LabelError> {
                Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no browser").into())
            }
        }

        let dir = std::env::temp_dir().join(format!("address-label-print-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let mut config = LabelConfig::default();
        config.print_dir(&dir);
        let mut session = LabelSession::new(config);
        let mut prompter = ScriptedPrompter::default();

        assert_eq!(session.print(&mut prompter, &mut BrokenBrowser), None);
        assert_eq!(prompter.messages[0].0, "warning");

        session.set_address_text("Somewhere");
        assert_eq!(session.print(&mut prompter, &mut BrokenBrowser), None);
        assert_eq!(prompter.messages[1].0, "error");
        assert!(prompter.messages[1].1.contains("no browser"));
    }

    #[test]
    fn bare_names_get_pdf_extension() {
        assert_eq!(with_pdf_extension(PathBuf::from("a")), PathBuf::from("a.pdf"));
        assert_eq!(with_pdf_extension(PathBuf::from("a.PDF")), PathBuf::from("a.PDF"));
    }
}
