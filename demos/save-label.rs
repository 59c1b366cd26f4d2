use address_label::{DrawCommand, In, LabelConfig, LabelSession, Prompter, RecordingSurface};
use std::path::PathBuf;

/// Answers every dialog from the terminal: saves to a fixed file and prints messages
struct TerminalPrompter {
    save_to: PathBuf,
}

impl Prompter for TerminalPrompter {
    fn ask_save_path(&mut self) -> Option<PathBuf> {
        Some(self.save_to.clone())
    }

    fn info(&mut self, title: &str, message: &str) {
        println!("[{title}] {message}");
    }

    fn warning(&mut self, title: &str, message: &str) {
        eprintln!("[{title}] {message}");
    }

    fn error(&mut self, title: &str, message: &str) {
        eprintln!("[{title}] {message}");
    }
}

fn main() {
    env_logger::init();

    // start a session with the default return address
    let mut session = LabelSession::new(LabelConfig::default());
    let mut surface = RecordingSurface::default();

    // type an address; the preview catches up on the next idle tick
    session.set_address_text("Jane Doe\n123 Main St\nSpringfield, IL 62701");
    session.on_idle(&mut surface);

    // make the label a bit bigger and pull the address to the left
    session.set_size(1.5, &mut surface);
    session.set_indent(In(2.5), &mut surface);
    println!("size {}, indent {}", session.size_label(), session.indent_label());

    for command in surface.texts() {
        if let DrawCommand::Text { text, x, y, .. } = command {
            println!("preview: {text:?} at ({x:.1}, {y:.1})");
        }
    }

    // save it as a PDF
    let mut prompter = TerminalPrompter {
        save_to: PathBuf::from("address-label.pdf"),
    };
    session.save_pdf(&mut prompter);
}
