use address_label::{LabelConfig, LabelSession, Prompter, SystemBrowser};
use std::path::PathBuf;

/// Printing never asks for a file name, so this only reports messages
struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn ask_save_path(&mut self) -> Option<PathBuf> {
        None
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

    // write the printable page to the system temp directory instead of the working directory
    let mut config = LabelConfig::default();
    config.print_dir(std::env::temp_dir());

    let mut session = LabelSession::new(config);
    session.set_address_text("Jane Doe\n123 Main St\nSpringfield, IL 62701");

    // opens the page in the default browser, ready for Ctrl+P
    if let Some(path) = session.print(&mut ConsolePrompter, &mut SystemBrowser) {
        println!("print file left at {}", path.display());
    }
}
