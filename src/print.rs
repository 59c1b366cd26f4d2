//! Printing a label through the web browser.
//!
//! Rather than placing every line explicitly, the printable page describes the label with
//! CSS: the return address is absolutely positioned at the margin and the destination
//! block is pinned at the indent and centred with `top: 50%; transform: translateY(-50%)`.
//! Sizes come from the same [`LabelMetrics`] the PDF uses, in points, so both outputs
//! agree. The page is written to a file and handed to the default browser, whose print
//! dialog does the rest.

use crate::address::{DestinationAddress, ReturnAddress};
use crate::colour::colours;
use crate::error::LabelError;
use crate::layout::{LabelMetrics, Medium};
use crate::params::LayoutParameters;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Name of the file the printable page is written to
pub const PRINT_FILE_NAME: &str = "temp_label.html";

/// Opens a document in the user's web browser
pub trait Browser {
    fn open(&mut self, url: &str) -> Result<(), LabelError>;
}

/// The operating system's default browser
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&mut self, url: &str) -> Result<(), LabelError> {
        opener::open_browser(url)?;
        Ok(())
    }
}

/// Build the printable HTML page for a label
pub fn create_html_label(
    from: &ReturnAddress,
    to: &DestinationAddress,
    params: &LayoutParameters,
) -> String {
    let metrics = LabelMetrics::new(params, &Medium::html());

    let return_address = from
        .lines()
        .iter()
        .map(|line| escape_html(line))
        .collect::<Vec<_>>()
        .join("<br>");
    let destination = to
        .lines()
        .iter()
        .map(|line| escape_html(line))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Address Label</title>
    <style>
        @page {{ size: letter landscape; margin: 0; }}
        html, body {{
            margin: 0;
            padding: 0;
            width: 11in;
            height: 8.5in;
            font-family: Helvetica, Arial, sans-serif;
        }}
        body {{ position: relative; }}
        .return-address {{
            position: absolute;
            top: {margin}pt;
            left: {margin}pt;
            font-size: {return_size}pt;
            line-height: {return_advance}pt;
        }}
        .to-address {{
            position: absolute;
            top: 50%;
            left: {indent}in;
            transform: translateY(-50%);
            font-size: {to_size}pt;
            font-weight: bold;
            line-height: {to_advance}pt;
            text-align: left;
            white-space: pre-line;
        }}
        .no-print {{
            position: fixed;
            bottom: 20px;
            right: 20px;
            color: {hint_text};
            background: {hint_background};
            padding: 10px;
            border-radius: 5px;
        }}
        @media print {{
            .no-print {{ display: none; }}
        }}
    </style>
</head>
<body>
    <div class="return-address">{return_address}</div>
    <div class="to-address">{destination}</div>
    <div class="no-print">
        <p>Press Ctrl+P to print<br>Make sure paper size is set to Letter, landscape</p>
    </div>
</body>
</html>
"#,
        margin = metrics.margin,
        return_size = metrics.return_font_size,
        return_advance = metrics.return_advance,
        indent = params.indent.0,
        to_size = metrics.destination_font_size,
        to_advance = metrics.destination_advance,
        hint_text = colours::BLACK.to_css(),
        hint_background = colours::PALE_GREY.to_css(),
    )
}

/// Write the printable page into `dir` and return its path.
///
/// The file is opened, written, flushed, and closed before returning; it is deliberately
/// left on disk for the browser to read.
pub fn write_print_file<P: AsRef<Path>>(
    dir: P,
    from: &ReturnAddress,
    to: &DestinationAddress,
    params: &LayoutParameters,
) -> Result<PathBuf, LabelError> {
    if to.is_empty() {
        return Err(LabelError::EmptyInput);
    }

    let path = dir.as_ref().join(PRINT_FILE_NAME);
    let html = create_html_label(from, to, params);
    {
        let mut file = File::create(&path).map_err(|e| LabelError::write(&path, e))?;
        file.write_all(html.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| LabelError::write(&path, e))?;
    }

    // browsers need an absolute location
    let path = std::path::absolute(&path).map_err(|e| LabelError::write(&path, e))?;
    log::debug!("wrote print file {}", path.display());
    Ok(path)
}

/// A `file://` URL for an absolute path. Every byte outside the unreserved URL set is
/// percent-encoded, except the separators and a Windows drive prefix such as `C:`.
pub fn file_url(path: &Path) -> String {
    let path = path.to_string_lossy().replace('\\', "/");
    let (drive, rest) = match path.as_bytes() {
        [letter, b':', ..] if letter.is_ascii_alphabetic() => path.split_at(2),
        _ => ("", path.as_str()),
    };

    let mut url = String::from("file://");
    if !path.starts_with('/') {
        url.push('/');
    }
    url.push_str(drive);
    for byte in rest.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' => {
                url.push(byte as char)
            }
            _ => url.push_str(&format!("%{byte:02X}")),
        }
    }
    url
}

/// Write the printable page into `dir` and open it in `browser`, returning the file's path
pub fn print_label<P: AsRef<Path>, B: Browser + ?Sized>(
    dir: P,
    browser: &mut B,
    from: &ReturnAddress,
    to: &DestinationAddress,
    params: &LayoutParameters,
) -> Result<PathBuf, LabelError> {
    let path = write_print_file(dir, from, to, params)?;
    let url = file_url(&path);
    browser.open(&url)?;
    log::info!("opened {url} for printing");
    Ok(path)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
