//! Directory listing HTML.
//!
//! The listing builder is a pure function over collected entries so the
//! produced HTML can be tested without sockets or a filesystem.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::fmt::Write;

/// Characters percent-encoded inside `href`/`src` attributes. Kept to
/// what breaks URLs or HTML attributes; everything else stays readable.
const HREF_ENCODE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'%')
    .add(b'&')
    .add(b'\'');

/// One row of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// File or directory name (no path).
    pub name: String,
    /// Whether the entry is a directory (following symlinks).
    pub is_dir: bool,
    /// Whether the entry itself is a symlink.
    pub is_symlink: bool,
}

/// Escape text for HTML element content.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Percent-encode a link target.
fn encode_href(target: &str) -> String {
    utf8_percent_encode(target, HREF_ENCODE).to_string()
}

/// Render a directory listing page.
///
/// `display_path` is the decoded request path shown in the title.
/// Entries are sorted case-insensitively; directories link and display
/// with a trailing `/`, symlinks display with a trailing `@`, and every
/// entry whose name contains `.wav` gets an inline audio player.
pub fn render_listing(display_path: &str, entries: &[Entry]) -> String {
    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.name.to_lowercase());

    let title = format!("Directory listing for {}", escape_html(display_path));
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    page.push_str("<meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\">\n");
    let _ = writeln!(page, "<title>{title}</title>\n</head>");
    let _ = writeln!(page, "<body>\n<h1>{title}</h1>");
    page.push_str("\n<p><a href=\"../\">Upper directory</a></p>\n<hr>\n<ul>\n");

    for entry in sorted {
        let mut display = escape_html(&entry.name);
        let mut link = encode_href(&entry.name);
        if entry.is_dir {
            display.push('/');
            link.push('/');
        }
        if entry.is_symlink {
            // A symlink displays with @ even when it links to a directory;
            // the href keeps the trailing slash so the link still works.
            display = format!("{}@", escape_html(&entry.name));
        }

        let _ = writeln!(page, "<li><a href=\"{link}\">{display}</a></li>");
        if entry.name.contains(".wav") {
            let _ = writeln!(
                page,
                "<audio controls preload=\"none\"><source src=\"{}\"></audio>",
                encode_href(&entry.name)
            );
        }
    }

    page.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    page
}
