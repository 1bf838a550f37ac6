//! Document export: markdown to HTML, word-processor and print files.
//!
//! Exporters only consume a finished [`GeneratedDocument`]; there is no way
//! to construct one without a document, so exporting "nothing" cannot happen.
//!
//! - [`render_html`]: markdown → HTML fragment (tables enabled, literal HTML
//!   blocks such as the sign-off table preserved verbatim)
//! - [`WordDocument`]: legacy `.doc` (Office-flavoured HTML)
//! - [`PrintDocument`]: standalone F4 HTML page, printed to PDF by the user

mod print;
mod word;

use std::path::Path;

use log::info;
use pulldown_cmark::{html, Options, Parser};

pub use print::PrintDocument;
pub use word::WordDocument;

use crate::{
    error::{FsResultExt, Result},
    models::LessonPlanRequest,
};

/// Converts markdown to an HTML fragment.
///
/// ```rust
/// use rpm_core::export::render_html;
///
/// let html = render_html("# RPM\n\n| A | B |\n|---|---|\n| 1 | 2 |\n");
/// assert!(html.contains("<h1>RPM</h1>"));
/// assert!(html.contains("<table>"));
/// ```
pub fn render_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Default download name, e.g. `RPM_Bahasa Indonesia_IV_B.doc`.
///
/// Characters that are not valid in file names on common platforms
/// (including the `/` of class labels) become `_`.
pub fn export_file_name(request: &LessonPlanRequest, extension: &str) -> String {
    let stem = format!("RPM_{}_{}", request.subject, request.class_phase);
    let safe: String = stem
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{}.{extension}", safe.trim())
}

/// A file produced from a generated document.
pub trait ExportDocument {
    /// File extension without the dot.
    const EXTENSION: &'static str;

    /// MIME type announced for downloads.
    const MIME_TYPE: &'static str;

    /// Suggested file name.
    fn file_name(&self) -> &str;

    /// Exact bytes to write.
    fn to_bytes(&self) -> Vec<u8>;

    /// Writes the export to `path`.
    fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_bytes()).fs_context(path)?;
        info!("Exported {} to {}", Self::EXTENSION, path.display());
        Ok(())
    }
}
