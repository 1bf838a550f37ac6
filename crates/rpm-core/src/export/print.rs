//! Print-ready HTML export (the PDF path: print the page to PDF).

use super::{export_file_name, render_html, ExportDocument};
use crate::models::{GeneratedDocument, LessonPlanRequest};

const STYLE: &str = r#"<style>
  @page { size: 210mm 330mm; margin: 10mm; }
  body { font-family: 'Times New Roman', serif; font-size: 12pt; line-height: 1.5; max-width: 190mm; margin: 0 auto; color: #111; }
  h1 { font-size: 16pt; text-align: center; text-transform: uppercase; }
  h2 { font-size: 14pt; margin-top: 20pt; color: #1e3a8a; break-after: avoid; }
  h3 { font-size: 12pt; margin-top: 15pt; break-after: avoid; }
  table { border-collapse: collapse; width: 100%; margin: 10pt 0; break-inside: avoid; }
  th, td { border: 1px solid #000; padding: 6pt; vertical-align: top; }
  table[border="0"], table[border="0"] td { border: none; }
  p { text-align: justify; }
</style>"#;

/// A lesson plan as a standalone HTML page sized for F4 paper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintDocument {
    file_name: String,
    source: String,
}

impl PrintDocument {
    pub fn new(document: &GeneratedDocument, request: &LessonPlanRequest) -> Self {
        let title = escape_text(&export_file_name(request, ""))
            .trim_end_matches('.')
            .to_string();
        let body = render_html(document.as_markdown());
        Self {
            file_name: export_file_name(request, Self::EXTENSION),
            source: format!(
                "<!DOCTYPE html>\n<html lang=\"id\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n{STYLE}\n</head>\n<body>\n{body}</body>\n</html>\n"
            ),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl ExportDocument for PrintDocument {
    const EXTENSION: &'static str = "html";
    const MIME_TYPE: &'static str = "text/html";

    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.source.as_bytes().to_vec()
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
