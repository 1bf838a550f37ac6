//! Legacy word-processor export.

use super::{export_file_name, render_html, ExportDocument};
use crate::models::{GeneratedDocument, LessonPlanRequest};

const HEADER: &str = r#"<html xmlns:o='urn:schemas-microsoft-com:office:office' xmlns:w='urn:schemas-microsoft-com:office:word' xmlns='http://www.w3.org/TR/REC-html40'>
<head><meta charset='utf-8'>
<style>
  @page { size: 21.0cm 33.0cm; margin: 2.5cm 2.0cm 2.5cm 2.0cm; }
  body { font-family: 'Times New Roman', serif; font-size: 12pt; line-height: 1.5; }
  h1 { font-size: 16pt; font-weight: bold; text-align: center; text-transform: uppercase; margin-bottom: 20pt; }
  h2 { font-size: 14pt; font-weight: bold; margin-top: 20pt; margin-bottom: 10pt; color: #1e3a8a; }
  h3 { font-size: 12pt; font-weight: bold; margin-top: 15pt; }
  table { border-collapse: collapse; width: 100%; margin: 10pt 0; }
  table, th, td { border: 1px solid black; }
  table.no-border, table.no-border td { border: none !important; }
  th, td { padding: 8pt; vertical-align: top; }
  p { margin-bottom: 10pt; text-align: justify; }
  ul { margin-bottom: 10pt; }
</style>
</head><body>
"#;

const FOOTER: &str = "</body></html>";

/// Marker of the borderless table variant used for the sign-off block.
const BORDERLESS_TABLE: &str = "<table border=\"0\"";

/// A lesson plan wrapped as a `.doc` file word processors open as HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDocument {
    file_name: String,
    source: String,
}

impl WordDocument {
    pub fn new(document: &GeneratedDocument, request: &LessonPlanRequest) -> Self {
        let body = render_html(document.as_markdown()).replace(
            BORDERLESS_TABLE,
            "<table border=\"0\" class=\"no-border\"",
        );
        Self {
            file_name: export_file_name(request, Self::EXTENSION),
            source: format!("{HEADER}{body}{FOOTER}"),
        }
    }

    /// The HTML source without the byte-order mark.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl ExportDocument for WordDocument {
    const EXTENSION: &'static str = "doc";
    const MIME_TYPE: &'static str = "application/msword";

    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.source.len() + 3);
        bytes.extend_from_slice("\u{feff}".as_bytes());
        bytes.extend_from_slice(self.source.as_bytes());
        bytes
    }
}
