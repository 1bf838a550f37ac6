//! Assembly and cleanup of provider text.

use crate::models::StageOutput;

/// Conversational openers the provider tends to emit despite instructions.
/// Longer openers come first so the match reported in logs is the precise one.
pub const PREAMBLE_OPENERS: &[&str] = &[
    "berikut adalah",
    "berikut ini",
    "tentu saja",
    "tentu",
    "lanjutan",
];

/// Joins stage outputs in document order with a blank line between them.
///
/// Outputs are ordered by their stage tag, not by the order they are given,
/// so concurrently dispatched stages land in the right place.
pub fn assemble(mut outputs: Vec<StageOutput>) -> String {
    outputs.sort_by_key(|output| output.stage);
    outputs
        .iter()
        .map(|output| output.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Removes leading conversational preamble lines and surrounding whitespace.
///
/// A line is preamble when it starts, case-insensitively, with one of
/// [`PREAMBLE_OPENERS`] and is followed by more text. Applying this twice
/// gives the same result as applying it once.
///
/// ```rust
/// use rpm_core::normalize::strip_preamble;
///
/// let text = "Tentu, berikut draft RPM Anda:\n# RPM\nIsi";
/// assert_eq!(strip_preamble(text), "# RPM\nIsi");
/// assert_eq!(strip_preamble("# RPM\nIsi"), "# RPM\nIsi");
/// ```
pub fn strip_preamble(text: &str) -> String {
    let mut rest = text.trim_start();
    while let Some((first_line, remainder)) = rest.split_once('\n') {
        if !is_preamble_line(first_line) {
            break;
        }
        log::debug!("Stripping preamble line: {}", first_line.trim());
        rest = remainder.trim_start();
    }
    rest.trim_end().to_string()
}

/// Assembles and normalizes a full document from its stage outputs.
///
/// Each stage is stripped of its own opener before joining, so a
/// continuation remark at the start of stage B does not end up mid-document.
pub fn normalize_document(outputs: Vec<StageOutput>) -> String {
    let cleaned = outputs
        .into_iter()
        .map(|output| StageOutput {
            text: strip_preamble(&output.text),
            ..output
        })
        .filter(|output| !output.text.is_empty())
        .collect();
    strip_preamble(&assemble(cleaned))
}

fn is_preamble_line(line: &str) -> bool {
    let lowered = line.trim_start().to_lowercase();
    PREAMBLE_OPENERS
        .iter()
        .any(|opener| lowered.starts_with(opener))
}
