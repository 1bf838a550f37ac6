//! Generated outputs and the stage tags used to assemble them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ToolboxCategory;

/// One of the two generation requests that make up a full document.
///
/// Ordering follows document order: stage A always precedes stage B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Title through the learning-experience sessions
    A,
    /// Assessment, sign-off and appendices
    B,
}

impl Stage {
    /// Both stages in document order.
    pub const ALL: [Stage; 2] = [Stage::A, Stage::B];

    /// Short description used in progress output.
    pub fn description(&self) -> &'static str {
        match self {
            Stage::A => "identity, design and learning experience",
            Stage::B => "assessment, sign-off and appendices",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::A => write!(f, "stage A"),
            Stage::B => write!(f, "stage B"),
        }
    }
}

/// Text returned by the provider for one stage, tagged so it can be placed
/// correctly regardless of completion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutput {
    pub stage: Stage,
    pub text: String,
}

impl StageOutput {
    /// Wraps provider output, treating absent text as empty.
    pub fn new(stage: Stage, text: Option<String>) -> Self {
        Self {
            stage,
            text: text.unwrap_or_default(),
        }
    }
}

/// A complete, normalized lesson plan in markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratedDocument(String);

impl GeneratedDocument {
    pub(crate) fn new(markdown: String) -> Self {
        Self(markdown)
    }

    /// Wraps markdown loaded from elsewhere (e.g. a saved file) for export.
    pub fn from_markdown(markdown: impl Into<String>) -> Self {
        Self(markdown.into())
    }

    pub fn as_markdown(&self) -> &str {
        &self.0
    }

    pub fn into_markdown(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for GeneratedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Markdown produced for one toolbox category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolboxContent {
    pub category: ToolboxCategory,
    pub markdown: String,
}

impl ToolboxContent {
    /// Whether the provider produced nothing for this category.
    pub fn is_empty(&self) -> bool {
        self.markdown.is_empty()
    }
}

impl fmt::Display for ToolboxContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.category.title())?;
        writeln!(f)?;
        if self.is_empty() {
            write!(f, "Gagal menghasilkan data.")
        } else {
            write!(f, "{}", self.markdown)
        }
    }
}
