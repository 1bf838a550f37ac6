//! Auxiliary toolbox categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of toolbox content categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ToolboxCategory {
    /// Opening activity to warm the class up
    #[serde(rename = "icebreaker")]
    IceBreaker,

    /// Questions on the lesson material
    #[serde(rename = "banksoal")]
    QuestionBank,

    /// Assessment rubric
    #[serde(rename = "rubrik")]
    Rubric,

    /// Reflection prompts for learners
    #[serde(rename = "refleksi")]
    Reflection,
}

impl ToolboxCategory {
    /// Every category, in toolbar order.
    pub const ALL: [ToolboxCategory; 4] = [
        ToolboxCategory::IceBreaker,
        ToolboxCategory::QuestionBank,
        ToolboxCategory::Rubric,
        ToolboxCategory::Reflection,
    ];

    /// Stable key used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolboxCategory::IceBreaker => "icebreaker",
            ToolboxCategory::QuestionBank => "banksoal",
            ToolboxCategory::Rubric => "rubrik",
            ToolboxCategory::Reflection => "refleksi",
        }
    }

    /// Label interpolated into the toolbox prompt.
    pub fn prompt_label(&self) -> &'static str {
        match self {
            ToolboxCategory::IceBreaker => "ice breaker",
            ToolboxCategory::QuestionBank => "bank soal",
            ToolboxCategory::Rubric => "rubrik penilaian",
            ToolboxCategory::Reflection => "pertanyaan refleksi",
        }
    }

    /// Heading shown above generated content.
    ///
    /// ```rust
    /// use rpm_core::models::ToolboxCategory;
    ///
    /// assert_eq!(ToolboxCategory::IceBreaker.title(), "Ide Ice Breaker");
    /// assert_eq!(ToolboxCategory::Reflection.title(), "Pertanyaan Refleksi");
    /// ```
    pub fn title(&self) -> &'static str {
        match self {
            ToolboxCategory::IceBreaker => "Ide Ice Breaker",
            ToolboxCategory::QuestionBank => "Bank Soal Materi",
            ToolboxCategory::Rubric => "Rubrik Penilaian",
            ToolboxCategory::Reflection => "Pertanyaan Refleksi",
        }
    }
}

impl fmt::Display for ToolboxCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolboxCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "icebreaker" => Ok(ToolboxCategory::IceBreaker),
            "banksoal" | "questionbank" | "questions" => Ok(ToolboxCategory::QuestionBank),
            "rubrik" | "rubric" => Ok(ToolboxCategory::Rubric),
            "refleksi" | "reflection" => Ok(ToolboxCategory::Reflection),
            _ => Err(format!("Invalid toolbox category: {s}")),
        }
    }
}
