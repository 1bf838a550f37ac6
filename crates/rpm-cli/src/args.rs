//! Command-line argument definitions using clap's derive API.
//!
//! Argument structs stay in the CLI crate and convert into core types
//! (`LessonPlanRequest`, `ToolboxCategory`) explicitly, so `rpm-core` carries
//! no clap attributes.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use rpm_core::{
    error::FsResultExt, models::FormField, LessonPlanRequest, RpmError, ToolboxCategory,
};

/// Lesson-plan (RPM) generator
///
/// Drafts a complete Rencana Pembelajaran Mendalam from a handful of form
/// fields by asking a hosted text-generation model, and exports the result
/// for word processors or printing.
#[derive(Parser)]
#[command(version, about, name = "rpm")]
pub struct Args {
    /// Path to a JSON config file. Defaults to $XDG_CONFIG_HOME/rpm/config.json
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Model identifier, overriding config and environment
    #[arg(long, global = true, value_name = "ID")]
    pub model: Option<String>,

    /// Send both generation requests at once instead of one after the other
    #[arg(long, global = true)]
    pub parallel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a complete lesson plan
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Generate supporting material for one toolbox category
    #[command(alias = "t")]
    Toolbox(ToolboxArgs),
    /// Export an existing markdown lesson plan
    Export(ExportArgs),
    /// Inspect request defaults and form options
    Request {
        #[command(subcommand)]
        command: RequestCommands,
    },
}

/// Request inspection commands
#[derive(Subcommand)]
pub enum RequestCommands {
    /// Print the default request as JSON, ready to edit and pass via --request
    Template,
    /// List the subject, class and semester options of the form
    Options,
}

/// Form fields shared by every command that needs a request.
///
/// Values are layered: defaults, then the `--request` file, then the
/// dedicated flags, then `--set` assignments in order.
#[derive(ClapArgs, Debug, Default)]
pub struct RequestArgs {
    /// JSON file with request fields; missing fields keep their defaults
    #[arg(long, value_name = "FILE")]
    pub request: Option<PathBuf>,
    /// School name
    #[arg(long)]
    pub school: Option<String>,
    /// Principal name
    #[arg(long)]
    pub principal: Option<String>,
    /// Principal identification number (NIP)
    #[arg(long)]
    pub principal_id: Option<String>,
    /// Teacher name
    #[arg(long)]
    pub teacher: Option<String>,
    /// Teacher identification number (NIP)
    #[arg(long)]
    pub teacher_id: Option<String>,
    /// Place shown in the sign-off block
    #[arg(long)]
    pub place: Option<String>,
    /// Date shown in the sign-off block, e.g. "14 Juli 2025"
    #[arg(long)]
    pub date: Option<String>,
    /// Subject (see `rpm request options`)
    #[arg(long)]
    pub subject: Option<String>,
    /// Class/phase label, e.g. IV/B
    #[arg(long = "class", value_name = "CLASS")]
    pub class_phase: Option<String>,
    /// Semester (Ganjil or Genap)
    #[arg(long)]
    pub semester: Option<String>,
    /// Academic year, e.g. 2024/2025
    #[arg(long = "year", value_name = "YEAR")]
    pub academic_year: Option<String>,
    /// Time allocation per session
    #[arg(long)]
    pub time_allocation: Option<String>,
    /// Number of sessions; invalid or zero values become 1
    #[arg(long = "sessions", value_name = "N")]
    pub session_count: Option<String>,
    /// Learning outcome (CP)
    #[arg(long = "outcome", value_name = "TEXT")]
    pub learning_outcome: Option<String>,
    /// Learning objective (TP)
    #[arg(long = "objective", value_name = "TEXT")]
    pub learning_objective: Option<String>,
    /// Set any field by name, e.g. --set mapel=IPAS (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub assignments: Vec<String>,
}

impl TryFrom<RequestArgs> for LessonPlanRequest {
    type Error = RpmError;

    fn try_from(val: RequestArgs) -> Result<Self, Self::Error> {
        let mut request = match &val.request {
            Some(path) => {
                let json = std::fs::read_to_string(path).fs_context(path)?;
                LessonPlanRequest::from_json(&json)?
            }
            None => LessonPlanRequest::default(),
        };

        let flags = [
            (FormField::School, val.school),
            (FormField::Principal, val.principal),
            (FormField::PrincipalId, val.principal_id),
            (FormField::Teacher, val.teacher),
            (FormField::TeacherId, val.teacher_id),
            (FormField::Place, val.place),
            (FormField::Date, val.date),
            (FormField::Subject, val.subject),
            (FormField::ClassPhase, val.class_phase),
            (FormField::Semester, val.semester),
            (FormField::AcademicYear, val.academic_year),
            (FormField::TimeAllocation, val.time_allocation),
            (FormField::SessionCount, val.session_count),
            (FormField::LearningOutcome, val.learning_outcome),
            (FormField::LearningObjective, val.learning_objective),
        ];
        for (field, value) in flags {
            if let Some(value) = value {
                request.set(field, &value);
            }
        }

        for assignment in &val.assignments {
            request.apply_assignment(assignment)?;
        }
        Ok(request)
    }
}

/// Generate a complete lesson plan
///
/// Sends two requests (identity through learning experience, then assessment
/// through appendices), joins and cleans the result and renders it. Files
/// are only written when asked for.
#[derive(ClapArgs)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub request: RequestArgs,
    /// Save the markdown document to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Export a word-processor document (.doc) to this file
    #[arg(long, value_name = "FILE")]
    pub word: Option<PathBuf>,
    /// Export a print-ready HTML page to this file
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,
    /// Do not print the document
    #[arg(short, long)]
    pub quiet: bool,
}

/// Toolbox categories as accepted on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CategoryArg {
    /// Ice-breaker ideas
    #[value(alias = "ice-breaker")]
    Icebreaker,
    /// Question bank
    #[value(alias = "questions")]
    Banksoal,
    /// Assessment rubric
    #[value(alias = "rubric")]
    Rubrik,
    /// Reflection questions
    #[value(alias = "reflection")]
    Refleksi,
}

impl From<CategoryArg> for ToolboxCategory {
    fn from(val: CategoryArg) -> Self {
        match val {
            CategoryArg::Icebreaker => ToolboxCategory::IceBreaker,
            CategoryArg::Banksoal => ToolboxCategory::QuestionBank,
            CategoryArg::Rubrik => ToolboxCategory::Rubric,
            CategoryArg::Refleksi => ToolboxCategory::Reflection,
        }
    }
}

/// Generate supporting material for one toolbox category
///
/// Every invocation asks for fresh content; nothing is cached.
#[derive(ClapArgs)]
pub struct ToolboxArgs {
    #[arg(help = "Toolbox category")]
    pub category: CategoryArg,
    #[command(flatten)]
    pub request: RequestArgs,
}

/// Export file formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Word-processor document (.doc)
    Word,
    /// Print-ready HTML page, print it to PDF from a browser
    Html,
}

/// Export an existing markdown lesson plan
///
/// The request fields only affect the default file name.
#[derive(ClapArgs)]
pub struct ExportArgs {
    /// Markdown file previously produced by `rpm generate --output`
    #[arg(value_name = "MARKDOWN_FILE")]
    pub input: PathBuf,
    /// Export format
    #[arg(short, long, value_enum)]
    pub format: ExportFormat,
    /// Destination file. Defaults to RPM_<subject>_<class>.<ext>
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
    #[command(flatten)]
    pub request: RequestArgs,
}
