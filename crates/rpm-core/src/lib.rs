//! Core library for the RPM (Rencana Pembelajaran Mendalam) lesson-plan
//! generator.
//!
//! This crate turns a structured [`LessonPlanRequest`] into a complete
//! markdown lesson plan by orchestrating two requests to a hosted
//! text-generation model, and exports the result for printing or word
//! processors.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): the request value object, generated outputs and
//!   toolbox categories
//! - **Prompts** ([`prompts`]): pure prompt construction for stage A, stage B
//!   and the toolbox
//! - **Provider** ([`provider`]): the [`TextProvider`] seam and the Gemini
//!   HTTP client
//! - **Generator** ([`generator`]): sequencing of provider calls and text
//!   assembly via [`normalize`]
//! - **State** ([`state`], [`workbench`]): the generation lifecycle as an
//!   explicit state machine
//! - **Export** ([`export`]): HTML rendering and file exports
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rpm_core::{GeneratorBuilder, LessonPlanRequest, models::FormField};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = GeneratorBuilder::new().build()?;
//!
//! let mut request = LessonPlanRequest::default();
//! request.set(FormField::Subject, "Matematika");
//! request.set(FormField::SessionCount, "2");
//!
//! let document = generator.generate_document(&request).await?;
//! println!("{document}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod models;
pub mod normalize;
pub mod prompts;
pub mod provider;
pub mod state;
pub mod workbench;

// Re-export commonly used types
pub use config::{ConfigBuilder, DispatchMode, ProviderConfig};
pub use error::{ProviderError, Result, RpmError};
pub use export::{ExportDocument, PrintDocument, WordDocument};
pub use generator::{Generator, GeneratorBuilder};
pub use models::{
    FormField, GeneratedDocument, LessonPlanRequest, SessionCount, Stage, ToolboxCategory,
    ToolboxContent,
};
pub use provider::{GeminiProvider, TextProvider};
pub use state::{GenerationEvent, GenerationState};
pub use workbench::Workbench;
