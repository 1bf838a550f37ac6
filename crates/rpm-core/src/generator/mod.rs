//! Generation orchestrator.
//!
//! The [`Generator`] turns a [`LessonPlanRequest`](crate::models::LessonPlanRequest)
//! into a complete lesson plan by issuing two provider requests and
//! assembling their text, and produces single-request toolbox content.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Prompts     │    │    Provider     │    │   Normalize     │
//! │ (stage A and B) │───▶│ (two calls, by  │───▶│ (order by stage,│
//! │                 │    │  dispatch mode) │    │  strip preamble)│
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: factory for [`Generator`] instances
//! - [`document_ops`]: two-stage document generation
//! - [`toolbox_ops`]: single-request toolbox generation
//!
//! # Usage
//!
//! ```rust,no_run
//! use rpm_core::{GeneratorBuilder, LessonPlanRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = GeneratorBuilder::new().build()?;
//! let document = generator
//!     .generate_document(&LessonPlanRequest::default())
//!     .await?;
//! println!("{document}");
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::{config::DispatchMode, provider::TextProvider};

pub mod builder;
pub mod document_ops;
pub mod toolbox_ops;


pub use builder::GeneratorBuilder;

/// Orchestrates provider calls for documents and toolbox content.
#[derive(Clone)]
pub struct Generator {
    pub(crate) provider: Arc<dyn TextProvider>,
    pub(crate) dispatch: DispatchMode,
}

impl Generator {
    /// Creates a generator over an existing provider.
    pub fn new(provider: Arc<dyn TextProvider>, dispatch: DispatchMode) -> Self {
        Self { provider, dispatch }
    }

    /// How document stages are dispatched.
    pub fn dispatch(&self) -> DispatchMode {
        self.dispatch
    }

    /// Model identifier of the underlying provider.
    pub fn model(&self) -> &str {
        self.provider.model()
    }
}
