//! Domain models for lesson-plan generation.
//!
//! - [`request`]: the form value object ([`LessonPlanRequest`]) and its fields
//! - [`document`]: generated outputs and the stage tags used to order them
//! - [`toolbox`]: the four auxiliary content categories

pub mod document;
pub mod request;
pub mod toolbox;


pub use document::{GeneratedDocument, Stage, StageOutput, ToolboxContent};
pub use request::{
    FormField, LessonPlanRequest, SessionCount, CLASS_OPTIONS, SEMESTER_OPTIONS, SUBJECT_OPTIONS,
};
pub use toolbox::ToolboxCategory;
