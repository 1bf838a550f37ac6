//! Session state holder tying the form, the document and the toolbox together.
//!
//! The document lifecycle and the toolbox result are independent fields:
//! toolbox operations never read or modify the document state.

use log::{debug, info};

use crate::{
    error::{Result, RpmError},
    export::{PrintDocument, WordDocument},
    generator::Generator,
    models::{FormField, GeneratedDocument, LessonPlanRequest, Stage, ToolboxCategory, ToolboxContent},
    state::{GenerationEvent, GenerationState},
};

/// One user's editing session.
pub struct Workbench {
    generator: Generator,
    request: LessonPlanRequest,
    state: GenerationState,
    toolbox: Option<ToolboxContent>,
}

impl Workbench {
    /// Starts a session with the given request and an idle document state.
    pub fn new(generator: Generator, request: LessonPlanRequest) -> Self {
        Self {
            generator,
            request,
            state: GenerationState::Idle,
            toolbox: None,
        }
    }

    pub fn request(&self) -> &LessonPlanRequest {
        &self.request
    }

    /// Updates one form field from raw input.
    pub fn set_field(&mut self, field: FormField, value: &str) {
        self.request.set(field, value);
    }

    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    /// The current document, if generation has completed successfully.
    pub fn document(&self) -> Option<&GeneratedDocument> {
        self.state.document()
    }

    /// Generates the lesson plan for a snapshot of the current request.
    ///
    /// `on_progress` observes every state the session passes through. On
    /// failure the state becomes [`GenerationState::Failed`] with the
    /// user-facing message and the error is returned; no document is kept.
    ///
    /// Fails with [`RpmError::GenerationInProgress`] without calling the
    /// provider if an earlier generation never settled, e.g. because its
    /// future was dropped. [`Workbench::reset`] clears that state.
    pub async fn generate<F>(&mut self, mut on_progress: F) -> Result<GeneratedDocument>
    where
        F: FnMut(&GenerationState),
    {
        if self.state.is_busy() {
            debug!("Generation trigger ignored while {}", self.state);
            return Err(RpmError::GenerationInProgress);
        }
        self.apply(GenerationEvent::Submitted);
        on_progress(&self.state);

        let request = self.request.clone();
        let state = &mut self.state;
        let result = self
            .generator
            .generate_document_with_progress(&request, |stage: Stage| {
                *state = std::mem::take(state).next(GenerationEvent::StageCompleted(stage));
                on_progress(state);
            })
            .await;

        match result {
            Ok(document) => {
                self.apply(GenerationEvent::Succeeded(document.clone()));
                on_progress(&self.state);
                Ok(document)
            }
            Err(e) => {
                debug!("Generation failed: {e:?}");
                self.apply(GenerationEvent::Failed(e.user_message()));
                on_progress(&self.state);
                Err(e)
            }
        }
    }

    /// Returns the document state to idle, discarding any document.
    pub fn reset(&mut self) {
        self.apply(GenerationEvent::Reset);
    }

    /// Opens a toolbox category, always generating fresh content.
    pub async fn open_toolbox(&mut self, category: ToolboxCategory) -> Result<&ToolboxContent> {
        self.toolbox = None;
        let content = self
            .generator
            .generate_toolbox_content(category, &self.request)
            .await?;
        Ok(self.toolbox.insert(content))
    }

    /// Discards the open toolbox content.
    pub fn close_toolbox(&mut self) {
        self.toolbox = None;
    }

    pub fn toolbox(&self) -> Option<&ToolboxContent> {
        self.toolbox.as_ref()
    }

    /// Word-processor export of the current document, if there is one.
    pub fn export_word(&self) -> Option<WordDocument> {
        self.document()
            .map(|document| WordDocument::new(document, &self.request))
    }

    /// Print-ready HTML export of the current document, if there is one.
    pub fn export_print(&self) -> Option<PrintDocument> {
        self.document()
            .map(|document| PrintDocument::new(document, &self.request))
    }

    fn apply(&mut self, event: GenerationEvent) {
        let previous = std::mem::take(&mut self.state);
        self.state = previous.next(event);
        info!("Generation state: {}", self.state);
    }
}
