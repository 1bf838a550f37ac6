//! Two-stage document generation for the Generator.

use log::{info, warn};

use super::Generator;
use crate::{
    config::DispatchMode,
    error::{ProviderResultExt, Result},
    models::{GeneratedDocument, LessonPlanRequest, Stage, StageOutput},
    normalize::normalize_document,
    prompts::stage_prompt,
};

impl Generator {
    /// Generates a complete lesson plan.
    ///
    /// Both stages must succeed; a failure in either aborts the whole
    /// operation and no partial document is returned. A stage that yields no
    /// text contributes an empty section.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use rpm_core::{GeneratorBuilder, LessonPlanRequest};
    /// # async {
    /// let generator = GeneratorBuilder::new().build()?;
    /// let document = generator.generate_document(&LessonPlanRequest::default()).await?;
    /// assert!(!document.is_empty());
    /// # Result::<(), rpm_core::RpmError>::Ok(())
    /// # };
    /// ```
    pub async fn generate_document(
        &self,
        request: &LessonPlanRequest,
    ) -> Result<GeneratedDocument> {
        self.generate_document_with_progress(request, |_| {}).await
    }

    /// Generates a complete lesson plan, reporting each finished stage.
    ///
    /// `on_stage` is called once per stage, always for stage A before
    /// stage B, after that stage's provider call succeeded.
    pub async fn generate_document_with_progress<F>(
        &self,
        request: &LessonPlanRequest,
        mut on_stage: F,
    ) -> Result<GeneratedDocument>
    where
        F: FnMut(Stage),
    {
        info!(
            "Generating lesson plan: {} {} ({} sessions, {} dispatch)",
            request.subject, request.class_phase, request.session_count, self.dispatch
        );

        let outputs = match self.dispatch {
            DispatchMode::Sequential => {
                let mut outputs = Vec::with_capacity(Stage::ALL.len());
                for stage in Stage::ALL {
                    outputs.push(self.run_stage(stage, request).await?);
                    on_stage(stage);
                }
                outputs
            }
            DispatchMode::Parallel => {
                let (part_a, part_b) = tokio::join!(
                    self.run_stage(Stage::A, request),
                    self.run_stage(Stage::B, request)
                );
                let part_a = part_a?;
                on_stage(Stage::A);
                let part_b = part_b?;
                on_stage(Stage::B);
                vec![part_a, part_b]
            }
        };

        let markdown = normalize_document(outputs);
        if markdown.is_empty() {
            warn!("Provider returned no text for either stage");
        }
        info!("Lesson plan ready ({} bytes)", markdown.len());
        Ok(GeneratedDocument::new(markdown))
    }

    async fn run_stage(&self, stage: Stage, request: &LessonPlanRequest) -> Result<StageOutput> {
        info!("Requesting {stage}: {}", stage.description());
        let prompt = stage_prompt(stage, request);
        let text = self.provider.generate(&prompt).await.in_stage(stage)?;
        if text.as_deref().map_or(true, |t| t.trim().is_empty()) {
            warn!("{stage} returned no text; continuing with an empty section");
        }
        Ok(StageOutput::new(stage, text))
    }
}
