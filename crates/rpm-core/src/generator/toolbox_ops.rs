//! Toolbox generation for the Generator.

use log::{info, warn};

use super::Generator;
use crate::{
    error::{Result, RpmError},
    models::{LessonPlanRequest, ToolboxCategory, ToolboxContent},
    prompts::toolbox_prompt,
};

impl Generator {
    /// Generates auxiliary content for one toolbox category.
    ///
    /// Issues exactly one provider call; nothing is cached, so every call
    /// produces fresh content. Absent text yields empty content rather than
    /// an error.
    pub async fn generate_toolbox_content(
        &self,
        category: ToolboxCategory,
        request: &LessonPlanRequest,
    ) -> Result<ToolboxContent> {
        info!("Requesting toolbox content: {}", category.title());
        let prompt = toolbox_prompt(category, request);
        let text = self
            .provider
            .generate(&prompt)
            .await
            .map_err(|source| RpmError::Toolbox { source })?;

        let markdown = text.map(|t| t.trim().to_string()).unwrap_or_default();
        if markdown.is_empty() {
            warn!("Toolbox {category} returned no text");
        }
        Ok(ToolboxContent { category, markdown })
    }
}
