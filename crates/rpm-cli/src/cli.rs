//! Command handlers.
//!
//! Each handler turns parsed arguments into core calls and prints the
//! outcome. Progress goes to stderr and documents go to stdout, so
//! `rpm generate --no-color > rpm.md` captures just the plan.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::{debug, warn};
use rpm_core::{
    error::PROVIDER_FAILURE_NOTICE,
    models::{CLASS_OPTIONS, SEMESTER_OPTIONS, SUBJECT_OPTIONS},
    ConfigBuilder, ExportDocument, GeneratedDocument, GenerationState, GeneratorBuilder,
    LessonPlanRequest, PrintDocument, RpmError, Stage, ToolboxCategory, Workbench, WordDocument,
};

use crate::{
    args::{ExportArgs, ExportFormat, GenerateArgs, RequestArgs, RequestCommands, ToolboxArgs},
    renderer::TerminalRenderer,
};

pub struct Cli {
    config: ConfigBuilder,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Creates the handler set. Provider configuration is resolved lazily so
    /// commands that never call the provider work without an API key.
    pub fn new(config: ConfigBuilder, renderer: TerminalRenderer) -> Self {
        Self { config, renderer }
    }

    pub async fn generate(&self, args: GenerateArgs) -> Result<()> {
        let request = build_request(args.request)?;
        let mut workbench = self.workbench(request)?;

        let mut last_state = GenerationState::Idle;
        let result = workbench
            .generate(|state| {
                if *state != last_state {
                    report_progress(state);
                    last_state = state.clone();
                }
            })
            .await;
        let document = result.map_err(user_facing)?;
        if document.is_empty() {
            warn!("Both stages returned no text");
        }

        if let Some(path) = &args.output {
            write_markdown(&document, path)?;
        }
        if let Some(path) = &args.word {
            let export = workbench
                .export_word()
                .context("No document available for export")?;
            write_export(&export, path)?;
        }
        if let Some(path) = &args.html {
            let export = workbench
                .export_print()
                .context("No document available for export")?;
            write_export(&export, path)?;
        }

        if !args.quiet {
            self.renderer.render(document.as_markdown());
        }
        Ok(())
    }

    pub async fn toolbox(&self, args: ToolboxArgs) -> Result<()> {
        let category = ToolboxCategory::from(args.category);
        let request = build_request(args.request)?;
        let mut workbench = self.workbench(request)?;

        eprintln!("Menyiapkan {}...", category.title());
        let content = workbench
            .open_toolbox(category)
            .await
            .map_err(user_facing)?;

        if content.is_empty() {
            warn!("No toolbox content for {category}");
        }
        self.renderer.render(&content.to_string());
        workbench.close_toolbox();
        Ok(())
    }

    pub fn export(&self, args: ExportArgs) -> Result<()> {
        let markdown = std::fs::read_to_string(&args.input)
            .with_context(|| format!("Failed to read {}", args.input.display()))?;
        let document = GeneratedDocument::from_markdown(markdown);
        if document.as_markdown().trim().is_empty() {
            return Err(anyhow!("{} contains no lesson plan", args.input.display()));
        }
        let request = build_request(args.request)?;

        let path = match args.format {
            ExportFormat::Word => {
                let export = WordDocument::new(&document, &request);
                let path = destination(args.output, &export);
                write_export(&export, &path)?;
                path
            }
            ExportFormat::Html => {
                let export = PrintDocument::new(&document, &request);
                let path = destination(args.output, &export);
                write_export(&export, &path)?;
                path
            }
        };
        println!("{}", path.display());
        Ok(())
    }

    pub fn handle_request_command(&self, command: RequestCommands) -> Result<()> {
        match command {
            RequestCommands::Template => {
                let json = serde_json::to_string_pretty(&LessonPlanRequest::default())
                    .context("Failed to serialize request template")?;
                println!("{json}");
            }
            RequestCommands::Options => {
                self.renderer.render_list("Mata Pelajaran", SUBJECT_OPTIONS);
                self.renderer.render_list("Kelas/Fase", CLASS_OPTIONS);
                self.renderer.render_list("Semester", SEMESTER_OPTIONS);
                self.renderer.render_list(
                    "Toolbox",
                    ToolboxCategory::ALL
                        .iter()
                        .map(|category| format!("{category}: {}", category.title())),
                );
            }
        }
        Ok(())
    }

    fn workbench(&self, request: LessonPlanRequest) -> Result<Workbench> {
        let config = self
            .config
            .clone()
            .build()
            .context("Failed to load configuration")?;
        let generator = GeneratorBuilder::new()
            .with_config(config)
            .build()
            .context("Failed to initialize generator")?;
        debug!("Using model {}", generator.model());
        Ok(Workbench::new(generator, request))
    }
}

fn build_request(args: RequestArgs) -> Result<LessonPlanRequest> {
    LessonPlanRequest::try_from(args).context("Invalid lesson plan request")
}

/// Collapses provider failures into the generic notification; details stay
/// in the debug log.
fn user_facing(error: RpmError) -> anyhow::Error {
    if error.is_provider_failure() {
        debug!("Generation failed: {error:?}");
        anyhow!(PROVIDER_FAILURE_NOTICE)
    } else {
        anyhow::Error::new(error)
    }
}

fn report_progress(state: &GenerationState) {
    match state {
        GenerationState::RequestingPartA => {
            eprintln!("Menyusun RPM (1/2): {}...", Stage::A.description());
        }
        GenerationState::RequestingPartB => {
            eprintln!("Menyusun RPM (2/2): {}...", Stage::B.description());
        }
        GenerationState::Ready(_) => eprintln!("RPM selesai disusun."),
        GenerationState::Idle | GenerationState::Failed(_) => {}
    }
}

fn destination<E: ExportDocument>(output: Option<PathBuf>, export: &E) -> PathBuf {
    output.unwrap_or_else(|| PathBuf::from(export.file_name()))
}

fn write_export<E: ExportDocument>(export: &E, path: &Path) -> Result<()> {
    export
        .write_to(path)
        .with_context(|| format!("Failed to export {}", path.display()))?;
    eprintln!("Disimpan: {}", path.display());
    Ok(())
}

fn write_markdown(document: &GeneratedDocument, path: &Path) -> Result<()> {
    std::fs::write(path, document.as_markdown())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    eprintln!("Disimpan: {}", path.display());
    Ok(())
}
