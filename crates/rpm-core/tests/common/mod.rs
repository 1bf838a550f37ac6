use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rpm_core::{DispatchMode, Generator, GeneratorBuilder, ProviderError, TextProvider};

/// What the stub answers for one kind of prompt.
#[derive(Clone)]
#[allow(dead_code)]
pub enum Reply {
    /// Follow the prompt's instructions deterministically
    Obey,
    /// Return this text verbatim
    Text(String),
    /// Answer without any text
    Absent,
    /// Fail the call
    Fail,
    /// Never answer
    Hang,
}

/// Which prompt a call carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    StageA,
    StageB,
    Toolbox,
}

/// Deterministic provider that records every prompt it receives.
pub struct StubProvider {
    pub stage_a: Reply,
    pub stage_b: Reply,
    pub toolbox: Reply,
    calls: Mutex<Vec<(PromptKind, String)>>,
}

#[allow(dead_code)]
impl StubProvider {
    pub fn new(stage_a: Reply, stage_b: Reply, toolbox: Reply) -> Arc<Self> {
        Arc::new(Self {
            stage_a,
            stage_b,
            toolbox,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn obedient() -> Arc<Self> {
        Self::new(Reply::Obey, Reply::Obey, Reply::Obey)
    }

    pub fn calls(&self) -> Vec<(PromptKind, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_kinds(&self) -> Vec<PromptKind> {
        self.calls().into_iter().map(|(kind, _)| kind).collect()
    }
}

fn classify(prompt: &str) -> PromptKind {
    if prompt.contains("## D. PENGALAMAN BELAJAR") {
        PromptKind::StageA
    } else if prompt.contains("## E. ASESMEN") {
        PromptKind::StageB
    } else {
        PromptKind::Toolbox
    }
}

fn session_count(prompt: &str) -> u32 {
    prompt
        .split("Jumlah Pertemuan: ")
        .nth(1)
        .and_then(|rest| rest.lines().next())
        .and_then(|n| n.trim().parse().ok())
        .expect("prompt carries the session count")
}

fn obey(kind: PromptKind, prompt: &str) -> String {
    match kind {
        PromptKind::StageA => {
            let n = session_count(prompt);
            let mut text = String::from(
                "Tentu, berikut adalah RPM Anda:\n# RENCANA PEMBELAJARAN MENDALAM (RPM)\n\n## A. IDENTITAS MODUL\n\n## B. IDENTIFIKASI\n\n## C. DESAIN PEMBELAJARAN\n\n## D. PENGALAMAN BELAJAR\n",
            );
            for i in 1..=n {
                text.push_str(&format!(
                    "\n### PERTEMUAN KE-{i}\n**1. Kegiatan Awal**\n- *Prinsip: Bermakna*\n"
                ));
            }
            text
        }
        PromptKind::StageB => {
            let n = session_count(prompt);
            let start = prompt.find("<table").expect("signature table in prompt");
            let end = prompt.find("</table>").expect("signature table end") + "</table>".len();
            let mut text = format!(
                "Lanjutan RPM:\n## E. ASESMEN\nAsesmen formatif.\n\n## F. PENGESAHAN\n\n{}\n\n## G. LAMPIRAN\n1. **LKPD**\n",
                &prompt[start..end]
            );
            for i in 1..=n {
                text.push_str(&format!("\n#### LKPD {i}\nTugas {i}.\n"));
            }
            text.push_str("\n2. **MATERI AJAR**\n\n3. **RUBRIK ASESMEN**\n\n| Aspek | Kriteria | Skor |\n|---|---|---|\n| Isi | Lengkap | 4 |\n");
            text
        }
        PromptKind::Toolbox => "1. Tebak kata\n2. Tepuk semangat\n".to_string(),
    }
}

#[async_trait]
impl TextProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    fn model(&self) -> &str {
        "stub-model"
    }

    async fn generate(&self, prompt: &str) -> Result<Option<String>, ProviderError> {
        let kind = classify(prompt);
        self.calls.lock().unwrap().push((kind, prompt.to_string()));
        let reply = match kind {
            PromptKind::StageA => &self.stage_a,
            PromptKind::StageB => &self.stage_b,
            PromptKind::Toolbox => &self.toolbox,
        };
        match reply {
            Reply::Obey => Ok(Some(obey(kind, prompt))),
            Reply::Text(text) => Ok(Some(text.clone())),
            Reply::Absent => Ok(None),
            Reply::Fail => Err(ProviderError::Api {
                status: 429,
                message: "quota exceeded".to_string(),
            }),
            Reply::Hang => std::future::pending().await,
        }
    }
}

/// Helper function to create a generator over a stub provider
#[allow(dead_code)]
pub fn create_test_generator(provider: Arc<StubProvider>, dispatch: DispatchMode) -> Generator {
    GeneratorBuilder::new()
        .with_provider(provider)
        .with_dispatch(dispatch)
        .build()
        .expect("Failed to create generator")
}
