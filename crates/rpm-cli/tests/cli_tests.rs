use std::path::Path;

use assert_cmd::{assert::OutputAssertExt, Command};
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/models/gemini-3-pro-preview:generateContent";

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing.
///
/// The environment is isolated from the developer's own configuration.
fn rpm_cmd(temp_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rpm").expect("Failed to find rpm binary");
    cmd.arg("--no-color")
        .current_dir(temp_dir)
        .env("XDG_CONFIG_HOME", temp_dir)
        .env_remove("GEMINI_API_KEY")
        .env_remove("API_KEY")
        .env_remove("RPM_MODEL")
        .env_remove("RPM_API_BASE_URL")
        .env_remove("RPM_TIMEOUT_SECS")
        .env_remove("RPM_DISPATCH")
        .env_remove("RUST_LOG");
    cmd
}

fn candidate(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

async fn mount_stage(server: &MockServer, marker: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_string_contains(marker))
        .respond_with(response)
        .mount(server)
        .await;
}

const PART_A: &str = "Tentu, berikut adalah draft RPM:\n# RENCANA PEMBELAJARAN MENDALAM (RPM)\n\n## D. PENGALAMAN BELAJAR\n\n### PERTEMUAN KE-1\nKegiatan awal.";
const PART_B: &str = "## E. ASESMEN\nAsesmen formatif.\n\n## G. LAMPIRAN\n\n#### LKPD 1\nTugas.";

#[test]
fn test_cli_request_template_is_json() {
    let temp_dir = create_cli_test_environment();

    let output = rpm_cmd(temp_dir.path())
        .args(["request", "template"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let template: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(template["subject"], "Bahasa Indonesia");
    assert_eq!(template["class_phase"], "IV/B");
    assert_eq!(template["session_count"], 1);
}

#[test]
fn test_cli_request_options() {
    let temp_dir = create_cli_test_environment();

    rpm_cmd(temp_dir.path())
        .args(["request", "options"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Mata Pelajaran"))
        .stdout(predicate::str::contains("- Bahasa Madura"))
        .stdout(predicate::str::contains("- VI/C"))
        .stdout(predicate::str::contains("- Genap"))
        .stdout(predicate::str::contains("banksoal: Bank Soal Materi"));
}

#[test]
fn test_cli_export_word_with_default_name() {
    let temp_dir = create_cli_test_environment();
    let input = temp_dir.path().join("rpm.md");
    std::fs::write(
        &input,
        "# RPM\n\n<table border=\"0\" width=\"100%\"><tr><td>Mengetahui</td></tr></table>\n",
    )
    .unwrap();

    rpm_cmd(temp_dir.path())
        .args([
            "export",
            input.to_str().unwrap(),
            "--format",
            "word",
            "--subject",
            "IPAS",
            "--class",
            "V/C",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("RPM_IPAS_V_C.doc"));

    let bytes = std::fs::read(temp_dir.path().join("RPM_IPAS_V_C.doc")).unwrap();
    assert!(bytes.starts_with("\u{feff}".as_bytes()));
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains("urn:schemas-microsoft-com:office:word"));
    assert!(text.contains("<table border=\"0\" class=\"no-border\""));
}

#[test]
fn test_cli_export_html_to_explicit_path() {
    let temp_dir = create_cli_test_environment();
    let input = temp_dir.path().join("rpm.md");
    let output = temp_dir.path().join("cetak.html");
    std::fs::write(&input, "# RPM\n\n| Aspek | Skor |\n|---|---|\n| Isi | 4 |\n").unwrap();

    rpm_cmd(temp_dir.path())
        .args([
            "export",
            input.to_str().unwrap(),
            "--format",
            "html",
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("210mm 330mm"));
    assert!(html.contains("<table>"));
}

#[test]
fn test_cli_export_missing_input_fails() {
    let temp_dir = create_cli_test_environment();

    rpm_cmd(temp_dir.path())
        .args(["export", "absent.md", "--format", "word"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_cli_invalid_toolbox_category() {
    let temp_dir = create_cli_test_environment();

    rpm_cmd(temp_dir.path())
        .args(["toolbox", "kuis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_cli_unknown_set_key_fails() {
    let temp_dir = create_cli_test_environment();
    let input = temp_dir.path().join("rpm.md");
    std::fs::write(&input, "# RPM\n").unwrap();

    rpm_cmd(temp_dir.path())
        .args([
            "export",
            input.to_str().unwrap(),
            "--format",
            "html",
            "--set",
            "warna=biru",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid lesson plan request"));
}

#[test]
fn test_cli_generate_without_api_key_fails() {
    let temp_dir = create_cli_test_environment();

    rpm_cmd(temp_dir.path())
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GEMINI_API_KEY"));
}

#[test]
fn test_cli_invalid_config_file_fails() {
    let temp_dir = create_cli_test_environment();
    let config = temp_dir.path().join("config.json");
    std::fs::write(&config, r#"{"api_key": "k", "timeout_secs": 0}"#).unwrap();

    rpm_cmd(temp_dir.path())
        .args(["--config", config.to_str().unwrap(), "toolbox", "refleksi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_cli_generate_end_to_end() {
    let server = MockServer::start().await;
    mount_stage(
        &server,
        "## D. PENGALAMAN BELAJAR",
        ResponseTemplate::new(200).set_body_json(candidate(PART_A)),
    )
    .await;
    mount_stage(
        &server,
        "## E. ASESMEN",
        ResponseTemplate::new(200).set_body_json(candidate(PART_B)),
    )
    .await;

    let temp_dir = create_cli_test_environment();
    let base_url = server.uri();
    let dir = temp_dir.path().to_path_buf();
    let assert = tokio::task::spawn_blocking(move || {
        rpm_cmd(&dir)
            .env("GEMINI_API_KEY", "test-key")
            .env("RPM_API_BASE_URL", base_url)
            .args([
                "generate",
                "--subject",
                "Matematika",
                "--output",
                "rpm.md",
                "--word",
                "rpm.doc",
            ])
            .output()
            .unwrap()
    })
    .await
    .unwrap()
    .assert();

    assert
        .success()
        .stdout(predicate::str::starts_with(
            "# RENCANA PEMBELAJARAN MENDALAM (RPM)",
        ))
        .stdout(predicate::str::contains("Tentu, berikut").not())
        .stderr(predicate::str::contains("Menyusun RPM (1/2)"))
        .stderr(predicate::str::contains("Menyusun RPM (2/2)"));

    let markdown = std::fs::read_to_string(temp_dir.path().join("rpm.md")).unwrap();
    let learning = markdown.find("### PERTEMUAN KE-1").unwrap();
    let assessment = markdown.find("## E. ASESMEN").unwrap();
    assert!(learning < assessment);
    assert!(temp_dir.path().join("rpm.doc").exists());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_cli_generate_failure_shows_generic_message() {
    let server = MockServer::start().await;
    mount_stage(
        &server,
        "## D. PENGALAMAN BELAJAR",
        ResponseTemplate::new(503).set_body_string("overloaded"),
    )
    .await;
    mount_stage(
        &server,
        "## E. ASESMEN",
        ResponseTemplate::new(200).set_body_json(candidate(PART_B)),
    )
    .await;

    let temp_dir = create_cli_test_environment();
    let base_url = server.uri();
    let dir = temp_dir.path().to_path_buf();
    let assert = tokio::task::spawn_blocking(move || {
        rpm_cmd(&dir)
            .env("GEMINI_API_KEY", "test-key")
            .env("RPM_API_BASE_URL", base_url)
            .args(["generate", "--output", "rpm.md"])
            .output()
            .unwrap()
    })
    .await
    .unwrap()
    .assert();

    assert
        .failure()
        .stderr(predicate::str::contains(
            "Gagal menghubungi AI. Silakan coba lagi.",
        ))
        .stderr(predicate::str::contains("overloaded").not());

    assert!(!temp_dir.path().join("rpm.md").exists());
    // the second stage is never requested after the first fails
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_cli_toolbox_empty_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .expect(1)
        .mount(&server)
        .await;

    let temp_dir = create_cli_test_environment();
    let base_url = server.uri();
    let dir = temp_dir.path().to_path_buf();
    let assert = tokio::task::spawn_blocking(move || {
        rpm_cmd(&dir)
            .env("GEMINI_API_KEY", "test-key")
            .env("RPM_API_BASE_URL", base_url)
            .args(["toolbox", "icebreaker"])
            .output()
            .unwrap()
    })
    .await
    .unwrap()
    .assert();

    assert
        .success()
        .stdout(predicate::str::contains("# Ide Ice Breaker"))
        .stdout(predicate::str::contains("Gagal menghasilkan data."));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_cli_generate_empty_document_is_not_exported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .expect(2)
        .mount(&server)
        .await;

    let temp_dir = create_cli_test_environment();
    let base_url = server.uri();
    let dir = temp_dir.path().to_path_buf();
    let assert = tokio::task::spawn_blocking(move || {
        rpm_cmd(&dir)
            .env("GEMINI_API_KEY", "test-key")
            .env("RPM_API_BASE_URL", base_url)
            .args(["generate", "--word", "rpm.doc"])
            .output()
            .unwrap()
    })
    .await
    .unwrap()
    .assert();

    assert
        .failure()
        .stderr(predicate::str::contains("No document available for export"));
    assert!(!temp_dir.path().join("rpm.doc").exists());
}
