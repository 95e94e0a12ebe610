//! Runs the `graphic-designer-tool` binary and checks how it exits on bad startup input.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_tool(work_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_graphic-designer-tool"))
        .args(args)
        .current_dir(work_dir)
        .env_remove("OPENAI_API_KEY")
        .env_remove("OPENAI_BASE_URL")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch graphic-designer-tool")
}

fn write_params(dir: &Path, content: &str) -> String {
    let path = dir.join("params.yml");
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_missing_config_file_exits_with_code_1() {
    let work_dir = TempDir::new().unwrap();

    let output = run_tool(work_dir.path(), &["--config", "does/not/exist.yml"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"), "stderr: {}", stderr);
    assert!(stderr.contains("--config"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_dimension_is_reported_before_api_key() {
    let work_dir = TempDir::new().unwrap();
    let config = write_params(
        work_dir.path(),
        r#"
n_image: 1
image_dim: "800x600"
image_model: "invalid_model"
image_quality: "low"
"#,
    );

    let output = run_tool(work_dir.path(), &["--config", &config]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Dimension must be '1024x1024', '1024x1792' or '1792x1024'"),
        "stderr: {}",
        stderr
    );
    assert!(!stderr.contains("OPENAI_API_KEY"), "stderr: {}", stderr);
}

#[test]
fn test_valid_params_without_api_key_exits_with_code_1() {
    let work_dir = TempDir::new().unwrap();
    let config = write_params(
        work_dir.path(),
        r#"
n_image: 1
image_dim: "1024x1024"
image_model: "dall-e-3"
image_quality: "standard"
"#,
    );

    let output = run_tool(work_dir.path(), &["--config", &config]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Missing required configuration: OPENAI_API_KEY"),
        "stderr: {}",
        stderr
    );
}
