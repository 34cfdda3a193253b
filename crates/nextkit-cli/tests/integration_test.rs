//! End-to-end integration tests for the nextkit CLI

mod test_utils;

use anyhow::{ensure, Result};
use std::fs;
use test_utils::{create_temp_dir, run_nextkit, write_answers, TYPED_ANSWERS};

fn scaffold(answers: &std::path::Path, output: &std::path::Path, extra: &[&str]) -> Result<String> {
    let answers = answers.to_string_lossy();
    let output = output.to_string_lossy();
    let mut args = vec![
        "scaffold",
        "--answers",
        answers.as_ref(),
        "--output-dir",
        output.as_ref(),
    ];
    args.extend_from_slice(extra);

    let result = run_nextkit(&args)?;
    ensure!(
        result.status.success(),
        "nextkit failed: {}",
        String::from_utf8_lossy(&result.stderr)
    );
    Ok(String::from_utf8(result.stdout)?)
}

#[test]
fn test_scaffold_from_answers_file() -> Result<()> {
    let (_guard, dir) = create_temp_dir()?;
    let answers = write_answers(&dir, "answers.yaml", TYPED_ANSWERS)?;
    let output = dir.join("my-app");

    let stdout = scaffold(&answers, &output, &[])?;
    assert!(stdout.contains("5 created, 0 already existed, 0 failed"), "{stdout}");

    let home = fs::read_to_string(output.join("app/home/page.tsx"))?;
    assert!(home.contains("<h1>Home</h1>"));
    let about = fs::read_to_string(output.join("app/about/page.tsx"))?;
    assert!(about.contains("<h1>About</h1>"));
    assert!(output.join("app/components/Home").is_dir());
    assert!(output.join("app/components/About").is_dir());

    let button = fs::read_to_string(output.join("app/components/Button.tsx"))?;
    assert!(button.contains("interface ButtonProps"));
    let sidebar = fs::read_to_string(output.join("app/components/Sidebar.tsx"))?;
    assert!(sidebar.contains("SidebarProps"));
    assert!(sidebar.contains("Sidebar Component"));
    assert!(!output.join("app/components/Carousel.tsx").exists());

    assert!(output.join("app/api/users/route.tsx").is_file());
    Ok(())
}

#[test]
fn test_second_run_creates_nothing() -> Result<()> {
    let (_guard, dir) = create_temp_dir()?;
    let answers = write_answers(&dir, "answers.yaml", TYPED_ANSWERS)?;
    let output = dir.join("app-root");

    scaffold(&answers, &output, &[])?;
    fs::write(output.join("app/components/Button.tsx"), "edited")?;

    let stdout = scaffold(&answers, &output, &[])?;
    assert!(stdout.contains("0 created, 5 already existed, 0 failed"), "{stdout}");
    assert_eq!(fs::read_to_string(output.join("app/components/Button.tsx"))?, "edited");
    Ok(())
}

#[test]
fn test_json_report_and_json_answers() -> Result<()> {
    let (_guard, dir) = create_temp_dir()?;
    let answers = write_answers(
        &dir,
        "answers.json",
        r#"{
            "language": "untyped",
            "features": ["api_routes", "pages"],
            "pages": "",
            "api_routes": ["users, posts"]
        }"#,
    )?;
    let output = dir.join("json-app");

    let stdout = scaffold(&answers, &output, &["--json"])?;
    let report: serde_json::Value = serde_json::from_str(&stdout)?;

    assert_eq!(report["created"], 2);
    let paths: Vec<_> = report["artifacts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["target_path"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(paths, vec!["app/api/users/route.js", "app/api/posts/route.js"]);
    Ok(())
}

#[test]
fn test_save_answers_roundtrip() -> Result<()> {
    let (_guard, dir) = create_temp_dir()?;
    let answers = write_answers(&dir, "answers.yaml", TYPED_ANSWERS)?;
    let saved = dir.join("saved.toml");
    let saved_str = saved.to_string_lossy().to_string();

    scaffold(&answers, &dir.join("first"), &["--save-answers", &saved_str])?;
    ensure!(saved.is_file(), "answers were not saved");

    let stdout = scaffold(&saved, &dir.join("second"), &[])?;
    assert!(stdout.contains("5 created"), "{stdout}");
    Ok(())
}

#[test]
fn test_templates_listing() -> Result<()> {
    let result = run_nextkit(&["templates", "--language", "typescript"])?;
    ensure!(result.status.success(), "templates command failed");
    let stdout = String::from_utf8(result.stdout)?;
    for name in ["Button", "Carousel", "Footer", "Header"] {
        assert!(stdout.contains(name), "{name} missing from {stdout}");
    }

    let invalid = run_nextkit(&["templates", "--language", "cobol"])?;
    assert!(!invalid.status.success());
    Ok(())
}
