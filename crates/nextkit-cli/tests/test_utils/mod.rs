//! Test utilities for nextkit integration tests

// Internal imports (std, crate)
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

// External imports (alphabetized)
use anyhow::Context;
use tempfile::TempDir;

/// Creates a temporary directory for test outputs
pub fn create_temp_dir() -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = tempfile::tempdir()?;
    let temp_path = temp_dir.path().to_path_buf();
    Ok((temp_dir, temp_path))
}

/// Writes an answers file that never triggers npm or git
pub fn write_answers(dir: &Path, file_name: &str, content: &str) -> anyhow::Result<PathBuf> {
    let path = dir.join(file_name);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write answers file {}", path.display()))?;
    Ok(path)
}

/// Runs the compiled `nextkit` binary with the given arguments
pub fn run_nextkit(args: &[&str]) -> anyhow::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_nextkit"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .context("Failed to run nextkit binary")
}

/// Typed project with every artifact kind, including an unknown component
pub const TYPED_ANSWERS: &str = r#"
language: typed
features: [pages, components, api_routes, testing]
install_dependencies: false
init_git: false
pages: " home, About, home ,"
components:
  - Button
  - Sidebar, Carousel
confirm_carousel_deps: false
api_routes: users
"#;
