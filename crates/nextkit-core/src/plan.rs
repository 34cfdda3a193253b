//! Target path rules and planned artifacts.
//!
//! All paths are relative to the scaffold root:
//!
//! | kind      | file                                   | extra directory                 |
//! |-----------|----------------------------------------|---------------------------------|
//! | page      | `app/<name lowercased>/page.<ext>`     | `app/components/<Capitalized>/` |
//! | component | `app/components/<name>.<ext>`          |                                 |
//! | api route | `app/api/<name>/route.<ext>`           |                                 |
//!
//! Root, prefix, `.` and `..` parts of a name are dropped, so every path
//! stays under `app/`.

// Internal imports (std, crate)
use std::path::{Component, Path, PathBuf};

use crate::templates::{ArtifactKind, LanguageVariant};
use crate::utils::capitalize_first;

// External imports (alphabetized)
use serde::Serialize;

const APP_DIR: &str = "app";
const COMPONENTS_DIR: &str = "components";
const API_DIR: &str = "api";

/// Where a planned artifact lands on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactPaths {
    /// File written for the artifact
    pub file: PathBuf,
    /// Directories created alongside the file, even though they stay empty
    pub extra_dirs: Vec<PathBuf>,
}

/// Pure mapping from (kind, name, variant) to target paths
#[derive(Debug, Clone, Copy, Default)]
pub struct PathPlanner;

impl PathPlanner {
    pub fn new() -> Self {
        Self
    }

    pub fn plan(&self, kind: ArtifactKind, name: &str, variant: LanguageVariant) -> ArtifactPaths {
        let ext = variant.extension();
        let app = Path::new(APP_DIR);
        let segment = name_segment(name);
        match kind {
            ArtifactKind::Page => ArtifactPaths {
                file: app
                    .join(name_segment(&name.to_lowercase()))
                    .join(format!("page.{ext}")),
                extra_dirs: vec![app
                    .join(COMPONENTS_DIR)
                    .join(capitalize_first(&segment.to_string_lossy()))],
            },
            ArtifactKind::Component => {
                let mut file_name = segment.into_os_string();
                file_name.push(format!(".{ext}"));
                ArtifactPaths {
                    file: app.join(COMPONENTS_DIR).join(file_name),
                    extra_dirs: Vec::new(),
                }
            }
            ArtifactKind::ApiRoute => ArtifactPaths {
                file: app.join(API_DIR).join(segment).join(format!("route.{ext}")),
                extra_dirs: Vec::new(),
            },
        }
    }
}

/// The plain path segments of `name`. Empty when nothing usable is left.
pub fn name_segment(name: &str) -> PathBuf {
    Path::new(name)
        .components()
        .filter_map(|part| match part {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect()
}

/// Where the content of a planned artifact came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSource {
    Catalog,
    Fallback,
}

/// One artifact ready to be materialized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedArtifact {
    pub kind: ArtifactKind,
    pub name: String,
    /// File path relative to the scaffold root
    pub target_path: PathBuf,
    /// Extra directories relative to the scaffold root
    pub extra_dirs: Vec<PathBuf>,
    pub source: ContentSource,
    #[serde(skip)]
    pub content: String,
}

impl PlannedArtifact {
    pub fn new(
        kind: ArtifactKind,
        name: impl Into<String>,
        paths: ArtifactPaths,
        source: ContentSource,
        content: String,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            target_path: paths.file,
            extra_dirs: paths.extra_dirs,
            source,
            content,
        }
    }
}
