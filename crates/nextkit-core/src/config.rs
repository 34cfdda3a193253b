//! Raw answers collected from the user, before normalization.
//!
//! `Answers` is what a [`PromptProvider`](crate::prompt::PromptProvider)
//! session produces. It can also be written to and read from a file so a
//! scaffold can be replayed without prompting. The file format follows the
//! extension: `.json`, `.toml`, or YAML for anything else.
//!
//! # Examples
//!
//! ```no_run
//! use nextkit_core::config::Answers;
//! use nextkit_core::templates::LanguageVariant;
//!
//! # async fn demo() -> nextkit_core::Result<()> {
//! let answers = Answers {
//!     language: LanguageVariant::Typed,
//!     pages: vec!["home, about".to_string()],
//!     ..Default::default()
//! };
//! answers.save("nextkit.yaml").await?;
//!
//! let loaded = Answers::from_file("nextkit.yaml").await?;
//! assert_eq!(loaded.pages, answers.pages);
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::path::Path;

use crate::request::Feature;
use crate::templates::LanguageVariant;

// External imports (alphabetized)
use serde::{Deserialize, Deserializer, Serialize};
use serde_value::Value as SerdeValue;
use tokio::fs;

/// Answers to the scaffolding questionnaire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    /// Language variant of the generated sources
    #[serde(default)]
    pub language: LanguageVariant,

    /// Features picked in the feature prompt
    #[serde(default)]
    pub features: Vec<Feature>,

    /// Install dependencies once files are written
    #[serde(default)]
    pub install_dependencies: bool,

    /// Initialize a git repository once files are written
    #[serde(default)]
    pub init_git: bool,

    /// Page names, each entry may itself be comma separated
    #[serde(default, deserialize_with = "deserialize_name_list")]
    pub pages: Vec<String>,

    /// Use the essential component set instead of `components`
    #[serde(default)]
    pub all_essential_components: bool,

    /// Component names, each entry may itself be comma separated
    #[serde(default, deserialize_with = "deserialize_name_list")]
    pub components: Vec<String>,

    /// Keep the carousel component (and its packages)
    #[serde(default)]
    pub confirm_carousel_deps: bool,

    /// API route names, each entry may itself be comma separated
    #[serde(default, deserialize_with = "deserialize_name_list")]
    pub api_routes: Vec<String>,
}

enum AnswersFormat {
    Json,
    Toml,
    Yaml,
}

impl AnswersFormat {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::Json,
            Some("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }
}

impl Answers {
    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    /// Load answers from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        let answers = match AnswersFormat::for_path(path) {
            AnswersFormat::Json => serde_json::from_str(&content)?,
            AnswersFormat::Toml => toml::from_str(&content)?,
            AnswersFormat::Yaml => serde_yaml::from_str(&content)?,
        };
        log::debug!("Loaded answers from {}", path.display());
        Ok(answers)
    }

    /// Save answers to a file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        let content = match AnswersFormat::for_path(path) {
            AnswersFormat::Json => serde_json::to_string_pretty(self)?,
            AnswersFormat::Toml => toml::to_string_pretty(self)?,
            AnswersFormat::Yaml => serde_yaml::to_string(self)?,
        };
        fs::write(path, content).await?;
        Ok(())
    }
}

/// Accept either a single string or a list of strings
fn deserialize_name_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = SerdeValue::deserialize(deserializer)?;

    match value {
        SerdeValue::String(s) => Ok(vec![s]),
        SerdeValue::Unit | SerdeValue::Option(None) => Ok(Vec::new()),
        SerdeValue::Seq(seq) => {
            let mut result = Vec::new();
            for item in seq {
                if let SerdeValue::String(s) = item {
                    result.push(s);
                } else {
                    return Err(serde::de::Error::custom(
                        "Expected string or array of strings",
                    ));
                }
            }
            Ok(result)
        }
        _ => Err(serde::de::Error::custom(
            "Expected string or array of strings",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Answers {
        Answers {
            language: LanguageVariant::Typed,
            features: vec![Feature::Pages, Feature::Components, Feature::Testing],
            install_dependencies: true,
            init_git: false,
            pages: vec!["home, about".to_string()],
            all_essential_components: false,
            components: vec!["Button".to_string(), "Sidebar".to_string()],
            confirm_carousel_deps: false,
            api_routes: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_answers_roundtrip_all_formats() -> crate::Result<()> {
        let dir = tempdir()?;
        let answers = sample();

        for file in ["answers.yaml", "answers.json", "answers.toml"] {
            let path = dir.path().join(file);
            answers.save(&path).await?;
            let loaded = Answers::from_file(&path).await?;
            assert_eq!(loaded, answers, "roundtrip through {file}");
        }

        Ok(())
    }

    #[test]
    fn test_name_list_accepts_string_or_list() {
        let yaml = r#"
language: typed
features: [pages, api_routes]
pages: "home, about"
api_routes:
  - users
  - posts
"#;
        let answers: Answers = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(answers.language, LanguageVariant::Typed);
        assert_eq!(answers.pages, vec!["home, about"]);
        assert_eq!(answers.api_routes, vec!["users", "posts"]);
        assert!(answers.components.is_empty());
        assert!(answers.has_feature(Feature::ApiRoutes));
        assert!(!answers.install_dependencies);
    }

    #[test]
    fn test_name_list_rejects_numbers() {
        let result: Result<Answers, _> = serde_yaml::from_str("pages: [1, 2]");
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = Answers::from_file(dir.path().join("nope.yaml")).await;
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
