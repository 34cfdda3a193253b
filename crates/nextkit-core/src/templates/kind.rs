//! Language variants and artifact kinds known to the scaffolder.
//!
//! # Examples
//!
//! ```
//! use nextkit_core::templates::{ArtifactKind, LanguageVariant};
//! use std::str::FromStr;
//!
//! let variant = LanguageVariant::from_str("TypeScript").unwrap();
//! assert_eq!(variant, LanguageVariant::Typed);
//! assert_eq!(variant.extension(), "tsx");
//!
//! assert_eq!(ArtifactKind::ApiRoute.to_string(), "api_route");
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::str::FromStr;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};

/// Source language flavour of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageVariant {
    /// TypeScript (`.tsx` files)
    Typed,
    /// JavaScript (`.js` files)
    #[default]
    Untyped,
}

impl FromStr for LanguageVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "typed" | "typescript" | "ts" | "tsx" => Ok(Self::Typed),
            "untyped" | "javascript" | "js" => Ok(Self::Untyped),
            _ => Err(format!("Unknown language variant: {}", s)),
        }
    }
}

impl LanguageVariant {
    /// Returns the variant identifier as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Typed => "typed",
            Self::Untyped => "untyped",
        }
    }

    /// Human readable label used in prompts
    pub fn label(&self) -> &'static str {
        match self {
            Self::Typed => "TypeScript",
            Self::Untyped => "JavaScript",
        }
    }

    /// File extension for every generated source file
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Typed => "tsx",
            Self::Untyped => "js",
        }
    }

    /// Returns an iterator over all language variants, in prompt order
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::Untyped, Self::Typed].into_iter()
    }
}

impl fmt::Display for LanguageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of artifact a template produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Page,
    Component,
    ApiRoute,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Component => "component",
            Self::ApiRoute => "api_route",
        }
    }

    /// All kinds in materialization order
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::Page, Self::Component, Self::ApiRoute].into_iter()
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
