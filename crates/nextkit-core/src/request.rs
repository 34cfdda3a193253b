//! Validated generation request and the feature set it carries.

// Internal imports (std, crate)
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::templates::{catalog, ArtifactKind, LanguageVariant};

// External imports (alphabetized)
use serde::{Deserialize, Serialize};

/// Optional features offered by the feature prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Pages,
    Components,
    ApiRoutes,
    CssModules,
    Testing,
    I18n,
}

impl Feature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pages => "pages",
            Self::Components => "components",
            Self::ApiRoutes => "api_routes",
            Self::CssModules => "css_modules",
            Self::Testing => "testing",
            Self::I18n => "i18n",
        }
    }

    /// Label shown in the feature prompt
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pages => "Pages",
            Self::Components => "Components",
            Self::ApiRoutes => "API Routes",
            Self::CssModules => "CSS Modules",
            Self::Testing => "Testing",
            Self::I18n => "Internationalization",
        }
    }

    /// All features in prompt order
    pub fn all() -> impl Iterator<Item = Self> {
        use Feature::*;
        [Pages, Components, ApiRoutes, CssModules, Testing, I18n].into_iter()
    }

    /// Packages this feature adds to the install list
    pub fn packages(&self) -> &'static [&'static str] {
        match self {
            Self::CssModules => &["sass"],
            Self::Testing => &["jest", "cypress"],
            Self::I18n => &["next-i18next"],
            Self::Pages | Self::Components | Self::ApiRoutes => &[],
        }
    }
}

impl FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .find(|f| f.as_str().eq_ignore_ascii_case(wanted) || f.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown feature: {}", s))
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Packages every generated project depends on
pub const BASE_PACKAGES: &[&str] = &["react", "next"];

/// Normalized input for one scaffolding run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub language: LanguageVariant,
    pub selected_features: BTreeSet<Feature>,
    pub page_names: Vec<String>,
    pub component_names: Vec<String>,
    pub api_route_names: Vec<String>,
    pub confirm_carousel_deps: bool,
    /// Run the package installer after materialization
    pub install_dependencies: bool,
    /// Initialize a git repository after materialization
    pub init_version_control: bool,
}

impl GenerationRequest {
    pub fn has_feature(&self, feature: Feature) -> bool {
        self.selected_features.contains(&feature)
    }

    /// Requested names for one artifact kind, in request order
    pub fn names(&self, kind: ArtifactKind) -> &[String] {
        match kind {
            ArtifactKind::Page => &self.page_names,
            ArtifactKind::Component => &self.component_names,
            ArtifactKind::ApiRoute => &self.api_route_names,
        }
    }

    /// Total number of artifacts this request plans
    pub fn artifact_count(&self) -> usize {
        ArtifactKind::all().map(|kind| self.names(kind).len()).sum()
    }

    /// Packages to hand to the dependency installer
    pub fn dependencies(&self) -> Vec<String> {
        let mut packages: Vec<String> = BASE_PACKAGES.iter().map(|p| p.to_string()).collect();
        for feature in Feature::all().filter(|f| self.has_feature(*f)) {
            packages.extend(feature.packages().iter().map(|p| p.to_string()));
        }
        if self
            .component_names
            .iter()
            .any(|name| name == catalog::CAROUSEL_COMPONENT)
        {
            packages.extend(catalog::CAROUSEL_PACKAGES.iter().map(|p| p.to_string()));
        }
        packages
    }
}
