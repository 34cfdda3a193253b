//! Read-only catalog of built-in templates.

// Internal imports (std, crate)
use std::collections::HashMap;

use super::{catalog, ArtifactKind, LanguageVariant};

/// Name under which the generic page and API route templates are registered.
///
/// Every requested page or route name is served by the generic entry of its
/// kind; components are only ever matched by exact name.
pub const GENERIC_TEMPLATE: &str = "*";

/// A single immutable catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub variant: LanguageVariant,
    pub kind: ArtifactKind,
    pub name: String,
    content: &'static str,
}

impl Template {
    pub fn new(
        variant: LanguageVariant,
        kind: ArtifactKind,
        name: impl Into<String>,
        content: &'static str,
    ) -> Self {
        Self {
            variant,
            kind,
            name: name.into(),
            content,
        }
    }

    /// Raw template text
    pub fn content(&self) -> &'static str {
        self.content
    }

    /// Copy of the content with the first title placeholder replaced.
    pub fn with_title(&self, title: &str) -> String {
        self.content.replacen(catalog::TITLE_PLACEHOLDER, title, 1)
    }
}

type RegistryKey = (LanguageVariant, ArtifactKind, String);

/// Catalog of templates keyed by (language variant, kind, name)
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<RegistryKey, Template>,
}

impl TemplateRegistry {
    /// Build the registry holding every built-in template.
    pub fn builtin() -> Self {
        use ArtifactKind::*;
        use LanguageVariant::*;

        let entries = [
            (Typed, Page, GENERIC_TEMPLATE, catalog::typed::PAGE),
            (Typed, ApiRoute, GENERIC_TEMPLATE, catalog::typed::API_ROUTE),
            (Typed, Component, "Button", catalog::typed::BUTTON),
            (Typed, Component, "Footer", catalog::typed::FOOTER),
            (Typed, Component, "Header", catalog::typed::HEADER),
            (Typed, Component, "Carousel", catalog::typed::CAROUSEL),
            (Untyped, Page, GENERIC_TEMPLATE, catalog::untyped::PAGE),
            (Untyped, ApiRoute, GENERIC_TEMPLATE, catalog::untyped::API_ROUTE),
            (Untyped, Component, "Button", catalog::untyped::BUTTON),
            (Untyped, Component, "Footer", catalog::untyped::FOOTER),
            (Untyped, Component, "Header", catalog::untyped::HEADER),
            (Untyped, Component, "Carousel", catalog::untyped::CAROUSEL),
        ];

        Self::from_templates(
            entries
                .into_iter()
                .map(|(variant, kind, name, content)| Template::new(variant, kind, name, content)),
        )
    }

    /// Build a registry from an explicit list of templates.
    ///
    /// Later entries with the same key replace earlier ones.
    pub fn from_templates(templates: impl IntoIterator<Item = Template>) -> Self {
        let templates = templates
            .into_iter()
            .map(|t| ((t.variant, t.kind, t.name.clone()), t))
            .collect();
        Self { templates }
    }

    /// Look up a template.
    ///
    /// `None` is an expected answer for components outside the catalog and
    /// means the caller should synthesize boilerplate instead.
    pub fn lookup(&self, variant: LanguageVariant, kind: ArtifactKind, name: &str) -> Option<&Template> {
        let exact = self.templates.get(&(variant, kind, name.to_string()));
        match kind {
            ArtifactKind::Component => exact,
            ArtifactKind::Page | ArtifactKind::ApiRoute => exact.or_else(|| {
                self.templates
                    .get(&(variant, kind, GENERIC_TEMPLATE.to_string()))
            }),
        }
    }

    /// Check if a template exists for this exact key
    pub fn has_template(&self, variant: LanguageVariant, kind: ArtifactKind, name: &str) -> bool {
        self.templates
            .contains_key(&(variant, kind, name.to_string()))
    }

    /// List all templates for a variant, sorted by kind then name
    pub fn list_templates(&self, variant: LanguageVariant) -> Vec<&Template> {
        let mut templates: Vec<_> = self
            .templates
            .values()
            .filter(|t| t.variant == variant)
            .collect();
        templates.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));
        templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
