//! Boilerplate for components that have no catalog entry.

// Internal imports (std, crate)
use std::sync::Arc;

use super::{catalog, LanguageVariant};
use crate::error::Result;

// External imports (alphabetized)
use tera::{Context, Tera};

const TYPED_TEMPLATE: &str = "fallback/component.tsx";
const UNTYPED_TEMPLATE: &str = "fallback/component.js";

/// Renders a minimal component shell named after the requested component
#[derive(Debug, Clone)]
pub struct FallbackGenerator {
    tera: Arc<Tera>,
}

impl FallbackGenerator {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (TYPED_TEMPLATE, catalog::typed::FALLBACK_COMPONENT),
            (UNTYPED_TEMPLATE, catalog::untyped::FALLBACK_COMPONENT),
        ])?;
        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render component boilerplate for `name`.
    ///
    /// The name shows up as the component identifier (and props interface in
    /// the typed variant) and in the placeholder text rendered in the body.
    pub fn generate(&self, name: &str, variant: LanguageVariant) -> Result<String> {
        let template_name = match variant {
            LanguageVariant::Typed => TYPED_TEMPLATE,
            LanguageVariant::Untyped => UNTYPED_TEMPLATE,
        };

        let mut context = Context::new();
        context.insert("name", name);

        log::debug!("Rendering fallback boilerplate for {} ({})", name, variant);
        Ok(self.tera.render(template_name, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_boilerplate() {
        let generator = FallbackGenerator::new().unwrap();
        let content = generator.generate("Sidebar", LanguageVariant::Typed).unwrap();

        assert!(content.contains("interface SidebarProps {"));
        assert!(content.contains("const Sidebar: React.FC<SidebarProps> = () => {"));
        assert!(content.contains("      Sidebar Component\n"));
        assert!(content.contains("{/* Add your component code here */}"));
        assert!(content.contains("export default Sidebar;"));
    }

    #[test]
    fn test_untyped_boilerplate() {
        let generator = FallbackGenerator::new().unwrap();
        let content = generator
            .generate("ProfileCard", LanguageVariant::Untyped)
            .unwrap();

        assert!(content.starts_with("const ProfileCard = () => {"));
        assert!(content.contains("ProfileCard Component"));
        assert!(!content.contains("Props"));
        assert!(!content.contains("React.FC"));
    }

    #[test]
    fn test_name_is_not_escaped() {
        let generator = FallbackGenerator::new().unwrap();
        let content = generator.generate("A&B", LanguageVariant::Untyped).unwrap();
        assert!(content.contains("const A&B = () => {"));
    }
}
