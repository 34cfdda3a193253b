//! Normalization of raw answers into a [`GenerationRequest`].
//!
//! Empty or blank input for a category is not an error: the category simply
//! resolves to no names and nothing is planned for it.

use crate::config::Answers;
use crate::request::{Feature, GenerationRequest};
use crate::templates::catalog;
use crate::utils::dedup_preserving_order;

/// Split comma separated names, trimming whitespace and dropping empty
/// entries and duplicates. First occurrence wins.
///
/// ```
/// use nextkit_core::resolver::split_names;
///
/// assert_eq!(split_names(" foo, foo ,bar"), vec!["foo", "bar"]);
/// assert!(split_names("").is_empty());
/// ```
pub fn split_names(input: &str) -> Vec<String> {
    split_all([input])
}

fn split_all<'a>(inputs: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    dedup_preserving_order(
        inputs
            .into_iter()
            .flat_map(|input| input.split(','))
            .map(str::trim)
            .filter(|name| !name.is_empty()),
    )
}

/// Turns questionnaire answers into a validated request
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigResolver;

impl ConfigResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, raw: &Answers) -> GenerationRequest {
        let page_names = if raw.has_feature(Feature::Pages) {
            split_all(raw.pages.iter().map(String::as_str))
        } else {
            Vec::new()
        };

        let component_names = if raw.has_feature(Feature::Components) {
            let names = Self::requested_components(raw);
            if !raw.confirm_carousel_deps && names.iter().any(|n| n == catalog::CAROUSEL_COMPONENT) {
                log::info!(
                    "Skipping {} component: its dependencies were not confirmed",
                    catalog::CAROUSEL_COMPONENT
                );
            }
            names
                .into_iter()
                .filter(|name| raw.confirm_carousel_deps || name != catalog::CAROUSEL_COMPONENT)
                .collect()
        } else {
            Vec::new()
        };

        let api_route_names = if raw.has_feature(Feature::ApiRoutes) {
            split_all(raw.api_routes.iter().map(String::as_str))
        } else {
            Vec::new()
        };

        let request = GenerationRequest {
            language: raw.language,
            selected_features: raw.features.iter().copied().collect(),
            page_names,
            component_names,
            api_route_names,
            confirm_carousel_deps: raw.confirm_carousel_deps,
            install_dependencies: raw.install_dependencies,
            init_version_control: raw.init_git,
        };

        log::debug!(
            "Resolved request: {} page(s), {} component(s), {} API route(s)",
            request.page_names.len(),
            request.component_names.len(),
            request.api_route_names.len()
        );
        request
    }

    /// Component names before the carousel confirmation is applied
    pub fn requested_components(raw: &Answers) -> Vec<String> {
        if raw.all_essential_components {
            catalog::ESSENTIAL_COMPONENTS
                .iter()
                .map(|name| name.to_string())
                .collect()
        } else {
            split_all(raw.components.iter().map(String::as_str))
        }
    }
}
