//! Scaffold engine: plans every requested artifact and materializes it.

// Internal imports (std, crate)
use std::path::PathBuf;

use crate::{
    actions::{PendingActions, PostActions},
    error::{Error, Result},
    materialize::{MaterializationOutcome, Materializer},
    plan::{name_segment, ContentSource, PathPlanner, PlannedArtifact},
    request::GenerationRequest,
    templates::{ArtifactKind, FallbackGenerator, LanguageVariant, TemplateRegistry},
    utils::capitalize_first,
};

// External imports (alphabetized)
use serde::Serialize;

/// One artifact together with what happened to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifact {
    #[serde(flatten)]
    pub artifact: PlannedArtifact,
    pub outcome: MaterializationOutcome,
}

/// Outcome of a full run, in materialization order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub artifacts: Vec<GeneratedArtifact>,
}

impl GenerationResult {
    pub fn push(&mut self, artifact: PlannedArtifact, outcome: MaterializationOutcome) {
        self.artifacts.push(GeneratedArtifact { artifact, outcome });
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlannedArtifact, &MaterializationOutcome)> {
        self.artifacts.iter().map(|a| (&a.artifact, &a.outcome))
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn created(&self) -> usize {
        self.count(MaterializationOutcome::is_created)
    }

    pub fn skipped(&self) -> usize {
        self.count(MaterializationOutcome::is_skipped)
    }

    pub fn errored(&self) -> usize {
        self.count(MaterializationOutcome::is_errored)
    }

    fn count(&self, pred: impl Fn(&MaterializationOutcome) -> bool) -> usize {
        self.artifacts.iter().filter(|a| pred(&a.outcome)).count()
    }
}

/// Resolves template content for requested artifacts and writes them
#[derive(Debug, Clone)]
pub struct Scaffolder<'a> {
    registry: &'a TemplateRegistry,
    planner: PathPlanner,
    fallback: FallbackGenerator,
}

impl<'a> Scaffolder<'a> {
    pub fn new(registry: &'a TemplateRegistry) -> Result<Self> {
        Ok(Self {
            registry,
            planner: PathPlanner::new(),
            fallback: FallbackGenerator::new()?,
        })
    }

    /// Plan a single artifact: target paths plus resolved content.
    ///
    /// Components missing from the registry get fallback boilerplate. Pages
    /// and API routes have no fallback.
    pub fn plan_artifact(
        &self,
        kind: ArtifactKind,
        name: &str,
        variant: LanguageVariant,
    ) -> Result<PlannedArtifact> {
        if name_segment(name).as_os_str().is_empty() {
            return Err(Error::config(format!(
                "{} name '{}' has no usable path segment",
                kind, name
            )));
        }
        let paths = self.planner.plan(kind, name, variant);

        let (source, content) = match (self.registry.lookup(variant, kind, name), kind) {
            (Some(template), ArtifactKind::Page) => {
                (ContentSource::Catalog, template.with_title(&capitalize_first(name)))
            }
            (Some(template), _) => (ContentSource::Catalog, template.content().to_string()),
            (None, ArtifactKind::Component) => {
                log::info!("No template for component {}, using fallback boilerplate", name);
                (ContentSource::Fallback, self.fallback.generate(name, variant)?)
            }
            (None, _) => {
                return Err(Error::template(format!(
                    "No {} template registered for {}",
                    kind, variant
                )));
            }
        };

        log::debug!("Planned {} {} -> {}", kind, name, paths.file.display());
        Ok(PlannedArtifact::new(kind, name, paths, source, content))
    }

    /// Plan every artifact of the request, in materialization order.
    pub fn plan(&self, request: &GenerationRequest) -> Vec<(ArtifactKind, String, Result<PlannedArtifact>)> {
        ArtifactKind::all()
            .flat_map(|kind| {
                request
                    .names(kind)
                    .iter()
                    .map(move |name| (kind, name.clone()))
            })
            .map(|(kind, name)| {
                let planned = self.plan_artifact(kind, &name, request.language);
                (kind, name, planned)
            })
            .collect()
    }

    /// Materialize every artifact of the request, one at a time.
    ///
    /// Never fails as a whole: planning and I/O failures are recorded per
    /// artifact and the run moves on.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
        materializer: &Materializer,
    ) -> GenerationResult {
        let mut result = GenerationResult::default();

        for kind in ArtifactKind::all() {
            let count = request.names(kind).len();
            if count == 0 {
                log::debug!("No {} artifacts requested", kind);
                continue;
            }
            log::info!("Creating {} {} artifact(s)", count, kind);
        }

        for (kind, name, planned) in self.plan(request) {
            match planned {
                Ok(artifact) => {
                    let outcome = materializer.materialize(&artifact).await;
                    result.push(artifact, outcome);
                }
                Err(e) => {
                    log::error!("Could not plan {} {}: {}", kind, name, e);
                    let paths = self.planner.plan(kind, &name, request.language);
                    let artifact = PlannedArtifact::new(
                        kind,
                        name,
                        paths,
                        ContentSource::Catalog,
                        String::new(),
                    );
                    result.push(artifact, MaterializationOutcome::Errored(e.to_string()));
                }
            }
        }

        log::info!(
            "Scaffold finished: {} created, {} already existed, {} failed",
            result.created(),
            result.skipped(),
            result.errored()
        );
        result
    }
}

/// Main entry point: materialize a request under `root`, then dispatch the
/// requested post-generation actions without waiting for them.
pub async fn generate(
    request: &GenerationRequest,
    registry: &TemplateRegistry,
    root: impl Into<PathBuf>,
    actions: &PostActions,
) -> Result<(GenerationResult, PendingActions)> {
    let scaffolder = Scaffolder::new(registry)?;
    let materializer = Materializer::new(root);

    let result = scaffolder.generate(request, &materializer).await;
    let pending = actions.dispatch(request);
    Ok((result, pending))
}
