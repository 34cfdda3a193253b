//! nextkit Core Library
//!
//! This library provides the scaffold engine behind the `nextkit` CLI: it
//! turns a user's feature selections into Next.js app-router pages,
//! components and API routes written idempotently to disk.
//!
//! ```no_run
//! use nextkit_core::{ConfigResolver, PostActions, TemplateRegistry};
//! use nextkit_core::config::Answers;
//!
//! # async fn demo() -> nextkit_core::Result<()> {
//! let answers = Answers::from_file("nextkit.yaml").await?;
//! let request = ConfigResolver::new().resolve(&answers);
//! let registry = TemplateRegistry::builtin();
//! let (result, _pending) =
//!     nextkit_core::generate(&request, &registry, ".", &PostActions::none()).await?;
//! println!("{} created", result.created());
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod config;
pub mod error;
pub mod generate;
pub mod materialize;
pub mod plan;
pub mod prompt;
pub mod request;
pub mod resolver;
pub mod templates;
pub mod utils;

pub use crate::{
    actions::{DependencyInstaller, PendingActions, PostActions, VersionControlInitializer},
    config::Answers,
    error::{Error, Result},
    generate::{generate, GenerationResult, Scaffolder},
    materialize::{MaterializationOutcome, Materializer},
    plan::{PathPlanner, PlannedArtifact},
    prompt::{PromptProvider, Questionnaire},
    request::{Feature, GenerationRequest},
    resolver::ConfigResolver,
    templates::{ArtifactKind, FallbackGenerator, LanguageVariant, TemplateRegistry},
};
