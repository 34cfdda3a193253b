//! nextkit CLI entrypoint
//! Collects answers (interactively or from a file) and dispatches to the core
//! scaffold engine.

mod prompt;
mod report;

// Internal imports (std, crate)
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use crate::prompt::{LinePrompt, RichPrompt};

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use nextkit_core::{
    Answers, ConfigResolver, LanguageVariant, PostActions, PromptProvider, Questionnaire,
    TemplateRegistry,
};
use tokio::fs;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nextkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Scaffold pages, components and API routes for a Next.js app
    Scaffold {
        /// Root of the generated tree (default: current directory)
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Read answers from a YAML, JSON or TOML file instead of prompting
        #[arg(long)]
        answers: Option<PathBuf>,
        /// Write the collected answers to this file for later replay
        #[arg(long)]
        save_answers: Option<PathBuf>,
        /// Use plain line-based prompts instead of interactive widgets
        #[arg(long)]
        plain: bool,
        /// Print the per-artifact report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the built-in templates
    Templates {
        /// Language variant (typed/typescript or untyped/javascript)
        #[arg(long, default_value = "untyped")]
        language: String,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn collect_answers(plain: bool) -> nextkit_core::Result<Answers> {
    println!("\n✨ Welcome to the nextkit scaffolder! ✨\n");
    let mut provider: Box<dyn PromptProvider> = if plain || !io::stdin().is_terminal() {
        Box::new(LinePrompt::new(io::stdin().lock(), io::stdout()))
    } else {
        Box::new(RichPrompt::default())
    };
    Questionnaire::new(provider.as_mut()).run()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Scaffold {
            output_dir,
            answers,
            save_answers,
            plain,
            json,
        } => {
            let answers = match answers {
                Some(path) => Answers::from_file(path)
                    .await
                    .with_context(|| format!("Failed to load answers from {}", path.display()))?,
                None => collect_answers(*plain).context("Failed to collect answers")?,
            };

            if let Some(path) = save_answers {
                answers
                    .save(path)
                    .await
                    .with_context(|| format!("Failed to save answers to {}", path.display()))?;
                tracing::info!("Saved answers to {}", path.display());
            }

            let request = ConfigResolver::new().resolve(&answers);

            // Resolve output directory - use the current directory if not specified
            let output_path = output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
            if !output_path.exists() {
                tracing::info!("Creating output directory: {}", output_path.display());
                fs::create_dir_all(&output_path).await.with_context(|| {
                    format!("Failed to create output directory {}", output_path.display())
                })?;
            }

            let registry = TemplateRegistry::builtin();
            let actions = PostActions::system(&output_path);
            let (result, pending) =
                nextkit_core::generate(&request, &registry, &output_path, &actions).await?;

            let mut stdout = io::stdout().lock();
            if *json {
                report::write_json(&mut stdout, &output_path, &result)?;
            } else {
                report::write_text(&mut stdout, &result)?;
            }
            drop(stdout);

            // Installer and git output arrives after the report
            pending.wait().await;

            if !*json {
                println!("\n🎉 Scaffolding complete!");
            }
        }
        Commands::Templates { language } => {
            let variant: LanguageVariant = language
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid language '{language}': {e}"))?;
            let registry = TemplateRegistry::builtin();
            println!("Templates for {} ({}):", variant.label(), variant);
            for template in registry.list_templates(variant) {
                println!("  {:<10} {}", template.kind.as_str(), template.name);
            }
        }
    }
    Ok(())
}
