//! Human and JSON rendering of a generation result.

// Internal imports (std, crate)
use std::io::{self, Write};
use std::path::Path;

// External imports (alphabetized)
use nextkit_core::{GenerationResult, MaterializationOutcome};
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    root: &'a Path,
    created: usize,
    skipped: usize,
    errored: usize,
    #[serde(flatten)]
    result: &'a GenerationResult,
}

/// One line per artifact, then totals
pub fn write_text(out: &mut impl Write, result: &GenerationResult) -> io::Result<()> {
    for (artifact, outcome) in result.iter() {
        let path = artifact.target_path.display();
        match outcome {
            MaterializationOutcome::Created => writeln!(out, "📄 Created file: {}", path)?,
            MaterializationOutcome::SkippedExisting => {
                writeln!(out, "⚠️  File already exists: {}", path)?
            }
            MaterializationOutcome::Errored(reason) => {
                writeln!(out, "❌ Error creating file: {} ({})", path, reason)?
            }
        }
    }
    writeln!(
        out,
        "\n{} created, {} already existed, {} failed",
        result.created(),
        result.skipped(),
        result.errored()
    )
}

pub fn write_json(out: &mut impl Write, root: &Path, result: &GenerationResult) -> io::Result<()> {
    let report = JsonReport {
        root,
        created: result.created(),
        skipped: result.skipped(),
        errored: result.errored(),
        result,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}
