//! End-to-end run: load, validate, emit, commit.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::base::ModelConfig;
use crate::emit::{ArtifactSet, EmitError, Emitter, EmitterInput};
use crate::model::{RawDocument, ValidatedModel};
use crate::project::{LoadError, load_model};
use crate::validate::{ModelError, validate};

/// Any failure of a generation run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Result of a successful run.
#[derive(Debug)]
pub struct Generated {
    pub model: ValidatedModel,
    pub written: Vec<PathBuf>,
}

/// Validate `document`, run every emitter and commit their artifacts to
/// `out_dir`. On error nothing is written.
pub fn generate(
    document: RawDocument,
    config: &ModelConfig,
    emitters: &[&dyn Emitter],
    out_dir: &Path,
) -> Result<Generated, Error> {
    let model = validate(document, config)?;
    let artifacts = render(&model, config, emitters)?;
    let written = artifacts.commit(out_dir)?;
    info!(files = written.len(), "generation finished");
    Ok(Generated { model, written })
}

/// Same as [`generate`], loading the model from a file or fragment directory.
pub fn generate_from_path(
    model_path: &Path,
    config: &ModelConfig,
    emitters: &[&dyn Emitter],
    out_dir: &Path,
) -> Result<Generated, Error> {
    let document = load_model(model_path)?;
    generate(document, config, emitters, out_dir)
}

/// Run every emitter into one buffer without touching the filesystem.
pub fn render(
    model: &ValidatedModel,
    config: &ModelConfig,
    emitters: &[&dyn Emitter],
) -> Result<ArtifactSet, EmitError> {
    let input = EmitterInput {
        model,
        literal_suffixes: config.literal_suffixes(),
    };
    let mut artifacts = ArtifactSet::new();
    for emitter in emitters {
        artifacts.extend(emitter.emit(&input)?)?;
    }
    Ok(artifacts)
}
