//! # Emission
//!
//! Emitters turn a [`ValidatedModel`] into file contents. They never touch
//! the filesystem: their artifacts are buffered in an [`ArtifactSet`] and
//! written in one commit once every emitter has succeeded, so a failed run
//! never leaves a partial, valid-looking output behind.

mod artifact;
mod overview;

use std::path::PathBuf;

use indexmap::IndexMap;
use smol_str::SmolStr;
use thiserror::Error;

use crate::model::ValidatedModel;
use crate::overview::OverviewError;

pub use artifact::{Artifact, ArtifactSet};
pub use overview::OverviewEmitter;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("emitter '{emitter}' failed: {message}")]
    Emitter {
        emitter: &'static str,
        message: String,
    },

    #[error(transparent)]
    Overview(#[from] OverviewError),

    #[error("artifact path '{}' must be relative and stay inside the output directory", .0.display())]
    InvalidPath(PathBuf),

    #[error("artifact '{}' produced twice", .0.display())]
    DuplicateArtifact(PathBuf),

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Everything an emitter may read: the validated model and the numeric
/// literal suffix map.
#[derive(Clone, Copy, Debug)]
pub struct EmitterInput<'a> {
    pub model: &'a ValidatedModel,
    pub literal_suffixes: &'a IndexMap<SmolStr, SmolStr>,
}

/// Produces artifacts from a validated model.
pub trait Emitter: Send + Sync {
    /// Human-readable name, used in error messages.
    fn name(&self) -> &'static str;

    fn emit(&self, input: &EmitterInput<'_>) -> Result<Vec<Artifact>, EmitError>;
}
