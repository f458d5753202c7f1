use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use indexmap::IndexMap;
use tempfile::TempDir;
use tracing::{debug, info, warn};

use super::EmitError;

/// A generated file, addressed relative to the output directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub contents: Vec<u8>,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

/// In-memory buffer of every artifact of a run.
#[derive(Clone, Debug, Default)]
pub struct ArtifactSet {
    artifacts: IndexMap<PathBuf, Vec<u8>>,
}

fn is_contained(path: &Path) -> bool {
    path.components().any(|c| matches!(c, Component::Normal(_)))
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> EmitError {
    let path = path.to_path_buf();
    move |source| EmitError::Io { path, source }
}

impl ArtifactSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, artifact: Artifact) -> Result<(), EmitError> {
        if !is_contained(&artifact.path) {
            return Err(EmitError::InvalidPath(artifact.path));
        }
        if self.artifacts.contains_key(&artifact.path) {
            return Err(EmitError::DuplicateArtifact(artifact.path));
        }
        self.artifacts.insert(artifact.path, artifact.contents);
        Ok(())
    }

    pub fn extend(&mut self, artifacts: Vec<Artifact>) -> Result<(), EmitError> {
        artifacts.into_iter().try_for_each(|a| self.insert(a))
    }

    pub fn get(&self, path: &Path) -> Option<&[u8]> {
        self.artifacts.get(path).map(Vec::as_slice)
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.artifacts.keys().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Write every artifact below `out_dir`.
    ///
    /// All files are first written into a staging directory inside
    /// `out_dir`; nothing is moved into place unless every write succeeded.
    /// Files being replaced are set aside first, and if a move fails every
    /// target already installed is restored. Returns the final paths in
    /// insertion order.
    pub fn commit(self, out_dir: &Path) -> Result<Vec<PathBuf>, EmitError> {
        fs::create_dir_all(out_dir).map_err(io_err(out_dir))?;
        let staging = scratch_dir(out_dir, ".datalayer-staging-")?;

        for (relative, contents) in &self.artifacts {
            let staged = staging.path().join(relative);
            if let Some(parent) = staged.parent() {
                fs::create_dir_all(parent).map_err(io_err(parent))?;
            }
            fs::write(&staged, contents).map_err(io_err(&staged))?;
        }

        // Prepare every target directory before the first rename.
        let targets: Vec<PathBuf> = self.artifacts.keys().map(|r| out_dir.join(r)).collect();
        for target in &targets {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(io_err(parent))?;
            }
        }

        let backup = scratch_dir(out_dir, ".datalayer-backup-")?;
        let mut installed: Vec<Installed> = Vec::with_capacity(targets.len());
        for (index, (relative, target)) in self.artifacts.keys().zip(targets).enumerate() {
            let previous = backup.path().join(index.to_string());
            match install(&staging.path().join(relative), &target, &previous) {
                Ok(replaced) => installed.push(Installed {
                    target,
                    previous: replaced.then_some(previous),
                }),
                Err(source) => {
                    rollback(&installed);
                    return Err(EmitError::Io {
                        path: target,
                        source,
                    });
                }
            }
        }

        remove_scratch_dir(staging);
        remove_scratch_dir(backup);
        let written: Vec<PathBuf> = installed.into_iter().map(|i| i.target).collect();
        info!(artifacts = written.len(), out_dir = %out_dir.display(), "artifacts committed");
        Ok(written)
    }
}

/// A target moved into place, with the file it replaced (if any).
struct Installed {
    target: PathBuf,
    previous: Option<PathBuf>,
}

fn scratch_dir(out_dir: &Path, prefix: &str) -> Result<TempDir, EmitError> {
    tempfile::Builder::new()
        .prefix(prefix)
        .tempdir_in(out_dir)
        .map_err(io_err(out_dir))
}

fn remove_scratch_dir(dir: TempDir) {
    let path = dir.path().to_path_buf();
    if let Err(e) = dir.close() {
        warn!(path = %path.display(), error = %e, "failed to remove scratch directory");
    }
}

/// Move `staged` to `target`, setting an existing `target` file aside at
/// `previous`. Returns whether a file was replaced.
fn install(staged: &Path, target: &Path, previous: &Path) -> io::Result<bool> {
    let replaced = target.is_file();
    if replaced {
        fs::rename(target, previous)?;
    }
    if let Err(e) = fs::rename(staged, target) {
        if replaced {
            if let Err(restore) = fs::rename(previous, target) {
                warn!(path = %target.display(), error = %restore, "failed to restore replaced file");
            }
        }
        return Err(e);
    }
    Ok(replaced)
}

fn rollback(installed: &[Installed]) {
    for entry in installed.iter().rev() {
        let restored = match &entry.previous {
            Some(previous) => fs::rename(previous, &entry.target),
            None => fs::remove_file(&entry.target),
        };
        if let Err(e) = restored {
            warn!(path = %entry.target.display(), error = %e, "failed to roll back artifact");
        }
    }
    debug!(restored = installed.len(), "artifact commit rolled back");
}
