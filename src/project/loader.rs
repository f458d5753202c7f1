//! Model file loading.
//!
//! A model is either one document or a directory of fragments. Fragments
//! are parsed in parallel and merged by concatenating each collection in
//! sorted path order, so the merged document is deterministic. No
//! semantic check happens here: uniqueness is global and only meaningful
//! once every fragment has been merged.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, trace};
use walkdir::WalkDir;

use smol_str::SmolStr;

use crate::model::{RawDocument, RawToken};

/// Serialization format of a model file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    pub fn from_path(path: &Path) -> Option<Format> {
        match path.extension()?.to_str()? {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error("Group '{group}': baseId must be quoted in YAML, e.g. baseId: \"0x4000\"")]
    UnquotedBaseId { group: SmolStr },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid model file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("unsupported model file extension: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("directory not found: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("no model files found in {}", .0.display())]
    Empty(PathBuf),

    #[error("failed to scan {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Parse an in-memory model document.
///
/// YAML resolves an unquoted `0x4000` to an integer and loses its
/// spelling, so a YAML `baseId` must be a quoted string.
pub fn parse_document(content: &str, format: Format) -> Result<RawDocument, ParseError> {
    if content.trim().is_empty() {
        return Ok(RawDocument::default());
    }
    match format {
        Format::Json => Ok(serde_json::from_str(content)?),
        Format::Yaml => {
            let document: RawDocument = serde_yaml::from_str(content)?;
            if let Some(group) = document
                .groups
                .iter()
                .find(|g| matches!(g.base_id, RawToken::Integer(_)))
            {
                return Err(ParseError::UnquotedBaseId {
                    group: group.name.clone(),
                });
            }
            Ok(document)
        }
    }
}

/// Load a single model file; the format follows the extension.
pub fn load_document(path: &Path) -> Result<RawDocument, LoadError> {
    let format =
        Format::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse_document(&content, format).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    trace!(path = %path.display(), "model file loaded");
    Ok(document)
}

/// All model files below `dir`, sorted by path.
pub fn collect_fragment_paths(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::NotADirectory(dir.to_path_buf()));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.map_err(|source| LoadError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if Format::from_path(&path).is_some() {
            paths.push(path);
        } else {
            debug!(path = %path.display(), "skipping non-model file");
        }
    }
    paths.sort();
    Ok(paths)
}

/// Load and merge every model fragment below `dir`.
pub fn load_fragments(dir: &Path) -> Result<RawDocument, LoadError> {
    let paths = collect_fragment_paths(dir)?;
    if paths.is_empty() {
        return Err(LoadError::Empty(dir.to_path_buf()));
    }

    let fragments = paths
        .par_iter()
        .map(|path| load_document(path))
        .collect::<Result<Vec<_>, _>>()?;

    let mut merged = RawDocument::default();
    for fragment in fragments {
        merged.merge(fragment);
    }
    debug!(
        fragments = paths.len(),
        dir = %dir.display(),
        "model fragments merged"
    );
    Ok(merged)
}

/// Load a model from a file or a directory of fragments.
pub fn load_model(path: &Path) -> Result<RawDocument, LoadError> {
    if path.is_dir() {
        load_fragments(path)
    } else {
        load_document(path)
    }
}

#[cfg(test)]
mod tests;
