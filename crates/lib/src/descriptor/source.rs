//! Where descriptors come from.

use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

/// A descriptor file with its comment lines already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
  pub path: PathBuf,
  pub content: String,
}

impl Descriptor {
  /// Build a descriptor from raw text, stripping comment lines.
  pub fn new(path: impl Into<PathBuf>, raw: &str) -> Self {
    Self {
      path: path.into(),
      content: strip_comments(raw),
    }
  }
}

/// Errors that stop descriptor loading altogether.
#[derive(Debug, Error)]
pub enum DescriptorError {
  #[error("failed to walk {}: {source}", root.display())]
  Walk { root: PathBuf, source: walkdir::Error },

  #[error("failed to read descriptor {}: {source}", path.display())]
  Read { path: PathBuf, source: std::io::Error },
}

/// Produces descriptors in merge order. Later descriptors win on conflicts.
pub trait DescriptorSource {
  fn load(&self) -> Result<Vec<Descriptor>, DescriptorError>;
}

/// Walks a template tree for files with an exact basename.
///
/// Entries are visited sorted by file name, which makes merge precedence
/// stable across filesystems.
#[derive(Debug, Clone)]
pub struct FsDescriptorSource {
  root: PathBuf,
  file_name: String,
}

impl FsDescriptorSource {
  pub fn new(root: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
    Self {
      root: root.into(),
      file_name: file_name.into(),
    }
  }
}

impl DescriptorSource for FsDescriptorSource {
  fn load(&self) -> Result<Vec<Descriptor>, DescriptorError> {
    let mut descriptors = Vec::new();

    for entry in WalkDir::new(&self.root).sort_by_file_name() {
      let entry = entry.map_err(|source| DescriptorError::Walk {
        root: self.root.clone(),
        source,
      })?;

      if entry.file_type().is_dir() {
        debug!(dir = %entry.path().display(), "entering directory");
        continue;
      }
      if entry.file_name().to_str() != Some(self.file_name.as_str()) {
        continue;
      }

      let path = entry.into_path();
      let raw = std::fs::read_to_string(&path).map_err(|source| DescriptorError::Read {
        path: path.clone(),
        source,
      })?;

      let shown = path.strip_prefix(&self.root).unwrap_or(&path);
      info!(descriptor = %shown.display(), "found build descriptor");
      descriptors.push(Descriptor::new(path, &raw));
    }

    Ok(descriptors)
  }
}

/// A fixed list of descriptors, in the given order.
#[derive(Debug, Clone, Default)]
pub struct MemoryDescriptorSource {
  descriptors: Vec<Descriptor>,
}

impl MemoryDescriptorSource {
  pub fn new(descriptors: Vec<Descriptor>) -> Self {
    Self { descriptors }
  }

  pub fn push(&mut self, path: impl Into<PathBuf>, raw: &str) {
    self.descriptors.push(Descriptor::new(path, raw));
  }
}

impl DescriptorSource for MemoryDescriptorSource {
  fn load(&self) -> Result<Vec<Descriptor>, DescriptorError> {
    Ok(self.descriptors.clone())
  }
}

/// Drop every line whose first non-whitespace content is `//`.
pub fn strip_comments(text: &str) -> String {
  text
    .split('\n')
    .filter(|line| !line.trim_start().starts_with("//"))
    .collect::<Vec<_>>()
    .join("\n")
}
