//! Composed runner configuration.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::rules::Fragment;

/// Fatal composition errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
  /// A non-glob source file does not exist.
  #[error("Missing source file: {path}")]
  MissingSource { path: String },
}

/// Re-run `tasks` whenever one of `files` changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WatchEntry {
  pub files: Vec<String>,
  pub tasks: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub options: Option<serde_json::Value>,
}

/// One named target inside a runner section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Target {
  Fragment(Fragment),
  Watch(WatchEntry),
}

/// A runner section: shared options plus targets keyed by task name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Section {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub options: Option<serde_json::Value>,
  #[serde(flatten)]
  pub targets: BTreeMap<String, Target>,
}

impl Section {
  pub fn with_options(options: serde_json::Value) -> Self {
    Self {
      options: Some(options),
      targets: BTreeMap::new(),
    }
  }
}

/// The finished configuration handed to the task runner.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BuildConfig {
  /// Runner sections keyed by section name (`concatenate`, `watch`, `exec`, ...).
  pub config: BTreeMap<String, Section>,
  /// Registered tasks and the sub-tasks each one runs, in order.
  pub tasks: BTreeMap<String, Vec<String>>,
  /// Files whose changes trigger the version bump.
  pub version_bump_files: Vec<String>,
}

impl BuildConfig {
  pub fn task(&self, name: &str) -> Option<&[String]> {
    self.tasks.get(name).map(Vec::as_slice)
  }

  pub fn section(&self, name: &str) -> Option<&Section> {
    self.config.get(name)
  }

  pub fn target(&self, section: &str, name: &str) -> Option<&Target> {
    self.section(section).and_then(|s| s.targets.get(name))
  }

  /// The fragment a rule stored for a task.
  pub fn fragment(&self, section: &str, task: &str) -> Option<&Fragment> {
    match self.target(section, task) {
      Some(Target::Fragment(fragment)) => Some(fragment),
      _ => None,
    }
  }

  pub fn watch(&self, name: &str) -> Option<&WatchEntry> {
    match self.target("watch", name) {
      Some(Target::Watch(entry)) => Some(entry),
      _ => None,
    }
  }
}
