//! Declarative configuration fragments handed to the task runner.

use serde::Serialize;

/// What one rule contributes to one runner target.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Fragment {
  Files(FileSet),
  Command(Command),
}

/// Source files, optionally written to a destination.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FileSet {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub options: Option<serde_json::Value>,
  pub src: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub dest: Option<String>,
}

impl FileSet {
  pub fn new(src: Vec<String>) -> Self {
    Self {
      src,
      ..Default::default()
    }
  }

  pub fn with_dest(mut self, dest: String) -> Self {
    self.dest = Some(dest);
    self
  }

  pub fn with_options(mut self, options: serde_json::Value) -> Self {
    self.options = Some(options);
    self
  }
}

/// A shell command for the runner to execute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
  pub cmd: String,
}

impl Fragment {
  pub fn as_files(&self) -> Option<&FileSet> {
    match self {
      Fragment::Files(files) => Some(files),
      Fragment::Command(_) => None,
    }
  }

  pub fn as_command(&self) -> Option<&str> {
    match self {
      Fragment::Command(command) => Some(&command.cmd),
      Fragment::Files(_) => None,
    }
  }
}
