//! Effective settings for a composition run.
//!
//! Settings start from the fixed defaults in [`crate::consts`], are anchored
//! at a template root, and accept environment overrides for the files that
//! live outside the template tree:
//! - `FRONTBUILD_VERSIONS_INI`: version source file
//! - `FRONTBUILD_SPRITE_INJECTOR`: sprite injection tool
//! - `FRONTBUILD_STYLE_VARIABLES`: style variables file

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use crate::consts::{
  BIN_NAME, CONCAT_SEPARATOR, DESCRIPTOR_FILE_NAME, ENV_SPRITE_INJECTOR, ENV_STYLE_VARIABLES, ENV_VERSIONS_INI,
  LINT_CONFIG, SCRIPT_WRAPPER, SPRITE_INJECTOR, STYLE_URL_EMBEDDER, STYLE_VARIABLES, STYLE_VERSION_VARIABLE,
  VERSION_PREFIX, VERSIONS_INI,
};
use crate::rules::{Environment, extension};

/// Errors raised while preparing settings.
#[derive(Debug, Error)]
pub enum SettingsError {
  #[error("failed to resolve template root {}: {source}", path.display())]
  Root { path: PathBuf, source: std::io::Error },

  #[error("missing {} core file(s): {}", .0.len(), .0.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", "))]
  MissingCoreFiles(Vec<PathBuf>),
}

/// Settings shared by the loader, the composer and the runner-side helpers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
  /// Template root. Relative source paths resolve against it.
  pub root: PathBuf,
  /// Exact basename of build descriptors.
  pub descriptor_name: String,
  pub lint_config: PathBuf,
  pub style_variables: PathBuf,
  pub sprite_injector: PathBuf,
  pub versions_ini: PathBuf,
  /// Line prefix carrying the version in `versions_ini`.
  pub version_prefix: String,
  /// Seed the application that lints the descriptors themselves.
  pub self_lint: bool,
}

impl Settings {
  /// Defaults anchored at `root`, without consulting the environment.
  pub fn new(root: impl Into<PathBuf>) -> Self {
    let root = root.into();
    Self {
      lint_config: root.join(LINT_CONFIG),
      style_variables: root.join(STYLE_VARIABLES),
      sprite_injector: root.join(SPRITE_INJECTOR),
      versions_ini: PathBuf::from(VERSIONS_INI),
      version_prefix: VERSION_PREFIX.to_string(),
      descriptor_name: DESCRIPTOR_FILE_NAME.to_string(),
      self_lint: true,
      root,
    }
  }

  /// Canonicalize `root` and apply environment overrides.
  pub fn from_env(root: &Path) -> Result<Self, SettingsError> {
    let root = dunce::canonicalize(root).map_err(|source| SettingsError::Root {
      path: root.to_path_buf(),
      source,
    })?;

    let mut settings = Self::new(root);
    if let Ok(path) = std::env::var(ENV_VERSIONS_INI) {
      settings.versions_ini = PathBuf::from(path);
    }
    if let Ok(path) = std::env::var(ENV_SPRITE_INJECTOR) {
      settings.sprite_injector = PathBuf::from(path);
    }
    if let Ok(path) = std::env::var(ENV_STYLE_VARIABLES) {
      settings.style_variables = PathBuf::from(path);
    }
    Ok(settings)
  }

  pub fn with_descriptor_name(mut self, name: impl Into<String>) -> Self {
    self.descriptor_name = name.into();
    self
  }

  pub fn with_self_lint(mut self, enabled: bool) -> Self {
    self.self_lint = enabled;
    self
  }

  /// Resolve a descriptor path against the template root.
  pub fn resolve(&self, path: &str) -> PathBuf {
    self.root.join(path)
  }

  /// Files that must exist before anything else happens.
  pub fn core_files(&self) -> Vec<&Path> {
    vec![self.lint_config.as_path()]
  }

  /// Check every core file, logging each one.
  pub fn check_core_files(&self) -> Result<(), SettingsError> {
    let mut missing = Vec::new();
    for file in self.core_files() {
      if file.exists() {
        info!(file = %file.display(), "core file present");
      } else {
        error!(file = %file.display(), "core file missing");
        missing.push(file.to_path_buf());
      }
    }

    if missing.is_empty() {
      info!("all core files are present");
      Ok(())
    } else {
      Err(SettingsError::MissingCoreFiles(missing))
    }
  }

  /// Command the runner executes for the `versionbump` target.
  ///
  /// The external files are passed explicitly so the bump reads the same
  /// files this run resolved, whatever the runner's environment holds.
  pub fn version_bump_command(&self) -> String {
    format!(
      "{} version-bump --root {} --versions-ini {} --style-variables {}",
      BIN_NAME,
      shell_quote(&self.root),
      shell_quote(&self.versions_ini),
      shell_quote(&self.style_variables)
    )
  }

  /// Human readable key/value view of the effective settings.
  pub fn table(&self) -> Vec<(&'static str, String)> {
    vec![
      ("Template root", self.root.display().to_string()),
      ("Build descriptor", self.descriptor_name.clone()),
      ("Lint config", self.lint_config.display().to_string()),
      ("Script wrapper", SCRIPT_WRAPPER.join("  /* Code goes here */")),
      ("Concat separator", CONCAT_SEPARATOR.to_string()),
      ("Script extension development", ext(Environment::Dev, "js")),
      ("Script extension production", ext(Environment::Min, "js")),
      ("Style extension development", ext(Environment::Dev, "css")),
      ("Style extension production", ext(Environment::Min, "css")),
      ("Style variables", self.style_variables.display().to_string()),
      ("Sprite injector", self.sprite_injector.display().to_string()),
      ("Style url embedder", format!("{}()", STYLE_URL_EMBEDDER)),
      ("Versions file", self.versions_ini.display().to_string()),
      ("Version assignment", self.version_prefix.clone()),
      ("Style version assignment", format!("{} = ", STYLE_VERSION_VARIABLE)),
      ("Self lint", self.self_lint.to_string()),
    ]
  }

  pub fn log_summary(&self) {
    for (key, value) in self.table() {
      info!("{:<30} {}", key, value);
    }
  }
}

/// Single-quote `path` for a POSIX shell.
fn shell_quote(path: &Path) -> String {
  format!("'{}'", path.to_string_lossy().replace('\'', r"'\''"))
}

fn ext(env: Environment, medium: &str) -> String {
  extension(env, medium).unwrap_or_default().to_string()
}
