//! Propagate the style version from the versions file into the style variables.
//!
//! The versions file holds `key=value` lines; the style version is declared
//! as `css_version=<value>`. The style variables file carries a line
//! `$version = '<value>'` which is rewritten in place so the next style build
//! picks the new value up.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::consts::STYLE_VERSION_VARIABLE;
use crate::settings::Settings;

#[derive(Debug, Error)]
pub enum VersionBumpError {
  #[error("failed to read {}: {source}", path.display())]
  Read { path: PathBuf, source: std::io::Error },

  #[error("failed to write {}: {source}", path.display())]
  Write { path: PathBuf, source: std::io::Error },
}

/// Extract the version declared under `prefix`.
///
/// Every line starting with `prefix` contributes its remainder, concatenated
/// in file order. A single declaration yields its value as is.
pub fn parse_version(content: &str, prefix: &str) -> String {
  content
    .lines()
    .filter_map(|line| line.strip_prefix(prefix))
    .fold(String::new(), |mut version, value| {
      version.push_str(value);
      version
    })
}

/// Rewrite every `$version` line to assign `version`.
///
/// The result is trimmed and ends with exactly one newline.
pub fn rewrite_variables(content: &str, version: &str) -> String {
  let rewritten = content
    .split('\n')
    .map(|line| {
      if line.starts_with(STYLE_VERSION_VARIABLE) {
        format!("{} = '{}'", STYLE_VERSION_VARIABLE, version)
      } else {
        line.to_string()
      }
    })
    .collect::<Vec<_>>()
    .join("\n");

  format!("{}\n", rewritten.trim())
}

/// The value currently assigned to `$version`, if any.
pub fn current_style_version(content: &str) -> Option<&str> {
  content
    .lines()
    .filter(|line| line.starts_with(STYLE_VERSION_VARIABLE))
    .filter_map(|line| line.split_once('='))
    .map(|(_, value)| value.trim().trim_matches('\''))
    .last()
}

/// Read the versions file and return the declared style version.
pub fn read_version(path: &Path, prefix: &str) -> Result<String, VersionBumpError> {
  let content = read(path)?;
  Ok(parse_version(&content, prefix))
}

/// Bump the style variables and return the command the runner executes.
pub fn bump_version(settings: &Settings) -> Result<String, VersionBumpError> {
  let version = read_version(&settings.versions_ini, &settings.version_prefix)?;

  let variables = read(&settings.style_variables)?;
  if let Some(previous) = current_style_version(&variables) {
    debug!(previous = %previous, "current style version");
  }
  let rewritten = rewrite_variables(&variables, &version);
  fs::write(&settings.style_variables, rewritten).map_err(|source| VersionBumpError::Write {
    path: settings.style_variables.clone(),
    source,
  })?;

  info!(version = %version, file = %settings.style_variables.display(), "version bumped");
  Ok(format!("echo Version bumped to {}", version))
}

fn read(path: &Path) -> Result<String, VersionBumpError> {
  fs::read_to_string(path).map_err(|source| VersionBumpError::Read {
    path: path.to_path_buf(),
    source,
  })
}
