//! Implementation of the `fb version-bump` command.
//!
//! The runner's `exec:versionbump` target calls this command. It rewrites the
//! style variables and prints the shell command reporting the new version.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use frontbuild_lib::settings::Settings;
use frontbuild_lib::version_bump::bump_version;

/// Bump the style version. Explicit paths win over environment overrides.
pub fn cmd_version_bump(root: &Path, versions_ini: Option<PathBuf>, style_variables: Option<PathBuf>) -> Result<()> {
  let mut settings = Settings::from_env(root).context("Failed to resolve settings")?;
  if let Some(path) = versions_ini {
    settings.versions_ini = path;
  }
  if let Some(path) = style_variables {
    settings.style_variables = path;
  }

  let command = bump_version(&settings).context("Version bump failed")?;
  println!("{}", command);
  Ok(())
}
