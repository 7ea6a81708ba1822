//! End-to-end configuration build.
//!
//! Runs the whole pipeline in order: core file check, descriptor loading,
//! merging (on top of the self-lint application) and composition.

use thiserror::Error;
use tracing::info;

use crate::compose::{BuildConfig, ComposeError, compose, self_lint_application};
use crate::consts::SELF_LINT_APPLICATION;
use crate::descriptor::{Applications, DescriptorError, DescriptorSource, merge};
use crate::settings::{Settings, SettingsError};

#[derive(Debug, Error)]
pub enum ConfigureError {
  #[error(transparent)]
  Settings(#[from] SettingsError),

  #[error(transparent)]
  Descriptor(#[from] DescriptorError),

  #[error(transparent)]
  Compose(#[from] ComposeError),
}

/// Build the runner configuration from `source`.
pub fn configure(settings: &Settings, source: &dyn DescriptorSource) -> Result<BuildConfig, ConfigureError> {
  settings.log_summary();
  settings.check_core_files()?;

  let descriptors = source.load()?;
  info!(count = descriptors.len(), "loaded build descriptors");

  let mut seed = Applications::new();
  if settings.self_lint {
    seed.insert(
      SELF_LINT_APPLICATION.to_string(),
      self_lint_application(settings, &descriptors),
    );
  }

  let applications = merge(seed, &descriptors);
  let config = compose(settings, &applications)?;
  info!(tasks = config.tasks.len(), "composed build configuration");
  Ok(config)
}
