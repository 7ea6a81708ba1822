//! Implementation of the `fb info` command.

use std::path::Path;

use anyhow::{Context, Result};

use frontbuild_lib::consts::APP_NAME;
use frontbuild_lib::settings::Settings;

use crate::output::{OutputFormat, print_json, print_stat};

pub fn cmd_info(root: &Path, format: OutputFormat) -> Result<()> {
  let settings = Settings::from_env(root).context("Failed to resolve settings")?;

  if format.is_json() {
    return print_json(&settings);
  }

  println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
  println!();
  for (key, value) in settings.table() {
    print_stat(key, &value);
  }
  Ok(())
}
