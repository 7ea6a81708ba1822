//! Implementation of the `fb compose` command.
//!
//! Builds the runner configuration for a template root and prints it as JSON
//! (for the runner) or as a task summary (for humans).

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use frontbuild_lib::compose::BuildConfig;
use frontbuild_lib::configure::configure;
use frontbuild_lib::descriptor::FsDescriptorSource;
use frontbuild_lib::settings::Settings;

use crate::output::{OutputFormat, format_steps, print_info, print_json, print_stat, print_success};

pub struct ComposeArgs {
  pub root: PathBuf,
  pub descriptor: Option<String>,
  pub self_lint: bool,
  pub output: Option<PathBuf>,
  pub format: OutputFormat,
}

pub fn cmd_compose(args: ComposeArgs) -> Result<()> {
  let mut settings = Settings::from_env(&args.root)
    .context("Failed to resolve settings")?
    .with_self_lint(args.self_lint);
  if let Some(name) = args.descriptor {
    settings = settings.with_descriptor_name(name);
  }

  let source = FsDescriptorSource::new(&settings.root, &settings.descriptor_name);
  let config = configure(&settings, &source).context("Failed to compose build configuration")?;

  if let Some(path) = &args.output {
    let json = serde_json::to_string_pretty(&config).context("Failed to serialize configuration")?;
    fs::write(path, json).with_context(|| format!("Failed to write configuration: {}", path.display()))?;
    info!(path = %path.display(), "configuration written");
    print_success(&format!("Wrote {} task(s) to {}", config.tasks.len(), path.display()));
    return Ok(());
  }

  if args.format.is_json() {
    print_json(&config)
  } else {
    print_summary(&config);
    Ok(())
  }
}

fn print_summary(config: &BuildConfig) {
  print_success(&format!("Composed {} task(s)", config.tasks.len()));
  println!("Tasks:");
  for (name, steps) in &config.tasks {
    print_stat(name, &format_steps(steps));
  }

  let watched: Vec<_> = config
    .section("watch")
    .map(|section| section.targets.keys().cloned().collect())
    .unwrap_or_default();
  println!();
  println!("Watching:");
  for name in &watched {
    print_stat(name, "watched");
  }

  if config.task("versionbump").is_some() {
    println!();
    print_info(&format!(
      "Version bump watches {} file(s)",
      config.version_bump_files.len()
    ));
  }
}
