//! Implementation of the `fb touch` command.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use frontbuild_lib::touch::{TouchOptions, TouchOutcome, TouchRequest, schedule_touch};

use crate::output::{print_error, print_info, print_success, print_warning};

/// Touch `files` after `delay`, waiting for the scheduled touch to finish.
///
/// The runner invokes this as a child process, so the delay already runs
/// outside the task that requested it. The process stays alive until the
/// files are stamped; exiting earlier would drop the pending touch.
/// Missing files are reported but do not fail the command.
pub fn cmd_touch(files: Vec<PathBuf>, delay: Duration, create: bool) -> Result<()> {
  print_info(&format!(
    "Touching {} file(s) in {}",
    files.len(),
    humantime::format_duration(delay)
  ));

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  let options = TouchOptions { delay, create };
  let outcomes = rt
    .block_on(async { schedule_touch(TouchRequest::new(files), options).await })
    .context("Touch task panicked")?;

  for outcome in outcomes {
    match outcome {
      TouchOutcome::Touched(path) => print_success(&format!("Touched: {}", path.display())),
      TouchOutcome::Created(path) => print_success(&format!("Created: {}", path.display())),
      TouchOutcome::Missing(path) => print_warning(&format!("File does not exist: {}", path.display())),
      TouchOutcome::Failed { path, message } => print_error(&format!("{}: {}", path.display(), message)),
    }
  }

  Ok(())
}
