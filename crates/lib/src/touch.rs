//! Delayed file touching.
//!
//! Watch chains re-trigger by touching their outputs: the touch task waits a
//! short delay and then bumps the modification time of every target (or
//! creates it when asked to). The delay runs detached from the caller, so the
//! task that scheduled the touch has usually finished by the time files change.

use std::fs::{self, FileTimes, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::consts::TOUCH_DELAY_MS;

/// Options shared by every touch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchOptions {
  pub delay: Duration,
  /// Create missing files for every request.
  pub create: bool,
}

impl Default for TouchOptions {
  fn default() -> Self {
    Self {
      delay: Duration::from_millis(TOUCH_DELAY_MS),
      create: false,
    }
  }
}

/// Files to touch, with an optional per-request create flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchRequest {
  pub files: Vec<PathBuf>,
  pub create: bool,
}

impl TouchRequest {
  pub fn new(files: Vec<PathBuf>) -> Self {
    Self { files, create: false }
  }

  pub fn creating(mut self) -> Self {
    self.create = true;
    self
  }
}

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TouchOutcome {
  Touched(PathBuf),
  Created(PathBuf),
  /// Neither present nor allowed to be created.
  Missing(PathBuf),
  Failed { path: PathBuf, message: String },
}

/// Touch `request` after `options.delay`, without waiting for it.
///
/// Existing files get `now + delay` as their access and modification time,
/// where `now` is the time of this call. Overlapping calls are independent.
/// Must be called from within a tokio runtime: from synchronous code, call it
/// inside `Runtime::block_on(async { .. })`, not as `block_on`'s argument.
pub fn schedule_touch(request: TouchRequest, options: TouchOptions) -> JoinHandle<Vec<TouchOutcome>> {
  let stamp = SystemTime::now() + options.delay;
  tokio::spawn(async move {
    tokio::time::sleep(options.delay).await;
    touch_files(&request, options.create, stamp)
  })
}

/// Touch every file in `request` right away, stamping existing ones with `stamp`.
pub fn touch_files(request: &TouchRequest, create: bool, stamp: SystemTime) -> Vec<TouchOutcome> {
  let create = create || request.create;
  request
    .files
    .iter()
    .map(|file| touch_file(file, create, stamp))
    .collect()
}

fn touch_file(path: &Path, create: bool, stamp: SystemTime) -> TouchOutcome {
  if path.exists() {
    let times = FileTimes::new().set_accessed(stamp).set_modified(stamp);
    let result = OpenOptions::new()
      .write(true)
      .open(path)
      .and_then(|file| file.set_times(times));
    match result {
      Ok(()) => {
        info!(file = %path.display(), "touched");
        TouchOutcome::Touched(path.to_path_buf())
      }
      Err(e) => failed(path, e),
    }
  } else if create {
    match fs::write(path, "") {
      Ok(()) => {
        info!(file = %path.display(), "created");
        TouchOutcome::Created(path.to_path_buf())
      }
      Err(e) => failed(path, e),
    }
  } else {
    warn!(file = %path.display(), "file does not exist");
    TouchOutcome::Missing(path.to_path_buf())
  }
}

fn failed(path: &Path, e: std::io::Error) -> TouchOutcome {
  error!(file = %path.display(), error = %e, "failed to touch");
  TouchOutcome::Failed {
    path: path.to_path_buf(),
    message: e.to_string(),
  }
}
