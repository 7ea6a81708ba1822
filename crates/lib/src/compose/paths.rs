//! Path helpers for descriptor-declared files.

use std::path::MAIN_SEPARATOR_STR;

/// Characters that mark a source entry as a glob pattern.
const GLOB_MARKERS: &[char] = &['*', '?', '{', '}', '!'];

/// Replace the logical `/` separator with the host separator.
pub fn normalize_separator(path: &str) -> String {
  path.replace('/', MAIN_SEPARATOR_STR)
}

/// Whether the runner will expand this entry as a glob.
pub fn is_glob(path: &str) -> bool {
  path.contains(GLOB_MARKERS)
}
