//! frontbuild-lib: build descriptor composition for a front-end task runner.
//!
//! Template trees carry per-application build descriptors. This crate finds
//! them, merges them and composes the task runner's configuration:
//! - `descriptor`: discovery, comment stripping, parsing and merging
//! - `rules`: the closed set of build rules and the fragments they emit
//! - `compose`: tasks, watch entries, umbrella tasks and version-bump wiring
//! - `version_bump` and `touch`: the runner-side helpers the configuration calls

pub mod compose;
pub mod configure;
pub mod consts;
pub mod descriptor;
pub mod rules;
pub mod settings;
pub mod touch;
pub mod version_bump;
