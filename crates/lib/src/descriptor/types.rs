//! Descriptor data types.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Media of one application, keyed by medium name (`js`, `css`, `img`, ...).
pub type Application = BTreeMap<String, MediumOptions>;

/// All known applications, keyed by application name.
pub type Applications = BTreeMap<String, Application>;

/// Build options for one medium of an application.
///
/// `src`, `dest`, `rules` and `options` must have the documented shape or the
/// whole descriptor is rejected. The switches are lenient: `bump` and `retina`
/// are on only for a literal `true`, and see [`WatchSetting`] for `watch`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MediumOptions {
  /// Source files or glob patterns, with `/` as separator.
  #[serde(default)]
  pub src: Vec<String>,

  /// Destination path without extension.
  #[serde(default)]
  pub dest: Option<String>,

  /// Rule names applied in order. Media without rules are not composed.
  #[serde(default)]
  pub rules: Option<Vec<String>>,

  #[serde(default)]
  pub watch: WatchSetting,

  /// Changes to the sources trigger the version bump.
  #[serde(default, deserialize_with = "literal_true")]
  pub bump: bool,

  /// Options attached to this medium's watch entry.
  #[serde(default)]
  pub options: Option<Value>,

  #[serde(default, deserialize_with = "literal_true")]
  pub retina: bool,
}

fn literal_true<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
  Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

/// The `watch` field: a switch, or extra files watched alongside `src`.
///
/// Only `false` disables watching. An array adds its string entries; any
/// other value leaves watching on with no extra files.
#[derive(Debug, Clone, PartialEq)]
pub enum WatchSetting {
  Enabled(bool),
  Files(Vec<String>),
}

impl Default for WatchSetting {
  fn default() -> Self {
    WatchSetting::Enabled(true)
  }
}

impl<'de> Deserialize<'de> for WatchSetting {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let setting = match Value::deserialize(deserializer)? {
      Value::Bool(false) => WatchSetting::Enabled(false),
      Value::Array(entries) => WatchSetting::Files(
        entries
          .into_iter()
          .filter_map(|entry| match entry {
            Value::String(file) => Some(file),
            _ => None,
          })
          .collect(),
      ),
      _ => WatchSetting::Enabled(true),
    };
    Ok(setting)
  }
}

impl WatchSetting {
  pub fn is_disabled(&self) -> bool {
    matches!(self, WatchSetting::Enabled(false))
  }

  pub fn extra_files(&self) -> &[String] {
    match self {
      WatchSetting::Files(files) => files,
      WatchSetting::Enabled(_) => &[],
    }
  }
}
