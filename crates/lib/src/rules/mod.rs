//! Build rules and the fragments they produce.
//!
//! A rule is a named build step declared in a descriptor's `rules` list. The
//! set is closed: parsing an unknown name fails, and every rule maps to a pure
//! processor producing a [`Fragment`] for the runner section it writes to.
//!
//! Most rules write to a section named after themselves. `sprite-inject` is an
//! alias: it is configured under the runner's `exec` section.

mod extension;
mod fragment;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde_json::json;
use thiserror::Error;

use crate::consts::CONCAT_SEPARATOR;

pub use extension::{EXTENSION_MEDIA, Environment, all_extensions, extension};
pub use fragment::{Command, FileSet, Fragment};

/// Errors raised while resolving or applying a rule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
  #[error("unknown rule: {0}")]
  Unknown(String),

  #[error("rule {0} requires a dest")]
  MissingDest(Rule),

  #[error("rule {0} requires at least one src")]
  MissingSource(Rule),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rule {
  Lint,
  Concatenate,
  Wrap,
  Minify,
  CompileStyle,
  MinifyStyle,
  SpriteInject,
  Touch,
}

/// Resolved medium options a rule is applied to.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
  pub src: &'a [String],
  pub dest: Option<&'a str>,
  /// Medium name, used to pick output extensions.
  pub extension: &'a str,
  pub retina: bool,
  pub sprite_injector: &'a Path,
}

impl Rule {
  pub const ALL: [Rule; 8] = [
    Rule::Lint,
    Rule::Concatenate,
    Rule::Wrap,
    Rule::Minify,
    Rule::CompileStyle,
    Rule::MinifyStyle,
    Rule::SpriteInject,
    Rule::Touch,
  ];

  pub fn name(self) -> &'static str {
    match self {
      Rule::Lint => "lint",
      Rule::Concatenate => "concatenate",
      Rule::Wrap => "wrap",
      Rule::Minify => "minify",
      Rule::CompileStyle => "compile-style",
      Rule::MinifyStyle => "minify-style",
      Rule::SpriteInject => "sprite-inject",
      Rule::Touch => "touch",
    }
  }

  /// Runner section this rule's fragments are stored under.
  pub fn runner_key(self) -> &'static str {
    match self {
      Rule::SpriteInject => "exec",
      rule => rule.name(),
    }
  }

  /// Whether the rule is configured under another section's name.
  pub fn is_alias(self) -> bool {
    self.runner_key() != self.name()
  }

  /// Produce the runner fragment for this rule.
  pub fn apply(self, input: &RuleInput<'_>) -> Result<Fragment, RuleError> {
    let dest = || input.dest.ok_or(RuleError::MissingDest(self));
    let dev = |medium: &str| extension(Environment::Dev, medium).unwrap_or_default();
    let min = |medium: &str| extension(Environment::Min, medium).unwrap_or_default();

    let fragment = match self {
      Rule::Lint => Fragment::Files(FileSet::new(input.src.to_vec())),
      Rule::Concatenate => Fragment::Files(
        FileSet::new(input.src.to_vec())
          .with_dest(format!("{}{}", dest()?, dev(input.extension)))
          .with_options(json!({ "separator": CONCAT_SEPARATOR })),
      ),
      Rule::Wrap => {
        let file = format!("{}{}", dest()?, dev("js"));
        Fragment::Files(FileSet::new(vec![file.clone()]).with_dest(file))
      }
      Rule::Minify => {
        let dest = dest()?;
        Fragment::Files(FileSet::new(vec![format!("{}{}", dest, dev("js"))]).with_dest(format!("{}{}", dest, min("js"))))
      }
      Rule::CompileStyle => {
        Fragment::Files(FileSet::new(input.src.to_vec()).with_dest(format!("{}{}", dest()?, dev("css"))))
      }
      Rule::MinifyStyle => {
        let dest = dest()?;
        Fragment::Files(
          FileSet::new(vec![format!("{}{}", dest, dev("css"))]).with_dest(format!("{}{}", dest, min("css"))),
        )
      }
      Rule::SpriteInject => {
        let image = input.src.first().ok_or(RuleError::MissingSource(self))?;
        let mut cmd = format!(
          "{} --image {} --stylus {}",
          input.sprite_injector.display(),
          image,
          dest()?
        );
        if input.retina {
          cmd.push_str(" --retina");
        }
        Fragment::Command(Command { cmd })
      }
      Rule::Touch => {
        let files = match input.dest {
          Some(dest) => all_extensions().map(|ext| format!("{}{}", dest, ext)).collect(),
          None => Vec::new(),
        };
        Fragment::Files(FileSet::new(files))
      }
    };

    Ok(fragment)
  }
}

impl FromStr for Rule {
  type Err = RuleError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Rule::ALL
      .into_iter()
      .find(|rule| rule.name() == s)
      .ok_or_else(|| RuleError::Unknown(s.to_string()))
  }
}

impl fmt::Display for Rule {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
