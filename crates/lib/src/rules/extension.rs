//! File extensions per build environment and medium.

/// Build environment an output file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
  /// Unminified output, produced by concatenation and style compilation.
  Dev,
  /// Minified output.
  Min,
}

impl Environment {
  pub const ALL: [Environment; 2] = [Environment::Dev, Environment::Min];
}

/// Media that have dedicated output extensions, in touch order.
pub const EXTENSION_MEDIA: [&str; 2] = ["js", "css"];

/// Extension for a medium in an environment, if that medium has one.
pub fn extension(env: Environment, medium: &str) -> Option<&'static str> {
  match (env, medium) {
    (Environment::Dev, "js") => Some(".dev.js"),
    (Environment::Dev, "css") => Some(".dev.css"),
    (Environment::Min, "js") => Some(".min.js"),
    (Environment::Min, "css") => Some(".min.css"),
    _ => None,
  }
}

/// Every known output extension, environment-major.
pub fn all_extensions() -> impl Iterator<Item = &'static str> {
  Environment::ALL
    .into_iter()
    .flat_map(|env| EXTENSION_MEDIA.into_iter().filter_map(move |medium| extension(env, medium)))
}
