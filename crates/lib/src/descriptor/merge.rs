//! Parsing descriptors and folding them into one application map.

use tracing::{error, info};

use super::source::Descriptor;
use super::types::Applications;

/// Parse one descriptor's stripped content.
pub fn parse(descriptor: &Descriptor) -> Result<Applications, serde_json::Error> {
  serde_json::from_str(&descriptor.content)
}

/// Merge descriptors into `applications`, in order.
///
/// Top-level application keys are replaced wholesale: a later descriptor
/// declaring `site` discards every medium an earlier one declared for `site`.
/// Descriptors that fail to parse are logged and skipped.
pub fn merge(mut applications: Applications, descriptors: &[Descriptor]) -> Applications {
  for descriptor in descriptors {
    let parsed = match parse(descriptor) {
      Ok(parsed) => parsed,
      Err(e) => {
        error!(descriptor = %descriptor.path.display(), error = %e, "failed to parse build descriptor");
        continue;
      }
    };

    info!(descriptor = %descriptor.path.display(), applications = parsed.len(), "parsed build descriptor");
    for (name, application) in parsed {
      info!(application = %name, "registered application");
      applications.insert(name, application);
    }
  }

  applications
}
