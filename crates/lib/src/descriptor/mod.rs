//! Build descriptor discovery, parsing and merging.
//!
//! Descriptors are JSON documents named by convention (`grunt.json`) and
//! scattered across the template tree. Each declares one or more
//! applications, every application a set of media with their rules:
//!
//! ```json
//! {
//!   "site": {
//!     "js": { "src": ["a.js", "b.js"], "dest": "out/site", "rules": ["concatenate", "minify"] }
//!   }
//! }
//! ```
//!
//! Loading goes through a [`DescriptorSource`] so the merge can be driven
//! from the filesystem or from memory.

mod merge;
mod source;
mod types;

pub use merge::{merge, parse};
pub use source::{Descriptor, DescriptorError, DescriptorSource, FsDescriptorSource, MemoryDescriptorSource, strip_comments};
pub use types::*;
