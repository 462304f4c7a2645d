//! Override directive model shared by the capability builder.
//!
//! Hosts hand the builder a set of per-field directives describing how each
//! catalogued capability field should be produced. The directives are plain
//! data: they carry no protocol knowledge and are consumed read-only during a
//! build. Keeping them in their own crate lets host configuration layers
//! deserialize them without pulling in the LSP machinery.

mod directive;

pub use directive::{OverrideDirective, OverrideSpec};
