//! Crate-level tests exercising the builder end to end.
