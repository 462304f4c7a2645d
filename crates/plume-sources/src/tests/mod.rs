//! Synchronizer tests built on recording doubles.

mod support;
