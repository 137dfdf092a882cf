//! External system integrations for yolo-export.
//!
//! - [`exporter`] - Model conversion through an external exporter program
//!
//! Adapters isolate external tools behind traits so the batch loop can be
//! tested with in-process fakes.

pub mod exporter;
