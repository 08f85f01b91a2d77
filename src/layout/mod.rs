//! Asynchronous boundary around the external Graphviz layout engine
//!
//! This module delegates: DOT source goes in verbatim, SVG text comes back,
//! and engine failures propagate unchanged. The engine binary is resolved
//! once at load time; layout calls are independently asynchronous with no
//! ordering guarantee between concurrent invocations.

pub mod engine;
pub mod error;
pub mod options;

pub use engine::{GraphvizEngine, DEFAULT_ENGINE, OUTPUT_FORMAT};
pub use error::LayoutError;
pub use options::{LayoutImage, LayoutOpts};
