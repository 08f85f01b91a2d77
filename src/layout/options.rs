//! Options forwarded to the layout engine

use serde::{Deserialize, Serialize};

/// Options passed through to the layout engine when rendering.
///
/// The adapter does not interpret these beyond forwarding; currently the only
/// option is image registration so the engine can size image nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutOpts {
    /// Images the DOT source references by relative path
    pub images: Vec<LayoutImage>,
}

impl LayoutOpts {
    /// Options with registered images
    pub fn with_images(images: Vec<LayoutImage>) -> Self {
        Self { images }
    }
}

/// Path and display dimensions of an image referenced by the DOT source.
///
/// Without a registration the engine cannot stat the file and drops the
/// node's `<image>` element from the output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LayoutImage {
    /// Relative path as written in the DOT `image` attribute
    pub path: String,
    /// Width the engine scales the image to, e.g. `"50px"`
    pub width: String,
    /// Height the engine scales the image to, e.g. `"50px"`
    pub height: String,
}

impl LayoutImage {
    /// Register an image by path and display dimensions
    pub fn new(
        path: impl Into<String>,
        width: impl Into<String>,
        height: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            width: width.into(),
            height: height.into(),
        }
    }
}
