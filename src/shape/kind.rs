use std::fmt;

use crate::foundation::error::{MotionlineError, MotionlineResult};

/// Closed set of shape variants a timeline can animate.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned rectangle.
    Rectangle,
    /// Ellipse inscribed in the width/height box.
    Ellipse,
}

impl ShapeKind {
    /// Resolve a declaration tag (`rectangle`/`rect`, `ellipse`/`oval`), ignoring ASCII case.
    pub fn from_tag(tag: &str) -> MotionlineResult<Self> {
        let tag = tag.trim();
        if tag.eq_ignore_ascii_case("rectangle") || tag.eq_ignore_ascii_case("rect") {
            Ok(Self::Rectangle)
        } else if tag.eq_ignore_ascii_case("ellipse") || tag.eq_ignore_ascii_case("oval") {
            Ok(Self::Ellipse)
        } else {
            Err(MotionlineError::invalid_argument(format!(
                "unknown shape type '{tag}'"
            )))
        }
    }

    /// Canonical tag used in textual output.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Ellipse => "ellipse",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/kind.rs"]
mod tests;
