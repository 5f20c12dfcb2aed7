use std::fmt;

use crate::foundation::{
    error::{MotionlineError, MotionlineResult},
    math::lerp_u32_positive,
};

/// Discrete animation time. Ticks may go negative after backward re-timing.
pub type Tick = i64;

/// Integer canvas position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Position {
    /// Position at `(x, y)`.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// 8-bit RGB color. Construction rejects channels outside `0..=255`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Color from integer channels; `InvalidArgument` if any is outside `0..=255`.
    pub fn new(r: i32, g: i32, b: i32) -> MotionlineResult<Self> {
        fn channel(name: &str, v: i32) -> MotionlineResult<u8> {
            u8::try_from(v).map_err(|_| {
                MotionlineError::invalid_argument(format!(
                    "color channel {name}={v} must be in 0..=255"
                ))
            })
        }

        Ok(Self {
            r: channel("r", r)?,
            g: channel("g", g)?,
            b: channel("b", b)?,
        })
    }

    /// Color from channels already in range.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Strictly positive width and height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Size {
    width: u32,
    height: u32,
}

impl Size {
    /// Size from integer dimensions; `InvalidArgument` unless both are `> 0`.
    pub fn new(width: i32, height: i32) -> MotionlineResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(MotionlineError::invalid_argument(format!(
                "width and height must be > 0 (got {width}x{height})"
            )));
        }
        Ok(Self {
            width: width as u32,
            height: height as u32,
        })
    }

    /// Width, at least `1`.
    pub fn width(self) -> u32 {
        self.width
    }

    /// Height, at least `1`.
    pub fn height(self) -> u32 {
        self.height
    }

    /// Blend toward `other`; dimensions are clamped to stay at least `1`.
    pub(crate) fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            width: lerp_u32_positive(self.width, other.width, t),
            height: lerp_u32_positive(self.height, other.height, t),
        }
    }
}

/// Canvas bounds recorded by `set_bounds`. Not interpreted by the timeline core.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Canvas {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width as given; not validated.
    pub width: i32,
    /// Height as given; not validated.
    pub height: i32,
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
