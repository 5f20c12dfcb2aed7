use std::fmt;

use crate::{
    foundation::core::{Color, Position, Size},
    foundation::error::MotionlineResult,
    foundation::math::{lerp_i32, lerp_u8},
    shape::kind::ShapeKind,
};

/// Immutable pose of a shape at one instant.
///
/// `ShapeSnapshot` is `Copy`; every "edit" returns a new value, so a snapshot handed
/// out by a query can never observe later timeline edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct ShapeSnapshot {
    kind: ShapeKind,
    position: Position,
    color: Color,
    size: Size,
}

impl ShapeSnapshot {
    /// Build a snapshot, validating that `width` and `height` are strictly positive.
    pub fn new(
        kind: ShapeKind,
        position: Position,
        color: Color,
        width: i32,
        height: i32,
    ) -> MotionlineResult<Self> {
        Ok(Self {
            kind,
            position,
            color,
            size: Size::new(width, height)?,
        })
    }

    /// Build a snapshot from the raw integers a builder front-end receives.
    #[allow(clippy::too_many_arguments)]
    pub fn from_raw(
        kind: ShapeKind,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        r: i32,
        g: i32,
        b: i32,
    ) -> MotionlineResult<Self> {
        Self::new(kind, Position::new(x, y), Color::new(r, g, b)?, width, height)
    }

    /// Shape variant.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Position of the shape.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Fill color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Width, at least `1`.
    pub fn width(&self) -> u32 {
        self.size.width()
    }

    /// Height, at least `1`.
    pub fn height(&self) -> u32 {
        self.size.height()
    }

    /// True if both snapshots are the same shape variant.
    pub fn is_same_kind(&self, other: &Self) -> bool {
        self.kind == other.kind
    }

    /// Copy with a new color.
    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    /// Copy with a new position.
    pub fn with_position(self, position: Position) -> Self {
        Self { position, ..self }
    }

    /// Copy with a new size; fails like construction does on non-positive dimensions.
    pub fn with_size(self, width: i32, height: i32) -> MotionlineResult<Self> {
        Ok(Self {
            size: Size::new(width, height)?,
            ..self
        })
    }

    /// Linear blend toward `other` at `t` in `[0, 1]`. The kind of `self` is kept.
    pub(crate) fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            kind: self.kind,
            position: Position {
                x: lerp_i32(self.position.x, other.position.x, t),
                y: lerp_i32(self.position.y, other.position.y, t),
            },
            color: Color {
                r: lerp_u8(self.color.r, other.color.r, t),
                g: lerp_u8(self.color.g, other.color.g, t),
                b: lerp_u8(self.color.b, other.color.b, t),
            },
            size: self.size.lerp(other.size, t),
        }
    }
}

impl fmt::Display for ShapeSnapshot {
    /// `x y w h r g b`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.position.x,
            self.position.y,
            self.size.width(),
            self.size.height(),
            self.color.r,
            self.color.g,
            self.color.b
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/snapshot.rs"]
mod tests;
