use crate::{
    foundation::core::Tick,
    foundation::error::{MotionlineError, MotionlineResult},
    shape::snapshot::ShapeSnapshot,
    timeline::motion::Motion,
};

/// A single pose at one tick. Only used as an insertion primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Keyframe {
    /// Tick the pose is held at.
    pub tick: Tick,
    /// The pose.
    pub shape: ShapeSnapshot,
}

impl Keyframe {
    /// Pair `shape` with `tick`.
    pub fn new(tick: Tick, shape: ShapeSnapshot) -> Self {
        Self { tick, shape }
    }

    /// The one-tick motion `[tick, tick + 1]` holding this pose.
    ///
    /// `InvalidArgument` at `Tick::MAX`, where the motion would end past the tick range.
    pub fn to_motion(&self) -> MotionlineResult<Motion> {
        let end = self.tick.checked_add(1).ok_or_else(|| {
            MotionlineError::invalid_argument(format!("keyframe at tick {} has no next tick", self.tick))
        })?;
        Motion::new(self.tick, end, self.shape, self.shape)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/keyframe.rs"]
mod tests;
