use crate::{
    foundation::core::{Color, Position, Tick},
    foundation::error::{MotionlineError, MotionlineResult},
    foundation::math::progress,
    shape::kind::ShapeKind,
    shape::snapshot::ShapeSnapshot,
};

/// A shape interpolating from `start_shape` at `start_tick` to `end_shape` at `end_tick`.
///
/// Invariants: `start_tick < end_tick`, and both snapshots share one [`ShapeKind`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Motion {
    start_tick: Tick,
    end_tick: Tick,
    start_shape: ShapeSnapshot,
    end_shape: ShapeSnapshot,
}

impl Motion {
    /// Build a motion. Fails with `InvalidArgument` on a non-positive interval, a period
    /// too long to represent as a [`Tick`], or mixed kinds.
    pub fn new(
        start_tick: Tick,
        end_tick: Tick,
        start_shape: ShapeSnapshot,
        end_shape: ShapeSnapshot,
    ) -> MotionlineResult<Self> {
        if !valid_interval(start_tick, end_tick) {
            return Err(MotionlineError::invalid_argument(format!(
                "motion [{start_tick}, {end_tick}] must have a positive period that fits in a tick"
            )));
        }
        if !start_shape.is_same_kind(&end_shape) {
            return Err(MotionlineError::invalid_argument(format!(
                "motion cannot change shape kind ({} -> {})",
                start_shape.kind(),
                end_shape.kind()
            )));
        }
        Ok(Self {
            start_tick,
            end_tick,
            start_shape,
            end_shape,
        })
    }

    /// First tick of the interval.
    pub fn start_tick(&self) -> Tick {
        self.start_tick
    }

    /// Last tick of the interval.
    pub fn end_tick(&self) -> Tick {
        self.end_tick
    }

    /// Pose at `start_tick`.
    pub fn start_shape(&self) -> ShapeSnapshot {
        self.start_shape
    }

    /// Pose at `end_tick`.
    pub fn end_shape(&self) -> ShapeSnapshot {
        self.end_shape
    }

    /// Kind shared by both poses.
    pub fn kind(&self) -> ShapeKind {
        self.start_shape.kind()
    }

    /// `end_tick - start_tick`, always positive.
    pub fn period(&self) -> Tick {
        self.end_tick - self.start_tick
    }

    /// True if `other` can be appended right after `self`.
    pub fn adj_next(&self, other: &Motion) -> bool {
        self.end_tick == other.start_tick
    }

    /// True if `other` can be prepended right before `self`.
    pub fn adj_prior(&self, other: &Motion) -> bool {
        other.end_tick == self.start_tick
    }

    /// True if `tick` lies in `[start_tick, end_tick]`.
    pub fn contains(&self, tick: Tick) -> bool {
        self.start_tick <= tick && tick <= self.end_tick
    }

    /// Move the end boundary. Neighbours are not adjusted here.
    pub fn change_end_tick(&mut self, end_tick: Tick) -> MotionlineResult<()> {
        if !valid_interval(self.start_tick, end_tick) {
            return Err(MotionlineError::invalid_interval(self.start_tick, end_tick));
        }
        self.end_tick = end_tick;
        Ok(())
    }

    /// Move the start boundary. Neighbours are not adjusted here.
    pub fn change_start_tick(&mut self, start_tick: Tick) -> MotionlineResult<()> {
        if !valid_interval(start_tick, self.end_tick) {
            return Err(MotionlineError::invalid_interval(start_tick, self.end_tick));
        }
        self.start_tick = start_tick;
        Ok(())
    }

    /// Shift both boundaries later by `delta`. Nothing moves if either boundary
    /// would leave the tick range.
    pub(crate) fn push_forward(&mut self, delta: Tick) -> MotionlineResult<()> {
        self.shift_to(self.start_tick.checked_add(delta), self.end_tick.checked_add(delta))
    }

    /// Shift both boundaries earlier by `delta`. Nothing moves if either boundary
    /// would leave the tick range.
    pub(crate) fn push_backward(&mut self, delta: Tick) -> MotionlineResult<()> {
        self.shift_to(self.start_tick.checked_sub(delta), self.end_tick.checked_sub(delta))
    }

    fn shift_to(&mut self, start: Option<Tick>, end: Option<Tick>) -> MotionlineResult<()> {
        let (Some(start), Some(end)) = (start, end) else {
            return Err(MotionlineError::invalid_interval(
                start.unwrap_or(self.start_tick),
                end.unwrap_or(self.end_tick),
            ));
        };
        self.start_tick = start;
        self.end_tick = end;
        Ok(())
    }

    /// Recolor the end pose.
    pub fn change_color(&mut self, color: Color) {
        self.end_shape = self.end_shape.with_color(color);
    }

    /// Move the end pose.
    pub fn change_position(&mut self, position: Position) {
        self.end_shape = self.end_shape.with_position(position);
    }

    /// Resize the end pose; `InvalidArgument` on non-positive dimensions.
    pub fn change_size(&mut self, width: i32, height: i32) -> MotionlineResult<()> {
        self.end_shape = self.end_shape.with_size(width, height)?;
        Ok(())
    }

    /// Interpolated pose at `tick`, or `None` outside `[start_tick, end_tick]`.
    pub fn shape_at(&self, tick: Tick) -> Option<ShapeSnapshot> {
        if !self.contains(tick) {
            return None;
        }
        let t = progress(self.start_tick, self.end_tick, tick);
        Some(self.start_shape.lerp(&self.end_shape, t))
    }

    /// One line of the textual format: `motion <name> <t1> <start>    <t2> <end>`.
    pub fn describe(&self, name: &str) -> String {
        format!(
            "motion {name} {} {}    {} {}",
            self.start_tick, self.start_shape, self.end_tick, self.end_shape
        )
    }
}

/// `start < end` with `end - start` representable, so [`Motion::period`] cannot overflow.
fn valid_interval(start: Tick, end: Tick) -> bool {
    start < end && end.checked_sub(start).is_some()
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/motion.rs"]
mod tests;
