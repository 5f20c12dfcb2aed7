use crate::{
    foundation::core::{Color, Position, Tick},
    foundation::error::{MotionlineError, MotionlineResult},
    shape::kind::ShapeKind,
    shape::snapshot::ShapeSnapshot,
    timeline::keyframe::Keyframe,
    timeline::motion::Motion,
};

/// Time-ordered, gapless sequence of motions for one named shape.
///
/// Consecutive motions always share a boundary (`m[i].end_tick() == m[i + 1].start_tick()`)
/// and every motion carries the timeline's [`ShapeKind`]. New motions may only extend
/// the tail or precede the head; edits in the middle go through boundary mutation.
#[derive(Clone, Debug)]
pub struct Timeline {
    name: String,
    kind: ShapeKind,
    pub(in crate::timeline) motions: Vec<Motion>,
}

impl Timeline {
    /// Empty timeline for `name`, accepting only motions of `kind`.
    pub fn new(name: impl Into<String>, kind: ShapeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            motions: Vec::new(),
        }
    }

    /// Shape name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared shape kind.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Borrow the live motions.
    pub fn motions(&self) -> &[Motion] {
        &self.motions
    }

    /// Owned copy of the motions; later edits to the timeline do not affect it.
    pub fn sequence(&self) -> Vec<Motion> {
        self.motions.clone()
    }

    /// Number of motions.
    pub fn len(&self) -> usize {
        self.motions.len()
    }

    /// True if the timeline has no motions.
    pub fn is_empty(&self) -> bool {
        self.motions.is_empty()
    }

    /// Start tick of the first motion.
    pub fn start_tick(&self) -> Option<Tick> {
        self.motions.first().map(Motion::start_tick)
    }

    /// End tick of the last motion.
    pub fn end_tick(&self) -> Option<Tick> {
        self.motions.last().map(Motion::end_tick)
    }

    /// True if every consecutive pair of motions shares a boundary.
    pub fn is_contiguous(&self) -> bool {
        self.motions.windows(2).all(|w| w[0].adj_next(&w[1]))
    }

    /// Insert `motion` at the tail (if it starts where the last motion ends) or at
    /// the head (if it ends where the first motion starts).
    pub fn add_motion(&mut self, motion: Motion) -> MotionlineResult<()> {
        if motion.kind() != self.kind {
            return Err(MotionlineError::TypeMismatch {
                name: self.name.clone(),
                expected: self.kind,
                found: motion.kind(),
            });
        }

        let tail_adjacent = self.motions.last().is_none_or(|last| last.adj_next(&motion));
        let head_adjacent = self.motions.first().is_some_and(|first| first.adj_prior(&motion));

        if tail_adjacent {
            self.motions.push(motion);
        } else if head_adjacent {
            self.motions.insert(0, motion);
        } else {
            return Err(MotionlineError::NonAdjacentMotion {
                name: self.name.clone(),
                start: motion.start_tick(),
                end: motion.end_tick(),
            });
        }
        Ok(())
    }

    /// Insert a keyframe as the one-tick motion `[tick, tick + 1]`.
    pub fn add_keyframe(&mut self, frame: &Keyframe) -> MotionlineResult<()> {
        self.add_motion(frame.to_motion()?)
    }

    /// Remove the motion starting at `start_tick` together with every motion chained
    /// after it, and return the removed run.
    pub fn delete_motion(&mut self, start_tick: Tick) -> MotionlineResult<Vec<Motion>> {
        let first = self.index_by_start(start_tick)?;
        let mut end = first + 1;
        while end < self.motions.len() && self.motions[end - 1].adj_next(&self.motions[end]) {
            end += 1;
        }
        Ok(self.motions.drain(first..end).collect())
    }

    /// The motion starting at `tick`, or `MotionNotFound`.
    pub fn find_by_start(&self, tick: Tick) -> MotionlineResult<&Motion> {
        Ok(&self.motions[self.index_by_start(tick)?])
    }

    /// The motion ending at `tick`, or `MotionNotFound`.
    pub fn find_by_end(&self, tick: Tick) -> MotionlineResult<&Motion> {
        Ok(&self.motions[self.index_by_end(tick)?])
    }

    /// The motion spanning exactly `[start_tick, end_tick]`, or `MotionNotFound`.
    pub fn find_exact(&self, start_tick: Tick, end_tick: Tick) -> MotionlineResult<&Motion> {
        let m = self.find_by_start(start_tick)?;
        if m.end_tick() != end_tick {
            return Err(MotionlineError::motion_not_found(format!(
                "no motion of '{}' spans [{start_tick}, {end_tick}]",
                self.name
            )));
        }
        Ok(m)
    }

    /// Recolor the end pose of the motion starting at `start_tick`.
    pub fn change_color(&mut self, start_tick: Tick, color: Color) -> MotionlineResult<()> {
        let idx = self.index_by_start(start_tick)?;
        self.motions[idx].change_color(color);
        Ok(())
    }

    /// Move the end pose of the motion starting at `start_tick`.
    pub fn change_position(&mut self, start_tick: Tick, position: Position) -> MotionlineResult<()> {
        let idx = self.index_by_start(start_tick)?;
        self.motions[idx].change_position(position);
        Ok(())
    }

    /// Resize the end pose of the motion starting at `start_tick`.
    pub fn change_size(&mut self, start_tick: Tick, width: i32, height: i32) -> MotionlineResult<()> {
        let idx = self.index_by_start(start_tick)?;
        self.motions[idx].change_size(width, height)
    }

    /// Interpolated pose at `tick`. On a boundary shared by two motions the later one wins.
    pub fn shape_at(&self, tick: Tick) -> Option<ShapeSnapshot> {
        self.motions
            .iter()
            .rev()
            .find(|m| m.contains(tick))
            .and_then(|m| m.shape_at(tick))
    }

    pub(in crate::timeline) fn index_by_start(&self, tick: Tick) -> MotionlineResult<usize> {
        self.motions
            .iter()
            .position(|m| m.start_tick() == tick)
            .ok_or_else(|| {
                MotionlineError::motion_not_found(format!(
                    "no motion of '{}' starts at {tick}",
                    self.name
                ))
            })
    }

    pub(in crate::timeline) fn index_by_end(&self, tick: Tick) -> MotionlineResult<usize> {
        self.motions
            .iter()
            .position(|m| m.end_tick() == tick)
            .ok_or_else(|| {
                MotionlineError::motion_not_found(format!(
                    "no motion of '{}' ends at {tick}",
                    self.name
                ))
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/sequence.rs"]
mod tests;
