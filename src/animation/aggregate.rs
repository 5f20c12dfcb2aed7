use std::fmt::Write as _;

use indexmap::IndexMap;

use crate::{
    animation::opts::{AnimationOpts, DuplicatePolicy},
    foundation::core::{Canvas, Color, Position, Tick},
    foundation::error::{MotionlineError, MotionlineResult},
    shape::kind::ShapeKind,
    shape::registry::ShapeRegistry,
    shape::snapshot::ShapeSnapshot,
    timeline::keyframe::Keyframe,
    timeline::motion::Motion,
    timeline::sequence::Timeline,
};

/// Every declared shape with its [`Timeline`], plus canvas metadata.
///
/// Requests are routed to the named timeline, which enforces contiguity and kind
/// consistency. Queries hand out owned copies; nothing returned aliases live state.
#[derive(Clone, Debug, Default)]
pub struct Animation {
    opts: AnimationOpts,
    canvas: Canvas,
    registry: ShapeRegistry,
    timelines: IndexMap<String, Timeline>,
}

impl Animation {
    /// Empty animation with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty animation with `opts`.
    pub fn with_opts(opts: AnimationOpts) -> Self {
        Self {
            opts,
            ..Self::default()
        }
    }

    /// Options this animation was created with.
    pub fn opts(&self) -> AnimationOpts {
        self.opts
    }

    /// Record canvas bounds. They are reported, never enforced.
    pub fn set_bounds(&mut self, canvas: Canvas) {
        self.canvas = canvas;
    }

    /// Canvas bounds last recorded.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Declared names and kinds.
    pub fn registry(&self) -> &ShapeRegistry {
        &self.registry
    }

    /// Declare `name` with `kind` and give it an empty timeline.
    ///
    /// A repeated name is handled per [`AnimationOpts::duplicate_shapes`].
    #[tracing::instrument(skip(self))]
    pub fn declare_shape(&mut self, name: &str, kind: ShapeKind) -> MotionlineResult<()> {
        match self.opts.duplicate_shapes {
            DuplicatePolicy::Reject => self.registry.declare(name, kind)?,
            DuplicatePolicy::Replace => {
                if let Some(previous) = self.registry.redeclare(name, kind) {
                    tracing::warn!(%previous, %kind, "replacing existing shape declaration");
                }
            }
        }
        self.timelines
            .insert(name.to_string(), Timeline::new(name, kind));
        Ok(())
    }

    /// Declared kind of `name`.
    pub fn shape_type(&self, name: &str) -> MotionlineResult<ShapeKind> {
        self.registry.type_of(name)
    }

    /// Borrow the timeline of `name`.
    pub fn timeline(&self, name: &str) -> MotionlineResult<&Timeline> {
        self.timelines
            .get(name)
            .ok_or_else(|| MotionlineError::unknown_shape(name))
    }

    fn timeline_mut(&mut self, name: &str) -> MotionlineResult<&mut Timeline> {
        self.timelines
            .get_mut(name)
            .ok_or_else(|| MotionlineError::unknown_shape(name))
    }

    /// Insert `motion` at the head or tail of the timeline of `name`.
    #[tracing::instrument(skip(self, motion), fields(start = motion.start_tick(), end = motion.end_tick()))]
    pub fn add_motion(&mut self, name: &str, motion: Motion) -> MotionlineResult<()> {
        self.timeline_mut(name)?.add_motion(motion)
    }

    /// Insert `frame` as a one-tick motion.
    #[tracing::instrument(skip(self, frame), fields(tick = frame.tick))]
    pub fn add_keyframe(&mut self, name: &str, frame: &Keyframe) -> MotionlineResult<()> {
        self.timeline_mut(name)?.add_keyframe(frame)
    }

    /// Remove the motion of `name` starting at `start_tick` and every motion chained after it.
    #[tracing::instrument(skip(self))]
    pub fn delete_motion(&mut self, name: &str, start_tick: Tick) -> MotionlineResult<Vec<Motion>> {
        let removed = self.timeline_mut(name)?.delete_motion(start_tick)?;
        tracing::debug!(removed = removed.len(), "deleted motion run");
        Ok(removed)
    }

    /// Copy of the motion of `name` starting at `tick`.
    pub fn find_by_start(&self, name: &str, tick: Tick) -> MotionlineResult<Motion> {
        self.timeline(name)?.find_by_start(tick).cloned()
    }

    /// Copy of the motion of `name` ending at `tick`.
    pub fn find_by_end(&self, name: &str, tick: Tick) -> MotionlineResult<Motion> {
        self.timeline(name)?.find_by_end(tick).cloned()
    }

    /// Copy of the motion of `name` spanning exactly `[start_tick, end_tick]`.
    pub fn find_exact(&self, name: &str, start_tick: Tick, end_tick: Tick) -> MotionlineResult<Motion> {
        self.timeline(name)?
            .find_exact(start_tick, end_tick)
            .cloned()
    }

    /// Recolor the end pose of the motion of `name` starting at `start_tick`.
    pub fn change_color(&mut self, name: &str, start_tick: Tick, color: Color) -> MotionlineResult<()> {
        self.timeline_mut(name)?.change_color(start_tick, color)
    }

    /// Move the end pose of the motion of `name` starting at `start_tick`.
    pub fn change_position(
        &mut self,
        name: &str,
        start_tick: Tick,
        position: Position,
    ) -> MotionlineResult<()> {
        self.timeline_mut(name)?.change_position(start_tick, position)
    }

    /// Resize the end pose of the motion of `name` starting at `start_tick`.
    pub fn change_size(
        &mut self,
        name: &str,
        start_tick: Tick,
        width: i32,
        height: i32,
    ) -> MotionlineResult<()> {
        self.timeline_mut(name)?
            .change_size(start_tick, width, height)
    }

    /// See [`Timeline::change_speed_anchor_start_point`].
    #[tracing::instrument(skip(self))]
    pub fn change_speed_anchor_start_point(
        &mut self,
        name: &str,
        start_tick: Tick,
        new_end_tick: Tick,
    ) -> MotionlineResult<()> {
        self.timeline_mut(name)?
            .change_speed_anchor_start_point(start_tick, new_end_tick)
    }

    /// See [`Timeline::change_speed_anchor_end_point`].
    #[tracing::instrument(skip(self))]
    pub fn change_speed_anchor_end_point(
        &mut self,
        name: &str,
        end_tick: Tick,
        new_start_tick: Tick,
    ) -> MotionlineResult<()> {
        self.timeline_mut(name)?
            .change_speed_anchor_end_point(end_tick, new_start_tick)
    }

    /// Owned copy of the motions of `name`; empty if declared but motionless.
    pub fn sequence_for(&self, name: &str) -> MotionlineResult<Vec<Motion>> {
        Ok(self.timeline(name)?.sequence())
    }

    /// Timelines with at least one motion, stably sorted by their first start tick.
    fn ordered(&self) -> Vec<&Timeline> {
        let mut out: Vec<&Timeline> = self.timelines.values().filter(|t| !t.is_empty()).collect();
        out.sort_by_key(|t| t.start_tick());
        out
    }

    /// Motion sequences of every shape that has motions, ordered by first start tick.
    /// Ties keep declaration order. Motionless shapes are left out.
    pub fn query(&self) -> IndexMap<String, Vec<Motion>> {
        self.ordered()
            .into_iter()
            .map(|t| (t.name().to_string(), t.sequence()))
            .collect()
    }

    /// Latest end tick across all shapes, or `0` if there are no motions.
    pub fn total_length(&self) -> Tick {
        self.timelines
            .values()
            .filter_map(Timeline::end_tick)
            .max()
            .unwrap_or(0)
    }

    /// Start tick of the first motion of the shape that sorts first in [`query`](Self::query),
    /// or `0` if there are no motions.
    ///
    /// Each timeline is time-ordered, so this is also the earliest start tick overall.
    pub fn global_start_time(&self) -> Tick {
        self.ordered()
            .first()
            .and_then(|t| t.start_tick())
            .unwrap_or(0)
    }

    /// Interpolated pose of every shape visible at `tick`, in [`query`](Self::query) order.
    pub fn frame_at(&self, tick: Tick) -> Vec<(String, ShapeSnapshot)> {
        self.ordered()
            .into_iter()
            .filter_map(|t| t.shape_at(tick).map(|s| (t.name().to_string(), s)))
            .collect()
    }

    /// Textual description: canvas line, then each shape and its motions.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "canvas {}", self.canvas);

        let ordered = self.ordered();
        let motionless = self.timelines.values().filter(|t| t.is_empty());
        for t in ordered.into_iter().chain(motionless) {
            let _ = writeln!(out, "shape {} {}", t.name(), t.kind());
            for m in t.motions() {
                let _ = writeln!(out, "{}", m.describe(t.name()));
            }
        }
        out
    }

    /// JSON document with the canvas and each shape's kind and motions, in describe order.
    pub fn to_json_value(&self) -> MotionlineResult<serde_json::Value> {
        #[derive(serde::Serialize)]
        struct ShapeDoc<'a> {
            name: &'a str,
            kind: ShapeKind,
            motions: &'a [Motion],
        }

        #[derive(serde::Serialize)]
        struct Doc<'a> {
            canvas: Canvas,
            total_length: Tick,
            global_start_time: Tick,
            shapes: Vec<ShapeDoc<'a>>,
        }

        let ordered = self.ordered();
        let motionless = self.timelines.values().filter(|t| t.is_empty());
        let doc = Doc {
            canvas: self.canvas,
            total_length: self.total_length(),
            global_start_time: self.global_start_time(),
            shapes: ordered
                .into_iter()
                .chain(motionless)
                .map(|t| ShapeDoc {
                    name: t.name(),
                    kind: t.kind(),
                    motions: t.motions(),
                })
                .collect(),
        };
        Ok(serde_json::to_value(&doc).map_err(anyhow::Error::from)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/aggregate.rs"]
mod tests;
