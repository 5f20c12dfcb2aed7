use crate::{
    animation::aggregate::Animation,
    animation::opts::AnimationOpts,
    foundation::core::{Canvas, Tick},
    foundation::error::MotionlineResult,
    shape::kind::ShapeKind,
    shape::snapshot::ShapeSnapshot,
    timeline::keyframe::Keyframe,
    timeline::motion::Motion,
};

/// Narrow interface a parser front-end drives to assemble an animation.
///
/// Implementors own the model being built; the front-end only holds the builder.
pub trait AnimationBuilder<T> {
    /// Finish building and hand over the model.
    fn build(self) -> T
    where
        Self: Sized;

    /// Record canvas bounds.
    fn set_bounds(&mut self, x: i32, y: i32, width: i32, height: i32) -> &mut Self;

    /// Declare `name` with the shape type named by `type_tag`.
    fn declare_shape(&mut self, name: &str, type_tag: &str) -> MotionlineResult<&mut Self>;

    /// Add a motion from `(t1, x1, y1, w1, h1, r1, g1, b1)` to `(t2, ...)`.
    #[allow(clippy::too_many_arguments)]
    fn add_motion(
        &mut self,
        name: &str,
        t1: Tick,
        x1: i32,
        y1: i32,
        w1: i32,
        h1: i32,
        r1: i32,
        g1: i32,
        b1: i32,
        t2: Tick,
        x2: i32,
        y2: i32,
        w2: i32,
        h2: i32,
        r2: i32,
        g2: i32,
        b2: i32,
    ) -> MotionlineResult<&mut Self>;

    /// Add a single pose at tick `t`.
    #[allow(clippy::too_many_arguments)]
    fn add_keyframe(
        &mut self,
        name: &str,
        t: Tick,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        r: i32,
        g: i32,
        b: i32,
    ) -> MotionlineResult<&mut Self>;
}

/// [`AnimationBuilder`] producing an [`Animation`].
#[derive(Debug, Default)]
pub struct SimpleBuilder {
    model: Animation,
}

impl SimpleBuilder {
    /// Builder over an empty [`Animation`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder over an empty [`Animation`] with `opts`.
    pub fn with_opts(opts: AnimationOpts) -> Self {
        Self {
            model: Animation::with_opts(opts),
        }
    }

    /// Wrap an existing model so further operations extend it.
    pub fn from_animation(model: Animation) -> Self {
        Self { model }
    }

    /// The model assembled so far.
    pub fn model(&self) -> &Animation {
        &self.model
    }

    /// Mutable access for edits that have no builder counterpart.
    pub fn model_mut(&mut self) -> &mut Animation {
        &mut self.model
    }
}

impl AnimationBuilder<Animation> for SimpleBuilder {
    fn build(self) -> Animation {
        self.model
    }

    fn set_bounds(&mut self, x: i32, y: i32, width: i32, height: i32) -> &mut Self {
        self.model.set_bounds(Canvas {
            x,
            y,
            width,
            height,
        });
        self
    }

    fn declare_shape(&mut self, name: &str, type_tag: &str) -> MotionlineResult<&mut Self> {
        self.model
            .declare_shape(name, ShapeKind::from_tag(type_tag)?)?;
        Ok(self)
    }

    fn add_motion(
        &mut self,
        name: &str,
        t1: Tick,
        x1: i32,
        y1: i32,
        w1: i32,
        h1: i32,
        r1: i32,
        g1: i32,
        b1: i32,
        t2: Tick,
        x2: i32,
        y2: i32,
        w2: i32,
        h2: i32,
        r2: i32,
        g2: i32,
        b2: i32,
    ) -> MotionlineResult<&mut Self> {
        let kind = self.model.shape_type(name)?;
        let start = ShapeSnapshot::from_raw(kind, x1, y1, w1, h1, r1, g1, b1)?;
        let end = ShapeSnapshot::from_raw(kind, x2, y2, w2, h2, r2, g2, b2)?;
        self.model
            .add_motion(name, Motion::new(t1, t2, start, end)?)?;
        Ok(self)
    }

    fn add_keyframe(
        &mut self,
        name: &str,
        t: Tick,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        r: i32,
        g: i32,
        b: i32,
    ) -> MotionlineResult<&mut Self> {
        let kind = self.model.shape_type(name)?;
        let shape = ShapeSnapshot::from_raw(kind, x, y, w, h, r, g, b)?;
        self.model.add_keyframe(name, &Keyframe::new(t, shape))?;
        Ok(self)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/builder.rs"]
mod tests;
