//! Motionline keeps keyframe-driven 2D animation timelines consistent under editing.
//!
//! Each declared shape owns a [`Timeline`]: an ordered, gapless sequence of [`Motion`]s,
//! each interpolating between two [`ShapeSnapshot`]s over `[start_tick, end_tick]`.
//! The [`Animation`] aggregate routes edits to the right timeline and answers the
//! cross-shape queries a renderer needs.
//!
//! # Invariants
//!
//! - **Contiguity**: consecutive motions share a boundary tick. Insertion only extends the
//!   head or tail; deletion removes a whole chained run; speed-anchor edits ripple the
//!   change in period through the neighbours.
//! - **Kind consistency**: every motion of a shape carries the [`ShapeKind`] it was declared with.
//! - **By-value queries**: everything returned by a query is an owned copy.
//! - **Fail-fast**: a rejected operation leaves the animation exactly as it was.
//!
//! # Example
//!
//! ```
//! use motionline::{Animation, Motion, ShapeKind, ShapeSnapshot};
//!
//! let pose = ShapeSnapshot::from_raw(ShapeKind::Rectangle, 0, 0, 10, 10, 255, 0, 0)?;
//! let mut anim = Animation::new();
//! anim.declare_shape("R", ShapeKind::Rectangle)?;
//! anim.add_motion("R", Motion::new(0, 10, pose, pose)?)?;
//! anim.add_motion("R", Motion::new(10, 20, pose, pose)?)?;
//! anim.change_speed_anchor_start_point("R", 0, 15)?;
//! assert_eq!(anim.total_length(), 25);
//! # Ok::<(), motionline::MotionlineError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod shape;
mod timeline;

pub use animation::aggregate::Animation;
pub use animation::builder::{AnimationBuilder, SimpleBuilder};
pub use animation::opts::{AnimationOpts, DuplicatePolicy};
pub use foundation::core::{Canvas, Color, Position, Size, Tick};
pub use foundation::error::{MotionlineError, MotionlineResult};
pub use shape::kind::ShapeKind;
pub use shape::registry::ShapeRegistry;
pub use shape::snapshot::ShapeSnapshot;
pub use timeline::keyframe::Keyframe;
pub use timeline::motion::Motion;
pub use timeline::sequence::Timeline;
