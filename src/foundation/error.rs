use crate::foundation::core::Tick;
use crate::shape::kind::ShapeKind;

/// Convenience result type used across Motionline.
pub type MotionlineResult<T> = Result<T, MotionlineError>;

/// Top-level error type for Motionline operations.
///
/// Every variant describes a contract violation by the caller. No operation that
/// returns one of these leaves a timeline partially edited.
#[derive(thiserror::Error, Debug)]
pub enum MotionlineError {
    /// A constructor argument was out of range (colors, sizes, degenerate intervals, tags).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation referenced a shape name that was never declared.
    #[error("unknown shape '{name}'")]
    UnknownShape {
        /// The offending name.
        name: String,
    },

    /// `declare_shape` was called twice for the same name under [`DuplicatePolicy::Reject`](crate::DuplicatePolicy::Reject).
    #[error("shape '{name}' is already declared")]
    DuplicateName {
        /// The offending name.
        name: String,
    },

    /// A motion's shape kind differs from the kind declared for the name.
    #[error("type mismatch for '{name}': declared {expected}, motion is {found}")]
    TypeMismatch {
        /// Shape name.
        name: String,
        /// Declared kind.
        expected: ShapeKind,
        /// Kind carried by the rejected motion.
        found: ShapeKind,
    },

    /// The motion would neither extend the tail nor precede the head of the timeline.
    #[error("motion [{start}, {end}] is not adjacent to the timeline of '{name}'")]
    NonAdjacentMotion {
        /// Shape name.
        name: String,
        /// Start tick of the rejected motion.
        start: Tick,
        /// End tick of the rejected motion.
        end: Tick,
    },

    /// A lookup by start and/or end tick found nothing.
    #[error("motion not found: {0}")]
    MotionNotFound(String),

    /// A boundary edit would make `start >= end`, or a shift would move a boundary out of
    /// the tick range.
    #[error("invalid interval: start {start} must be before end {end}")]
    InvalidInterval {
        /// Resulting start tick.
        start: Tick,
        /// Resulting end tick.
        end: Tick,
    },

    /// Any other failure bubbling up from a collaborator.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionlineError {
    /// Build an [`InvalidArgument`](Self::InvalidArgument) error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build an [`UnknownShape`](Self::UnknownShape) error.
    pub fn unknown_shape(name: impl Into<String>) -> Self {
        Self::UnknownShape { name: name.into() }
    }

    /// Build a [`DuplicateName`](Self::DuplicateName) error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Build a [`MotionNotFound`](Self::MotionNotFound) error.
    pub fn motion_not_found(msg: impl Into<String>) -> Self {
        Self::MotionNotFound(msg.into())
    }

    /// Build an [`InvalidInterval`](Self::InvalidInterval) error.
    pub fn invalid_interval(start: Tick, end: Tick) -> Self {
        Self::InvalidInterval { start, end }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
