/// What [`Animation::declare_shape`](crate::Animation::declare_shape) does with a name
/// that is already declared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail with `DuplicateName` and keep the existing declaration.
    #[default]
    Reject,
    /// Record the new kind and start the shape over with an empty timeline.
    Replace,
}

/// Behavioural knobs for an [`Animation`](crate::Animation).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationOpts {
    /// Handling of repeated `declare_shape` names.
    pub duplicate_shapes: DuplicatePolicy,
}
