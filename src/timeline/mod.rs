pub(crate) mod anchor;
pub(crate) mod keyframe;
pub(crate) mod motion;
pub(crate) mod sequence;
