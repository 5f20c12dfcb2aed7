use indexmap::IndexMap;

use crate::{
    foundation::error::{MotionlineError, MotionlineResult},
    shape::kind::ShapeKind,
};

/// Declared shape names and their kinds, in declaration order.
#[derive(Clone, Debug, Default)]
pub struct ShapeRegistry {
    kinds: IndexMap<String, ShapeKind>,
}

impl ShapeRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `kind` for `name`. A second declaration of the same name is rejected.
    pub fn declare(&mut self, name: impl Into<String>, kind: ShapeKind) -> MotionlineResult<()> {
        let name = name.into();
        if self.kinds.contains_key(&name) {
            return Err(MotionlineError::duplicate_name(name));
        }
        self.kinds.insert(name, kind);
        Ok(())
    }

    /// Record `kind` for `name` even if already declared, keeping its declaration slot.
    /// Returns the kind previously recorded, if any.
    pub fn redeclare(&mut self, name: impl Into<String>, kind: ShapeKind) -> Option<ShapeKind> {
        self.kinds.insert(name.into(), kind)
    }

    /// Declared kind of `name`, or `UnknownShape`.
    pub fn type_of(&self, name: &str) -> MotionlineResult<ShapeKind> {
        self.kinds
            .get(name)
            .copied()
            .ok_or_else(|| MotionlineError::unknown_shape(name))
    }

    /// True if `name` has been declared.
    pub fn contains(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }

    /// Names with their kinds, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ShapeKind)> {
        self.kinds.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    /// Number of declared names.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// True if nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/registry.rs"]
mod tests;
