//! The fixed set of item identifiers the engine patches.

use crate::form::FormId;

/// Immutable set of the four outfit pieces the patcher targets.
///
/// Membership is pure identifier equality; there is no wildcarding and no
/// template/prefab expansion. Iteration yields pieces in declared order,
/// which the grant action relies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackedItemSet {
    pieces: [FormId; 4],
}

impl TrackedItemSet {
    pub const fn new(pieces: [FormId; 4]) -> Self {
        Self { pieces }
    }

    pub fn contains(&self, id: FormId) -> bool {
        self.pieces.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = FormId> + '_ {
        self.pieces.iter().copied()
    }

    pub fn pieces(&self) -> &[FormId; 4] {
        &self.pieces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_exact_identifier_equality() {
        let set = TrackedItemSet::new([
            FormId::new(1),
            FormId::new(2),
            FormId::new(3),
            FormId::new(4),
        ]);
        assert!(set.contains(FormId::new(2)));
        assert!(!set.contains(FormId::new(5)));
    }

    #[test]
    fn iteration_preserves_declared_order() {
        let set = TrackedItemSet::new([
            FormId::new(40),
            FormId::new(30),
            FormId::new(20),
            FormId::new(10),
        ]);
        let order: Vec<u32> = set.iter().map(FormId::raw).collect();
        assert_eq!(order, vec![40, 30, 20, 10]);
    }
}
