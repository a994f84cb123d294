use rustc_hash::FxHashMap;

use crate::core::graph::VertexId;

/// Bijective mapping between live vertex identifiers and dense internal
/// slots `0..len`.
///
/// Removing an identifier shifts the slots of all identifiers after it down
/// by one, so the slot range stays contiguous with no holes. No code holds a
/// raw slot across mutations, the public API addresses vertices by
/// identifier only.
#[derive(Debug, Clone, Default)]
pub(crate) struct DenseIndex {
    slots: FxHashMap<VertexId, usize>,
    ids: Vec<VertexId>,
}

impl DenseIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.slots.contains_key(&id)
    }

    pub fn slot(&self, id: VertexId) -> Option<usize> {
        self.slots.get(&id).copied()
    }

    pub fn id(&self, slot: usize) -> VertexId {
        self.ids[slot]
    }

    pub fn ids(&self) -> &[VertexId] {
        &self.ids
    }

    /// Assigns the next free slot to `id` and returns it. Must not be
    /// called for an identifier that is already present.
    pub fn insert(&mut self, id: VertexId) -> usize {
        debug_assert!(!self.contains(id));

        let slot = self.ids.len();
        self.slots.insert(id, slot);
        self.ids.push(id);
        slot
    }

    /// Removes `id`, renumbers every identifier that occupied a higher slot
    /// and returns the freed slot.
    pub fn remove(&mut self, id: VertexId) -> Option<usize> {
        let slot = self.slots.remove(&id)?;
        self.ids.remove(slot);

        for moved in &self.ids[slot..] {
            *self.slots.get_mut(moved).expect("live id is mapped") -= 1;
        }

        Some(slot)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_assigns_contiguous_slots() {
        let mut index = DenseIndex::new();

        assert_eq!(index.insert(42), 0);
        assert_eq!(index.insert(-7), 1);
        assert_eq!(index.insert(0), 2);

        assert_eq!(index.len(), 3);
        assert_eq!(index.slot(-7), Some(1));
        assert_eq!(index.id(1), -7);
        assert_eq!(index.slot(99), None);
    }

    #[test]
    fn remove_compacts_slots() {
        let mut index = DenseIndex::new();

        for id in [10, 20, 30, 40] {
            index.insert(id);
        }

        assert_eq!(index.remove(20), Some(1));

        assert_eq!(index.slot(10), Some(0));
        assert_eq!(index.slot(30), Some(1));
        assert_eq!(index.slot(40), Some(2));
        assert_eq!(index.ids(), &[10, 30, 40]);

        assert_eq!(index.remove(20), None);
    }

    #[test]
    fn slot_reuse_after_removal() {
        let mut index = DenseIndex::new();

        index.insert(1);
        index.insert(2);
        assert_eq!(index.remove(2), Some(1));

        assert_eq!(index.insert(3), 1);
        assert_eq!(index.ids(), &[1, 3]);
    }
}
