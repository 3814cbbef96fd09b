//! Slot occupancy, one slot per player at most.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentStore {
    slots: Vec<Option<String>>,
}

impl AssignmentStore {
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Recreate `len` empty slots.
    pub fn resize(&mut self, len: usize) {
        self.slots = vec![None; len];
    }

    /// Place `player` in `slot`, vacating any slot they held before.
    /// Returns false when `slot` is out of range.
    pub fn assign(&mut self, slot: usize, player: &str) -> bool {
        if slot >= self.slots.len() {
            return false;
        }
        if let Some(prev) = self.slot_of(player) {
            self.slots[prev] = None;
        }
        self.slots[slot] = Some(player.to_string());
        true
    }

    pub fn clear(&mut self, slot: usize) -> bool {
        match self.slots.get_mut(slot) {
            Some(occupant) => {
                *occupant = None;
                true
            }
            None => false,
        }
    }

    pub fn reset_all(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }

    /// Vacate the slot held by `player`, returning its index.
    pub fn remove_player(&mut self, player: &str) -> Option<usize> {
        let slot = self.slot_of(player)?;
        self.slots[slot] = None;
        Some(slot)
    }

    pub fn occupant(&self, slot: usize) -> Option<&str> {
        self.slots.get(slot)?.as_deref()
    }

    pub fn slot_of(&self, player: &str) -> Option<usize> {
        self.slots.iter().position(|s| s.as_deref() == Some(player))
    }

    pub fn is_assigned(&self, player: &str) -> bool {
        self.slot_of(player).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> {
        self.slots.iter().map(Option::as_deref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reassign_moves_player() {
        let mut s = AssignmentStore::new(7);
        assert!(s.assign(0, "A"));
        assert!(s.assign(3, "A"));
        assert_eq!(s.occupant(0), None);
        assert_eq!(s.occupant(3), Some("A"));
        assert_eq!(s.filled(), 1);
    }

    #[test]
    fn test_assign_over_occupant_replaces() {
        let mut s = AssignmentStore::new(3);
        s.assign(1, "A");
        s.assign(1, "B");
        assert_eq!(s.occupant(1), Some("B"));
        assert!(!s.is_assigned("A"));
    }

    #[test]
    fn test_swap_into_own_slot() {
        let mut s = AssignmentStore::new(3);
        s.assign(2, "A");
        s.assign(2, "A");
        assert_eq!(s.occupant(2), Some("A"));
        assert_eq!(s.filled(), 1);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut s = AssignmentStore::new(2);
        s.assign(0, "A");
        assert!(!s.assign(5, "A"));
        assert_eq!(s.occupant(0), Some("A"));
        assert!(!s.clear(5));
        assert_eq!(s.occupant(5), None);
    }

    #[test]
    fn test_remove_player() {
        let mut s = AssignmentStore::new(4);
        s.assign(2, "A");
        assert_eq!(s.remove_player("A"), Some(2));
        assert_eq!(s.remove_player("A"), None);
        assert_eq!(s.occupant(2), None);
    }

    #[test]
    fn test_reset_and_resize() {
        let mut s = AssignmentStore::new(4);
        s.assign(0, "A");
        s.assign(1, "B");
        s.reset_all();
        assert_eq!(s.filled(), 0);
        assert_eq!(s.len(), 4);
        s.assign(0, "A");
        s.resize(8);
        assert_eq!(s.len(), 8);
        assert_eq!(s.filled(), 0);
    }
}
