use std::collections::HashSet;

use tracing::*;

use super::{Atom, RingId};
use crate::Bond;

/// An open ring closure marker. The two atoms carrying the same `id` are the
/// ends of one ring closing bond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ringbond {
    pub id: usize,
    /// The bond written next to the marker, if any.
    pub bond_type: Option<Bond>,
}

impl Ringbond {
    pub fn new(id: usize, bond_type: Option<Bond>) -> Self {
        Self { id, bond_type }
    }
}

impl Atom {
    pub fn ringbond_count(&self) -> usize {
        self.ringbonds.len()
    }

    pub fn has_ringbonds(&self) -> bool {
        !self.ringbonds.is_empty()
    }

    /// The highest ringbond id on this atom, or 0 when there are none.
    pub fn max_ringbond(&self) -> usize {
        self.ringbonds.iter().map(|ringbond| ringbond.id).max().unwrap_or(0)
    }

    pub fn is_in_ring(&self) -> bool {
        !self.rings.is_empty()
    }

    pub fn has_ring(&self, ring_id: RingId) -> bool {
        self.rings.contains(&ring_id)
    }

    /// Snapshot the current ring membership, replacing any earlier snapshot.
    pub fn backup_rings(&mut self) {
        trace!("Backing up rings {:?}", self.rings);
        self.original_rings = self.rings.clone();
    }

    /// Restore the ring membership from the last snapshot. Without a snapshot
    /// this clears the rings.
    pub fn restore_rings(&mut self) {
        trace!("Restoring rings {:?} over {:?}", self.original_rings, self.rings);
        self.rings = self.original_rings.clone();
    }

    pub fn add_anchored_ring(&mut self, ring_id: RingId) {
        if !self.anchored_rings.contains(&ring_id) {
            self.anchored_rings.push(ring_id);
        }
    }
}

/// Whether two atoms carry a ringbond with the same id.
pub fn have_common_ringbond(a: &Atom, b: &Atom) -> bool {
    a.ringbonds
        .iter()
        .any(|x| b.ringbonds.iter().any(|y| x.id == y.id))
}

/// The largest ringbond id shared by both atoms, or 0 when they share none.
pub fn max_common_ringbond(a: &Atom, b: &Atom) -> usize {
    let ids: HashSet<usize> = a.ringbonds.iter().map(|ringbond| ringbond.id).collect();
    b.ringbonds
        .iter()
        .map(|ringbond| ringbond.id)
        .filter(|id| ids.contains(id))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom_with_ringbonds(ids: &[usize]) -> Atom {
        let mut atom = Atom::new("C", Bond::Single);
        atom.ringbonds = ids.iter().map(|&id| Ringbond::new(id, None)).collect();
        atom
    }

    #[test]
    fn test_ringbond_queries() {
        let atom = atom_with_ringbonds(&[]);
        assert_eq!(atom.ringbond_count(), 0);
        assert!(!atom.has_ringbonds());
        assert_eq!(atom.max_ringbond(), 0);

        let atom = atom_with_ringbonds(&[2, 7, 3]);
        assert_eq!(atom.ringbond_count(), 3);
        assert!(atom.has_ringbonds());
        assert_eq!(atom.max_ringbond(), 7);
    }

    #[test]
    fn test_ring_membership() {
        let mut atom = Atom::new("C", Bond::Single);
        assert!(!atom.is_in_ring());
        assert!(!atom.has_ring(1));

        atom.rings = vec![4, 12];
        assert!(atom.is_in_ring());
        assert!(atom.has_ring(12));
        assert!(atom.has_ring(4));
        assert!(!atom.has_ring(1));
        // A ring member does not need ringbonds of its own.
        assert!(!atom.has_ringbonds());
    }

    #[test]
    fn test_backup_and_restore() {
        let mut atom = Atom::new("C", Bond::Single);
        atom.rings = vec![1, 2];
        atom.backup_rings();

        atom.rings.clear();
        atom.rings.push(5);
        assert_eq!(atom.original_rings, vec![1, 2]);

        atom.restore_rings();
        assert_eq!(atom.rings, vec![1, 2]);

        // The restored list is a copy, not the snapshot itself.
        atom.rings.push(9);
        assert_eq!(atom.original_rings, vec![1, 2]);
    }

    #[test]
    fn test_second_backup_overwrites_first() {
        let mut atom = Atom::new("C", Bond::Single);
        atom.rings = vec![1];
        atom.backup_rings();
        atom.rings = vec![3];
        atom.backup_rings();
        atom.rings = vec![];
        atom.restore_rings();
        assert_eq!(atom.rings, vec![3]);
    }

    #[test]
    fn test_restore_without_backup_clears() {
        let mut atom = Atom::new("C", Bond::Single);
        atom.rings = vec![1, 2];
        atom.restore_rings();
        assert!(atom.rings.is_empty());
        assert!(!atom.is_in_ring());
    }

    #[test]
    fn test_anchored_rings_are_unique() {
        let mut atom = Atom::new("C", Bond::Single);
        atom.add_anchored_ring(3);
        atom.add_anchored_ring(1);
        atom.add_anchored_ring(3);
        assert_eq!(atom.anchored_rings, vec![3, 1]);
    }

    #[test]
    fn test_have_common_ringbond() {
        let a = atom_with_ringbonds(&[1, 2]);
        let b = atom_with_ringbonds(&[3, 2]);
        let c = atom_with_ringbonds(&[4]);
        let empty = atom_with_ringbonds(&[]);

        assert!(have_common_ringbond(&a, &b));
        assert!(have_common_ringbond(&b, &a));
        assert!(!have_common_ringbond(&a, &c));
        assert!(!have_common_ringbond(&c, &a));
        assert!(!have_common_ringbond(&a, &empty));
        assert!(!have_common_ringbond(&empty, &empty));
    }

    #[test]
    fn test_max_common_ringbond() {
        let a = atom_with_ringbonds(&[5, 1, 3]);
        let b = atom_with_ringbonds(&[3, 4, 1]);
        assert_eq!(max_common_ringbond(&a, &b), 3);
        assert_eq!(max_common_ringbond(&b, &a), 3);

        let c = atom_with_ringbonds(&[2, 6]);
        assert_eq!(max_common_ringbond(&a, &c), 0);
    }

    #[test]
    fn test_max_common_ringbond_ignores_list_order() {
        // Matching ids sit at different positions in the two lists and the
        // unshared maxima come first.
        let a = atom_with_ringbonds(&[9, 2, 7]);
        let b = atom_with_ringbonds(&[7, 8, 2]);
        assert_eq!(max_common_ringbond(&a, &b), 7);
        assert_eq!(max_common_ringbond(&b, &a), 7);
    }
}
