use std::collections::{BTreeMap, HashMap};

use petgraph::graph::NodeIndex;
use tracing::*;

use crate::{atomic_mass, atomic_number, max_bonds, Bond};

mod rings;
pub use rings::*;

mod pseudo;
pub use pseudo::*;

mod order;

/// Identifier of a ring assigned by the ring detection stage. Ring ids are positive.
pub type RingId = usize;

/// Properties written inside square brackets in the linear notation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BracketAtom {
    pub hydrogen_count: u8,
    pub charge: i8,
    pub isotope: Option<u16>,
    pub class: Option<u32>,
}

/// The side of the atom label an attached hydrogen is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HydrogenDirection {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

/// A single atom node of a molecular graph.
///
/// The atom carries no identity of its own; it is addressed through the
/// `NodeIndex` of the graph that owns it. Its fields are filled in by the
/// parser (ringbonds, neighbours, bond count, bracket data), then by ring
/// detection (rings, bridges) and finally by layout (anchored rings, order,
/// drawing flags).
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub element: String,
    /// Bond to the parent atom in the spanning tree.
    pub bond_type: Bond,
    pub branch_bond: Option<Bond>,
    pub is_drawn: bool,
    pub draw_explicit: bool,
    /// Unresolved ring closure markers, in the order they were read.
    pub ringbonds: Vec<Ringbond>,
    pub rings: Vec<RingId>,
    /// Snapshot of `rings` taken by `backup_rings`.
    pub original_rings: Vec<RingId>,
    pub bridged_ring: Option<RingId>,
    pub is_bridge: bool,
    pub is_bridge_node: bool,
    pub anchored_rings: Vec<RingId>,
    attached_pseudo_elements: BTreeMap<PseudoElementKey, PseudoElement>,
    has_attached_pseudo_elements: bool,
    /// Traversal position relative to each reference atom.
    pub order: HashMap<NodeIndex, usize>,
    pub neighbouring_elements: Vec<String>,
    pub bond_count: usize,
    pub bracket: Option<BracketAtom>,
    pub chiral: Option<String>,
    pub is_connected_to_ring: bool,
    pub is_part_of_aromatic_ring: bool,
    pub plane: i8,
    pub is_stereo_center: bool,
    pub priority: i32,
    pub main_chain: bool,
    pub hydrogen_direction: HydrogenDirection,
    pub subtree_depth: usize,
    pub has_hydrogen: bool,
}

impl Atom {
    /// Create an atom from an element symbol as written and the bond that
    /// connects it to its parent.
    ///
    /// Single letter symbols are stored uppercase, so a lowercase aromatic `c`
    /// becomes `C` and marks the atom as part of an aromatic ring. Longer
    /// symbols are stored as given.
    pub fn new(element: &str, bond_type: Bond) -> Self {
        let normalized = if element.chars().count() == 1 {
            element.to_uppercase()
        } else {
            element.to_string()
        };
        let is_part_of_aromatic_ring = normalized != element;

        Self {
            element: normalized,
            bond_type,
            branch_bond: None,
            is_drawn: true,
            draw_explicit: false,
            ringbonds: Vec::new(),
            rings: Vec::new(),
            original_rings: Vec::new(),
            bridged_ring: None,
            is_bridge: false,
            is_bridge_node: false,
            anchored_rings: Vec::new(),
            attached_pseudo_elements: BTreeMap::new(),
            has_attached_pseudo_elements: false,
            order: HashMap::new(),
            neighbouring_elements: Vec::new(),
            bond_count: 0,
            bracket: None,
            chiral: None,
            is_connected_to_ring: false,
            is_part_of_aromatic_ring,
            plane: 0,
            is_stereo_center: false,
            priority: 0,
            main_chain: false,
            hydrogen_direction: HydrogenDirection::default(),
            subtree_depth: 1,
            has_hydrogen: false,
        }
    }

    pub fn add_neighbouring_element(&mut self, element: &str) {
        self.neighbouring_elements.push(element.to_string());
    }

    /// The atomic number of this atom's element. `None` means the element is
    /// unknown, it is never reported as zero.
    pub fn atomic_number(&self) -> Option<u8> {
        let number = atomic_number(&self.element);
        if number.is_none() {
            trace!("No atomic number for element {}", self.element);
        }
        number
    }

    pub fn mass(&self) -> Option<f64> {
        atomic_mass(&self.element)
    }

    pub fn max_bonds(&self) -> Option<u8> {
        max_bonds(&self.element)
    }

    /// Whether the subtree hanging off this atom may be rotated around its
    /// parent bond: the bond must be single and the atom must not be in a ring.
    pub fn can_rotate(&self) -> bool {
        self.bond_type == Bond::Single && self.rings.is_empty()
    }

    /// Compare `candidate` with the neighbouring elements as multisets.
    ///
    /// Both lists are sorted in place, so neither keeps its previous order.
    /// Lists of different length are rejected before anything is sorted.
    pub fn neighbouring_elements_equal(&mut self, candidate: &mut [String]) -> bool {
        if candidate.len() != self.neighbouring_elements.len() {
            return false;
        }

        candidate.sort();
        self.neighbouring_elements.sort();

        candidate
            .iter()
            .zip(self.neighbouring_elements.iter())
            .all(|(a, b)| a == b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_letter_elements_are_uppercased() {
        for (input, expected) in [("c", "C"), ("n", "N"), ("o", "O"), ("C", "C"), ("b", "B")] {
            let atom = Atom::new(input, Bond::Single);
            assert_eq!(atom.element, expected);
        }
    }

    #[test]
    fn test_multi_letter_elements_are_untouched() {
        for input in ["Cl", "Br", "cl", "se", "CL"] {
            let atom = Atom::new(input, Bond::Single);
            assert_eq!(atom.element, input);
        }
    }

    #[test]
    fn test_aromatic_flag() {
        assert!(Atom::new("c", Bond::Single).is_part_of_aromatic_ring);
        assert!(!Atom::new("C", Bond::Single).is_part_of_aromatic_ring);
        // Multi letter symbols are never changed, so they never look aromatic.
        assert!(!Atom::new("cl", Bond::Single).is_part_of_aromatic_ring);
        assert!(!Atom::new("se", Bond::Single).is_part_of_aromatic_ring);
    }

    #[test]
    fn test_defaults() {
        let atom = Atom::new("N", Bond::Double);
        assert_eq!(atom.bond_type, Bond::Double);
        assert!(atom.is_drawn);
        assert!(!atom.draw_explicit);
        assert!(atom.ringbonds.is_empty());
        assert!(atom.rings.is_empty());
        assert_eq!(atom.bridged_ring, None);
        assert_eq!(atom.bond_count, 0);
        assert_eq!(atom.subtree_depth, 1);
        assert_eq!(atom.hydrogen_direction, HydrogenDirection::Down);
        assert!(!atom.has_attached_pseudo_elements());
    }

    #[test]
    fn test_atomic_data_lookups() {
        assert_eq!(Atom::new("c", Bond::Single).atomic_number(), Some(6));
        assert_eq!(Atom::new("Cl", Bond::Single).atomic_number(), Some(17));
        assert_eq!(Atom::new("Cl", Bond::Single).max_bonds(), Some(1));
        assert_eq!(Atom::new("O", Bond::Single).mass(), Some(15.999));
        assert_eq!(Atom::new("Zz", Bond::Single).atomic_number(), None);
        assert_eq!(Atom::new("cl", Bond::Single).atomic_number(), None);
        assert_eq!(Atom::new("*", Bond::Single).atomic_number(), None);
    }

    #[test]
    fn test_can_rotate() {
        let mut atom = Atom::new("C", Bond::Single);
        assert!(atom.can_rotate());

        atom.rings.push(1);
        assert!(!atom.can_rotate());

        let mut atom = Atom::new("C", Bond::Double);
        assert!(!atom.can_rotate());
        atom.rings.push(1);
        assert!(!atom.can_rotate());

        assert!(!Atom::new("C", Bond::Up).can_rotate());
    }

    #[test]
    fn test_neighbouring_elements_equal() {
        let mut atom = Atom::new("C", Bond::Single);
        atom.add_neighbouring_element("O");
        atom.add_neighbouring_element("C");
        atom.add_neighbouring_element("N");
        atom.add_neighbouring_element("C");
        assert_eq!(atom.neighbouring_elements, strings(&["O", "C", "N", "C"]));

        let mut candidate = strings(&["C", "N", "C", "O"]);
        assert!(atom.neighbouring_elements_equal(&mut candidate));
        // Both sides come back sorted.
        assert_eq!(candidate, strings(&["C", "C", "N", "O"]));
        assert_eq!(atom.neighbouring_elements, strings(&["C", "C", "N", "O"]));

        let mut different = strings(&["C", "N", "N", "O"]);
        assert!(!atom.neighbouring_elements_equal(&mut different));
    }

    #[test]
    fn test_neighbouring_elements_length_mismatch() {
        let mut atom = Atom::new("C", Bond::Single);
        atom.add_neighbouring_element("O");
        atom.add_neighbouring_element("C");

        let mut candidate = strings(&["O", "C", "C"]);
        assert!(!atom.neighbouring_elements_equal(&mut candidate));
        // Nothing is sorted when the lengths differ.
        assert_eq!(candidate, strings(&["O", "C", "C"]));
        assert_eq!(atom.neighbouring_elements, strings(&["O", "C"]));
    }
}
