use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use tracing::*;

use crate::{Atom, AtomError, Bond};

/// The molecular graph the atoms live in. An atom's identity is its `NodeIndex`.
pub type MoleculeGraph = UnGraph<Atom, Bond>;

/// Bookkeeping done by the parser whenever it connects two atoms.
pub trait BondAtoms {
    /// Add a bond between `a` and `b`, recording each atom's element as a
    /// neighbour of the other and bumping both bond counts.
    fn bond_atoms(&mut self, a: NodeIndex, b: NodeIndex, bond: Bond) -> Result<EdgeIndex, AtomError>;
}

impl BondAtoms for MoleculeGraph {
    fn bond_atoms(&mut self, a: NodeIndex, b: NodeIndex, bond: Bond) -> Result<EdgeIndex, AtomError> {
        let a_element = self
            .node_weight(a)
            .ok_or(AtomError::MissingVertex(a.index()))?
            .element
            .clone();
        let b_element = self
            .node_weight(b)
            .ok_or(AtomError::MissingVertex(b.index()))?
            .element
            .clone();

        trace!("Bonding {}{} {} {}{}", a_element, a.index(), bond, b_element, b.index());
        let edge = self.add_edge(a, b, bond);

        let atom_a = &mut self[a];
        atom_a.add_neighbouring_element(&b_element);
        atom_a.bond_count += 1;

        let atom_b = &mut self[b];
        atom_b.add_neighbouring_element(&a_element);
        atom_b.bond_count += 1;

        Ok(edge)
    }
}
