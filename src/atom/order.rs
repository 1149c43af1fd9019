use petgraph::graph::NodeIndex;

use super::Atom;

impl Atom {
    /// Store this atom's traversal position relative to `center`.
    pub fn set_order(&mut self, center: NodeIndex, order: usize) {
        self.order.insert(center, order);
    }

    /// This atom's traversal position relative to `center`. Positions taken
    /// under different centers are not comparable.
    pub fn order(&self, center: NodeIndex) -> Option<usize> {
        self.order.get(&center).copied()
    }
}
