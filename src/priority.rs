//! Ranking of neighbouring atoms by atomic number, used to make canonical
//! ordering and stereo priority decisions.

use std::collections::BTreeMap;

use petgraph::graph::NodeIndex;
use tracing::*;

use crate::MoleculeGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedNeighbour {
    /// `None` for elements without a known atomic number.
    pub atomic_number: Option<u8>,
    pub vertex_id: NodeIndex,
}

/// Rank `neighbours` by descending atomic number.
///
/// The sort is stable, so neighbours with equal atomic numbers keep the order
/// they were given in. Unknown elements rank last. Ids that are not in `graph`
/// are skipped.
pub fn sort_by_atomic_number(neighbours: &[NodeIndex], graph: &MoleculeGraph) -> Vec<RankedNeighbour> {
    let mut ranked: Vec<RankedNeighbour> = neighbours
        .iter()
        .filter_map(|&vertex_id| match graph.node_weight(vertex_id) {
            Some(atom) => Some(RankedNeighbour {
                atomic_number: atom.atomic_number(),
                vertex_id,
            }),
            None => {
                warn!("Cannot rank vertex {}, it is not in the graph", vertex_id.index());
                None
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.atomic_number.cmp(&a.atomic_number));
    ranked
}

/// Whether any atomic number occurs more than once.
pub fn has_duplicate_atomic_numbers(ranked: &[RankedNeighbour]) -> bool {
    let mut seen = Vec::with_capacity(ranked.len());
    for neighbour in ranked {
        if seen.contains(&neighbour.atomic_number) {
            return true;
        }
        seen.push(neighbour.atomic_number);
    }
    false
}

/// Group the positions in `ranked` that share an atomic number.
///
/// Only groups of two or more are returned, ordered by ascending atomic number
/// with the group of unknown elements last. The groups hold indices into
/// `ranked`, not vertex ids.
pub fn duplicate_atomic_numbers(ranked: &[RankedNeighbour]) -> Vec<Vec<usize>> {
    let mut groups: BTreeMap<(bool, Option<u8>), Vec<usize>> = BTreeMap::new();
    for (i, neighbour) in ranked.iter().enumerate() {
        let key = (neighbour.atomic_number.is_none(), neighbour.atomic_number);
        groups.entry(key).or_default().push(i);
    }

    groups
        .into_values()
        .filter(|positions| positions.len() > 1)
        .collect()
}
