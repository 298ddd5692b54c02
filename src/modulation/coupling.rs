use crate::ROOT_COUNT;

/*
Sparse Coupling
===============

A node does not listen to all 240 roots, only to a small fixed subset. The
subset is picked by a strided walk around the root table:

    stride = 240 / roots_per_node        (12 roots → stride 20)
    offset = 17 × node   (mod 240)
    index  = offset + k × stride   (mod 240),   k = 0 .. roots_per_node

    node 0:   0  20  40  60 ... 220
    node 1:  17  37  57  77 ... 237
    node 2:  34  54  74  94 ...  14

The stride spreads each node across both root families; the odd offset of 17
keeps neighbouring nodes from landing on the same indices. No randomness is
involved, so the same node count always yields the same topology.
*/

/// Per-node root indices, fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseCoupling {
    indices: Vec<Vec<usize>>,
}

/// Offset step between consecutive nodes.
const NODE_OFFSET_STEP: usize = 17;

impl SparseCoupling {
    /// Strided subsets for `num_nodes` nodes of `roots_per_node` roots each.
    ///
    /// `roots_per_node` must be in `1..=240`; `EngineConfig::validate`
    /// checks this before an engine is built.
    pub fn strided(num_nodes: usize, roots_per_node: usize) -> Self {
        debug_assert!((1..=ROOT_COUNT).contains(&roots_per_node));

        let stride = ROOT_COUNT / roots_per_node.max(1);
        let indices = (0..num_nodes)
            .map(|node| {
                let offset = (node * NODE_OFFSET_STEP) % ROOT_COUNT;
                (0..roots_per_node)
                    .map(|k| (offset + k * stride) % ROOT_COUNT)
                    .collect()
            })
            .collect();

        Self { indices }
    }

    #[inline]
    pub fn node(&self, node: usize) -> &[usize] {
        &self.indices[node]
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.indices.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.indices.iter().map(Vec::as_slice)
    }
}
