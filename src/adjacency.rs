use std::collections::HashMap;

use gridly::prelude::*;
use log::debug;

use crate::matrix::Matrix;

/// On-cells in the Moore neighborhood of `location`.
///
/// Candidates that fall off the edge of the matrix are dropped, so a corner
/// cell has at most 3 neighbors, an edge cell 5, and an interior cell 8.
pub fn neighbors<'a>(location: Location, matrix: &'a Matrix) -> impl Iterator<Item = Location> + 'a {
    TOUCHING_ADJACENCIES
        .iter()
        .map(move |offset| location + offset)
        .filter(move |&neighbor| matrix.is_on(neighbor))
}

/// The on-cells of a matrix as an undirected graph, nodes numbered in
/// row-major order. Isolated on-cells still get a node.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    nodes: Vec<Location>,
    edges: Vec<Vec<usize>>,
}

impl Adjacency {
    pub fn build(matrix: &Matrix) -> Self {
        let nodes = matrix.on_cells();

        let index: HashMap<Location, usize> = nodes
            .iter()
            .enumerate()
            .map(|(node, &location)| (location, node))
            .collect();

        let edges: Vec<Vec<usize>> = nodes
            .iter()
            .map(|&location| {
                neighbors(location, matrix)
                    .filter_map(|neighbor| index.get(&neighbor).copied())
                    .collect()
            })
            .collect();

        let adjacency = Adjacency { nodes, edges };

        debug!(
            "Built adjacency: {} on-cells, {} edges",
            adjacency.len(),
            adjacency.num_edges()
        );

        adjacency
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.iter().map(Vec::len).sum::<usize>() / 2
    }

    #[inline]
    pub fn location(&self, node: usize) -> Location {
        self.nodes[node]
    }

    #[inline]
    pub fn edges(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges[node].iter().copied()
    }

    #[cfg(test)]
    fn node(&self, location: Location) -> Option<usize> {
        self.nodes.iter().position(|&node| node == location)
    }

    #[cfg(test)]
    fn neighbors_of(&self, location: Location) -> Option<impl Iterator<Item = Location> + '_> {
        self.node(location)
            .map(move |node| self.edges(node).map(move |neighbor| self.nodes[neighbor]))
    }
}
