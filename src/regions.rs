use std::fmt::{self, Display, Formatter};

use gridly::prelude::*;
use joinery::prelude::*;
use lazy_format::lazy_format;
use log::debug;
use thiserror::Error;

use crate::adjacency::Adjacency;
use crate::matrix::Matrix;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum RegionError {
    #[error("no region found: matrix has no on-cells")]
    NoRegions,
}

/// A maximal group of 8-connected on-cells.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Region {
    cells: Vec<Location>,
}

impl Region {
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[cfg(test)]
    fn cells(&self) -> &[Location] {
        &self.cells
    }

    #[cfg(test)]
    fn contains(&self, location: Location) -> bool {
        self.cells.contains(&location)
    }

    /// Cells as `(row, column)` pairs.
    pub fn coordinates(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .map(|location| (location.row.0 as usize, location.column.0 as usize))
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let cells = self
            .cells
            .iter()
            .map(|location| lazy_format!("({}, {})", location.row.0, location.column.0));

        write!(f, "{{{}}}", cells.join_with(", "))
    }
}

/// Split the nodes of `adjacency` into connected regions.
///
/// Seeds are taken in node order, and each region grows one frontier at a
/// time until nothing new is reachable. Every node is marked visited the
/// moment it joins a frontier, so no cell is ever absorbed twice.
pub fn partition(adjacency: &Adjacency) -> Vec<Region> {
    let mut visited = vec![false; adjacency.len()];
    let mut regions = Vec::new();

    for seed in 0..adjacency.len() {
        if visited[seed] {
            continue;
        }
        visited[seed] = true;

        let mut cells = vec![adjacency.location(seed)];
        let mut frontier: Vec<usize> = adjacency
            .edges(seed)
            .filter(|&node| !visited[node])
            .collect();
        frontier.iter().for_each(|&node| visited[node] = true);

        while !frontier.is_empty() {
            let mut next_frontier = Vec::new();

            for &node in &frontier {
                cells.push(adjacency.location(node));

                for neighbor in adjacency.edges(node) {
                    if !visited[neighbor] {
                        visited[neighbor] = true;
                        next_frontier.push(neighbor);
                    }
                }
            }

            frontier = next_frontier;
        }

        regions.push(Region { cells });
    }

    debug!("Partitioned {} on-cells into {} regions", adjacency.len(), regions.len());

    regions
}

pub fn largest(regions: &[Region]) -> Result<usize, RegionError> {
    regions
        .iter()
        .map(Region::len)
        .max()
        .ok_or(RegionError::NoRegions)
}

pub fn find_regions(matrix: &Matrix) -> Vec<Region> {
    partition(&Adjacency::build(matrix))
}

/// A matrix without any on-cells, including a zero-sized one, has no
/// largest region.
pub fn largest_region_size(matrix: &Matrix) -> Result<usize, RegionError> {
    largest(&find_regions(matrix))
}
