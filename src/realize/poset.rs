// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The poset graph of a family.
//!
//! Nodes are the Parikh vectors of every level. A level-k vector is joined
//! to a level-(k+1) vector when it is componentwise below it. For a word of
//! length at least n ≥ 2, consecutive windows alternate between the two
//! levels along such edges, so the graph of any realizable family of depth
//! n ≥ 2 is connected.

use crate::parikh::{Family, ParikhVector};
use std::collections::{HashMap, VecDeque};

/// Undirected graph over the vectors of a family.
#[derive(Debug, Clone, Default)]
pub struct PosetGraph {
    nodes: Vec<ParikhVector>,
    index: HashMap<ParikhVector, usize>,
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl PosetGraph {
    /// Build the graph from all levels of `family`.
    pub fn from_family(family: &Family) -> Self {
        let mut graph = PosetGraph::default();
        for (_, level) in family.levels() {
            for vector in level {
                graph.add_node(vector);
            }
        }
        for k in 1..family.depth() {
            let (Some(lower), Some(upper)) = (family.level(k), family.level(k + 1)) else {
                continue;
            };
            for p1 in lower {
                for p2 in upper {
                    if p1.is_dominated_by(p2) {
                        graph.add_edge(p1, p2);
                    }
                }
            }
        }
        graph
    }

    fn add_node(&mut self, vector: &ParikhVector) -> usize {
        if let Some(&id) = self.index.get(vector) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(vector.clone());
        self.index.insert(vector.clone(), id);
        self.adjacency.push(Vec::new());
        id
    }

    fn add_edge(&mut self, a: &ParikhVector, b: &ParikhVector) {
        let a = self.add_node(a);
        let b = self.add_node(b);
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
        self.edge_count += 1;
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Vectors adjacent to `vector`, empty if it is not a node.
    pub fn neighbors(&self, vector: &ParikhVector) -> Vec<&ParikhVector> {
        self.index
            .get(vector)
            .map(|&id| self.adjacency[id].iter().map(|&n| &self.nodes[n]).collect())
            .unwrap_or_default()
    }

    /// True iff a breadth-first traversal from the first node reaches every node.
    ///
    /// The empty graph is connected.
    pub fn is_connected(&self) -> bool {
        if self.nodes.is_empty() {
            return true;
        }
        let mut visited = vec![false; self.nodes.len()];
        let mut queue = VecDeque::from([0usize]);
        visited[0] = true;
        let mut reached = 1;
        while let Some(node) = queue.pop_front() {
            for &next in &self.adjacency[node] {
                if !visited[next] {
                    visited[next] = true;
                    reached += 1;
                    queue.push_back(next);
                }
            }
        }
        reached == self.nodes.len()
    }
}
