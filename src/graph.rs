//! An undirected graph keyed by string labels, stored as adjacency
//! lists, with depth-first search over it.
//!
//! The graph keeps its adjacency symmetric: whenever B appears in A's
//! list, A appears in B's. Beyond that nothing is normalized — adding
//! the same edge twice stores a parallel edge, and a self-loop puts a
//! vertex into its own list twice.

use std::collections::{HashMap, HashSet};
use std::fmt;

use thiserror::Error;

/// Errors raised by graph lookups.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// A label was used that has no entry in the graph.
    #[error("vertex `{0}` is not in the graph")]
    VertexNotFound(String),
}

/// A vertex identified by its label. Equality and hashing are
/// structural on the label alone, so two `Vertex` values with the same
/// label are interchangeable as map keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex {
    label: String,
}

impl Vertex {
    pub fn new(label: impl Into<String>) -> Self {
        Vertex {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// An undirected graph over labelled vertices.
///
/// Each vertex maps to the sequence of its adjacent vertices in
/// insertion order; that order drives the DFS stack and with it the
/// output order of [`UndirectedGraph::depth_first_traversal`].
#[derive(Clone, Debug, Default)]
pub struct UndirectedGraph {
    adjacency: HashMap<Vertex, Vec<Vertex>>,
}

impl UndirectedGraph {
    pub fn new() -> Self {
        UndirectedGraph {
            adjacency: HashMap::new(),
        }
    }

    /// Adds a vertex if it is not already present. Calling this twice
    /// with the same label leaves a single entry with its adjacency
    /// list untouched.
    pub fn add_vertex(&mut self, label: &str) {
        self.adjacency.entry(Vertex::new(label)).or_default();
    }

    /// Removes a vertex together with every edge touching it: the
    /// label is stripped from every other adjacency list and its own
    /// entry is dropped. Returns the removed adjacency list, or `None`
    /// if the label was unknown.
    pub fn remove_vertex(&mut self, label: &str) -> Option<Vec<Vertex>> {
        let vertex = Vertex::new(label);
        for adjacent in self.adjacency.values_mut() {
            adjacent.retain(|v| *v != vertex);
        }
        self.adjacency.remove(&vertex)
    }

    /// Adds an undirected edge between two existing vertices by
    /// appending each label to the other's adjacency list. Both
    /// vertices must already be present. No deduplication happens;
    /// calling this twice stores a parallel edge.
    pub fn add_edge(&mut self, a: &str, b: &str) -> Result<(), GraphError> {
        let va = Vertex::new(a);
        let vb = Vertex::new(b);
        if !self.adjacency.contains_key(&va) {
            return Err(GraphError::VertexNotFound(a.to_string()));
        }
        if !self.adjacency.contains_key(&vb) {
            return Err(GraphError::VertexNotFound(b.to_string()));
        }
        if let Some(adjacent) = self.adjacency.get_mut(&va) {
            adjacent.push(vb.clone());
        }
        if let Some(adjacent) = self.adjacency.get_mut(&vb) {
            adjacent.push(va);
        }
        Ok(())
    }

    /// Removes one occurrence of the edge between `a` and `b` from
    /// each side. Missing vertices and missing edges are tolerated as
    /// no-ops, so parallel edges are removed one call at a time.
    pub fn remove_edge(&mut self, a: &str, b: &str) {
        let va = Vertex::new(a);
        let vb = Vertex::new(b);
        if let Some(adjacent) = self.adjacency.get_mut(&va) {
            if let Some(pos) = adjacent.iter().position(|v| *v == vb) {
                adjacent.remove(pos);
            }
        }
        if let Some(adjacent) = self.adjacency.get_mut(&vb) {
            if let Some(pos) = adjacent.iter().position(|v| *v == va) {
                adjacent.remove(pos);
            }
        }
    }

    /// Gets the stored adjacency sequence for a label, or `None` if
    /// the label is unknown.
    pub fn neighbors(&self, label: &str) -> Option<&[Vertex]> {
        self.adjacency
            .get(&Vertex::new(label))
            .map(Vec::as_slice)
    }

    pub fn contains_vertex(&self, label: &str) -> bool {
        self.adjacency.contains_key(&Vertex::new(label))
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Iterates over all vertices in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.adjacency.keys()
    }

    /// Starts a depth-first search at `start`, yielding every vertex
    /// of its connected component in stack-pop order.
    pub fn dfs(&self, start: &str) -> Result<Dfs<'_>, GraphError> {
        if !self.contains_vertex(start) {
            return Err(GraphError::VertexNotFound(start.to_string()));
        }
        Ok(Dfs {
            graph: self,
            visited: HashSet::new(),
            stack: vec![Vertex::new(start)],
        })
    }

    /// Scans the connected component of `root` depth-first and returns
    /// the vertices directly adjacent to `root`.
    ///
    /// While expanding an unvisited vertex the search pushes all of
    /// its neighbors and records the expanded vertex once per neighbor
    /// whose label equals `root`. Since the adjacency is symmetric,
    /// exactly the one-hop neighbors of `root` rediscover it and get
    /// recorded; vertices further away are walked but never recorded.
    /// The output follows stack-pop order and may contain duplicates
    /// when parallel edges exist.
    pub fn depth_first_traversal(&self, root: &str) -> Result<Vec<String>, GraphError> {
        let mut friends = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut stack: Vec<String> = vec![root.to_string()];

        while let Some(label) = stack.pop() {
            if !visited.insert(label.clone()) {
                continue;
            }
            let adjacent = self
                .neighbors(&label)
                .ok_or_else(|| GraphError::VertexNotFound(label.clone()))?;
            for vertex in adjacent {
                stack.push(vertex.label().to_string());
                if vertex.label() == root {
                    friends.push(label.clone());
                }
            }
        }
        Ok(friends)
    }
}

impl fmt::Display for UndirectedGraph {
    /// Renders one line per vertex: the label followed by its
    /// adjacency list. Line order is map iteration order and therefore
    /// unspecified.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, adjacent) in &self.adjacency {
            write!(f, "{} [", vertex)?;
            for (i, v) in adjacent.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", v)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

/// Lazy depth-first traversal over a graph's connected component.
pub struct Dfs<'g> {
    graph: &'g UndirectedGraph,
    visited: HashSet<&'g Vertex>,
    stack: Vec<Vertex>,
}

impl<'g> Iterator for Dfs<'g> {
    type Item = &'g Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(vertex) = self.stack.pop() {
            // Resolve through the map so the yielded reference borrows
            // from the graph, not from this iterator.
            let Some((stored, adjacent)) = self.graph.adjacency.get_key_value(&vertex) else {
                continue;
            };
            if !self.visited.insert(stored) {
                continue;
            }
            for neighbor in adjacent {
                if !self.visited.contains(neighbor) {
                    self.stack.push(neighbor.clone());
                }
            }
            return Some(stored);
        }
        None
    }
}
