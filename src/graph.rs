use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::io::{self, Write};

use itertools::Itertools;
use tracing::{debug, instrument, trace};

use crate::errors::{GraphError, GraphResult};

/// Adjacency-list graph over hashable node values.
///
/// Nodes keep the order in which they were first registered, so dumps and
/// traversals are deterministic. Nodes and edges can only be added.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// Position of each node in `adjacency`
    index: HashMap<T, usize>,
    /// (node, neighbors) in registration order
    adjacency: Vec<(T, Vec<T>)>,
    directed: bool,
}

impl<T> Default for Graph<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new(false)
    }
}

impl<T> Graph<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new(directed: bool) -> Self {
        Self {
            index: HashMap::new(),
            adjacency: Vec::new(),
            directed,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges added so far, parallel edges included.
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.iter().map(|(_, n)| n.len()).sum();
        if self.directed {
            entries
        } else {
            let self_loops: usize = self
                .adjacency
                .iter()
                .map(|(node, n)| n.iter().filter(|m| *m == node).count())
                .sum();
            // both kinds of undirected edge leave two entries
            (entries - self_loops) / 2 + self_loops / 2
        }
    }

    pub fn contains(&self, node: &T) -> bool {
        self.index.contains_key(node)
    }

    /// Nodes in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.adjacency.iter().map(|(node, _)| node)
    }

    pub fn neighbors(&self, node: &T) -> Option<&[T]> {
        self.index
            .get(node)
            .map(|&idx| self.adjacency[idx].1.as_slice())
    }

    /// Registers `node` with no neighbors. Registering it again changes nothing.
    pub fn add_node(&mut self, node: T) {
        if !self.index.contains_key(&node) {
            self.index.insert(node.clone(), self.adjacency.len());
            self.adjacency.push((node, Vec::new()));
        }
    }

    /// Adds an edge, registering either endpoint on the fly.
    ///
    /// Parallel edges are kept. In an undirected graph the reverse entry is added
    /// as well, so a self-loop shows up twice in its own neighbor list.
    pub fn add_edge(&mut self, from: T, to: T) {
        self.add_node(from.clone());
        self.add_node(to.clone());
        let (from_idx, to_idx) = (self.index[&from], self.index[&to]);
        self.adjacency[from_idx].1.push(to);
        if !self.directed {
            self.adjacency[to_idx].1.push(from);
        }
    }

    fn neighbors_of(&self, node: &T) -> GraphResult<&[T]>
    where
        T: Debug,
    {
        self.neighbors(node)
            .ok_or_else(|| GraphError::NodeNotFound(format!("{:?}", node)))
    }

    /// Depth-first visitation order starting at `start`.
    ///
    /// `start` and every node reached from it must be registered, otherwise
    /// `GraphError::NodeNotFound` is returned. The order is the same as the
    /// recursive walk in [`Graph::dfs_recursive`], but an explicit stack is used.
    #[instrument(level = "debug", skip(self))]
    pub fn dfs(&self, start: &T) -> GraphResult<Vec<T>>
    where
        T: Debug,
    {
        let mut visited: HashSet<&T> = HashSet::new();
        let mut order = Vec::new();
        let mut stack = vec![start];

        while let Some(current) = stack.pop() {
            if visited.contains(current) {
                continue;
            }
            let neighbors = self.neighbors_of(current)?;
            trace!("dfs visit {:?}", current);
            visited.insert(current);
            order.push(current.clone());
            stack.extend(neighbors.iter().rev());
        }

        debug!("dfs from {:?} visited {} nodes", start, order.len());
        Ok(order)
    }

    /// Recursive depth-first walk sharing `visited` with the caller.
    ///
    /// Already visited nodes are skipped silently. Recursion depth grows with the
    /// longest path, so prefer [`Graph::dfs`] for large graphs.
    #[instrument(level = "trace", skip(self, visited))]
    pub fn dfs_recursive(&self, start: &T, visited: &mut HashSet<T>) -> GraphResult<Vec<T>>
    where
        T: Debug,
    {
        let mut order = Vec::new();
        self.dfs_step(start, visited, &mut order)?;
        Ok(order)
    }

    fn dfs_step(&self, node: &T, visited: &mut HashSet<T>, order: &mut Vec<T>) -> GraphResult<()>
    where
        T: Debug,
    {
        if visited.contains(node) {
            return Ok(());
        }
        let neighbors = self.neighbors_of(node)?;
        visited.insert(node.clone());
        order.push(node.clone());
        for neighbor in neighbors {
            self.dfs_step(neighbor, visited, order)?;
        }
        Ok(())
    }

    /// Breadth-first visitation order starting at `start`.
    ///
    /// Each node is marked when enqueued and reported when dequeued, so nodes
    /// come out by distance from `start`, ties in neighbor order.
    #[instrument(level = "debug", skip(self))]
    pub fn bfs(&self, start: &T) -> GraphResult<Vec<T>>
    where
        T: Debug,
    {
        let mut visited: HashSet<&T> = HashSet::new();
        let mut queue = VecDeque::new();
        let mut order = Vec::new();

        queue.push_back(start);
        visited.insert(start);

        while let Some(current) = queue.pop_front() {
            let neighbors = self.neighbors_of(current)?;
            trace!("bfs visit {:?}", current);
            order.push(current.clone());
            for neighbor in neighbors {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        debug!("bfs from {:?} visited {} nodes", start, order.len());
        Ok(order)
    }
}

impl<T> Graph<T>
where
    T: Eq + Hash + Clone + Display,
{
    /// Writes one `node: neighbor neighbor ...` line per node.
    pub fn write_graph<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }

    pub fn print_graph(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_graph(&mut handle)
    }
}

impl<T: Display> Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, neighbors) in &self.adjacency {
            writeln!(f, "{}: {}", node, neighbors.iter().join(" "))?;
        }
        Ok(())
    }
}

impl<T> FromIterator<(T, T)> for Graph<T>
where
    T: Eq + Hash + Clone,
{
    /// Collects edges into an undirected graph.
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut graph = Graph::new(false);
        graph.extend(iter);
        graph
    }
}

impl<T> Extend<(T, T)> for Graph<T>
where
    T: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, iter: I) {
        for (from, to) in iter {
            self.add_edge(from, to);
        }
    }
}
