/*!
# Randomized Minimum Cut

Karger's contraction algorithm: repeatedly contract a random edge until only two super-nodes
remain; the edges between them form a cut. A single trial finds a minimum cut with probability
at least `2 / (n (n - 1))`, so [`KargerMinCut`] runs independent trials and keeps the smallest
cut seen. The result is an *estimate*: it is always the size of an actual cut, but only with
high probability a minimum one.

Each trial draws its own `u64` seed from the caller's random source and runs on a private
[`Pcg64Mcg`]. For a fixed seed, trial `i` is therefore identical no matter how many trials run in
total, which makes the reported minimum non-increasing in the number of iterations. With the
`parallel` feature, trials run on `rayon` and produce the same result as sequential execution.

# Example
```
use lgraphs::{prelude::*, algo::*};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let graph = UndirectedGraph::from_adjacency([
    ('A', vec!['B', 'C', 'D']),
    ('B', vec!['A', 'C', 'D']),
    ('C', vec!['A', 'B', 'D']),
    ('D', vec!['A', 'B', 'C']),
]);

let rng = &mut Pcg64Mcg::seed_from_u64(42);
assert_eq!(graph.estimate_min_cut(200, rng).unwrap(), 3);
```
*/

use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::*;

/// Number of trials used by [`KargerMinCut::default`]
pub const DEFAULT_ITERATIONS: u32 = 100;

/// Trait to estimate the minimum cut of an undirected (multi-)graph
pub trait MinCut: AdjacencyList + GraphType<Dir = Undirected> {
    /// Runs [`KargerMinCut`] with `iterations` trials and returns the smallest cut size found.
    ///
    /// # Errors
    /// See [`KargerMinCut::compute`].
    fn estimate_min_cut<R: Rng>(&self, iterations: u32, rng: &mut R) -> Result<NumEdges>;
}

impl<G> MinCut for G
where
    G: AdjacencyList + GraphType<Dir = Undirected> + Sync,
{
    fn estimate_min_cut<R: Rng>(&self, iterations: u32, rng: &mut R) -> Result<NumEdges> {
        KargerMinCut::new().iterations(iterations).compute(self, rng)
    }
}

/// The best cut found by [`KargerMinCut`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutEstimate<T = Node> {
    /// Number of edges (with multiplicity) crossing the cut
    pub size: NumEdges,
    /// Nodes on one side of the cut, in increasing id order
    pub side: Vec<T>,
}

/// Configurable Karger minimum cut estimator
#[derive(Debug, Clone, Copy)]
pub struct KargerMinCut {
    iterations: u32,
}

impl Default for KargerMinCut {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl KargerMinCut {
    /// Creates an estimator running [`DEFAULT_ITERATIONS`] trials
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of independent trials
    pub fn set_iterations(&mut self, iterations: u32) {
        self.iterations = iterations;
    }

    /// Sets the number of independent trials
    pub fn iterations(mut self, iterations: u32) -> Self {
        self.set_iterations(iterations);
        self
    }

    /// Returns the configured number of trials
    pub fn number_of_iterations(&self) -> u32 {
        self.iterations
    }

    /// Returns the smallest cut size over all trials.
    ///
    /// # Errors
    /// - [`GraphError::NoTrials`] if zero iterations are configured,
    /// - [`GraphError::DegenerateInput`] if the graph has fewer than 2 nodes,
    /// - [`GraphError::DisconnectedOperand`] if a trial picks a node without neighbors, which
    ///   can only happen on disconnected graphs.
    pub fn compute<G, R>(&self, graph: &G, rng: &mut R) -> Result<NumEdges>
    where
        G: AdjacencyList + GraphType<Dir = Undirected> + Sync,
        R: Rng,
    {
        Ok(self.compute_with_partition(graph, rng)?.size)
    }

    /// Like [`KargerMinCut::compute`] but additionally returns one side of the best cut
    pub fn compute_with_partition<G, R>(&self, graph: &G, rng: &mut R) -> Result<CutEstimate>
    where
        G: AdjacencyList + GraphType<Dir = Undirected> + Sync,
        R: Rng,
    {
        let mut best = self.run(graph, rng).map_err(|err| match err {
            TrialError::Rejected(err) => err,
            TrialError::Isolated(u) => GraphError::disconnected_operand(&u),
        })?;

        Ok(CutEstimate {
            size: best.cut_size(),
            side: best.side(),
        })
    }

    /// Checks the input, runs all trials and returns the contraction with the smallest cut
    fn run<G, R>(&self, graph: &G, rng: &mut R) -> std::result::Result<Contraction, TrialError>
    where
        G: AdjacencyList + GraphType<Dir = Undirected> + Sync,
        R: Rng,
    {
        if self.iterations == 0 {
            return Err(TrialError::Rejected(GraphError::NoTrials));
        }
        if graph.number_of_nodes() < 2 {
            return Err(TrialError::Rejected(GraphError::DegenerateInput {
                nodes: graph.len(),
            }));
        }

        debug!(
            nodes = graph.number_of_nodes(),
            iterations = self.iterations,
            "estimating minimum cut"
        );

        let seeds = (0..self.iterations)
            .map(|_| rng.random::<u64>())
            .collect_vec();

        let best = best_trial(graph, seeds)?;
        debug!(min_cut = best.cut_size(), "minimum cut estimated");
        Ok(best)
    }
}

/// Reasons a computation stops before producing a cut.
/// Isolated nodes are kept as ids so callers can report them by label.
enum TrialError {
    Rejected(GraphError),
    Isolated(Node),
}

/// Executes one trial per seed and keeps the first contraction with the smallest cut
#[cfg(not(feature = "parallel"))]
fn best_trial<G>(graph: &G, seeds: Vec<u64>) -> std::result::Result<Contraction, TrialError>
where
    G: AdjacencyList,
{
    let mut best: Option<Contraction> = None;
    for (trial, seed) in seeds.into_iter().enumerate() {
        let contraction = Contraction::run_trial(graph, seed).map_err(TrialError::Isolated)?;
        trace!(trial, cut = contraction.cut_size(), "trial finished");

        if best
            .as_ref()
            .is_none_or(|b| contraction.cut_size() < b.cut_size())
        {
            best = Some(contraction);
        }
    }

    best.ok_or(TrialError::Rejected(GraphError::NoTrials))
}

/// Executes one trial per seed on the rayon pool and keeps the first contraction with the
/// smallest cut (ties resolve to the earlier seed, as in sequential execution)
#[cfg(feature = "parallel")]
fn best_trial<G>(graph: &G, seeds: Vec<u64>) -> std::result::Result<Contraction, TrialError>
where
    G: AdjacencyList + Sync,
{
    seeds
        .into_par_iter()
        .enumerate()
        .map(|(trial, seed)| -> std::result::Result<Contraction, TrialError> {
            let contraction =
                Contraction::run_trial(graph, seed).map_err(TrialError::Isolated)?;
            trace!(trial, cut = contraction.cut_size(), "trial finished");
            Ok(contraction)
        })
        .try_reduce_with(|a, b| Ok(if b.cut_size() < a.cut_size() { b } else { a }))
        .unwrap_or(Err(TrialError::Rejected(GraphError::NoTrials)))
}

/// Working copy of a single trial.
///
/// Super-nodes are the sets of a [`DisjointSets`] arena, identified by their root. Each root
/// owns the list of endpoints of all edges leaving its set (original node ids, resolved through
/// `find`). The list of a root never contains an endpoint inside its own set.
struct Contraction {
    sets: DisjointSets,
    incident: Vec<Vec<Node>>,
    alive: Vec<Node>,
    position: Vec<NumNodes>,
}

impl Contraction {
    /// Copies the graph into a fresh working copy, dropping self-loops
    fn new<G: AdjacencyList>(graph: &G) -> Self {
        let n = graph.number_of_nodes();
        Self {
            sets: DisjointSets::new(n),
            incident: graph
                .vertices()
                .map(|u| graph.neighbors_of(u).filter(|&v| v != u).collect_vec())
                .collect_vec(),
            alive: graph.vertices().collect_vec(),
            position: graph.vertices().collect_vec(),
        }
    }

    /// Contracts random edges of a fresh working copy until two super-nodes remain
    fn run_trial<G: AdjacencyList>(graph: &G, seed: u64) -> std::result::Result<Self, Node> {
        let rng = &mut Pcg64Mcg::seed_from_u64(seed);
        let mut contraction = Self::new(graph);

        while contraction.alive.len() > 2 {
            let u = contraction.alive[rng.random_range(0..contraction.alive.len())];
            let v = contraction.random_neighbor(u, rng).ok_or(u)?;
            contraction.contract(u, v);
        }

        Ok(contraction)
    }

    /// Draws an entry of the list of super-node `u` uniformly at random (so parallel edges are
    /// proportionally more likely) and returns the super-node it belongs to
    fn random_neighbor<R: Rng>(&mut self, u: Node, rng: &mut R) -> Option<Node> {
        let list = &self.incident[u as usize];
        if list.is_empty() {
            return None;
        }

        let v = list[rng.random_range(0..list.len())];
        Some(self.sets.find(v))
    }

    /// Merges super-node `v` into super-node `u`
    fn contract(&mut self, u: Node, v: Node) {
        let Some(root) = self.sets.union(u, v) else {
            return;
        };
        let absorbed_root = if root == u { v } else { u };

        let mut absorbed = std::mem::take(&mut self.incident[absorbed_root as usize]);
        let mut kept = std::mem::take(&mut self.incident[root as usize]);
        if kept.len() < absorbed.len() {
            std::mem::swap(&mut kept, &mut absorbed);
        }
        kept.extend(absorbed);

        // edges between `u` and `v` became self-loops
        let sets = &mut self.sets;
        kept.retain(|&w| sets.find(w) != root);
        self.incident[root as usize] = kept;

        let pos = self.position[absorbed_root as usize] as usize;
        self.alive.swap_remove(pos);
        if let Some(&moved) = self.alive.get(pos) {
            self.position[moved as usize] = pos as NumNodes;
        }
    }

    /// Number of edges leaving the first remaining super-node.
    /// With two super-nodes left, these are exactly the edges between them.
    fn cut_size(&self) -> NumEdges {
        self.incident[self.alive[0] as usize].len() as NumEdges
    }

    /// Members of the first remaining super-node
    fn side(&mut self) -> Vec<Node> {
        let root = self.alive[0];
        self.sets.members_of(root)
    }
}

impl<K: NodeId> Graph<K, Undirected> {
    /// Estimates the minimum cut of this graph with `iterations` random contraction trials.
    ///
    /// # Errors
    /// Besides the errors of [`KargerMinCut::compute`], returns [`GraphError::InvalidGraph`]
    /// if a neighbor is not a key of the graph.
    pub fn estimate_min_cut<R: Rng>(&self, iterations: u32, rng: &mut R) -> Result<NumEdges> {
        Ok(self
            .min_cut_with_partition(KargerMinCut::new().iterations(iterations), rng)?
            .size)
    }

    /// Runs a configured estimator and returns the best cut with one side given by labels
    pub fn min_cut_with_partition<R: Rng>(
        &self,
        algo: KargerMinCut,
        rng: &mut R,
    ) -> Result<CutEstimate<K>> {
        let graph = self.to_adj_graph()?;
        let mut best = algo.run(&graph, rng).map_err(|err| match err {
            TrialError::Rejected(err) => err,
            TrialError::Isolated(u) => GraphError::disconnected_operand(self.label_of(u)),
        })?;

        Ok(CutEstimate {
            size: best.cut_size(),
            side: best
                .side()
                .into_iter()
                .map(|u| self.label_of(u).clone())
                .collect(),
        })
    }
}
