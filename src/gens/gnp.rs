use super::*;

/// `G(n,p)` graphs contain every possible edge of `n` nodes with probability `p`
/// independent from each other.
///
/// The generator streams ordered pairs `(u, v)` including self-loops; filtering for undirected
/// graphs or loop-free graphs is up to the caller (see [`RandomGraph`]).
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: u64,
    p: Option<f64>,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p`
    /// ** Panics if `p` is not a probability **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob), "{prob} is not a probability");
        self.p = Some(prob);
        self
    }
}

impl NumNodesGen for Gnp {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n as u64;
        self
    }
}

/// ** Panics if `prob` was not set **
impl GraphGenerator for Gnp {
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        let Some(p) = self.p else {
            panic!("Probability of Gnp was not set!");
        };
        let n = self.n;

        (0..n * n)
            .filter(move |_| rng.random_bool(p))
            .map(move |x| Edge::from_u64(x, n))
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        assert!(Gnp::new().nodes(10).prob(0.0).generate(rng).is_empty());

        let edges = Gnp::new().nodes(10).prob(1.0).generate(rng);
        assert_eq!(edges.len(), 100);
        assert!(edges.iter().tuple_windows().all(|(a, b)| a < b));
    }

    #[test]
    fn undirected_gnp_is_symmetric() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        for _ in 0..10 {
            let graph = AdjArrayUndir::gnp_no_loops(rng, 30, 0.2);
            for u in graph.vertices() {
                assert!(graph.neighbors_of(u).all(|v| v != u));
                for v in graph.neighbors_of(u) {
                    assert!(graph.neighbors_of(v).contains(&u));
                }
            }
        }
    }

    #[test]
    fn expected_density() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let graph = AdjArray::gnp(rng, 100, 0.1);
        // expected 1000 edges; allow generous slack
        assert!((800..1200).contains(&graph.number_of_edges()));
    }

    #[test]
    #[should_panic]
    fn invalid_probability() {
        let _ = Gnp::new().prob(1.5);
    }
}
