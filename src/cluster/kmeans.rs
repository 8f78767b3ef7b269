//! K-means with medoid-style centers.
//!
//! # The Loop
//!
//! 1. Start from k centers (given, or drawn uniformly inside a bounding vector)
//! 2. **Assign**: each vector → nearest center ([`group_by`](super::group_by))
//! 3. **Update**: each center → the member nearest the members' centroid
//!    ([`recompute_center`](super::recompute_center))
//! 4. Stop once an iteration leaves every center where it was
//!
//! Unlike Lloyd's algorithm the update step never produces a synthetic mean: from
//! the first update on, every non-empty cluster is centered on one of the input
//! vectors. Clusters that attract no members keep their previous center.
//!
//! # Convergence
//!
//! By default centers are compared index by index ([`Convergence::Positional`]).
//! If two clusters swap centers between iterations the center set is unchanged but
//! the run keeps going; [`Convergence::Unordered`] compares centers as a multiset
//! instead. Either way the run is capped by [`Kmeans::with_max_iter`].

use rand::prelude::*;
use tracing::{debug, warn};

use super::assign::{assign, recenter, validate};
use super::traits::Clustering;
use super::types::Cluster;
use crate::error::{check_dim, Error, Result};
use crate::vector::Vector;

/// Default safety cutoff on iterations.
pub const DEFAULT_MAX_ITER: usize = 10_000;

/// How two successive center lists are compared to detect convergence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Convergence {
    /// Center `i` must equal center `i` of the previous iteration, for every `i`.
    #[default]
    Positional,
    /// The two center lists must be equal as multisets.
    Unordered,
}

impl Convergence {
    fn is_converged<V: Vector>(self, previous: &[V], next: &[Cluster<V>]) -> bool {
        match self {
            Self::Positional => previous
                .iter()
                .zip(next)
                .all(|(p, c)| p.same_components(&c.center)),
            Self::Unordered => {
                let mut used = vec![false; next.len()];
                previous.iter().all(|p| {
                    let hit = (0..next.len())
                        .find(|&j| !used[j] && p.same_components(&next[j].center));
                    match hit {
                        Some(j) => {
                            used[j] = true;
                            true
                        }
                        None => false,
                    }
                })
            }
        }
    }
}

/// K-means clustering configuration.
#[derive(Debug, Clone)]
pub struct Kmeans {
    /// Number of clusters.
    k: usize,
    /// Maximum iterations.
    max_iter: usize,
    /// Convergence test.
    convergence: Convergence,
    /// Random seed.
    seed: Option<u64>,
}

/// Outcome of a k-means run.
#[derive(Debug, Clone, PartialEq)]
pub struct KmeansFit<V> {
    /// Final clusters, in initial-center order.
    pub clusters: Vec<Cluster<V>>,
    /// Cluster index of each input vector, in input order.
    pub labels: Vec<usize>,
    /// Number of assign/update rounds performed.
    pub iterations: usize,
    /// `false` if the run stopped at the iteration cutoff.
    pub converged: bool,
}

impl<V: Vector> KmeansFit<V> {
    /// The final centers, in cluster order.
    pub fn centers(&self) -> Vec<V> {
        self.clusters.iter().map(|c| c.center.clone()).collect()
    }

    /// Total within-cluster sum of squared distances to the centers.
    pub fn inertia(&self) -> f32 {
        self.clusters.iter().map(Cluster::inertia).sum()
    }
}

impl Kmeans {
    /// Create a new K-means clusterer.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: DEFAULT_MAX_ITER,
            convergence: Convergence::default(),
            seed: None,
        }
    }

    /// Set maximum iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the convergence test.
    pub fn with_convergence(mut self, convergence: Convergence) -> Self {
        self.convergence = convergence;
        self
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Configured maximum iterations.
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    /// Configured convergence test.
    pub fn convergence(&self) -> Convergence {
        self.convergence
    }

    fn check_params(&self, n_items: usize) -> Result<()> {
        if self.k == 0 {
            return Err(Error::InvalidClusterCount {
                requested: 0,
                n_items,
            });
        }
        if self.max_iter == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                message: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Run k-means from explicit initial centers.
    ///
    /// `initial_centers` must hold exactly `k` vectors. `k` may exceed the number of
    /// vectors; surplus clusters end up empty. An empty `vectors` slice is accepted
    /// and converges after one iteration with every cluster empty.
    pub fn fit<V: Vector>(&self, initial_centers: Vec<V>, vectors: &[V]) -> Result<KmeansFit<V>> {
        self.check_params(vectors.len())?;
        if initial_centers.len() != self.k {
            return Err(Error::InvalidParameter {
                name: "initial_centers",
                message: "length must equal k",
            });
        }
        validate(vectors, &initial_centers)?;

        let mut centers = initial_centers;
        let mut iteration = 0;
        loop {
            iteration += 1;
            let (candidates, labels) = assign(vectors, &centers);
            let next: Vec<Cluster<V>> = candidates.into_iter().map(recenter).collect();

            let converged = self.convergence.is_converged(&centers, &next);
            if converged {
                debug!(iteration, k = self.k, n = vectors.len(), "k-means converged");
            } else if iteration >= self.max_iter {
                warn!(
                    max_iter = self.max_iter,
                    k = self.k,
                    n = vectors.len(),
                    "k-means stopped at iteration cutoff before converging"
                );
            }
            if converged || iteration >= self.max_iter {
                return Ok(KmeansFit {
                    clusters: next,
                    labels,
                    iterations: iteration,
                    converged,
                });
            }

            let moved = centers
                .iter()
                .zip(&next)
                .filter(|(p, c)| !p.same_components(&c.center))
                .count();
            debug!(iteration, moved, "k-means iteration");

            // Members are rebuilt from scratch by the next assignment.
            centers = next.into_iter().map(|c| c.center).collect();
        }
    }

    /// Run k-means from `k` random centers inside `bound`.
    ///
    /// Component `i` of each initial center is `bound[i] * u` with `u` drawn
    /// uniformly from `[0, 1)`.
    pub fn fit_random<V: Vector, R: Rng>(
        &self,
        bound: &V,
        vectors: &[V],
        rng: &mut R,
    ) -> Result<KmeansFit<V>> {
        self.check_params(vectors.len())?;
        let centers = random_centers(self.k, bound, rng);
        self.fit(centers, vectors)
    }

    /// [`fit_random`](Self::fit_random) with an RNG derived from the configured
    /// seed, or the thread RNG when no seed is set.
    pub fn fit_seeded<V: Vector>(&self, bound: &V, vectors: &[V]) -> Result<KmeansFit<V>> {
        let mut rng = self.rng();
        self.fit_random(bound, vectors, &mut rng)
    }

    fn rng(&self) -> Box<dyn RngCore> {
        match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        }
    }
}

impl Default for Kmeans {
    fn default() -> Self {
        Self::new(8)
    }
}

impl<V: Vector> Clustering<V> for Kmeans {
    /// Initial centers are drawn uniformly inside the bounding box of `data`.
    fn fit_predict(&self, data: &[V]) -> Result<Vec<usize>> {
        let first = data.first().ok_or(Error::EmptyInput)?;
        self.check_params(data.len())?;

        let dim = first.dim();
        let mut lo = first.components().to_vec();
        let mut hi = lo.clone();
        for v in data {
            check_dim(dim, v.dim())?;
            for ((l, h), &x) in lo.iter_mut().zip(hi.iter_mut()).zip(v.components()) {
                *l = l.min(x);
                *h = h.max(x);
            }
        }

        let mut rng = self.rng();
        let centers = box_centers(self.k, &lo, &hi, &mut rng);
        Ok(self.fit(centers, data)?.labels)
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

/// `k` vectors with component `i` drawn uniformly from `[0, bound[i])`.
pub fn random_centers<V: Vector, R: Rng>(k: usize, bound: &V, rng: &mut R) -> Vec<V> {
    let lo = vec![0.0f32; bound.dim()];
    box_centers(k, &lo, bound.components(), rng)
}

fn box_centers<V: Vector, R: Rng>(k: usize, lo: &[f32], hi: &[f32], rng: &mut R) -> Vec<V> {
    (0..k)
        .map(|_| {
            V::create(
                lo.iter()
                    .zip(hi)
                    .map(|(&l, &h)| l + (h - l) * rng.random::<f32>())
                    .collect(),
            )
        })
        .collect()
}

/// Run k-means from explicit initial centers with the default configuration.
///
/// `k` is `initial_centers.len()`. See [`Kmeans::fit`].
pub fn k_means<V: Vector>(initial_centers: Vec<V>, vectors: &[V]) -> Result<Vec<Cluster<V>>> {
    Kmeans::new(initial_centers.len())
        .fit(initial_centers, vectors)
        .map(|fit| fit.clusters)
}

/// Run k-means from `k` random centers inside `bound` with the default
/// configuration. See [`Kmeans::fit_random`].
pub fn k_means_random<V: Vector, R: Rng>(
    k: usize,
    bound: &V,
    vectors: &[V],
    rng: &mut R,
) -> Result<Vec<Cluster<V>>> {
    Kmeans::new(k)
        .fit_random(bound, vectors, rng)
        .map(|fit| fit.clusters)
}
