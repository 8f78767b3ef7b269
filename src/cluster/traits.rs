use crate::error::Result;
use crate::vector::Vector;

/// Common interface for hard clustering algorithms (one label per point).
pub trait Clustering<V: Vector> {
    /// Fit the model (if needed) and return one cluster label per input point.
    fn fit_predict(&self, data: &[V]) -> Result<Vec<usize>>;

    /// The configured number of clusters.
    fn n_clusters(&self) -> usize;
}
