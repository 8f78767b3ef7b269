//! Clustering over any [`Vector`](crate::Vector) type.
//!
//! ## K-means with medoid-style centers
//!
//! The classic loop: assign each vector to the nearest center, then update each
//! center. The update differs from textbook Lloyd iterations: the new center is
//! the *member* closest to the members' centroid, not the centroid itself. Centers
//! therefore stay valid instances of the vector type, which matters when a vector
//! carries meaning beyond its raw coordinates (a palette color, a feature row).
//!
//! **Objective**: the update never increases the within-cluster sum of squares
//! around the chosen member:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - c_k||²
//! ```
//!
//! **Distance**: Euclidean only.
//!
//! ## Building blocks
//!
//! - [`group_by`]: nearest-center assignment (ties go to the first center)
//! - [`recompute_center`]: member nearest the centroid (ties go to the first member)
//! - [`k_means`] / [`k_means_random`]: the full loop with default settings
//! - [`Kmeans`]: the configurable form (iteration cutoff, convergence test, seed)
//!
//! ## Usage
//!
//! ```rust
//! use vecn::cluster::{k_means, Clustering, Kmeans};
//! use vecn::Point;
//!
//! let data = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.1, 0.1),
//!     Point::new(10.0, 10.0),
//!     Point::new(10.1, 10.1),
//! ];
//!
//! let clusters = k_means(vec![data[0], data[2]], &data).unwrap();
//! assert_eq!(clusters[0].members, vec![data[0], data[1]]);
//! assert_eq!(clusters[1].members, vec![data[2], data[3]]);
//!
//! // One label per point, random initial centers.
//! let labels = Kmeans::new(2).with_seed(42).fit_predict(&data).unwrap();
//! assert_eq!(labels.len(), data.len());
//! ```

mod assign;
mod kmeans;
mod traits;
mod types;
pub(crate) mod util;

pub use assign::{group_by, recompute_center};
pub use kmeans::{
    k_means, k_means_random, random_centers, Convergence, Kmeans, KmeansFit, DEFAULT_MAX_ITER,
};
pub use traits::Clustering;
pub use types::Cluster;
