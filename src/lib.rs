//! Dimension-agnostic vectors and k-means clustering.
//!
//! `vecn` is a small building block: any point type (2D, 3D, N-dimensional, or a
//! domain type such as a color or a feature row) plugs into the same arithmetic and
//! clustering by implementing [`Vector`].
//!
//! - [`vector`]: the [`Vector`] trait, [`centroid`], and the [`Point`] type
//! - [`cluster`]: nearest-center assignment, medoid-style center updates, k-means
//!
//! Enable the `parallel` feature to scan nearest centers with rayon, and `serde`
//! for serialization of points and clusters.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod vector;

pub use cluster::{
    group_by, k_means, k_means_random, recompute_center, Cluster, Clustering, Convergence, Kmeans,
    KmeansFit,
};
pub use error::{Error, Result};
pub use vector::{centroid, Point, Point2, Point3, Vector};
