//! Assignment and center recomputation, the two halves of a k-means iteration.

use super::types::Cluster;
use super::util::{argmin_first, squared_euclidean};
use crate::error::{check_dim, Error, Result};
use crate::vector::{centroid, Vector};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Assign every vector to its nearest center.
///
/// Returns one cluster per center, in `centers` order. Each vector lands in
/// exactly one cluster; when several centers are equally near, the first of them
/// in `centers` wins. Members keep their relative input order and a cluster may
/// end up with no members.
///
/// Fails with [`Error::InvalidClusterCount`] if `centers` is empty and with
/// [`Error::DimensionMismatch`] if any vector or center disagrees with the first
/// center's dimensionality.
pub fn group_by<V: Vector>(vectors: &[V], centers: &[V]) -> Result<Vec<Cluster<V>>> {
    validate(vectors, centers)?;
    Ok(assign(vectors, centers).0)
}

/// Move the cluster's center to the member nearest the members' centroid.
///
/// An empty cluster is returned unchanged. Ties go to the earliest member.
/// Members are kept as they are.
pub fn recompute_center<V: Vector>(cluster: Cluster<V>) -> Result<Cluster<V>> {
    let dim = cluster.center.dim();
    for m in &cluster.members {
        check_dim(dim, m.dim())?;
    }
    Ok(recenter(cluster))
}

/// Check that there is at least one center and that everything shares its
/// dimensionality. Returns that dimensionality.
pub(crate) fn validate<V: Vector>(vectors: &[V], centers: &[V]) -> Result<usize> {
    let first = centers.first().ok_or(Error::InvalidClusterCount {
        requested: 0,
        n_items: vectors.len(),
    })?;
    let dim = first.dim();
    for v in centers.iter().chain(vectors) {
        check_dim(dim, v.dim())?;
    }
    Ok(dim)
}

fn nearest<V: Vector>(v: &V, centers: &[V]) -> usize {
    argmin_first(
        centers
            .iter()
            .map(|c| squared_euclidean(v.components(), c.components())),
    )
    .unwrap_or(0)
}

#[cfg(feature = "parallel")]
fn nearest_labels<V: Vector>(vectors: &[V], centers: &[V]) -> Vec<usize> {
    vectors.par_iter().map(|v| nearest(v, centers)).collect()
}

#[cfg(not(feature = "parallel"))]
fn nearest_labels<V: Vector>(vectors: &[V], centers: &[V]) -> Vec<usize> {
    vectors.iter().map(|v| nearest(v, centers)).collect()
}

/// Unchecked assignment. Returns the clusters and the cluster index of each
/// input vector.
pub(crate) fn assign<V: Vector>(vectors: &[V], centers: &[V]) -> (Vec<Cluster<V>>, Vec<usize>) {
    let labels = nearest_labels(vectors, centers);

    let mut counts = vec![0usize; centers.len()];
    for &l in &labels {
        counts[l] += 1;
    }

    let mut clusters: Vec<Cluster<V>> = centers
        .iter()
        .zip(counts)
        .map(|(c, n)| Cluster::with_members(c.clone(), Vec::with_capacity(n)))
        .collect();
    for (v, &l) in vectors.iter().zip(&labels) {
        clusters[l].members.push(v.clone());
    }

    (clusters, labels)
}

/// Unchecked center recomputation.
pub(crate) fn recenter<V: Vector>(cluster: Cluster<V>) -> Cluster<V> {
    let Some(mean) = centroid(&cluster.members) else {
        return cluster;
    };
    let best = argmin_first(
        cluster
            .members
            .iter()
            .map(|m| squared_euclidean(m.components(), mean.components())),
    );
    match best {
        Some(i) => Cluster {
            center: cluster.members[i].clone(),
            members: cluster.members,
        },
        None => cluster,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Point;

    #[test]
    fn group_by_nearest_center() {
        let small = Point::new(0.0, 0.0);
        let big = Point::new(100.0, 100.0);
        let small_group = Point::new(10.0, 10.0);
        let big_group = Point::new(90.0, 90.0);

        let clusters = group_by(&[small, big], &[small_group, big_group]).unwrap();

        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].center, small_group);
        assert_eq!(clusters[0].members, vec![small]);
        assert_eq!(clusters[1].center, big_group);
        assert_eq!(clusters[1].members, vec![big]);
    }

    #[test]
    fn group_by_ties_go_to_first_center() {
        let v = Point::new(0.0, 0.0);
        let centers = [Point::new(-1.0, 0.0), Point::new(1.0, 0.0)];
        let clusters = group_by(&[v], &centers).unwrap();
        assert_eq!(clusters[0].members, vec![v]);
        assert!(clusters[1].is_empty());
    }

    #[test]
    fn group_by_keeps_input_order_and_empty_clusters() {
        let vectors = [
            Point::new(3.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ];
        let centers = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
        let clusters = group_by(&vectors, &centers).unwrap();
        assert_eq!(clusters[0].members, vectors.to_vec());
        assert!(clusters[1].is_empty());
    }

    #[test]
    fn group_by_labels_match_members() {
        let vectors = vec![vec![0.0f32], vec![9.0], vec![1.0], vec![10.0]];
        let centers = vec![vec![0.0f32], vec![10.0]];
        let (clusters, labels) = assign(&vectors, &centers);
        assert_eq!(labels, vec![0, 1, 0, 1]);
        assert_eq!(clusters[0].members, vec![vec![0.0], vec![1.0]]);
        assert_eq!(clusters[1].members, vec![vec![9.0], vec![10.0]]);
    }

    #[test]
    fn group_by_rejects_bad_input() {
        let vectors = vec![vec![0.0f32, 0.0]];
        assert_eq!(
            group_by(&vectors, &[]).unwrap_err(),
            Error::InvalidClusterCount {
                requested: 0,
                n_items: 1
            }
        );
        assert_eq!(
            group_by(&vectors, &[vec![0.0]]).unwrap_err(),
            Error::DimensionMismatch {
                expected: 1,
                found: 2
            }
        );
        assert!(group_by(&vectors, &[vec![0.0, 0.0], vec![1.0]]).is_err());
    }

    #[test]
    fn recompute_center_picks_member_nearest_centroid() {
        let cluster = Cluster::with_members(
            Point::new(0.0, 0.0),
            vec![
                Point::new(-10.0, -5.0),
                Point::new(6.0, 6.0),
                Point::new(20.0, 10.0),
            ],
        );
        let out = recompute_center(cluster.clone()).unwrap();
        assert_eq!(out.center, Point::new(6.0, 6.0));
        assert_eq!(out.members, cluster.members);
    }

    #[test]
    fn recompute_center_ties_go_to_first_member() {
        let cluster = Cluster::with_members(
            Point::new(5.0, 5.0),
            vec![Point::new(-1.0, 0.0), Point::new(1.0, 0.0)],
        );
        let out = recompute_center(cluster).unwrap();
        assert_eq!(out.center, Point::new(-1.0, 0.0));
    }

    #[test]
    fn recompute_center_leaves_empty_cluster_alone() {
        let cluster = Cluster::new(Point::new(3.0, 4.0));
        let out = recompute_center(cluster.clone()).unwrap();
        assert_eq!(out, cluster);
    }

    #[test]
    fn recompute_center_rejects_mismatched_members() {
        let cluster = Cluster::with_members(vec![0.0f32, 0.0], vec![vec![1.0, 1.0], vec![1.0]]);
        assert!(matches!(
            recompute_center(cluster),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
