use crate::vector::Vector;

/// A representative center paired with the vectors currently assigned to it.
///
/// The center is not required to be the mean of `members`. After
/// [`recompute_center`](super::recompute_center) it is the member closest to that
/// mean, so it is always one of the input vectors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cluster<V> {
    /// Representative point.
    pub center: V,
    /// Assigned vectors, in input order.
    pub members: Vec<V>,
}

impl<V> Cluster<V> {
    /// A cluster with no members.
    pub fn new(center: V) -> Self {
        Self {
            center,
            members: Vec::new(),
        }
    }

    /// A cluster with the given members.
    pub fn with_members(center: V, members: Vec<V>) -> Self {
        Self { center, members }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether no vector is assigned to this cluster.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Same center, members dropped.
    pub fn cleared(self) -> Self {
        Self::new(self.center)
    }
}

impl<V: Vector> Cluster<V> {
    /// Whether some member has exactly the components of `v`.
    pub fn contains<W: Vector>(&self, v: &W) -> bool {
        self.members.iter().any(|m| m.same_components(v))
    }

    /// Sum of squared distances from each member to the center.
    ///
    /// Members are assumed to share the center's dimensionality.
    pub fn inertia(&self) -> f32 {
        self.members
            .iter()
            .map(|m| super::util::squared_euclidean(m.components(), self.center.components()))
            .sum()
    }
}
