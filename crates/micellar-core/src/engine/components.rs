use crate::core::matrix::MatrixError;
use nalgebra::DMatrix;

/// Capability interface over an adjacency representation: node count, node
/// degree, and neighbour iteration. This is all the component labeler needs,
/// so dense and sparse matrices implement it once each.
pub trait Adjacency {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of neighbours of `node` (row-sum of a binary adjacency matrix).
    fn degree(&self, node: usize) -> usize;

    fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_;
}

impl Adjacency for DMatrix<f64> {
    fn len(&self) -> usize {
        self.nrows()
    }

    fn degree(&self, node: usize) -> usize {
        self.row(node).iter().filter(|&&x| x != 0.0).count()
    }

    fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.ncols()).filter(move |&j| self[(node, j)] != 0.0)
    }
}

/// Compact sparse adjacency: per-node sorted neighbour lists built from an
/// undirected edge list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseAdjacency {
    rows: Vec<Vec<usize>>,
}

impl SparseAdjacency {
    /// Builds a symmetric adjacency structure over `n` nodes. Self-edges are
    /// ignored; duplicate edges are collapsed.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, MatrixError> {
        let mut rows = vec![Vec::new(); n];

        for &(a, b) in edges {
            if a >= n || b >= n {
                return Err(MatrixError::IndexOutOfBounds {
                    index: a.max(b),
                    len: n,
                });
            }
            if a == b {
                continue;
            }
            rows[a].push(b);
            rows[b].push(a);
        }

        for row in &mut rows {
            row.sort_unstable();
            row.dedup();
        }

        Ok(Self { rows })
    }
}

impl Adjacency for SparseAdjacency {
    fn len(&self) -> usize {
        self.rows.len()
    }

    fn degree(&self, node: usize) -> usize {
        self.rows[node].len()
    }

    fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.rows[node].iter().copied()
    }
}

/// Disjoint-set forest with union by size and path halving.
struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            self.parent[node] = self.parent[self.parent[node]];
            node = self.parent[node];
        }
        node
    }

    fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return;
        }
        let (big, small) = if self.size[root_a] >= self.size[root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
    }
}

/// Assigns cluster labels to every node of an adjacency graph.
///
/// Nodes whose degree is below `noise_thresh` are pruned outright: they always
/// receive the background label 0 and never join a component, even where they
/// would have bridged two surviving components. Connected components of the
/// surviving graph with at least `cluster_thresh` members receive labels
/// 1, 2, ... in order of their lowest member index; smaller components stay at
/// 0.
pub fn label_elements<A: Adjacency>(
    adjacency: &A,
    noise_thresh: usize,
    cluster_thresh: usize,
) -> Vec<i64> {
    let n = adjacency.len();
    let mut labels = vec![0i64; n];

    // Degrees are measured on the full graph, before any pruning.
    let kept: Vec<bool> = (0..n).map(|i| adjacency.degree(i) >= noise_thresh).collect();
    if !kept.iter().any(|&keep| keep) {
        return labels;
    }

    let mut forest = DisjointSet::new(n);
    for i in 0..n {
        if !kept[i] {
            continue;
        }
        for j in adjacency.neighbors(i) {
            if j > i && kept[j] {
                forest.union(i, j);
            }
        }
    }

    let mut component_size = vec![0usize; n];
    for i in 0..n {
        if kept[i] {
            let root = forest.find(i);
            component_size[root] += 1;
        }
    }

    let mut root_label = vec![0i64; n];
    let mut next_label = 1i64;
    for i in 0..n {
        if !kept[i] {
            continue;
        }
        let root = forest.find(i);
        if component_size[root] < cluster_thresh {
            continue;
        }
        if root_label[root] == 0 {
            root_label[root] = next_label;
            next_label += 1;
        }
        labels[i] = root_label[root];
    }

    labels
}

/// Remaps the conventional 0 background to a caller-supplied value.
///
/// Entries equal to `background` are first moved to `max + 1` to avoid
/// collisions, then all remaining zeros become `background`. When no clusters
/// were found the output is uniformly `background`.
pub fn apply_background(labels: &mut [i64], background: i64) {
    if background == 0 {
        return;
    }

    let max_label = labels.iter().copied().max().unwrap_or(0);
    for label in labels.iter_mut() {
        if *label == background {
            *label = max_label + 1;
        }
    }
    for label in labels.iter_mut() {
        if *label == 0 {
            *label = background;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dense(n: usize, entries: &[f64]) -> DMatrix<f64> {
        DMatrix::from_row_slice(n, n, entries)
    }

    // Two clusters: particles 0, 1, 2, 6 and particles 3, 4, 5.
    fn two_cluster_matrix() -> DMatrix<f64> {
        dense(
            7,
            &[
                0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, //
                1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, //
                0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, //
                0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, //
                0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
            ],
        )
    }

    // Three clusters: 0/1/2/3(via 9, 7, 5...), see the per-test expectations.
    fn three_cluster_matrix() -> DMatrix<f64> {
        dense(
            12,
            &[
                0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, //
                0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, //
                0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, //
                0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, //
                0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, //
                1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, //
                0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
            ],
        )
    }

    // All twelve particles form one component, with awkward edge ordering.
    fn single_cluster_matrix() -> DMatrix<f64> {
        dense(
            12,
            &[
                0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, //
                1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, //
                1.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, //
                0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, //
                0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, //
                0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, //
                0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, //
                0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, //
                0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, //
                0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0,
            ],
        )
    }

    #[test]
    fn labels_two_components_in_member_order() {
        let labels = label_elements(&two_cluster_matrix(), 1, 1);
        assert_eq!(labels, vec![1, 1, 1, 2, 2, 2, 1]);
    }

    #[test]
    fn noise_pruning_drops_low_degree_nodes_to_background() {
        let labels = label_elements(&two_cluster_matrix(), 2, 1);
        assert_eq!(labels, vec![1, 1, 0, 2, 2, 2, 0]);
    }

    #[test]
    fn cluster_threshold_drops_small_components_to_background() {
        let labels = label_elements(&two_cluster_matrix(), 1, 4);
        assert_eq!(labels, vec![1, 1, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn labels_three_interleaved_components() {
        let labels = label_elements(&three_cluster_matrix(), 1, 1);
        assert_eq!(labels, vec![1, 1, 1, 2, 2, 1, 3, 1, 3, 1, 3, 1]);

        let labels = label_elements(&three_cluster_matrix(), 2, 1);
        assert_eq!(labels, vec![0, 1, 0, 0, 0, 1, 2, 1, 2, 1, 2, 0]);

        let labels = label_elements(&three_cluster_matrix(), 2, 4);
        assert_eq!(labels, vec![0, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0]);
    }

    #[test]
    fn fully_connected_clique_yields_one_cluster() {
        let mut clique = DMatrix::from_element(12, 12, 1.0);
        clique.fill_diagonal(0.0);

        let labels = label_elements(&clique, 1, 1);
        assert_eq!(labels, vec![1; 12]);
    }

    #[test]
    fn single_component_survives_moderate_noise_pruning() {
        let labels = label_elements(&single_cluster_matrix(), 1, 1);
        assert_eq!(labels, vec![1; 12]);

        let labels = label_elements(&single_cluster_matrix(), 2, 1);
        assert_eq!(labels, vec![1; 12]);
    }

    #[test]
    fn aggressive_noise_pruning_fragments_the_component() {
        // Only nodes 2 and 7 have degree 3; with no surviving edge between
        // them they become two singleton components.
        let labels = label_elements(&single_cluster_matrix(), 3, 1);
        assert_eq!(labels, vec![0, 0, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0]);

        let labels = label_elements(&single_cluster_matrix(), 3, 2);
        assert_eq!(labels, vec![0; 12]);
    }

    #[test]
    fn raising_cluster_threshold_never_creates_new_labels() {
        for matrix in [two_cluster_matrix(), three_cluster_matrix(), single_cluster_matrix()] {
            let loose = label_elements(&matrix, 1, 1);
            let strict = label_elements(&matrix, 1, 2);

            for (loose_label, strict_label) in loose.iter().zip(strict.iter()) {
                assert!(*strict_label == 0 || *loose_label != 0);
            }
        }
    }

    #[test]
    fn empty_graph_after_pruning_short_circuits_to_background() {
        let labels = label_elements(&DMatrix::<f64>::zeros(5, 5), 1, 1);
        assert_eq!(labels, vec![0; 5]);
    }

    #[test]
    fn sparse_adjacency_matches_dense_labeling() {
        let dense_matrix = three_cluster_matrix();
        let mut edges = Vec::new();
        for i in 0..12 {
            for j in (i + 1)..12 {
                if dense_matrix[(i, j)] != 0.0 {
                    edges.push((i, j));
                }
            }
        }
        let sparse = SparseAdjacency::from_edges(12, &edges).unwrap();

        for (noise_thresh, cluster_thresh) in [(1, 1), (2, 1), (2, 4)] {
            assert_eq!(
                label_elements(&sparse, noise_thresh, cluster_thresh),
                label_elements(&dense_matrix, noise_thresh, cluster_thresh)
            );
        }
    }

    #[test]
    fn sparse_adjacency_rejects_out_of_range_edges() {
        assert!(SparseAdjacency::from_edges(3, &[(0, 5)]).is_err());
    }

    #[test]
    fn apply_background_replaces_zero_labels() {
        let mut labels = vec![1, 1, 0, 2, 2, 2, 0];
        apply_background(&mut labels, -1);
        assert_eq!(labels, vec![1, 1, -1, 2, 2, 2, -1]);
    }

    #[test]
    fn apply_background_avoids_label_collisions() {
        let mut labels = vec![1, 2, 0, 2, 0];
        apply_background(&mut labels, 2);
        assert_eq!(labels, vec![1, 3, 2, 3, 2]);
    }

    #[test]
    fn apply_background_with_no_clusters_is_uniform() {
        let mut labels = vec![0; 6];
        apply_background(&mut labels, -1);
        assert_eq!(labels, vec![-1; 6]);

        let mut labels = vec![0; 6];
        apply_background(&mut labels, 7);
        assert_eq!(labels, vec![7; 6]);
    }

    #[test]
    fn apply_background_zero_is_a_no_op() {
        let mut labels = vec![1, 0, 2];
        apply_background(&mut labels, 0);
        assert_eq!(labels, vec![1, 0, 2]);
    }
}
