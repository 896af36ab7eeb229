//! Least-squares regression tree (CART)

use domain::features::FEATURE_COUNT;

use crate::ports::FeatureRow;

/// Growth limits for a single tree
#[derive(Debug, Clone, Copy)]
pub(crate) struct TreeParams {
    pub max_depth: usize,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

#[derive(Debug, Clone, Copy)]
struct BestSplit {
    feature: usize,
    threshold: f64,
    /// Number of samples going left once sorted by `feature`
    left_len: usize,
    score: f64,
}

/// Binary regression tree; rows with `x[feature] <= threshold` go left
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RegressionTree {
    nodes: Vec<Node>,
}

impl RegressionTree {
    /// Grow a tree on `rows`/`targets`; both must be non-empty and equal length
    pub fn fit(rows: &[FeatureRow], targets: &[f64], params: TreeParams) -> Self {
        let mut tree = Self { nodes: Vec::new() };
        let mut indices: Vec<usize> = (0..rows.len()).collect();
        tree.grow(rows, targets, &mut indices, 0, params);
        tree
    }

    pub fn predict(&self, row: &FeatureRow) -> f64 {
        let mut at = 0;
        loop {
            match self.nodes[at] {
                Node::Leaf { value } => return value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => at = if row[feature] <= threshold { left } else { right },
            }
        }
    }

    #[cfg(test)]
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Leaf { .. }))
            .count()
    }

    fn grow(
        &mut self,
        rows: &[FeatureRow],
        targets: &[f64],
        indices: &mut [usize],
        depth: usize,
        params: TreeParams,
    ) -> usize {
        let n = indices.len();
        let sum: f64 = indices.iter().map(|&i| targets[i]).sum();
        let mean = sum / n as f64;
        let sse: f64 = indices.iter().map(|&i| (targets[i] - mean).powi(2)).sum();

        let id = self.nodes.len();
        self.nodes.push(Node::Leaf { value: mean });

        if depth >= params.max_depth
            || n < params.min_samples_split
            || n < 2 * params.min_samples_leaf
            || sse <= f64::EPSILON * n as f64
        {
            return id;
        }

        let Some(best) = Self::best_split(rows, targets, indices, params.min_samples_leaf) else {
            return id;
        };

        // Partition by the chosen feature; the sort is stable, so ties keep
        // their previous relative order and the result is deterministic.
        indices.sort_by(|&a, &b| rows[a][best.feature].total_cmp(&rows[b][best.feature]));
        let (left_idx, right_idx) = indices.split_at_mut(best.left_len);

        let left = self.grow(rows, targets, left_idx, depth + 1, params);
        let right = self.grow(rows, targets, right_idx, depth + 1, params);
        self.nodes[id] = Node::Split {
            feature: best.feature,
            threshold: best.threshold,
            left,
            right,
        };
        id
    }

    /// Find the split maximising `sum_l^2 / n_l + sum_r^2 / n_r`, which is
    /// the same as minimising the children's summed squared error
    fn best_split(
        rows: &[FeatureRow],
        targets: &[f64],
        indices: &[usize],
        min_leaf: usize,
    ) -> Option<BestSplit> {
        let n = indices.len();
        let total: f64 = indices.iter().map(|&i| targets[i]).sum();
        let mut best: Option<BestSplit> = None;
        let mut order = indices.to_vec();

        for feature in 0..FEATURE_COUNT {
            order.sort_by(|&a, &b| rows[a][feature].total_cmp(&rows[b][feature]));

            let mut left_sum = 0.0;
            for pos in 1..n {
                left_sum += targets[order[pos - 1]];

                let lo = rows[order[pos - 1]][feature];
                let hi = rows[order[pos]][feature];
                if pos < min_leaf || n - pos < min_leaf || lo >= hi {
                    continue;
                }

                let right_sum = total - left_sum;
                let score =
                    left_sum * left_sum / pos as f64 + right_sum * right_sum / (n - pos) as f64;

                if best.is_none_or(|b| score > b.score) {
                    let mut threshold = lo + (hi - lo) / 2.0;
                    if threshold >= hi {
                        threshold = lo;
                    }
                    best = Some(BestSplit {
                        feature,
                        threshold,
                        left_len: pos,
                        score,
                    });
                }
            }
        }

        best
    }
}
