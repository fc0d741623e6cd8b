use descent_core::{Matrix, Node};

/// Builds a noiseless linear dataset `y = weights . x` over a fixed grid of
/// feature rows.
#[allow(dead_code)]
pub fn noiseless_linear(weights: &[f64], n_samples: usize) -> (Matrix, Vec<f64>) {
    let rows: Vec<Vec<f64>> = (0..n_samples)
        .map(|i| {
            (0..weights.len())
                .map(|j| ((i * (j + 2) + j) % 7) as f64 / 3.0 - 1.0)
                .collect()
        })
        .collect();
    let targets: Vec<f64> = rows
        .iter()
        .map(|row| row.iter().zip(weights).map(|(x, w)| x * w).sum())
        .collect();
    let features = Matrix::from_rows(rows).expect("Test matrix creation failed");
    (features, targets)
}

#[allow(dead_code)]
pub fn grads(nodes: &[Node]) -> Vec<f64> {
    nodes.iter().map(Node::grad).collect()
}
