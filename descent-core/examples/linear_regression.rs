use descent_core::nn::init;
use descent_core::nn::losses::{LossFunction, MSELoss};
use descent_core::optim::{linear_predictions, GradientDescent, Vanilla};
use descent_core::{DescentError, Matrix};

const TRUE_WEIGHTS: [f64; 5] = [2.0, 3.0, 0.5, 1.5, 4.0];
const LEARNING_RATE: f64 = 0.01;
const EPOCHS: usize = 100;

fn main() -> Result<(), DescentError> {
    let features = Matrix::from_rows(vec![
        vec![1.0, 0.0, 2.0, 1.0, 3.0],
        vec![0.0, 1.0, 1.0, 0.0, 2.0],
        vec![2.0, 3.0, 0.5, 1.5, 4.0],
        vec![1.0, 2.0, 0.0, 0.0, 1.0],
        vec![0.5, 1.0, 1.5, 1.0, 0.0],
        vec![3.0, 2.0, 2.0, 1.0, 1.0],
        vec![2.0, 1.0, 0.0, 0.5, 0.0],
        vec![1.0, 1.0, 1.0, 2.0, 2.0],
        vec![0.0, 2.0, 2.0, 0.0, 1.0],
        vec![1.0, 3.0, 0.5, 1.5, 0.0],
    ])?;
    // y = 2x1 + 3x2 + 0.5x3 + 1.5x4 + 4x5
    let targets: Vec<f64> = features
        .row_iter()
        .map(|row| row.iter().zip(TRUE_WEIGHTS).map(|(x, w)| x * w).sum())
        .collect();

    let mut weights = init::constant(TRUE_WEIGHTS.len(), 0.1);
    let mut optimizer = Vanilla::new();
    let loss_fn = MSELoss::default();

    println!("================ Gradient Descent Training ================");
    for epoch in 0..EPOCHS {
        optimizer.train(&mut weights, &features, &targets, &loss_fn, LEARNING_RATE)?;

        let predictions = linear_predictions(&weights, &features)?;
        let loss = loss_fn.compute(&predictions, &targets)?;
        let values: Vec<String> = weights.iter().map(|w| format!("{:.6}", w.value())).collect();
        println!(
            "Epoch {:>3} | Loss: {:.6} | Weights: [ {} ]",
            epoch + 1,
            loss.value(),
            values.join(" ")
        );
    }
    println!("===========================================================");
    println!("Final Weights:");
    for (i, w) in weights.iter().enumerate() {
        println!("  w[{}] = {:.6}", i, w.value());
    }
    Ok(())
}
