use descent_core::nn::init;
use descent_core::nn::losses::MSELoss;
use descent_core::optim::{GradientDescent, Vanilla};
use descent_core::DescentError;
use descent_data::{collate_regression, DataLoader, RandomSampler, RegressionDataset};
use rand::rngs::StdRng;
use rand::SeedableRng;

const TRUE_WEIGHTS: [f64; 3] = [1.5, -2.0, 0.75];
const BATCH_SIZE: usize = 16;
const EPOCHS: usize = 30;
const LEARNING_RATE: f64 = 0.1;

fn main() -> Result<(), DescentError> {
    let dataset = RegressionDataset::synthetic_linear(&TRUE_WEIGHTS, 256, 0.05, 42)?;
    let mut loader = DataLoader::new(dataset, BATCH_SIZE, RandomSampler::new(Some(42)), false)?;

    let mut rng = StdRng::seed_from_u64(0);
    let mut weights = init::normal(TRUE_WEIGHTS.len(), 0.0, 0.1, &mut rng)?;
    let mut optimizer = Vanilla::new();
    let loss_fn = MSELoss::default();

    for epoch in 0..EPOCHS {
        loader.reset();
        let mut total = 0.0;
        let mut batches = 0;
        for batch in loader.by_ref() {
            let (features, targets) = collate_regression(batch?)?;
            total += optimizer.train(&mut weights, &features, &targets, &loss_fn, LEARNING_RATE)?;
            batches += 1;
        }
        println!(
            "Epoch {:>3} | Mean batch loss: {:.6}",
            epoch + 1,
            total / batches as f64
        );
    }

    println!("Learned vs true weights:");
    for (w, truth) in weights.iter().zip(TRUE_WEIGHTS) {
        println!("  {:>9.5}  {:>9.5}", w.value(), truth);
    }
    Ok(())
}
