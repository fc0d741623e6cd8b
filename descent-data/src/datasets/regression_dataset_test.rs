use super::*;
use approx::assert_relative_eq;

#[test]
fn test_new_and_get() {
    let features = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let dataset = RegressionDataset::new(features, Vector::new(vec![5.0, 6.0])).unwrap();
    assert_eq!(dataset.len(), 2);
    assert!(!dataset.is_empty());
    assert_eq!(dataset.num_features(), 2);
    assert_eq!(dataset.get(1).unwrap(), (vec![3.0, 4.0], 6.0));
}

#[test]
fn test_get_out_of_bounds() {
    let features = Matrix::from_rows(vec![vec![1.0]]).unwrap();
    let dataset = RegressionDataset::new(features, Vector::new(vec![1.0])).unwrap();
    assert_eq!(
        dataset.get(1),
        Err(DescentError::IndexOutOfBounds { index: 1, len: 1 })
    );
}

#[test]
fn test_new_target_count_mismatch() {
    let features = Matrix::from_rows(vec![vec![1.0], vec![2.0]]).unwrap();
    let result = RegressionDataset::new(features, Vector::new(vec![1.0]));
    assert!(matches!(
        result,
        Err(DescentError::LengthMismatch {
            expected: 2,
            actual: 1,
            ..
        })
    ));
}

#[test]
fn test_synthetic_linear_noiseless_matches_weights() {
    let weights = [2.0, -1.0, 0.5];
    let dataset = RegressionDataset::synthetic_linear(&weights, 50, 0.0, 7).unwrap();
    assert_eq!(dataset.len(), 50);
    assert_eq!(dataset.features().shape(), (50, 3));
    for i in 0..dataset.len() {
        let (x, y) = dataset.get(i).unwrap();
        assert!(x.iter().all(|v| (-1.0..1.0).contains(v)));
        let expected: f64 = x.iter().zip(&weights).map(|(a, b)| a * b).sum();
        assert_relative_eq!(y, expected, epsilon = 1e-12);
    }
}

#[test]
fn test_synthetic_linear_is_reproducible() {
    let a = RegressionDataset::synthetic_linear(&[1.0, 1.0], 10, 0.1, 3).unwrap();
    let b = RegressionDataset::synthetic_linear(&[1.0, 1.0], 10, 0.1, 3).unwrap();
    let c = RegressionDataset::synthetic_linear(&[1.0, 1.0], 10, 0.1, 4).unwrap();
    assert_eq!(a.features(), b.features());
    assert_eq!(a.targets(), b.targets());
    assert_ne!(a.targets(), c.targets());
}

#[test]
fn test_synthetic_linear_rejects_bad_noise() {
    for noise_std in [-1.0, -0.5, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            RegressionDataset::synthetic_linear(&[1.0], 5, noise_std, 0),
            Err(DescentError::InvalidHyperparameter { .. })
        ));
    }
}

#[test]
fn test_synthetic_linear_empty() {
    let dataset = RegressionDataset::synthetic_linear(&[1.0, 2.0], 0, 0.0, 0).unwrap();
    assert!(dataset.is_empty());
    assert_eq!(dataset.num_features(), 2);
}
