use super::*;

fn sample() -> Matrix {
    Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap()
}

#[test]
fn test_matrix_from_rows() {
    let m = sample();
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m[(1, 2)], 6.0);
    assert_eq!(m.row(0), &[1.0, 2.0, 3.0]);
    assert_eq!(m.get(2, 0), None);
}

#[test]
fn test_matrix_from_ragged_rows_fails() {
    let result = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
    match result {
        Err(DescentError::LengthMismatch {
            expected, actual, ..
        }) => {
            assert_eq!(expected, 2);
            assert_eq!(actual, 1);
        }
        other => panic!("Expected LengthMismatch, got {:?}", other),
    }
}

#[test]
fn test_matrix_transpose() {
    let t = sample().transpose();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t[(2, 1)], 6.0);
    assert_eq!(t.transpose(), sample());
}

#[test]
fn test_matrix_matmul() {
    let m = sample();
    let product = m.matmul(&m.transpose()).unwrap();
    let expected = Matrix::from_rows(vec![vec![14.0, 32.0], vec![32.0, 77.0]]).unwrap();
    assert_eq!(product, expected);

    assert_eq!(m.matmul(&Matrix::identity(3)).unwrap(), m);
    assert!(matches!(
        m.matmul(&m),
        Err(DescentError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_matrix_mul_vector() {
    let m = sample();
    let v = Vector::new(vec![1.0, 0.0, -1.0]);
    assert_eq!(m.mul_vector(&v).unwrap(), Vector::new(vec![-2.0, -2.0]));
    assert!(m.mul_vector(&Vector::zeros(2)).is_err());
}

#[test]
fn test_matrix_add_sub_scale() {
    let m = sample();
    let doubled = m.add(&m).unwrap();
    assert_eq!(doubled, m.scale(2.0));
    assert_eq!(doubled.sub(&m).unwrap(), m);
    assert!(m.add(&Matrix::zeros(3, 2)).is_err());
}

#[test]
#[should_panic]
fn test_matrix_index_out_of_bounds() {
    let m = sample();
    let _ = m[(0, 3)];
}
