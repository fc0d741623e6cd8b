use crate::error::DescentError;
use std::ops::{Deref, DerefMut, Mul};

/// A dense vector of `f64`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector(Vec<f64>);

impl Vector {
    pub fn new(data: Vec<f64>) -> Self {
        Vector(data)
    }

    pub fn zeros(len: usize) -> Self {
        Vector(vec![0.0; len])
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.0.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    pub fn dot(&self, other: &Vector) -> Result<f64, DescentError> {
        self.check_len(other, "Vector::dot")?;
        Ok(self.0.iter().zip(other.0.iter()).map(|(a, b)| a * b).sum())
    }

    /// Elementwise sum.
    pub fn add(&self, other: &Vector) -> Result<Vector, DescentError> {
        self.check_len(other, "Vector::add")?;
        Ok(self.0.iter().zip(other.0.iter()).map(|(a, b)| a + b).collect())
    }

    /// Elementwise difference.
    pub fn sub(&self, other: &Vector) -> Result<Vector, DescentError> {
        self.check_len(other, "Vector::sub")?;
        Ok(self.0.iter().zip(other.0.iter()).map(|(a, b)| a - b).collect())
    }

    pub fn scale(&self, scalar: f64) -> Vector {
        self.0.iter().map(|x| x * scalar).collect()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    fn check_len(&self, other: &Vector, operation: &str) -> Result<(), DescentError> {
        if self.0.len() != other.0.len() {
            return Err(DescentError::LengthMismatch {
                expected: self.0.len(),
                actual: other.0.len(),
                operation: operation.to_string(),
            });
        }
        Ok(())
    }
}

impl Deref for Vector {
    type Target = Vec<f64>;

    fn deref(&self) -> &Vec<f64> {
        &self.0
    }
}

impl DerefMut for Vector {
    fn deref_mut(&mut self) -> &mut Vec<f64> {
        &mut self.0
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Vector(data)
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Vector(iter.into_iter().collect())
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        self.scale(scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vector_norm_and_dot() {
        let v = Vector::new(vec![3.0, 4.0]);
        assert_relative_eq!(v.norm(), 5.0);
        let w = Vector::new(vec![1.0, -2.0]);
        assert_eq!(v.dot(&w).unwrap(), -5.0);
    }

    #[test]
    fn test_vector_elementwise() {
        let v = Vector::new(vec![1.0, 2.0, 3.0]);
        let w = Vector::new(vec![0.5, 0.5, 0.5]);
        assert_eq!(v.add(&w).unwrap(), Vector::new(vec![1.5, 2.5, 3.5]));
        assert_eq!(v.sub(&w).unwrap(), Vector::new(vec![0.5, 1.5, 2.5]));
        assert_eq!(&v * 2.0, Vector::new(vec![2.0, 4.0, 6.0]));
    }

    #[test]
    fn test_vector_length_mismatch() {
        let v = Vector::new(vec![1.0, 2.0]);
        let w = Vector::new(vec![1.0]);
        match v.dot(&w) {
            Err(DescentError::LengthMismatch {
                expected, actual, ..
            }) => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("Expected LengthMismatch, got {:?}", other),
        }
        assert!(v.add(&w).is_err());
        assert!(v.sub(&w).is_err());
    }

    #[test]
    fn test_vector_deref() {
        let mut v = Vector::zeros(3);
        v[1] = 7.0;
        assert_eq!(v.len(), 3);
        assert_eq!(v.as_slice(), &[0.0, 7.0, 0.0]);
    }
}
