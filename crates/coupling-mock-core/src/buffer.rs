//! The shared exchange buffer behind every data write and read.

use crate::dataset::DIMENSIONS;
use crate::error::{MockError, Result};

/// Layout of the values exchanged per vertex index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueShape {
    /// One value per index.
    Scalar,
    /// `DIMENSIONS` values per index.
    Vector,
    /// Gradient of scalar data: `DIMENSIONS` values per index.
    ScalarGradient,
    /// Gradient of vector data: `DIMENSIONS²` values per index.
    VectorGradient,
}

impl ValueShape {
    /// Shape of data with `data_dimensions` components per vertex.
    pub fn for_data(data_dimensions: usize) -> Self {
        if data_dimensions == 1 {
            Self::Scalar
        } else {
            Self::Vector
        }
    }

    /// Shape of the gradient of data with `data_dimensions` components.
    pub fn gradient_of(data_dimensions: usize) -> Self {
        if data_dimensions == 1 {
            Self::ScalarGradient
        } else {
            Self::VectorGradient
        }
    }

    /// Returns the number of values per index.
    pub fn components(self) -> usize {
        match self {
            Self::Scalar => 1,
            Self::Vector | Self::ScalarGradient => DIMENSIONS,
            Self::VectorGradient => DIMENSIONS * DIMENSIONS,
        }
    }
}

/// A flat block of doubles overwritten by writes and copied out by reads.
///
/// Every access starts at offset 0: the vertex indices of a call only
/// determine how many values move, never where they go.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeBuffer {
    values: Vec<f64>,
}

impl ExchangeBuffer {
    /// Creates a zero-filled buffer large enough for full vector gradients
    /// on `vertex_count` vertices.
    pub fn for_vertices(vertex_count: usize) -> Self {
        Self::with_capacity(vertex_count * ValueShape::VectorGradient.components())
    }

    /// Creates a zero-filled buffer holding `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: vec![0.0; capacity],
        }
    }

    /// Returns the number of values the buffer holds.
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// Returns the buffer contents.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Copies `values` for `count` indices of `shape` into the buffer.
    pub fn write(&mut self, shape: ValueShape, count: usize, values: &[f64]) -> Result<()> {
        let len = self.extent(shape, count)?;
        if values.len() != len {
            return Err(MockError::SizeMismatch {
                expected: len,
                actual: values.len(),
            });
        }
        self.values[..len].copy_from_slice(values);
        Ok(())
    }

    /// Returns a copy of the values for `count` indices of `shape`.
    pub fn read(&self, shape: ValueShape, count: usize) -> Result<Vec<f64>> {
        let len = self.extent(shape, count)?;
        Ok(self.values[..len].to_vec())
    }

    /// Copies the values for `count` indices of `shape` into `out`.
    pub fn read_into(&self, shape: ValueShape, count: usize, out: &mut [f64]) -> Result<()> {
        let len = self.extent(shape, count)?;
        if out.len() != len {
            return Err(MockError::SizeMismatch {
                expected: len,
                actual: out.len(),
            });
        }
        out.copy_from_slice(&self.values[..len]);
        Ok(())
    }

    fn extent(&self, shape: ValueShape, count: usize) -> Result<usize> {
        let requested = count * shape.components();
        if requested > self.values.len() {
            return Err(MockError::BufferOverflow {
                capacity: self.values.len(),
                requested,
            });
        }
        Ok(requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components() {
        assert_eq!(ValueShape::Scalar.components(), 1);
        assert_eq!(ValueShape::Vector.components(), 3);
        assert_eq!(ValueShape::ScalarGradient.components(), 3);
        assert_eq!(ValueShape::VectorGradient.components(), 9);
        assert_eq!(ValueShape::for_data(1), ValueShape::Scalar);
        assert_eq!(ValueShape::gradient_of(3), ValueShape::VectorGradient);
    }

    #[test]
    fn test_sized_for_vector_gradients() {
        let buffer = ExchangeBuffer::for_vertices(3);
        assert_eq!(buffer.capacity(), 27);
        assert!(buffer.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_smaller_read_sees_larger_write() {
        let mut buffer = ExchangeBuffer::for_vertices(3);
        let vectors = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        buffer.write(ValueShape::Vector, 2, &vectors).unwrap();

        assert_eq!(buffer.read(ValueShape::Scalar, 1).unwrap(), vec![1.0]);
        assert_eq!(buffer.read(ValueShape::Scalar, 3).unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_write_rejects_wrong_value_count() {
        let mut buffer = ExchangeBuffer::for_vertices(3);
        let err = buffer.write(ValueShape::Vector, 2, &[1.0; 5]).unwrap_err();
        assert!(matches!(
            err,
            MockError::SizeMismatch {
                expected: 6,
                actual: 5
            }
        ));
    }

    #[test]
    fn test_overflow() {
        let mut buffer = ExchangeBuffer::for_vertices(3);
        let err = buffer
            .write(ValueShape::VectorGradient, 4, &[0.0; 36])
            .unwrap_err();
        assert!(matches!(
            err,
            MockError::BufferOverflow {
                capacity: 27,
                requested: 36
            }
        ));
        assert!(buffer.read(ValueShape::Vector, 10).is_err());
    }

    #[test]
    fn test_read_into() {
        let mut buffer = ExchangeBuffer::for_vertices(3);
        buffer.write(ValueShape::Scalar, 2, &[7.5, -1.0]).unwrap();

        let mut out = [0.0; 2];
        buffer.read_into(ValueShape::Scalar, 2, &mut out).unwrap();
        assert_eq!(out, [7.5, -1.0]);

        let mut short = [0.0; 1];
        assert!(buffer.read_into(ValueShape::Scalar, 2, &mut short).is_err());
    }
}
