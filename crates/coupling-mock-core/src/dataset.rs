//! The fabricated mesh: descriptive constants, vertices, and bounding box.

use glam::DVec3;

use crate::error::{MockError, Result};
use crate::options::MockOptions;

/// Spatial dimensionality of the fixture.
pub const DIMENSIONS: usize = 3;

/// Vertex identifier as handed out across the C ABI.
pub type VertexId = i32;

/// Descriptive constants of the fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    mesh_name: String,
    data_name: String,
    mesh_id: i32,
    data_id: i32,
    vertex_count: usize,
    data_dimensions: usize,
}

impl Dataset {
    /// Builds the dataset from options.
    pub fn from_options(options: &MockOptions) -> Self {
        Self {
            mesh_name: options.mesh_name.clone(),
            data_name: options.data_name.clone(),
            mesh_id: options.mesh_id,
            data_id: options.data_id,
            vertex_count: options.vertex_count,
            data_dimensions: options.data_dimensions,
        }
    }

    /// Returns the fixture mesh name.
    pub fn mesh_name(&self) -> &str {
        &self.mesh_name
    }

    /// Returns the fixture data name.
    pub fn data_name(&self) -> &str {
        &self.data_name
    }

    /// Returns the fixture mesh identifier.
    pub fn mesh_id(&self) -> i32 {
        self.mesh_id
    }

    /// Returns the fixture data identifier.
    pub fn data_id(&self) -> i32 {
        self.data_id
    }

    /// Returns the number of fixture vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of components per vertex of the fixture data.
    pub fn data_dimensions(&self) -> usize {
        self.data_dimensions
    }

    /// Returns the spatial dimensionality.
    pub fn dimensions(&self) -> usize {
        DIMENSIONS
    }

    /// Fails unless `name` is the fixture mesh.
    pub fn check_mesh(&self, name: &str) -> Result<()> {
        if name == self.mesh_name {
            Ok(())
        } else {
            Err(MockError::UnknownMesh(name.to_string()))
        }
    }

    /// Fails unless `size` equals the vertex count.
    pub fn check_vertex_count(&self, size: usize) -> Result<()> {
        if size == self.vertex_count {
            Ok(())
        } else {
            Err(MockError::SizeMismatch {
                expected: self.vertex_count,
                actual: size,
            })
        }
    }
}

/// Vertex identifiers and synthetic coordinates of the fixture mesh.
///
/// Vertex `i` of `n` sits at `(i, i + n, i + 2n)`.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexSet {
    ids: Vec<VertexId>,
    positions: Vec<DVec3>,
}

impl VertexSet {
    /// Fabricates `count` vertices.
    pub fn fabricate(count: usize) -> Self {
        let n = count as f64;
        let ids = (0..count).map(|i| i as VertexId).collect();
        let positions = (0..count)
            .map(|i| {
                let i = i as f64;
                DVec3::new(i, i + n, i + 2.0 * n)
            })
            .collect();
        Self { ids, positions }
    }

    /// Returns the vertex identifiers, `0..n`.
    pub fn ids(&self) -> &[VertexId] {
        &self.ids
    }

    /// Returns the vertex positions.
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns the positions flattened vertex by vertex.
    pub fn coordinates(&self) -> Vec<f64> {
        self.positions.iter().flat_map(|p| p.to_array()).collect()
    }

    /// Returns the number of vertices.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if the set has no vertices.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Axis-aligned box stored as per-axis `[min, max]` pairs on the flat side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    min: DVec3,
    max: DVec3,
}

impl BoundingBox {
    /// Number of doubles in the flat representation.
    pub const FLAT_LEN: usize = 2 * DIMENSIONS;

    /// Creates a bounding box from its corners.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// The fixture box, whose flat form is `[0, 1, 2, 3, 4, 5]`.
    pub fn fabricate() -> Self {
        Self::new(DVec3::new(0.0, 2.0, 4.0), DVec3::new(1.0, 3.0, 5.0))
    }

    /// Parses `[x_min, x_max, y_min, y_max, z_min, z_max]`.
    pub fn from_flat(flat: &[f64]) -> Result<Self> {
        if flat.len() != Self::FLAT_LEN {
            return Err(MockError::SizeMismatch {
                expected: Self::FLAT_LEN,
                actual: flat.len(),
            });
        }
        Ok(Self::new(
            DVec3::new(flat[0], flat[2], flat[4]),
            DVec3::new(flat[1], flat[3], flat[5]),
        ))
    }

    /// Returns `[x_min, x_max, y_min, y_max, z_min, z_max]`.
    pub fn to_flat(&self) -> [f64; Self::FLAT_LEN] {
        [
            self.min.x, self.max.x, self.min.y, self.max.y, self.min.z, self.max.z,
        ]
    }

    /// Returns the minimum corner.
    pub fn min(&self) -> DVec3 {
        self.min
    }

    /// Returns the maximum corner.
    pub fn max(&self) -> DVec3 {
        self.max
    }

    /// Checks a flat box against this one element by element.
    ///
    /// Comparison is exact; the first differing entry is reported.
    #[allow(clippy::float_cmp)]
    pub fn verify(&self, flat: &[f64]) -> Result<()> {
        if flat.len() != Self::FLAT_LEN {
            return Err(MockError::SizeMismatch {
                expected: Self::FLAT_LEN,
                actual: flat.len(),
            });
        }
        for (index, (&expected, &actual)) in self.to_flat().iter().zip(flat).enumerate() {
            if expected != actual {
                return Err(MockError::BoundingBoxMismatch {
                    index,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fabricated_vertices() {
        let vertices = VertexSet::fabricate(3);
        assert_eq!(vertices.ids(), &[0, 1, 2]);
        assert_eq!(vertices.positions()[1], DVec3::new(1.0, 4.0, 7.0));
        assert_eq!(
            vertices.coordinates(),
            vec![0.0, 3.0, 6.0, 1.0, 4.0, 7.0, 2.0, 5.0, 8.0]
        );
    }

    #[test]
    fn test_vertex_set_lengths_agree() {
        let vertices = VertexSet::fabricate(7);
        assert_eq!(vertices.len(), 7);
        assert_eq!(vertices.coordinates().len(), 7 * DIMENSIONS);
        assert!(VertexSet::fabricate(0).is_empty());
    }

    #[test]
    fn test_fabricated_bounding_box() {
        let bbox = BoundingBox::fabricate();
        assert_eq!(bbox.to_flat(), [0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(BoundingBox::from_flat(&bbox.to_flat()).unwrap(), bbox);
    }

    #[test]
    fn test_verify_reports_first_mismatch() {
        let bbox = BoundingBox::fabricate();
        assert!(bbox.verify(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).is_ok());

        match bbox.verify(&[0.0, 1.0, 2.5, 3.0, 4.0, 9.0]) {
            Err(MockError::BoundingBoxMismatch { index, .. }) => assert_eq!(index, 2),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(
            bbox.verify(&[0.0, 1.0, 2.0]),
            Err(MockError::SizeMismatch {
                expected: 6,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_dataset_checks() {
        let dataset = Dataset::from_options(&MockOptions::default());
        assert!(dataset.check_mesh("FakeMesh").is_ok());
        assert!(matches!(
            dataset.check_mesh("OtherMesh"),
            Err(MockError::UnknownMesh(name)) if name == "OtherMesh"
        ));
        assert!(dataset.check_vertex_count(3).is_ok());
        assert!(dataset.check_vertex_count(4).is_err());
        assert_eq!(dataset.dimensions(), 3);
    }
}
