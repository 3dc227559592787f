//! Name-addressed front end.
//!
//! Meshes and data are named by strings, matching the current generation of
//! the coupling API. Every call forwards to the shared [`Adapter`].

use std::path::Path;

use coupling_mock_core::{
    Action, Adapter, Connectivity, DVec3, MockOptions, ParticipantInfo, Result, ValueShape,
    VertexId,
};

/// A mock coupling participant addressed by mesh and data names.
#[derive(Debug, Clone)]
pub struct Participant {
    adapter: Adapter,
}

impl Participant {
    /// Creates a participant with the default fixture.
    ///
    /// Always succeeds. The configuration file is never read.
    pub fn create(
        participant_name: &str,
        configuration_path: impl AsRef<Path>,
        process_index: i32,
        process_count: i32,
    ) -> Self {
        let info = ParticipantInfo::new(
            participant_name,
            configuration_path,
            process_index,
            process_count,
        );
        Self::with_options(info, MockOptions::default())
    }

    /// Creates a participant that was handed a communicator.
    ///
    /// The communicator is opaque to the fixture and is not retained.
    pub fn create_with_communicator<C: ?Sized>(
        participant_name: &str,
        configuration_path: impl AsRef<Path>,
        process_index: i32,
        process_count: i32,
        _communicator: &C,
    ) -> Self {
        let info = ParticipantInfo::new(
            participant_name,
            configuration_path,
            process_index,
            process_count,
        )
        .with_communicator();
        Self::with_options(info, MockOptions::default())
    }

    /// Creates a participant over a custom fixture.
    pub fn with_options(info: ParticipantInfo, options: MockOptions) -> Self {
        Self {
            adapter: Adapter::with_options(info, options),
        }
    }

    /// Returns the underlying adapter.
    pub fn adapter(&self) -> &Adapter {
        &self.adapter
    }

    /// Returns immediately with the fixed time step size.
    pub fn initialize(&mut self) -> f64 {
        self.adapter.initialize()
    }

    /// No-op; returns the fixed time step size.
    pub fn advance(&mut self, computed_time_step_size: f64) -> f64 {
        self.adapter.advance(computed_time_step_size)
    }

    /// Emits the finalize confirmation.
    pub fn finalize(&mut self) {
        self.adapter.finalize();
    }

    /// Spatial dimensions of any mesh (3).
    pub fn get_mesh_dimensions(&self, _mesh_name: &str) -> usize {
        self.adapter.mesh_dimensions()
    }

    /// Components per value, from [`MockOptions::data_dimensions`].
    pub fn get_data_dimensions(&self, _mesh_name: &str, _data_name: &str) -> usize {
        self.adapter.data_dimensions()
    }

    /// Always false, so solver loops exit at once.
    pub fn is_coupling_ongoing(&self) -> bool {
        self.adapter.is_coupling_ongoing()
    }

    /// Always false.
    pub fn is_time_window_complete(&self) -> bool {
        self.adapter.is_time_window_complete()
    }

    /// The fixed time step size.
    pub fn get_max_time_step_size(&self) -> f64 {
        self.adapter.max_time_step_size()
    }

    /// Whether [`Action::WriteInitialData`] is required (never).
    pub fn requires_initial_data(&self) -> bool {
        self.adapter.is_action_required(Action::WriteInitialData)
    }

    /// Never required.
    pub fn requires_writing_checkpoint(&self) -> bool {
        self.adapter
            .is_action_required(Action::WriteIterationCheckpoint)
    }

    /// Never required.
    pub fn requires_reading_checkpoint(&self) -> bool {
        self.adapter
            .is_action_required(Action::ReadIterationCheckpoint)
    }

    /// Always false, even for the fixture mesh.
    pub fn has_mesh(&self, mesh_name: &str) -> bool {
        self.adapter.has_mesh(mesh_name)
    }

    /// Always false.
    pub fn has_data(&self, mesh_name: &str, data_name: &str) -> bool {
        self.adapter.has_data(mesh_name, data_name)
    }

    /// Connectivity is never needed.
    pub fn requires_mesh_connectivity_for(&self, mesh_name: &str) -> bool {
        self.adapter.requires_mesh_connectivity(mesh_name)
    }

    /// Always answers vertex id 0.
    pub fn set_mesh_vertex(&mut self, _mesh_name: &str, position: DVec3) -> VertexId {
        self.adapter.set_vertex(position.to_array())
    }

    /// Registers vertices given as flat `[x0, y0, z0, x1, ...]` coordinates.
    ///
    /// Exactly one position per fixture vertex is required; the answer is
    /// always the fixture ids `0..n`.
    pub fn set_mesh_vertices(&mut self, _mesh_name: &str, positions: &[f64]) -> Result<Vec<VertexId>> {
        self.adapter.set_vertices(positions)
    }

    /// The fixture vertex count.
    pub fn get_mesh_vertex_size(&self, _mesh_name: &str) -> usize {
        self.adapter.vertex_count()
    }

    /// Ignored.
    pub fn set_mesh_edge(&mut self, _mesh_name: &str, first: VertexId, second: VertexId) {
        self.adapter
            .ignore_connectivity(Connectivity::Edge, &[first, second]);
    }

    /// Ignored, whatever the slice holds.
    pub fn set_mesh_edges(&mut self, _mesh_name: &str, vertices: &[VertexId]) {
        self.adapter.ignore_connectivity(Connectivity::Edge, vertices);
    }

    /// Ignored.
    pub fn set_mesh_triangle(
        &mut self,
        _mesh_name: &str,
        first: VertexId,
        second: VertexId,
        third: VertexId,
    ) {
        self.adapter
            .ignore_connectivity(Connectivity::Triangle, &[first, second, third]);
    }

    /// Ignored.
    pub fn set_mesh_triangles(&mut self, _mesh_name: &str, vertices: &[VertexId]) {
        self.adapter
            .ignore_connectivity(Connectivity::Triangle, vertices);
    }

    /// Ignored.
    pub fn set_mesh_quad(
        &mut self,
        _mesh_name: &str,
        first: VertexId,
        second: VertexId,
        third: VertexId,
        fourth: VertexId,
    ) {
        self.adapter
            .ignore_connectivity(Connectivity::Quad, &[first, second, third, fourth]);
    }

    /// Ignored.
    pub fn set_mesh_quads(&mut self, _mesh_name: &str, vertices: &[VertexId]) {
        self.adapter.ignore_connectivity(Connectivity::Quad, vertices);
    }

    /// Ignored.
    pub fn set_mesh_tetrahedron(
        &mut self,
        _mesh_name: &str,
        first: VertexId,
        second: VertexId,
        third: VertexId,
        fourth: VertexId,
    ) {
        self.adapter
            .ignore_connectivity(Connectivity::Tetrahedron, &[first, second, third, fourth]);
    }

    /// Ignored.
    pub fn set_mesh_tetrahedra(&mut self, _mesh_name: &str, vertices: &[VertexId]) {
        self.adapter
            .ignore_connectivity(Connectivity::Tetrahedron, vertices);
    }

    /// Writes `get_data_dimensions` values per index into the exchange buffer.
    pub fn write_data(
        &mut self,
        _mesh_name: &str,
        _data_name: &str,
        indices: &[VertexId],
        values: &[f64],
    ) -> Result<()> {
        let shape = ValueShape::for_data(self.adapter.data_dimensions());
        self.adapter.write(shape, indices, values)
    }

    /// Reads back what the last compatible write left in the buffer.
    pub fn read_data(
        &self,
        _mesh_name: &str,
        _data_name: &str,
        indices: &[VertexId],
    ) -> Result<Vec<f64>> {
        let shape = ValueShape::for_data(self.adapter.data_dimensions());
        self.adapter.read(shape, indices)
    }

    /// Like [`Participant::read_data`], into caller storage.
    pub fn read_data_into(
        &self,
        _mesh_name: &str,
        _data_name: &str,
        indices: &[VertexId],
        values: &mut [f64],
    ) -> Result<()> {
        let shape = ValueShape::for_data(self.adapter.data_dimensions());
        self.adapter.read_into(shape, indices, values)
    }

    /// Always false.
    pub fn requires_gradient_data_for(&self, mesh_name: &str, data_name: &str) -> bool {
        self.adapter.requires_gradient_data(mesh_name, data_name)
    }

    /// Writes one gradient (data dimensions × mesh dimensions values) per index.
    pub fn write_gradient_data(
        &mut self,
        _mesh_name: &str,
        _data_name: &str,
        indices: &[VertexId],
        gradients: &[f64],
    ) -> Result<()> {
        let shape = ValueShape::gradient_of(self.adapter.data_dimensions());
        self.adapter.write(shape, indices, gradients)
    }

    /// Reads back one gradient per index.
    pub fn read_gradient_data(
        &self,
        _mesh_name: &str,
        _data_name: &str,
        indices: &[VertexId],
    ) -> Result<Vec<f64>> {
        let shape = ValueShape::gradient_of(self.adapter.data_dimensions());
        self.adapter.read(shape, indices)
    }

    /// The fixture version literal.
    pub fn get_version_information(&self) -> &str {
        self.adapter.version_information()
    }

    /// Checks the region against the fixture bounding box; stores nothing.
    pub fn set_mesh_access_region(&mut self, mesh_name: &str, bounding_box: &[f64]) -> Result<()> {
        self.adapter.verify_access_region(mesh_name, bounding_box)
    }

    /// Returns the fixture ids and flat coordinates.
    pub fn get_mesh_vertices_and_ids(
        &self,
        mesh_name: &str,
        size: usize,
    ) -> Result<(Vec<VertexId>, Vec<f64>)> {
        self.adapter.vertices_and_ids(mesh_name, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESH: &str = "FakeMesh";
    const DATA: &str = "FakeData";

    #[test]
    fn test_requires_queries_map_to_actions() {
        let participant = Participant::create("Solver", "config.xml", 0, 1);
        assert!(!participant.requires_initial_data());
        assert!(!participant.requires_writing_checkpoint());
        assert!(!participant.requires_reading_checkpoint());
    }

    #[test]
    fn test_data_dimensions_select_shape() {
        let options = MockOptions {
            data_dimensions: 1,
            ..MockOptions::default()
        };
        let mut participant =
            Participant::with_options(ParticipantInfo::new("S", "c.xml", 0, 1), options);
        participant.write_data(MESH, DATA, &[0, 1], &[4.0, 5.0]).unwrap();
        assert_eq!(participant.read_data(MESH, DATA, &[0, 1]).unwrap(), vec![4.0, 5.0]);

        participant
            .write_gradient_data(MESH, DATA, &[0], &[1.0, 2.0, 3.0])
            .unwrap();
        assert_eq!(
            participant.read_gradient_data(MESH, DATA, &[0]).unwrap(),
            vec![1.0, 2.0, 3.0]
        );
    }

    #[test]
    fn test_communicator_is_recorded() {
        let communicator = 42_u64;
        let participant =
            Participant::create_with_communicator("Solver", "config.xml", 1, 2, &communicator);
        assert!(participant.adapter().participant().has_communicator);
    }
}
