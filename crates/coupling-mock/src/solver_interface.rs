//! ID-addressed front end.
//!
//! Covers the legacy generations of the coupling API: meshes and data are
//! named by integer ids obtained from [`SolverInterface::get_mesh_id`] and
//! [`SolverInterface::get_data_id`], checkpointing is driven by [`Action`]
//! tokens, and gradient data is available as an extension.
//!
//! There is a single fixture mesh, so mesh ids are accepted without being
//! validated. Only `get_data_id` discriminates.

use std::path::Path;

use coupling_mock_core::{
    Action, Adapter, Connectivity, DVec3, MockOptions, ParticipantInfo, Result, ValueShape,
    VertexId, DIMENSIONS,
};

/// Mesh identifier.
pub type MeshId = i32;

/// Data identifier.
pub type DataId = i32;

/// Edge identifier.
pub type EdgeId = i32;

/// Returned by `initialize` and `advance` in the legacy generations.
pub const LEGACY_TIME_STEP_SENTINEL: f64 = -1.0;

/// Returned by `set_mesh_edge`: edges are never stored.
pub const NO_EDGE: EdgeId = -1;

/// A mock coupling participant addressed by mesh and data ids.
#[derive(Debug, Clone)]
pub struct SolverInterface {
    adapter: Adapter,
}

impl SolverInterface {
    /// Creates a solver interface with the default fixture.
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

    /// Creates a solver interface that was handed a communicator.
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

    /// Creates a solver interface over a custom fixture.
    pub fn with_options(info: ParticipantInfo, options: MockOptions) -> Self {
        Self {
            adapter: Adapter::with_options(info, options),
        }
    }

    /// Returns the underlying adapter.
    pub fn adapter(&self) -> &Adapter {
        &self.adapter
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Records the phase change; answers the legacy sentinel.
    pub fn initialize(&mut self) -> f64 {
        self.adapter.initialize();
        LEGACY_TIME_STEP_SENTINEL
    }

    /// Nothing to initialize.
    pub fn initialize_data(&mut self) {
        log::debug!("initialize_data ignored");
    }

    /// Always [`LEGACY_TIME_STEP_SENTINEL`].
    pub fn advance(&mut self, computed_timestep_length: f64) -> f64 {
        self.adapter.advance(computed_timestep_length);
        LEGACY_TIME_STEP_SENTINEL
    }

    /// Emits the finalize confirmation.
    pub fn finalize(&mut self) {
        self.adapter.finalize();
    }

    /// Spatial dimensions of the fixture (3).
    pub fn get_dimensions(&self) -> usize {
        self.adapter.mesh_dimensions()
    }

    // ------------------------------------------------------------------
    // Status and actions
    // ------------------------------------------------------------------

    /// Always false, so solver loops exit at once.
    pub fn is_coupling_ongoing(&self) -> bool {
        self.adapter.is_coupling_ongoing()
    }

    /// Always false.
    pub fn is_read_data_available(&self) -> bool {
        false
    }

    /// Always false, whatever the step length.
    pub fn is_write_data_required(&self, _computed_timestep_length: f64) -> bool {
        false
    }

    /// Always false.
    pub fn is_time_window_complete(&self) -> bool {
        self.adapter.is_time_window_complete()
    }

    /// No action is ever required.
    pub fn is_action_required(&self, action: Action) -> bool {
        self.adapter.is_action_required(action)
    }

    /// Accepted and forgotten.
    pub fn mark_action_fulfilled(&mut self, action: Action) {
        self.adapter.mark_action_fulfilled(action);
    }

    /// Token for writing initial data.
    pub fn action_write_initial_data(&self) -> Action {
        Action::WriteInitialData
    }

    /// Token for writing an iteration checkpoint.
    pub fn action_write_iteration_checkpoint(&self) -> Action {
        Action::WriteIterationCheckpoint
    }

    /// Token for reading an iteration checkpoint.
    pub fn action_read_iteration_checkpoint(&self) -> Action {
        Action::ReadIterationCheckpoint
    }

    /// Always false.
    pub fn has_to_evaluate_surrogate_model(&self) -> bool {
        false
    }

    /// Always false.
    pub fn has_to_evaluate_fine_model(&self) -> bool {
        false
    }

    // ------------------------------------------------------------------
    // Id resolution
    // ------------------------------------------------------------------

    /// Always false, even for the fixture mesh.
    pub fn has_mesh(&self, mesh_name: &str) -> bool {
        self.adapter.has_mesh(mesh_name)
    }

    /// Every name resolves to the fixture mesh id.
    pub fn get_mesh_id(&self, _mesh_name: &str) -> MeshId {
        self.adapter.dataset().mesh_id()
    }

    /// Always false, even for the fixture data.
    pub fn has_data(&self, data_name: &str, mesh_id: MeshId) -> bool {
        self.adapter.has_data(self.mesh_name(mesh_id), data_name)
    }

    /// Returns the fixture data id when both the data name and the mesh id
    /// match the fixture, and `None` otherwise.
    pub fn get_data_id(&self, data_name: &str, mesh_id: MeshId) -> Option<DataId> {
        let dataset = self.adapter.dataset();
        (mesh_id == dataset.mesh_id() && data_name == dataset.data_name())
            .then_some(dataset.data_id())
    }

    fn mesh_name(&self, _mesh_id: MeshId) -> &str {
        self.adapter.dataset().mesh_name()
    }

    // ------------------------------------------------------------------
    // Mesh
    // ------------------------------------------------------------------

    /// Always answers vertex id 0.
    pub fn set_mesh_vertex(&mut self, _mesh_id: MeshId, position: DVec3) -> VertexId {
        self.adapter.set_vertex(position.to_array())
    }

    /// The fixture vertex count.
    pub fn get_mesh_vertex_size(&self, _mesh_id: MeshId) -> usize {
        self.adapter.vertex_count()
    }

    /// Same contract as [`Participant::set_mesh_vertices`](crate::Participant::set_mesh_vertices).
    pub fn set_mesh_vertices(&mut self, _mesh_id: MeshId, positions: &[f64]) -> Result<Vec<VertexId>> {
        self.adapter.set_vertices(positions)
    }

    /// Synthetic coordinates for as many vertices as `ids` names.
    pub fn get_mesh_vertices(&self, _mesh_id: MeshId, ids: &[VertexId]) -> Vec<f64> {
        self.adapter.synthetic_coordinates(ids.len())
    }

    /// The fixture ids `0..n`, one per position.
    pub fn get_mesh_vertex_ids_from_positions(
        &self,
        _mesh_id: MeshId,
        positions: &[f64],
    ) -> Result<Vec<VertexId>> {
        self.adapter.vertex_ids_from_positions(positions)
    }

    /// Ignored; answers [`NO_EDGE`].
    pub fn set_mesh_edge(&mut self, _mesh_id: MeshId, first: VertexId, second: VertexId) -> EdgeId {
        self.adapter
            .ignore_connectivity(Connectivity::Edge, &[first, second]);
        NO_EDGE
    }

    /// Ignored.
    pub fn set_mesh_triangle(&mut self, _mesh_id: MeshId, first: EdgeId, second: EdgeId, third: EdgeId) {
        self.adapter
            .ignore_connectivity(Connectivity::Triangle, &[first, second, third]);
    }

    /// Ignored.
    pub fn set_mesh_triangle_with_edges(
        &mut self,
        _mesh_id: MeshId,
        first: VertexId,
        second: VertexId,
        third: VertexId,
    ) {
        self.adapter
            .ignore_connectivity(Connectivity::Triangle, &[first, second, third]);
    }

    /// Ignored.
    pub fn set_mesh_quad(
        &mut self,
        _mesh_id: MeshId,
        first: EdgeId,
        second: EdgeId,
        third: EdgeId,
        fourth: EdgeId,
    ) {
        self.adapter
            .ignore_connectivity(Connectivity::Quad, &[first, second, third, fourth]);
    }

    /// Ignored.
    pub fn set_mesh_quad_with_edges(
        &mut self,
        _mesh_id: MeshId,
        first: VertexId,
        second: VertexId,
        third: VertexId,
        fourth: VertexId,
    ) {
        self.adapter
            .ignore_connectivity(Connectivity::Quad, &[first, second, third, fourth]);
    }

    /// No mapping takes place.
    pub fn map_read_data_to(&mut self, to_mesh_id: MeshId) {
        log::trace!("map_read_data_to({to_mesh_id}) ignored");
    }

    /// No mapping takes place.
    pub fn map_write_data_from(&mut self, from_mesh_id: MeshId) {
        log::trace!("map_write_data_from({from_mesh_id}) ignored");
    }

    // ------------------------------------------------------------------
    // Data. Every call addresses the exchange buffer from offset 0.
    // ------------------------------------------------------------------

    /// Copies `DIMENSIONS` values per index into the buffer.
    pub fn write_block_vector_data(
        &mut self,
        _data_id: DataId,
        indices: &[VertexId],
        values: &[f64],
    ) -> Result<()> {
        self.adapter.write(ValueShape::Vector, indices, values)
    }

    /// Writes one vector.
    pub fn write_vector_data(&mut self, _data_id: DataId, index: VertexId, value: DVec3) -> Result<()> {
        self.adapter
            .write(ValueShape::Vector, &[index], &value.to_array())
    }

    /// Copies one value per index into the buffer.
    pub fn write_block_scalar_data(
        &mut self,
        _data_id: DataId,
        indices: &[VertexId],
        values: &[f64],
    ) -> Result<()> {
        self.adapter.write(ValueShape::Scalar, indices, values)
    }

    /// Writes one scalar.
    pub fn write_scalar_data(&mut self, _data_id: DataId, index: VertexId, value: f64) -> Result<()> {
        self.adapter.write(ValueShape::Scalar, &[index], &[value])
    }

    /// Reads back `DIMENSIONS` values per index.
    pub fn read_block_vector_data(&self, _data_id: DataId, indices: &[VertexId]) -> Result<Vec<f64>> {
        self.adapter.read(ValueShape::Vector, indices)
    }

    /// Reads back one vector.
    pub fn read_vector_data(&self, _data_id: DataId, index: VertexId) -> Result<DVec3> {
        let mut value = [0.0; DIMENSIONS];
        self.adapter
            .read_into(ValueShape::Vector, &[index], &mut value)?;
        Ok(DVec3::from_array(value))
    }

    /// Reads back one value per index.
    pub fn read_block_scalar_data(&self, _data_id: DataId, indices: &[VertexId]) -> Result<Vec<f64>> {
        self.adapter.read(ValueShape::Scalar, indices)
    }

    /// Returns the scalar most recently written at offset 0.
    pub fn read_scalar_data(&self, _data_id: DataId, index: VertexId) -> Result<f64> {
        let mut value = [0.0];
        self.adapter
            .read_into(ValueShape::Scalar, &[index], &mut value)?;
        Ok(value[0])
    }

    // ------------------------------------------------------------------
    // Gradient extension
    // ------------------------------------------------------------------

    /// Always false.
    pub fn is_gradient_data_required(&self, data_id: DataId) -> bool {
        let dataset = self.adapter.dataset();
        let data_name = if data_id == dataset.data_id() {
            dataset.data_name()
        } else {
            ""
        };
        self.adapter
            .requires_gradient_data(dataset.mesh_name(), data_name)
    }

    /// Writes one scalar gradient (`DIMENSIONS` values).
    pub fn write_scalar_gradient_data(
        &mut self,
        _data_id: DataId,
        index: VertexId,
        gradient: DVec3,
    ) -> Result<()> {
        self.adapter
            .write(ValueShape::ScalarGradient, &[index], &gradient.to_array())
    }

    /// Copies one scalar gradient per index into the buffer.
    pub fn write_block_scalar_gradient_data(
        &mut self,
        _data_id: DataId,
        indices: &[VertexId],
        gradients: &[f64],
    ) -> Result<()> {
        self.adapter
            .write(ValueShape::ScalarGradient, indices, gradients)
    }

    /// Writes one row-major `DIMENSIONS × DIMENSIONS` gradient.
    pub fn write_vector_gradient_data(
        &mut self,
        _data_id: DataId,
        index: VertexId,
        gradient: &[f64; DIMENSIONS * DIMENSIONS],
    ) -> Result<()> {
        self.adapter
            .write(ValueShape::VectorGradient, &[index], gradient)
    }

    /// Copies one row-major vector gradient per index into the buffer.
    pub fn write_block_vector_gradient_data(
        &mut self,
        _data_id: DataId,
        indices: &[VertexId],
        gradients: &[f64],
    ) -> Result<()> {
        self.adapter
            .write(ValueShape::VectorGradient, indices, gradients)
    }

    /// The fixture version literal.
    pub fn get_version_information(&self) -> &str {
        self.adapter.version_information()
    }
}
